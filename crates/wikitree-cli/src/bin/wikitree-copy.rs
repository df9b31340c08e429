fn main() {
    if let Err(e) = wikitree_cli::cli::copy::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
