fn main() {
    if let Err(e) = wikitree_cli::cli::delete::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
