use super::setup::LogArgs;
use tracing_subscriber::EnvFilter;

/// Directive used when neither `RUST_LOG` nor a logging flag is set.
const QUIET: &str = "warn";
const VERBOSE: &str = "wikitree=debug,wikitree_cli=debug";
const DEBUG: &str = "wikitree=trace,wikitree_cli=trace";

fn directive(args: &LogArgs) -> &'static str {
    if args.debug {
        DEBUG
    } else if args.verbose {
        VERBOSE
    } else {
        QUIET
    }
}

/// Install the global subscriber. Logs go to stderr; `RUST_LOG` wins over flags.
pub fn init(args: &LogArgs) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive(args)));

    // A subscriber may already be installed when running under a test harness.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(args.debug)
        .try_init();
}
