//! Diagnostic logging on stderr.
//!
//! Results go to stdout, so logs are kept off it. `RUST_LOG` takes precedence
//! over the `--verbose` flag:
//!
//! ```bash
//! RUST_LOG=term_deposit_calculator=trace deposit-calculator batch deposits.csv
//! ```

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter, or the verbose one when `verbose` is set
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "term_deposit_calculator=debug,warn"
    } else {
        "term_deposit_calculator=warn"
    }
}

/// Initialize the CLI subscriber. Call once at startup.
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
