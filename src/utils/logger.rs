use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Installs the global subscriber. Output goes to stderr so the menu owns stdout.
pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("marina_ledger=debug,info"))
    } else {
        let level = level.unwrap_or(DEFAULT_LOG_LEVEL);
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("marina_ledger={}", level)))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
