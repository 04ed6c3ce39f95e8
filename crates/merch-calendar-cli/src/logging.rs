use tracing_subscriber::EnvFilter;

/// Crate targets that receive log output.
const CRATE_TARGETS: &[&str] = &["merchcal", "merch_calendar"];

/// Initialize tracing from the CLI verbosity count.
///
/// 0 -> warn, 1 -> info, 2 -> debug, 3+ -> trace. `RUST_LOG` overrides the
/// flag when set. Logs go to stderr so stdout stays valid JSON.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let default_filter = CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",");

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
