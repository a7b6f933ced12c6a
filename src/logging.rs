use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "THEMED_WORDS_LOG";

/// Install the stderr subscriber. `THEMED_WORDS_LOG` takes precedence;
/// otherwise `verbose` picks `debug` over the default `warn`.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
