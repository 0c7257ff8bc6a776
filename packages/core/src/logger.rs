//! Logger setup for Karte service binaries.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise the given binary crate
/// and `karte_core` log at `default_level`, everything else at `warn`.
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let directives = format!(
        "warn,{}={},karte_core={}",
        bin_name.replace('-', "_"),
        default_level,
        default_level
    );
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
