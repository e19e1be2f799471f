use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initializes the global tracing subscriber. Honors `RUST_LOG`, defaulting
/// to `info` so a plain `docker run` without configuration still produces
/// useful output.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::debug!("tracing subscriber already set");
    }
}
