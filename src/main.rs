use devops_project::{AppConfig, Result};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    init_tracing(config.debug);

    devops_project::serve(config).await
}

fn init_tracing(debug: bool) {
    // RUST_LOG wins when set; APP_DEBUG only adjusts the fallback level.
    let fallback = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
