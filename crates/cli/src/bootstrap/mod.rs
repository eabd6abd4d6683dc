use ferrous_stub_domain::{CliOverrides, ClientConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<ClientConfig> {
    Ok(ClientConfig::load(path, overrides)?)
}

/// `RUST_LOG` wins over the configured level. Logs go to stderr so that
/// command output on stdout stays clean.
pub fn init_logging(config: &ClientConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
