use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
    Registry,
};

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub log_level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { log_level: "info".to_string() }
    }
}

/// `RUST_LOG` wins over the configured level. Safe to call more than once.
pub fn init_tracing(config: &LogConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let stderr_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    if let Err(e) = Registry::default().with(env_filter).with(stderr_layer).try_init() {
        let msg = e.to_string();
        if !msg.contains("already been set") {
            eprintln!("Failed to initialize logging: {e}");
        }
    }
}
