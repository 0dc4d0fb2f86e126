use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "dreamwalker=info,eframe=warn,egui=warn";

/// Installs the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
    {
        eprintln!("logging already initialized: {e}");
    }
}
