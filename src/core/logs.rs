use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a stderr fmt subscriber for native runs.
///
/// `RUST_LOG` wins over `default_filter` when set. Fails if a global
/// subscriber is already installed.
#[cfg(not(target_arch = "wasm32"))]
pub fn setup_logging(default_filter: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .try_init()?;

    Ok(())
}

/// Route tracing events to the browser console.
///
/// There is no environment in the browser, so `default_filter` is the whole filter.
#[cfg(target_arch = "wasm32")]
pub fn setup_logging(default_filter: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use tracing_web::MakeWebConsoleWriter;

    // No clock in the browser's std; the console adds its own timestamps.
    let console = fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());

    tracing_subscriber::registry()
        .with(EnvFilter::new(default_filter))
        .with(console)
        .try_init()?;

    Ok(())
}
