//! Tracing subscriber setup for the command-line shell.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a console subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects between
/// `info,marquee=debug` and `info`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_console_telemetry(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let fallback = if verbose { "info,marquee=debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()?;

    Ok(())
}
