mod app;
mod config;
mod form;
#[cfg(test)]
mod test_support;

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use config::AppConfig;

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the form on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load()?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    let predictions = app::run(&config, stdin.lock(), stdout.lock()).map_err(|err| {
        error!(error = %format!("{err:#}"), "firewatch halted");
        err
    })?;

    info!(predictions, "firewatch stopped");
    Ok(())
}
