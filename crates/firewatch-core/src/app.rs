use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use prediction::{ArtifactBundle, FirePredictor};
use tracing::info;

use crate::config::AppConfig;
use crate::form::FormSession;

/// Load the artifacts once. Any failure here stops the process before the
/// form is shown.
pub fn load_predictor(config: &AppConfig) -> Result<FirePredictor> {
    let bundle = ArtifactBundle::load(&config.artifact_paths()).with_context(|| {
        format!(
            "failed loading prediction artifacts from {}",
            config.artifact_dir.display()
        )
    })?;
    info!(features = bundle.schema().len(), "predictor ready");
    Ok(FirePredictor::from(bundle))
}

pub fn run<R: BufRead, W: Write>(config: &AppConfig, input: R, output: W) -> Result<usize> {
    let predictor = load_predictor(config)?;
    let mut session = FormSession::new(
        predictor,
        input,
        output,
        config.probability_decimals,
        config.repeat,
    );
    session.run().context("form session failed")
}

#[cfg(test)]
mod tests;
