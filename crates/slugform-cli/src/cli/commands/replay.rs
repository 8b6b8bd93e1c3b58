//! `slugform replay` – replay a page fixture.

use anyhow::{Context, Result};
use slugform_core::config::SlugformConfig;
use slugform_core::fixture::{load_fixture, replay};
use std::path::Path;

pub fn run_replay(cfg: &SlugformConfig, path: &Path, compact: bool) -> Result<()> {
    let fixture = load_fixture(path)?;
    let report = replay(&fixture, &cfg.stepper_or_default())
        .with_context(|| format!("replay of {} failed", path.display()))?;
    tracing::info!(
        "replayed {} steps from {}",
        report.steps.len(),
        path.display()
    );
    println!("{}", report.to_json(!compact)?);
    Ok(())
}
