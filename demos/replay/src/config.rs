//! Run configuration: optional JSON file, then environment overrides.

use std::path::Path;

use anyhow::{Context, Result};

use vt_core::SimConfig;

/// Read `path` if given, fall back to defaults otherwise, then apply
/// `VT_SPEED_MULTIPLIER` and `VT_STEP_SECS`.
pub fn load(path: Option<&Path>) -> Result<SimConfig> {
    let mut config: SimConfig = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => SimConfig::default(),
    };

    if let Some(multiplier) = env_f64("VT_SPEED_MULTIPLIER") {
        config.speed_multiplier = multiplier;
    }
    if let Some(step) = env_f64("VT_STEP_SECS") {
        config.step_secs = step;
    }

    config.validate()?;
    Ok(config)
}

fn env_f64(key: &str) -> Option<f64> {
    let raw = std::env::var(key).ok()?;
    match raw.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparsable environment override");
            None
        }
    }
}
