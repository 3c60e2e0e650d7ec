//! Scenario file loading.

use std::path::Path;

use anyhow::{Context, Result};
use ytdrop_core::SimulationConfig;

/// Read a JSON scenario file into a [`SimulationConfig`].
pub fn load_scenario(path: &Path) -> Result<SimulationConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenario: {}", path.display()))?;
    parse_scenario(&raw).with_context(|| format!("Invalid scenario: {}", path.display()))
}

/// Parse scenario JSON.
pub fn parse_scenario(raw: &str) -> Result<SimulationConfig> {
    serde_json::from_str(raw).context("Failed to parse JSON")
}

/// Parse a comma-separated list of entry days, e.g. `0,5,10`.
pub fn parse_entry_days(list: &str) -> Result<Vec<i64>> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>()
                .with_context(|| format!("Invalid entry day: {s}"))
        })
        .collect()
}
