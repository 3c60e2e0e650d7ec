//! Trait interfaces between the ytdrop crates.
//!
//! - [`AirdropSimulator`]: the full points-to-outcome pipeline (ytdrop-sim implements)

use crate::config::SimulationConfig;
use crate::error::ConfigError;
use crate::report::SimulationResult;

/// Pure computation of an airdrop estimate from a configuration.
///
/// Implementations hold no state between calls: identical configurations
/// must produce bit-identical results. The timing sweep drives any
/// implementation through this trait.
pub trait AirdropSimulator: Send + Sync {
    /// Run the full pipeline once.
    fn simulate(&self, config: &SimulationConfig) -> Result<SimulationResult, ConfigError>;

    /// The user's fraction of network points.
    ///
    /// Default implementation delegates to [`simulate`](Self::simulate).
    fn user_share(&self, config: &SimulationConfig) -> Result<f64, ConfigError> {
        Ok(self.simulate(config)?.user_share)
    }
}
