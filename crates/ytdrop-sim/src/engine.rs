//! Simulation engine implementing the [`AirdropSimulator`] trait.
//!
//! One call builds the TVL path, the network points series and each
//! holding's points, then splits the airdrop by the selected allocation
//! regime and values the user's tokens under every FDV scenario.

use tracing::debug;
use ytdrop_core::traits::AirdropSimulator;
use ytdrop_core::{AllocationRegime, ConfigError, SimulationConfig, SimulationResult};
use ytdrop_paths::tvl_path;

use crate::holdings::holding_points;
use crate::network::network_series;
use crate::outcome::project_outcomes;

/// The production simulator.
///
/// Stateless: every call recomputes everything from the configuration.
#[derive(Debug, Clone, Default)]
pub struct SimulationEngine;

impl SimulationEngine {
    /// Create a new SimulationEngine.
    pub fn new() -> Self {
        Self
    }
}

impl AirdropSimulator for SimulationEngine {
    fn simulate(&self, config: &SimulationConfig) -> Result<SimulationResult, ConfigError> {
        simulate_airdrop(config)
    }
}

/// Run the full pipeline once.
///
/// # Errors
///
/// - [`ConfigError::NoHoldings`] when the config has no holdings.
/// - Any TVL, network or price path error, in that order.
/// - [`ConfigError::EntryDayOutOfRange`] for a holding entering after the
///   last day.
pub fn simulate_airdrop(config: &SimulationConfig) -> Result<SimulationResult, ConfigError> {
    if config.user_yt_tokens.is_empty() {
        return Err(ConfigError::NoHoldings);
    }

    let days = config.days();
    let tvl = tvl_path(days, &config.tvl)?;
    let network = network_series(config, &tvl)?;

    let mut token_results = Vec::with_capacity(config.user_yt_tokens.len());
    let mut user_weighted = 0.0;
    let mut display_points = 0.0;
    let mut total_spent_usd = 0.0;
    for holding in &config.user_yt_tokens {
        let points = holding_points(holding, days, config.time_weighting)?;
        user_weighted += points.weighted;
        display_points += points.result.user_points;
        total_spent_usd += holding.spend_usd;
        token_results.push(points.result);
    }

    let allocation = config.allocation_regime();
    let (network_points, user_share, user_points) = match allocation {
        AllocationRegime::Proportional => {
            let network_points = config.network_points_total.unwrap_or_default();
            let network_weighted = network.weighted_contribution(days);
            let share = if network_weighted > 0.0 {
                user_weighted / network_weighted
            } else {
                0.0
            };
            (network_points, share, network_points * share)
        }
        AllocationRegime::TvlGenerated => {
            let network_points = network.total();
            let share = if network_points > 0.0 {
                display_points / network_points
            } else {
                0.0
            };
            (network_points, share, display_points)
        }
    };

    let airdrop_tokens = config.total_supply * config.airdrop_pct;
    let user_tokens = airdrop_tokens * user_share;
    let outcomes = project_outcomes(
        user_tokens,
        total_spent_usd,
        config.total_supply,
        &config.fdv_list,
    );

    debug!(
        ?allocation,
        days,
        holdings = token_results.len(),
        network_points,
        user_points,
        user_share,
        user_tokens,
        "simulated airdrop"
    );

    Ok(SimulationResult {
        allocation,
        user_points,
        network_points,
        user_share,
        airdrop_tokens,
        user_tokens,
        total_spent_usd,
        token_results,
        outcomes,
        avg_tvl: network.avg_tvl,
        pendle_share_effective: network.pendle_share_effective,
    })
}
