//! Result records returned by the simulator.

use serde::{Deserialize, Serialize};

use crate::config::AllocationRegime;

/// Per-holding outcome of one simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingResult {
    pub name: String,
    pub spend_usd: f64,
    pub entry_day: u32,
    /// YT price on the entry day.
    pub entry_price: f64,
    /// YT bought; 0 when the entry price is not positive.
    pub user_yt: f64,
    /// Undiscounted display points (no days-held weighting).
    pub user_points: f64,
}

/// Value of the user's allocation under one FDV scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FdvOutcome {
    pub fdv: f64,
    pub token_price: f64,
    /// USD value of the user's airdropped tokens.
    pub value: f64,
    /// `None` when nothing was spent.
    pub roi: Option<f64>,
    pub cost_vs_fdv: f64,
}

/// Full output of one simulation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub allocation: AllocationRegime,
    pub user_points: f64,
    pub network_points: f64,
    pub user_share: f64,
    pub airdrop_tokens: f64,
    pub user_tokens: f64,
    pub total_spent_usd: f64,
    pub token_results: Vec<HoldingResult>,
    /// One entry per FDV scenario, in the caller's order.
    pub outcomes: Vec<FdvOutcome>,
    pub avg_tvl: f64,
    pub pendle_share_effective: f64,
}

impl SimulationResult {
    /// Outcome for an FDV scenario, matched exactly.
    pub fn outcome(&self, fdv: f64) -> Option<&FdvOutcome> {
        self.outcomes.iter().find(|o| o.fdv == fdv)
    }

    pub fn airdrop_value(&self, fdv: f64) -> Option<f64> {
        self.outcome(fdv).map(|o| o.value)
    }

    /// ROI at `fdv`. The outer `Option` is the lookup, the inner one is
    /// undefined ROI.
    pub fn roi(&self, fdv: f64) -> Option<Option<f64>> {
        self.outcome(fdv).map(|o| o.roi)
    }

    pub fn cost_vs_fdv(&self, fdv: f64) -> Option<f64> {
        self.outcome(fdv).map(|o| o.cost_vs_fdv)
    }
}
