//! # ytdrop-sim
//! Points accumulation and airdrop outcome engine.
//!
//! - **Network series**: daily network points from TVL, venue share and
//!   component multipliers, with an optional venue start day.
//! - **Holdings**: YT bought on the entry day, points accrued to program end,
//!   optionally discounted by time remaining.
//! - **Allocation**: TVL-generated (user points over generated network points)
//!   or proportional (a fixed network total split by days-held weighting).
//! - **Outcomes**: value, ROI and cost-to-FDV for each FDV scenario.
//! - **Sweep**: re-runs the pipeline per candidate entry day and ranks days
//!   by ROI and risk/reward.

pub mod engine;
pub mod holdings;
pub mod network;
pub mod outcome;
pub mod sweep;

pub use engine::{simulate_airdrop, SimulationEngine};
pub use outcome::project_outcomes;
pub use sweep::{
    breakeven_price, candidate_days, future_profitable_days, timing_sweep, timing_sweep_with, FdvRoi,
    HoldingSweep, SweepPoint,
};
