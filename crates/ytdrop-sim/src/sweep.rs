//! Entry-timing sweep.
//!
//! For each holding, and each candidate entry day, the holding is re-entered
//! on that day at that day's YT price and the full simulation is re-run. The
//! re-entered holding's price path restarts from the entry-day price, so a
//! late entry sees its own decay curve from that price.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ytdrop_core::constants::RISK_PENALTY;
use ytdrop_core::traits::AirdropSimulator;
use ytdrop_core::{ConfigError, HoldingConfig, SimulationConfig};
use ytdrop_paths::build_yt_price_path;

use crate::engine::SimulationEngine;

/// ROI under one FDV scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FdvRoi {
    pub fdv: f64,
    pub roi: Option<f64>,
    /// Highest entry price at which the position still breaks even.
    pub breakeven_price: Option<f64>,
    /// Days from the entry day on whose price is positive and below the
    /// breakeven price.
    pub future_profitable_days: usize,
}

/// One candidate entry day for one holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub entry_day: u32,
    pub yt_price: f64,
    /// One entry per FDV scenario, in the config's order.
    pub rois: Vec<FdvRoi>,
    pub avg_roi: Option<f64>,
    pub min_roi: Option<f64>,
    pub max_roi: Option<f64>,
    /// `avg_roi - 0.5 * stddev(roi)`.
    pub risk_reward_score: Option<f64>,
    pub user_share: f64,
}

impl SweepPoint {
    /// ROI at `fdv`, `None` when the FDV is not in the table or the ROI is
    /// undefined.
    pub fn roi_at(&self, fdv: f64) -> Option<f64> {
        self.fdv(fdv).and_then(|r| r.roi)
    }

    pub fn breakeven_at(&self, fdv: f64) -> Option<f64> {
        self.fdv(fdv).and_then(|r| r.breakeven_price)
    }

    /// Future profitable days at `fdv`, 0 when the FDV is not in the table.
    pub fn future_profitable_days(&self, fdv: f64) -> usize {
        self.fdv(fdv).map_or(0, |r| r.future_profitable_days)
    }

    fn fdv(&self, fdv: f64) -> Option<&FdvRoi> {
        self.rois.iter().find(|r| r.fdv == fdv)
    }
}

/// Entry price at which `value` would exactly cover `spent`.
///
/// YT bought scales with `1 / price`, so the breakeven price is
/// `entry_price * value / spent`. `None` without spend or value.
pub fn breakeven_price(entry_price: f64, value: f64, spent: f64) -> Option<f64> {
    (spent > 0.0 && value > 0.0).then(|| entry_price * value / spent)
}

/// Days `>= entry_day` whose price is positive and below `breakeven`.
pub fn future_profitable_days(prices: &[f64], entry_day: usize, breakeven: Option<f64>) -> usize {
    let Some(breakeven) = breakeven else {
        return 0;
    };
    prices
        .iter()
        .skip(entry_day)
        .filter(|&&p| p > 0.0 && p < breakeven)
        .count()
}

/// All sweep points for one holding, ascending by entry day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingSweep {
    pub holding_name: String,
    pub points: Vec<SweepPoint>,
}

impl HoldingSweep {
    /// Point with the highest risk/reward score. Ties go to the earliest day.
    pub fn best_by_score(&self) -> Option<&SweepPoint> {
        let mut best: Option<(OrderedFloat<f64>, &SweepPoint)> = None;
        for point in &self.points {
            let Some(score) = point.risk_reward_score.map(OrderedFloat) else {
                continue;
            };
            if best.is_none_or(|(b, _)| score > b) {
                best = Some((score, point));
            }
        }
        best.map(|(_, p)| p)
    }

    /// Up to `n` points with the highest ROI at `fdv`, best first. Points
    /// without a defined ROI are skipped.
    pub fn top_by_roi(&self, fdv: f64, n: usize) -> Vec<&SweepPoint> {
        let mut ranked: Vec<(OrderedFloat<f64>, &SweepPoint)> = self
            .points
            .iter()
            .filter_map(|p| p.roi_at(fdv).map(|r| (OrderedFloat(r), p)))
            .collect();
        // stable: equal ROIs keep entry-day order
        ranked.sort_by(|a, b| b.0.cmp(&a.0));
        ranked.into_iter().take(n).map(|(_, p)| p).collect()
    }

    /// Number of entry days with a positive ROI at `fdv`.
    pub fn profitable_days(&self, fdv: f64) -> usize {
        self.points
            .iter()
            .filter(|p| p.roi_at(fdv).is_some_and(|r| r > 0.0))
            .count()
    }
}

/// Summary statistics over the defined ROIs of one point.
#[derive(Debug, Clone, Copy, PartialEq)]
struct RoiStats {
    avg: f64,
    min: f64,
    max: f64,
    score: f64,
}

impl RoiStats {
    fn from_rois(rois: &[FdvRoi]) -> Option<Self> {
        let defined: Vec<f64> = rois.iter().filter_map(|r| r.roi).collect();
        if defined.is_empty() {
            return None;
        }
        let n = defined.len() as f64;
        let avg = defined.iter().sum::<f64>() / n;
        let variance = defined.iter().map(|r| (r - avg).powi(2)).sum::<f64>() / n;
        let min = defined.iter().copied().fold(f64::INFINITY, f64::min);
        let max = defined.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some(Self {
            avg,
            min,
            max,
            score: avg - RISK_PENALTY * variance.sqrt(),
        })
    }
}

/// Candidate entry days: an explicit non-empty list filtered to
/// `[0, duration_days)`, sorted and de-duplicated; otherwise every day.
pub fn candidate_days(entry_days: Option<&[i64]>, duration_days: u32) -> Vec<u32> {
    match entry_days {
        Some(days) if !days.is_empty() => {
            let mut picked: Vec<u32> = days
                .iter()
                .filter(|&&d| d >= 0 && d < i64::from(duration_days))
                .map(|&d| d as u32)
                .collect();
            picked.sort_unstable();
            picked.dedup();
            picked
        }
        _ => (0..duration_days).collect(),
    }
}

/// Sweep every holding with the production engine.
///
/// # Errors
///
/// Any error from simulating the base configuration or a swept variant.
pub fn timing_sweep(
    config: &SimulationConfig,
    entry_days: Option<&[i64]>,
) -> Result<Vec<HoldingSweep>, ConfigError> {
    timing_sweep_with(&SimulationEngine::new(), config, entry_days)
}

/// Sweep every holding through `simulator`.
///
/// Holdings are swept independently: while one holding moves, the others
/// keep their configured entry.
///
/// # Errors
///
/// Any error from simulating the base configuration or a swept variant.
pub fn timing_sweep_with<S: AirdropSimulator + ?Sized>(
    simulator: &S,
    config: &SimulationConfig,
    entry_days: Option<&[i64]>,
) -> Result<Vec<HoldingSweep>, ConfigError> {
    simulator.simulate(config)?;

    let days = candidate_days(entry_days, config.duration_days);
    info!(
        holdings = config.user_yt_tokens.len(),
        candidates = days.len(),
        "starting entry timing sweep"
    );

    config
        .user_yt_tokens
        .iter()
        .enumerate()
        .map(|(index, holding)| sweep_holding(simulator, config, index, holding, &days))
        .collect()
}

fn sweep_holding<S: AirdropSimulator + ?Sized>(
    simulator: &S,
    config: &SimulationConfig,
    index: usize,
    holding: &HoldingConfig,
    days: &[u32],
) -> Result<HoldingSweep, ConfigError> {
    let prices = build_yt_price_path(config.days(), &holding.price_params())?;

    let mut points = Vec::with_capacity(days.len());
    for &day in days {
        let yt_price = prices[day as usize];
        let variant = config.with_holding(
            index,
            HoldingConfig {
                entry_day: day,
                initial_price: yt_price,
                ..holding.clone()
            },
        );
        let result = simulator.simulate(&variant)?;

        let rois: Vec<FdvRoi> = result
            .outcomes
            .iter()
            .map(|o| {
                let breakeven = breakeven_price(yt_price, o.value, result.total_spent_usd);
                let future = future_profitable_days(&prices, day as usize, breakeven);
                FdvRoi {
                    fdv: o.fdv,
                    roi: o.roi,
                    breakeven_price: breakeven,
                    future_profitable_days: future,
                }
            })
            .collect();
        let stats = RoiStats::from_rois(&rois);
        points.push(SweepPoint {
            entry_day: day,
            yt_price,
            avg_roi: stats.map(|s| s.avg),
            min_roi: stats.map(|s| s.min),
            max_roi: stats.map(|s| s.max),
            risk_reward_score: stats.map(|s| s.score),
            user_share: result.user_share,
            rois,
        });
    }

    debug!(holding = %holding.name, points = points.len(), "swept holding");
    Ok(HoldingSweep {
        holding_name: holding.name.clone(),
        points,
    })
}
