//! Network-side points.
//!
//! Both allocation regimes share one daily series `np(day)`:
//!
//! - simple mode: `TVL(day) * (share(day)*mult_pendle + (1-share(day))*mult_direct)`
//! - by-tokens mode: the component base points, optionally scaled by `TVL(day)/avg(TVL)`
//!
//! Before the venue start day only direct holdings earn: simple mode uses
//! `mult_direct` alone and by-tokens mode counts direct components only.

use ytdrop_core::{ConfigError, PendleMode, SimulationConfig, TokenConfig};
use ytdrop_paths::{mean, share_path};

/// Daily network points and the display figures derived alongside them.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkSeries {
    pub daily: Vec<f64>,
    pub avg_tvl: f64,
    /// Mean venue share (simple) or venue fraction of component TVL (by-tokens).
    pub pendle_share_effective: f64,
}

impl NetworkSeries {
    /// Points generated over the whole program.
    pub fn total(&self) -> f64 {
        self.daily.iter().sum()
    }

    /// `Σ np(day) * (duration_days - day)`, the network side of proportional
    /// allocation.
    pub fn weighted_contribution(&self, duration_days: usize) -> f64 {
        self.daily
            .iter()
            .enumerate()
            .map(|(day, points)| points * duration_days.saturating_sub(day) as f64)
            .sum()
    }
}

/// Build the daily network points series over the TVL path `tvl`.
///
/// # Errors
///
/// [`ConfigError::MissingTokenConfigs`] in by-tokens mode without components.
pub fn network_series(config: &SimulationConfig, tvl: &[f64]) -> Result<NetworkSeries, ConfigError> {
    let avg_tvl = mean(tvl);
    let start = config.venue_start_day();

    let (daily, pendle_share_effective) = match config.pendle_mode {
        PendleMode::Simple => {
            let share = venue_share_path(config);
            let daily = tvl
                .iter()
                .zip(&share)
                .enumerate()
                .map(|(day, (t, s))| {
                    if day < start {
                        t * config.base_multiplier_direct
                    } else {
                        t * (s * config.base_multiplier_pendle
                            + (1.0 - s) * config.base_multiplier_direct)
                    }
                })
                .collect();
            (daily, mean(&share))
        }
        PendleMode::ByTokens => {
            if config.token_configs.is_empty() {
                return Err(ConfigError::MissingTokenConfigs);
            }
            let totals = ComponentTotals::from_configs(config);
            let scale_with_tvl = config.component_tvl_scaling.scales_with_tvl()
                && avg_tvl > 0.0
                && totals.tvl() > 0.0;
            let daily = tvl
                .iter()
                .enumerate()
                .map(|(day, t)| {
                    let base = if day < start {
                        totals.direct_points
                    } else {
                        totals.direct_points + totals.venue_points
                    };
                    if scale_with_tvl { t / avg_tvl * base } else { base }
                })
                .collect();
            (daily, totals.venue_fraction())
        }
    };

    Ok(NetworkSeries {
        daily,
        avg_tvl,
        pendle_share_effective,
    })
}

/// Share path over the full axis: 0 before the venue start day, then the
/// configured share curve re-based to start there.
pub fn venue_share_path(config: &SimulationConfig) -> Vec<f64> {
    let days = config.days();
    let start = config.venue_start_day().min(days);
    let mut path = vec![0.0; start];
    path.extend(share_path(days - start, &config.share));
    path
}

/// Component TVL and base points summed over every token config.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct ComponentTotals {
    venue_tvl: f64,
    direct_tvl: f64,
    venue_points: f64,
    direct_points: f64,
}

impl ComponentTotals {
    fn from_configs(config: &SimulationConfig) -> Self {
        config
            .token_configs
            .iter()
            .fold(Self::default(), |acc, token| acc.add(token, config))
    }

    fn add(self, token: &TokenConfig, config: &SimulationConfig) -> Self {
        let mult_venue = token.mult_yt_pendle.unwrap_or(config.base_multiplier_pendle);
        let mult_direct = token.mult_direct.unwrap_or(config.base_multiplier_direct);
        Self {
            venue_tvl: self.venue_tvl + token.tvl_yt_pendle,
            direct_tvl: self.direct_tvl + token.tvl_direct,
            venue_points: self.venue_points + token.tvl_yt_pendle * mult_venue,
            direct_points: self.direct_points + token.tvl_direct * mult_direct,
        }
    }

    fn tvl(&self) -> f64 {
        self.venue_tvl + self.direct_tvl
    }

    fn venue_fraction(&self) -> f64 {
        let total = self.tvl();
        if total > 0.0 { self.venue_tvl / total } else { 0.0 }
    }
}
