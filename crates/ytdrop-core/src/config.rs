//! Simulation configuration records.
//!
//! A [`SimulationConfig`] is self-contained: the engine reads nothing else.
//! Optional fields resolve to the named defaults in [`crate::constants`] at
//! deserialization, so every consumer sees the same values.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_FINAL_EPSILON, DEFAULT_HOLDING_NAME, DEFAULT_POST_DISCOUNT, DEFAULT_STEP_DAYS,
};
use crate::modes::{
    ComponentTvlScaling, PendleMode, PostCampaignMode, PreCampaignMode, ShareMode, TvlMode,
    YtPriceMode,
};

fn default_holding_name() -> String {
    DEFAULT_HOLDING_NAME.to_string()
}

fn default_step_days() -> u32 {
    DEFAULT_STEP_DAYS
}

fn default_post_discount() -> f64 {
    DEFAULT_POST_DISCOUNT
}

/// Which allocation regime a simulation runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationRegime {
    /// A fixed network-points total is split by time-weighted contribution.
    Proportional,
    /// Network points are generated from the TVL and multiplier paths.
    TvlGenerated,
}

/// Protocol TVL trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TvlParams {
    #[serde(default)]
    pub mode: TvlMode,
    #[serde(default)]
    pub initial: f64,
    #[serde(default, rename = "final")]
    pub final_value: f64,
    /// Required by [`TvlMode::Average`], ignored otherwise.
    #[serde(default)]
    pub average: Option<f64>,
}

impl TvlParams {
    pub fn constant(average: f64) -> Self {
        Self {
            mode: TvlMode::Average,
            initial: average,
            final_value: average,
            average: Some(average),
        }
    }

    pub fn interpolated(mode: TvlMode, initial: f64, final_value: f64) -> Self {
        Self {
            mode,
            initial,
            final_value,
            average: None,
        }
    }
}

/// Share of TVL routed through the YT venue (simple Pendle mode).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShareParams {
    #[serde(default)]
    pub mode: ShareMode,
    /// Missing endpoints read as 0.
    #[serde(default)]
    pub initial: Option<f64>,
    #[serde(default, rename = "final")]
    pub final_value: Option<f64>,
    #[serde(default)]
    pub average: Option<f64>,
}

impl ShareParams {
    pub fn linear(initial: f64, final_value: f64) -> Self {
        Self {
            mode: ShareMode::Linear,
            initial: Some(initial),
            final_value: Some(final_value),
            average: None,
        }
    }

    pub fn constant(share: f64) -> Self {
        Self {
            mode: ShareMode::Average,
            initial: Some(share),
            final_value: Some(share),
            average: Some(share),
        }
    }

    pub fn initial_or_zero(&self) -> f64 {
        self.initial.unwrap_or(0.0)
    }

    pub fn final_or_zero(&self) -> f64 {
        self.final_value.unwrap_or(0.0)
    }
}

/// One protocol component for by-tokens Pendle mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenConfig {
    #[serde(default)]
    pub name: String,
    /// USD value of YT held on the venue.
    #[serde(default)]
    pub tvl_yt_pendle: f64,
    /// USD value staked directly with the protocol.
    #[serde(default)]
    pub tvl_direct: f64,
    /// Falls back to the simulation's `base_multiplier_pendle`.
    #[serde(default)]
    pub mult_yt_pendle: Option<f64>,
    /// Falls back to the simulation's `base_multiplier_direct`.
    #[serde(default)]
    pub mult_direct: Option<f64>,
}

impl TokenConfig {
    pub fn total_tvl(&self) -> f64 {
        self.tvl_yt_pendle + self.tvl_direct
    }
}

/// Inputs to the YT price path builder.
#[derive(Debug, Clone, PartialEq)]
pub struct YtPriceParams {
    pub mode: YtPriceMode,
    pub initial_price: f64,
    pub final_epsilon: f64,
    pub step_days: u32,
    pub campaign_enabled: bool,
    pub campaign_end_day: Option<i64>,
    pub pre_mode: PreCampaignMode,
    pub post_mode: PostCampaignMode,
    pub post_discount: f64,
}

impl YtPriceParams {
    pub fn new(mode: YtPriceMode, initial_price: f64) -> Self {
        Self {
            mode,
            initial_price,
            ..Self::default()
        }
    }

    /// Two-phase campaign pricing ending at `campaign_end_day`.
    pub fn campaign(initial_price: f64, campaign_end_day: i64) -> Self {
        Self {
            mode: YtPriceMode::TwoPhase,
            initial_price,
            campaign_enabled: true,
            campaign_end_day: Some(campaign_end_day),
            ..Self::default()
        }
    }
}

impl Default for YtPriceParams {
    fn default() -> Self {
        Self {
            mode: YtPriceMode::LinearToZero,
            initial_price: 1.0,
            final_epsilon: DEFAULT_FINAL_EPSILON,
            step_days: DEFAULT_STEP_DAYS,
            campaign_enabled: false,
            campaign_end_day: None,
            pre_mode: PreCampaignMode::Flat,
            post_mode: PostCampaignMode::LinearToZero,
            post_discount: DEFAULT_POST_DISCOUNT,
        }
    }
}

/// A user's YT position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingConfig {
    #[serde(default = "default_holding_name")]
    pub name: String,
    /// YT price on day 0.
    pub initial_price: f64,
    pub spend_usd: f64,
    /// Points multiplier earned per YT.
    pub multiplier: f64,
    #[serde(default)]
    pub entry_day: u32,
    /// Ignored while a campaign is enabled; campaign pricing is always two-phase.
    #[serde(default)]
    pub yt_price_mode: YtPriceMode,
    #[serde(default = "default_step_days")]
    pub step_days: u32,
    #[serde(default)]
    pub campaign_enabled: bool,
    #[serde(default)]
    pub campaign_end_day: Option<i64>,
    #[serde(default)]
    pub pre_mode: PreCampaignMode,
    #[serde(default)]
    pub post_mode: PostCampaignMode,
    #[serde(default = "default_post_discount")]
    pub post_discount: f64,
}

impl HoldingConfig {
    pub fn new(name: impl Into<String>, initial_price: f64, spend_usd: f64, multiplier: f64) -> Self {
        Self {
            name: name.into(),
            initial_price,
            spend_usd,
            multiplier,
            ..Self::default()
        }
    }

    /// Price path parameters for this holding.
    ///
    /// A campaign holding always prices as [`YtPriceMode::TwoPhase`].
    pub fn price_params(&self) -> YtPriceParams {
        let mode = if self.campaign_enabled {
            YtPriceMode::TwoPhase
        } else {
            self.yt_price_mode
        };
        YtPriceParams {
            mode,
            initial_price: self.initial_price,
            final_epsilon: DEFAULT_FINAL_EPSILON,
            step_days: self.step_days,
            campaign_enabled: self.campaign_enabled,
            campaign_end_day: self.campaign_end_day,
            pre_mode: self.pre_mode,
            post_mode: self.post_mode,
            post_discount: self.post_discount,
        }
    }
}

impl Default for HoldingConfig {
    fn default() -> Self {
        Self {
            name: default_holding_name(),
            initial_price: 1.0,
            spend_usd: 0.0,
            multiplier: 1.0,
            entry_day: 0,
            yt_price_mode: YtPriceMode::LinearToZero,
            step_days: DEFAULT_STEP_DAYS,
            campaign_enabled: false,
            campaign_end_day: None,
            pre_mode: PreCampaignMode::Flat,
            post_mode: PostCampaignMode::LinearToZero,
            post_discount: DEFAULT_POST_DISCOUNT,
        }
    }
}

/// Everything one simulation call needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Fraction of total supply distributed (0.10 = 10%).
    pub airdrop_pct: f64,
    pub total_supply: f64,
    pub duration_days: u32,
    pub tvl: TvlParams,
    #[serde(default)]
    pub pendle_mode: PendleMode,
    #[serde(default)]
    pub share: ShareParams,
    pub base_multiplier_pendle: f64,
    pub base_multiplier_direct: f64,
    #[serde(default)]
    pub token_configs: Vec<TokenConfig>,
    #[serde(alias = "holdings")]
    pub user_yt_tokens: Vec<HoldingConfig>,
    #[serde(default)]
    pub time_weighting: bool,
    #[serde(default)]
    pub fdv_list: Vec<f64>,
    /// A positive value switches to proportional allocation.
    #[serde(default)]
    pub network_points_total: Option<f64>,
    #[serde(default)]
    pub component_tvl_scaling: ComponentTvlScaling,
    /// Day the YT venue opened; `None` means day 0.
    #[serde(default)]
    pub pendle_markets_start_day: Option<u32>,
}

impl SimulationConfig {
    /// Number of days on the common time axis.
    pub fn days(&self) -> usize {
        self.duration_days as usize
    }

    pub fn allocation_regime(&self) -> AllocationRegime {
        match self.network_points_total {
            Some(total) if total > 0.0 => AllocationRegime::Proportional,
            _ => AllocationRegime::TvlGenerated,
        }
    }

    /// First day the venue contributes points.
    pub fn venue_start_day(&self) -> usize {
        self.pendle_markets_start_day.unwrap_or(0) as usize
    }

    pub fn total_spend(&self) -> f64 {
        self.user_yt_tokens.iter().map(|h| h.spend_usd).sum()
    }

    /// Copy of this config with holding `index` replaced.
    ///
    /// Out-of-range indices return an unchanged copy.
    pub fn with_holding(&self, index: usize, holding: HoldingConfig) -> Self {
        let mut next = self.clone();
        if let Some(slot) = next.user_yt_tokens.get_mut(index) {
            *slot = holding;
        }
        next
    }

    /// Sample scenario: an 80-day program with two by-token components and
    /// one YT position.
    pub fn example() -> Self {
        Self {
            airdrop_pct: 0.10,
            total_supply: 1_000_000_000.0,
            duration_days: 80,
            tvl: TvlParams {
                mode: TvlMode::Average,
                initial: 20_000_000.0,
                final_value: 20_000_000.0,
                average: Some(30_000_000.0),
            },
            pendle_mode: PendleMode::ByTokens,
            share: ShareParams::linear(0.30, 0.30),
            base_multiplier_pendle: 5.0,
            base_multiplier_direct: 1.0,
            token_configs: vec![
                TokenConfig {
                    name: "yzUSD".into(),
                    tvl_yt_pendle: 397_000.0,
                    tvl_direct: 873_000.0,
                    mult_yt_pendle: Some(5.0),
                    mult_direct: Some(1.0),
                },
                TokenConfig {
                    name: "syzUSD".into(),
                    tvl_yt_pendle: 202_000.0,
                    tvl_direct: 15_136_000.0,
                    mult_yt_pendle: Some(1.0),
                    mult_direct: Some(1.0),
                },
            ],
            user_yt_tokens: vec![HoldingConfig {
                entry_day: 3,
                post_mode: PostCampaignMode::ExpToZero,
                campaign_end_day: Some(9),
                ..HoldingConfig::new("yzUSD-YT", 0.03572, 1500.0, 5.0)
            }],
            time_weighting: true,
            fdv_list: vec![
                20_000_000.0,
                50_000_000.0,
                100_000_000.0,
                200_000_000.0,
                500_000_000.0,
            ],
            network_points_total: None,
            component_tvl_scaling: ComponentTvlScaling::Proportional,
            pendle_markets_start_day: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holding_defaults_resolve_from_constants() {
        let json = r#"{"initial_price": 0.5, "spend_usd": 100, "multiplier": 2}"#;
        let h: HoldingConfig = serde_json::from_str(json).unwrap();
        assert_eq!(h.name, DEFAULT_HOLDING_NAME);
        assert_eq!(h.step_days, DEFAULT_STEP_DAYS);
        assert_eq!(h.post_discount, DEFAULT_POST_DISCOUNT);
        assert_eq!(h.entry_day, 0);
        assert_eq!(h.yt_price_mode, YtPriceMode::LinearToZero);
        assert_eq!(h.pre_mode, PreCampaignMode::Flat);
        assert_eq!(h.post_mode, PostCampaignMode::LinearToZero);
        assert!(!h.campaign_enabled);
    }

    #[test]
    fn campaign_holding_prices_two_phase() {
        let h = HoldingConfig {
            campaign_enabled: true,
            campaign_end_day: Some(5),
            yt_price_mode: YtPriceMode::ExpToZero,
            ..HoldingConfig::new("a", 1.0, 10.0, 1.0)
        };
        let params = h.price_params();
        assert_eq!(params.mode, YtPriceMode::TwoPhase);
        assert_eq!(params.campaign_end_day, Some(5));
        assert_eq!(params.final_epsilon, DEFAULT_FINAL_EPSILON);
    }

    #[test]
    fn plain_holding_keeps_its_mode() {
        let h = HoldingConfig {
            yt_price_mode: YtPriceMode::StepwiseLinear,
            step_days: 3,
            ..HoldingConfig::default()
        };
        let params = h.price_params();
        assert_eq!(params.mode, YtPriceMode::StepwiseLinear);
        assert_eq!(params.step_days, 3);
    }

    #[test]
    fn regime_requires_positive_total() {
        let mut cfg = SimulationConfig::example();
        assert_eq!(cfg.allocation_regime(), AllocationRegime::TvlGenerated);
        cfg.network_points_total = Some(0.0);
        assert_eq!(cfg.allocation_regime(), AllocationRegime::TvlGenerated);
        cfg.network_points_total = Some(-5.0);
        assert_eq!(cfg.allocation_regime(), AllocationRegime::TvlGenerated);
        cfg.network_points_total = Some(1e9);
        assert_eq!(cfg.allocation_regime(), AllocationRegime::Proportional);
    }

    #[test]
    fn with_holding_replaces_only_target() {
        let mut cfg = SimulationConfig::example();
        cfg.user_yt_tokens.push(HoldingConfig::new("second", 1.0, 10.0, 1.0));
        let swapped = cfg.with_holding(1, HoldingConfig::new("third", 2.0, 20.0, 2.0));
        assert_eq!(swapped.user_yt_tokens[0], cfg.user_yt_tokens[0]);
        assert_eq!(swapped.user_yt_tokens[1].name, "third");
        assert_eq!(cfg.user_yt_tokens[1].name, "second");
    }

    #[test]
    fn with_holding_out_of_range_is_noop() {
        let cfg = SimulationConfig::example();
        assert_eq!(cfg.with_holding(7, HoldingConfig::default()), cfg);
    }

    #[test]
    fn example_round_trips_through_json() {
        let cfg = SimulationConfig::example();
        let json = serde_json::to_string_pretty(&cfg).unwrap();
        assert!(json.contains("\"final\""));
        let back: SimulationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn holdings_alias_accepted() {
        let json = r#"{
            "airdrop_pct": 0.1, "total_supply": 1e9, "duration_days": 10,
            "tvl": {"mode": "linear", "initial": 1, "final": 2},
            "base_multiplier_pendle": 5, "base_multiplier_direct": 1,
            "holdings": [{"initial_price": 1, "spend_usd": 10, "multiplier": 1}]
        }"#;
        let cfg: SimulationConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.user_yt_tokens.len(), 1);
        assert_eq!(cfg.pendle_mode, PendleMode::Simple);
        assert_eq!(cfg.component_tvl_scaling, ComponentTvlScaling::Proportional);
        assert_eq!(cfg.share.initial_or_zero(), 0.0);
        assert_eq!(cfg.venue_start_day(), 0);
    }

    #[test]
    fn total_spend_sums_holdings() {
        let mut cfg = SimulationConfig::example();
        cfg.user_yt_tokens.push(HoldingConfig::new("b", 1.0, 500.0, 1.0));
        assert_eq!(cfg.total_spend(), 2000.0);
    }
}
