//! Shared config builders for scenario and property tests.

use ytdrop_core::{
    ComponentTvlScaling, HoldingConfig, PendleMode, ShareParams, SimulationConfig, TokenConfig,
    TvlParams,
};

/// Simple-mode config: constant `tvl`, zero venue share, direct multiplier 1,
/// no holdings and no FDV scenarios.
pub fn simple_config(days: u32, tvl: f64) -> SimulationConfig {
    SimulationConfig {
        airdrop_pct: 0.1,
        total_supply: 1e9,
        duration_days: days,
        tvl: TvlParams::constant(tvl),
        pendle_mode: PendleMode::Simple,
        share: ShareParams::constant(0.0),
        base_multiplier_pendle: 5.0,
        base_multiplier_direct: 1.0,
        token_configs: vec![],
        user_yt_tokens: vec![],
        time_weighting: false,
        fdv_list: vec![],
        network_points_total: None,
        component_tvl_scaling: ComponentTvlScaling::Proportional,
        pendle_markets_start_day: None,
    }
}

/// By-tokens config with one component per `(venue_tvl, direct_tvl)` pair,
/// using the base multipliers.
pub fn by_tokens_config(days: u32, tvl: f64, components: &[(f64, f64)]) -> SimulationConfig {
    SimulationConfig {
        pendle_mode: PendleMode::ByTokens,
        token_configs: components
            .iter()
            .enumerate()
            .map(|(i, &(venue, direct))| TokenConfig {
                name: format!("component-{i}"),
                tvl_yt_pendle: venue,
                tvl_direct: direct,
                mult_yt_pendle: None,
                mult_direct: None,
            })
            .collect(),
        ..simple_config(days, tvl)
    }
}

/// A linear-to-zero holding bought on `entry_day`.
pub fn holding(name: &str, price: f64, spend: f64, multiplier: f64, entry_day: u32) -> HoldingConfig {
    HoldingConfig {
        entry_day,
        ..HoldingConfig::new(name, price, spend, multiplier)
    }
}

/// Relative closeness with an absolute floor of `tol`.
pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol * a.abs().max(b.abs()).max(1.0)
}
