//! User-side points for each YT holding.

use ytdrop_core::{ConfigError, HoldingConfig, HoldingResult};
use ytdrop_paths::build_yt_price_path;

/// One holding's points under both allocation regimes.
#[derive(Debug, Clone, PartialEq)]
pub struct HoldingPoints {
    pub result: HoldingResult,
    /// `Σ yt * mult * w(day) * (duration - day)` over held days.
    pub weighted: f64,
}

/// Day weight `clamp((duration - day) / duration, 0, 1)`, or 1 when time
/// weighting is off.
pub fn time_weight(day: usize, duration_days: usize, time_weighting: bool) -> f64 {
    if !time_weighting {
        return 1.0;
    }
    let remaining = duration_days as f64 - day as f64;
    (remaining / duration_days as f64).clamp(0.0, 1.0)
}

/// Price the holding, buy on its entry day and accumulate points to the end
/// of the program.
///
/// # Errors
///
/// - [`ConfigError::EntryDayOutOfRange`] when `entry_day >= duration_days`.
/// - Any error from building the holding's price path.
pub fn holding_points(
    holding: &HoldingConfig,
    duration_days: usize,
    time_weighting: bool,
) -> Result<HoldingPoints, ConfigError> {
    let prices = build_yt_price_path(duration_days, &holding.price_params())?;
    let entry = holding.entry_day as usize;
    let entry_price = *prices.get(entry).ok_or_else(|| ConfigError::EntryDayOutOfRange {
        holding: holding.name.clone(),
        entry_day: holding.entry_day,
        duration_days: duration_days as u32,
    })?;

    let user_yt = if entry_price > 0.0 {
        holding.spend_usd / entry_price
    } else {
        0.0
    };
    let per_day = user_yt * holding.multiplier;

    let mut weighted = 0.0;
    let mut display = 0.0;
    for day in entry..duration_days {
        let w = time_weight(day, duration_days, time_weighting);
        weighted += per_day * w * (duration_days - day) as f64;
        display += per_day * w;
    }

    Ok(HoldingPoints {
        result: HoldingResult {
            name: holding.name.clone(),
            spend_usd: holding.spend_usd,
            entry_day: holding.entry_day,
            entry_price,
            user_yt,
            user_points: display,
        },
        weighted,
    })
}
