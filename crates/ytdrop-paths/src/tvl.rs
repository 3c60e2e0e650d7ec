//! Protocol TVL trajectories.
//!
//! | mode | value at normalized position `x` |
//! |---|---|
//! | `average` | `average` on every day |
//! | `linear` | `a + (b-a)x` |
//! | `exp` | `a * exp(ln(b/a) x)` |
//! | `logistic` | `a + (b-a) / (1 + exp(-8(x-0.5)))` |
//! | `up_then_down` | up to `b` at the midpoint, then down to `(a+b)/2` |
//! | `down_then_up` | down to `0.7*min(a,b)` at the midpoint, then up to `b` |
//! | `front_loaded` | `a + (b-a)(1 - x^0.7)` |
//! | `back_loaded` | `a + (b-a)x^2` |
//!
//! `front_loaded` starts at `b` and ends at `a`.

use ytdrop_core::constants::{
    BACK_LOADED_EXPONENT, CURVE_MIDPOINT, FRONT_LOADED_EXPONENT, LOGISTIC_STEEPNESS,
    MIN_HALF_SPAN, TROUGH_FACTOR,
};
use ytdrop_core::{ConfigError, TvlMode, TvlParams};

use crate::axis::normalized_positions;

/// Build a `days`-long TVL path.
///
/// An empty axis yields an empty path for every mode. A one-day axis yields
/// `[initial]` for every mode except `average`, which yields `[average]`.
///
/// # Errors
///
/// - [`ConfigError::MissingParameter`] for `average` mode without an average.
/// - [`ConfigError::NonPositiveEndpoint`] for `exp` mode with an endpoint `<= 0`
///   (only checked when the path has more than one day).
pub fn build_tvl_path(
    days: usize,
    mode: TvlMode,
    initial: f64,
    final_value: f64,
    average: Option<f64>,
) -> Result<Vec<f64>, ConfigError> {
    if days == 0 {
        return Ok(Vec::new());
    }

    let a = initial;
    let b = final_value;
    let x = normalized_positions(days);

    let path = match mode {
        TvlMode::Average => {
            let average = average.ok_or(ConfigError::MissingParameter {
                parameter: "tvl_average",
                context: "tvl_mode='average'",
            })?;
            vec![average; days]
        }
        _ if days == 1 => vec![initial],
        TvlMode::Linear => x.iter().map(|xi| a + (b - a) * xi).collect(),
        TvlMode::Exp => {
            if a <= 0.0 || b <= 0.0 {
                return Err(ConfigError::NonPositiveEndpoint {
                    mode: "exp",
                    initial: a,
                    final_value: b,
                });
            }
            let rate = (b / a).ln();
            x.iter().map(|xi| a * (rate * xi).exp()).collect()
        }
        TvlMode::Logistic => x
            .iter()
            .map(|xi| a + (b - a) / (1.0 + (-LOGISTIC_STEEPNESS * (xi - CURVE_MIDPOINT)).exp()))
            .collect(),
        TvlMode::UpThenDown => {
            let settle = (a + b) / 2.0;
            x.iter()
                .map(|&xi| two_leg(xi, a, b, settle))
                .collect()
        }
        TvlMode::DownThenUp => {
            let trough = a.min(b) * TROUGH_FACTOR;
            x.iter()
                .map(|&xi| two_leg(xi, a, trough, b))
                .collect()
        }
        TvlMode::FrontLoaded => x
            .iter()
            .map(|xi| a + (b - a) * (1.0 - xi.powf(FRONT_LOADED_EXPONENT)))
            .collect(),
        TvlMode::BackLoaded => x
            .iter()
            .map(|xi| a + (b - a) * xi.powi(BACK_LOADED_EXPONENT))
            .collect(),
    };

    Ok(path)
}

/// Build a TVL path from a [`TvlParams`] record.
pub fn tvl_path(days: usize, params: &TvlParams) -> Result<Vec<f64>, ConfigError> {
    build_tvl_path(
        days,
        params.mode,
        params.initial,
        params.final_value,
        params.average,
    )
}

/// Piecewise-linear curve through `start` (x=0), `turn` (midpoint), `end` (x=1).
/// The midpoint itself belongs to the first leg.
fn two_leg(x: f64, start: f64, turn: f64, end: f64) -> f64 {
    if x <= CURVE_MIDPOINT {
        start + (turn - start) * (x / CURVE_MIDPOINT)
    } else {
        let xr = (x - CURVE_MIDPOINT) / MIN_HALF_SPAN.max(1.0 - CURVE_MIDPOINT);
        turn + (end - turn) * xr
    }
}
