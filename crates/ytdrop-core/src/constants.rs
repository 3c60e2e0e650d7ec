//! Model constants and configuration defaults.
//!
//! Every default that a configuration field falls back to lives here, so a
//! scenario file that omits a field resolves to the same value the engine
//! documents.

/// Floor an exponential-to-zero YT price decays toward on the last day.
///
/// `exp(ln(0)*x)` is undefined, so "to zero" means "to this epsilon".
pub const DEFAULT_FINAL_EPSILON: f64 = 1e-4;

/// Bucket width (days) for stepwise YT price decay.
pub const DEFAULT_STEP_DAYS: u32 = 7;

/// Fraction of the YT price lost at the end of a campaign.
pub const DEFAULT_POST_DISCOUNT: f64 = 0.3;

/// Holding name used when a scenario omits one.
pub const DEFAULT_HOLDING_NAME: &str = "YT";

/// Steepness of the logistic TVL curve.
pub const LOGISTIC_STEEPNESS: f64 = 8.0;

/// Normalized position of the logistic midpoint and of the turning point of
/// the `up_then_down` / `down_then_up` curves.
pub const CURVE_MIDPOINT: f64 = 0.5;

/// `down_then_up` dips to this fraction of the smaller endpoint.
pub const TROUGH_FACTOR: f64 = 0.7;

/// Exponent for the `front_loaded` TVL curve, `1 - x^0.7`.
pub const FRONT_LOADED_EXPONENT: f64 = 0.7;

/// Exponent for the `back_loaded` TVL curve, `x^2`.
pub const BACK_LOADED_EXPONENT: i32 = 2;

/// Lower bound on the second-half span of the two-leg TVL curves.
pub const MIN_HALF_SPAN: f64 = 1e-9;

/// `slow_linear` pre-campaign pricing loses this fraction by campaign end.
pub const SLOW_LINEAR_DECAY: f64 = 0.1;

/// `slow_exp` pre-campaign pricing ends at this fraction of the initial price.
pub const SLOW_EXP_RETENTION: f64 = 0.9;

/// Weight of the ROI standard deviation in the sweep's risk/reward score.
pub const RISK_PENALTY: f64 = 0.5;
