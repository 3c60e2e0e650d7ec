//! YT price trajectories.
//!
//! Without a campaign the price decays from `initial_price` over the whole
//! program. With a campaign the program splits at the campaign end day `ce`:
//!
//! 1. Pre-phase, days `0..=ce`, normalized over `[0, ce]`.
//! 2. Discount: the post-phase starts at `price(ce) * (1 - post_discount)`.
//! 3. Post-phase, days `ce..days`, normalized over `[ce, last]`.
//!
//! Day `ce` belongs to both phases. The post-phase is written second, so the
//! stored price at `ce` is the discounted one.

use ytdrop_core::constants::{SLOW_EXP_RETENTION, SLOW_LINEAR_DECAY};
use ytdrop_core::{ConfigError, PostCampaignMode, PreCampaignMode, YtPriceMode, YtPriceParams};

use crate::axis::{last_day, position};

/// Build a `days`-long YT price path.
///
/// # Errors
///
/// - [`ConfigError::UnsupportedModeCombination`] for `two_phase` without a
///   campaign, or a non-`two_phase` mode with a campaign.
/// - [`ConfigError::MissingParameter`] for a campaign without an end day.
/// - [`ConfigError::InvalidParameter`] for stepwise decay with `step_days == 0`.
pub fn build_yt_price_path(days: usize, params: &YtPriceParams) -> Result<Vec<f64>, ConfigError> {
    if days == 0 {
        return Ok(Vec::new());
    }

    if !params.campaign_enabled {
        return decay_without_campaign(days, params);
    }

    if params.mode != YtPriceMode::TwoPhase {
        return Err(ConfigError::UnsupportedModeCombination(format!(
            "campaign_enabled=true requires yt_price_mode='two_phase', got '{}'",
            params.mode
        )));
    }

    let end_day = params.campaign_end_day.ok_or(ConfigError::MissingParameter {
        parameter: "campaign_end_day",
        context: "campaign_enabled=true",
    })?;

    two_phase(days, params, end_day)
}

fn decay_without_campaign(days: usize, params: &YtPriceParams) -> Result<Vec<f64>, ConfigError> {
    let p0 = params.initial_price;
    let span = last_day(days);

    let path = match params.mode {
        YtPriceMode::LinearToZero => (0..days).map(|d| p0 * (1.0 - position(d, span))).collect(),
        YtPriceMode::ExpToZero => {
            let rate = (params.final_epsilon / p0).ln();
            (0..days)
                .map(|d| p0 * (rate * position(d, span)).exp())
                .collect()
        }
        YtPriceMode::StepwiseLinear => {
            let step_days = nonzero_step(params.step_days)?;
            (0..days)
                .map(|d| p0 * stepwise_fraction(d, span.max(1), step_days))
                .collect()
        }
        YtPriceMode::TwoPhase => {
            return Err(ConfigError::UnsupportedModeCombination(
                "yt_price_mode='two_phase' requires campaign_enabled=true".to_string(),
            ));
        }
    };

    Ok(path)
}

fn two_phase(days: usize, params: &YtPriceParams, end_day: i64) -> Result<Vec<f64>, ConfigError> {
    let p0 = params.initial_price;
    let last = last_day(days);
    let ce = end_day.clamp(0, last as i64) as usize;
    let mut price = vec![0.0; days];

    for (d, slot) in price.iter_mut().enumerate().take(ce + 1) {
        let x = position(d, ce);
        *slot = match params.pre_mode {
            PreCampaignMode::Flat => p0,
            PreCampaignMode::SlowLinear => p0 * (1.0 - SLOW_LINEAR_DECAY * x),
            PreCampaignMode::SlowExp => p0 * (SLOW_EXP_RETENTION.ln() * x).exp(),
        };
    }

    let at_campaign_end = Some(price[ce]).filter(|p| *p != 0.0).unwrap_or(p0);
    let post_start = at_campaign_end * (1.0 - params.post_discount);
    let post_span = last - ce;

    match params.post_mode {
        PostCampaignMode::LinearToZero => {
            for (d, slot) in price.iter_mut().enumerate().skip(ce) {
                *slot = post_start * (1.0 - position(d - ce, post_span));
            }
        }
        PostCampaignMode::ExpToZero => {
            let rate = (params.final_epsilon / post_start).ln();
            for (d, slot) in price.iter_mut().enumerate().skip(ce) {
                *slot = post_start * (rate * position(d - ce, post_span)).exp();
            }
        }
        PostCampaignMode::StepwiseLinear => {
            let step_days = nonzero_step(params.step_days)?;
            for (d, slot) in price.iter_mut().enumerate().skip(ce) {
                *slot = post_start * stepwise_fraction(d - ce, post_span, step_days);
            }
        }
    }

    Ok(price)
}

/// Remaining price fraction `1 - step/num_steps` for a day `offset` days into
/// a span of `span` days cut into `step_days`-wide buckets. The last bucket
/// absorbs any remainder.
fn stepwise_fraction(offset: usize, span: usize, step_days: usize) -> f64 {
    let num_steps = span.div_ceil(step_days).max(1);
    let step = (offset / step_days).min(num_steps - 1);
    1.0 - step as f64 / num_steps as f64
}

fn nonzero_step(step_days: u32) -> Result<usize, ConfigError> {
    if step_days == 0 {
        return Err(ConfigError::InvalidParameter {
            parameter: "step_days",
            reason: "stepwise decay needs a bucket width of at least one day".to_string(),
        });
    }
    Ok(step_days as usize)
}
