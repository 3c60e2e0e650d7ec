//! Venue market-share trajectories.

use ytdrop_core::{ShareMode, ShareParams};

use crate::axis::normalized_positions;

/// Build a `days`-long market-share path.
///
/// `average` mode is constant at `average`, or at `initial` when no average
/// is given. Linear mode interpolates `initial` to `final_value`. Values are
/// not clamped to `[0, 1]`.
pub fn build_share_path(
    days: usize,
    mode: ShareMode,
    initial: f64,
    final_value: f64,
    average: Option<f64>,
) -> Vec<f64> {
    if days == 0 {
        return Vec::new();
    }

    match mode {
        ShareMode::Average => vec![average.unwrap_or(initial); days],
        ShareMode::Linear if days == 1 => vec![initial],
        ShareMode::Linear => normalized_positions(days)
            .into_iter()
            .map(|x| initial + (final_value - initial) * x)
            .collect(),
    }
}

/// Build a share path from a [`ShareParams`] record, missing endpoints read as 0.
pub fn share_path(days: usize, params: &ShareParams) -> Vec<f64> {
    build_share_path(
        days,
        params.mode,
        params.initial_or_zero(),
        params.final_or_zero(),
        params.average,
    )
}
