//! The shared day axis.
//!
//! Every path is indexed by day `0..days`. Interpolating modes read each day
//! as a normalized position in `[0, 1]`: 0 on the first day of the span, 1 on
//! the last. Spans shorter than one day are treated as one day long so a
//! single-day path never divides by zero.

/// Position of `offset` within a span of `span` days, `offset / max(span, 1)`.
pub fn position(offset: usize, span: usize) -> f64 {
    offset as f64 / span.max(1) as f64
}

/// Normalized positions for every day of a `days`-long path.
pub fn normalized_positions(days: usize) -> Vec<f64> {
    let span = last_day(days);
    (0..days).map(|d| position(d, span)).collect()
}

/// Index of the last day, 0 for an empty axis.
pub fn last_day(days: usize) -> usize {
    days.saturating_sub(1)
}

/// Arithmetic mean of a path, 0 for an empty one.
pub fn mean(path: &[f64]) -> f64 {
    if path.is_empty() {
        return 0.0;
    }
    path.iter().sum::<f64>() / path.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_span_zero_to_one() {
        let x = normalized_positions(5);
        assert_eq!(x, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn single_day_sits_at_zero() {
        assert_eq!(normalized_positions(1), vec![0.0]);
    }

    #[test]
    fn empty_axis() {
        assert!(normalized_positions(0).is_empty());
        assert_eq!(last_day(0), 0);
    }

    #[test]
    fn zero_span_is_clamped() {
        assert_eq!(position(0, 0), 0.0);
        assert_eq!(position(3, 0), 3.0);
    }

    #[test]
    fn mean_of_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
    }
}
