//! FDV scenario projection.

use ytdrop_core::FdvOutcome;

/// Value the user's token allocation under each FDV in `fdvs`, in order.
///
/// ROI is `None` when nothing was spent.
pub fn project_outcomes(
    user_tokens: f64,
    total_spent: f64,
    total_supply: f64,
    fdvs: &[f64],
) -> Vec<FdvOutcome> {
    fdvs.iter()
        .map(|&fdv| {
            let token_price = fdv / total_supply;
            let value = user_tokens * token_price;
            let roi = (total_spent > 0.0).then(|| (value - total_spent) / total_spent);
            FdvOutcome {
                fdv,
                token_price,
                value,
                roi,
                cost_vs_fdv: total_spent / fdv,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_tokens_at_fdv_price() {
        let out = project_outcomes(1_000.0, 50.0, 1e9, &[100e6]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].token_price, 0.1);
        assert_eq!(out[0].value, 100.0);
        assert_eq!(out[0].roi, Some(1.0));
        assert_eq!(out[0].cost_vs_fdv, 50.0 / 100e6);
    }

    #[test]
    fn roi_undefined_without_spend() {
        let out = project_outcomes(1_000.0, 0.0, 1e9, &[1e6, 2e6]);
        assert!(out.iter().all(|o| o.roi.is_none()));
        assert!(out.iter().all(|o| o.cost_vs_fdv == 0.0));
    }

    #[test]
    fn keeps_caller_order() {
        let fdvs = [5e8, 2e7, 1e8];
        let out = project_outcomes(1.0, 1.0, 1e9, &fdvs);
        let got: Vec<f64> = out.iter().map(|o| o.fdv).collect();
        assert_eq!(got, fdvs);
    }

    #[test]
    fn losing_position_has_negative_roi() {
        let out = project_outcomes(10.0, 100.0, 1e9, &[1e9]);
        assert_eq!(out[0].value, 10.0);
        assert_eq!(out[0].roi, Some(-0.9));
    }

    #[test]
    fn empty_fdv_list() {
        assert!(project_outcomes(1.0, 1.0, 1.0, &[]).is_empty());
    }
}
