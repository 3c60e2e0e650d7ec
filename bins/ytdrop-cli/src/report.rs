//! Plain-text reports.

use std::fmt::{self, Write};

use ytdrop_core::SimulationResult;
use ytdrop_sim::HoldingSweep;

fn pct(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}%", v * 100.0),
        None => "n/a".to_string(),
    }
}

fn price(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.6}"))
}

/// Write the summary of one simulation.
pub fn write_simulation(out: &mut impl Write, result: &SimulationResult) -> fmt::Result {
    writeln!(out, "=== AIRDROP SIMULATION ===")?;
    writeln!(out, "Allocation:       {:?}", result.allocation)?;
    writeln!(out, "Average TVL:      ${:.0}", result.avg_tvl)?;
    writeln!(out, "Venue share:      {}", pct(Some(result.pendle_share_effective)))?;
    writeln!(out, "Network points:   {:.2}", result.network_points)?;
    writeln!(out, "User points:      {:.2}", result.user_points)?;
    writeln!(out, "User share:       {:.6}%", result.user_share * 100.0)?;
    writeln!(out, "Airdrop tokens:   {:.0}", result.airdrop_tokens)?;
    writeln!(out, "User tokens:      {:.2}", result.user_tokens)?;
    writeln!(out, "Total spent:      ${:.2}", result.total_spent_usd)?;

    writeln!(out)?;
    writeln!(out, "Holdings:")?;
    for h in &result.token_results {
        writeln!(
            out,
            "  {:<16} day {:>3}  price {:.6}  spend ${:.2}  YT {:.2}  points {:.2}",
            h.name, h.entry_day, h.entry_price, h.spend_usd, h.user_yt, h.user_points
        )?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "{:>16} {:>12} {:>14} {:>10} {:>12}",
        "FDV", "token price", "value", "ROI", "cost/FDV"
    )?;
    for o in &result.outcomes {
        writeln!(
            out,
            "{:>16.0} {:>12.6} {:>14.2} {:>10} {:>12.3e}",
            o.fdv,
            o.token_price,
            o.value,
            pct(o.roi),
            o.cost_vs_fdv
        )?;
    }
    Ok(())
}

/// Write the sweep summary: best day by risk/reward, then the top `top`
/// days and the profitable-day count for each FDV.
pub fn write_sweep(
    out: &mut impl Write,
    sweeps: &[HoldingSweep],
    fdvs: &[f64],
    top: usize,
) -> fmt::Result {
    for sweep in sweeps {
        writeln!(out, "=== ENTRY TIMING: {} ===", sweep.holding_name)?;
        match sweep.best_by_score() {
            Some(best) => {
                writeln!(
                    out,
                    "Best risk/reward: day {} at price {:.6} (avg ROI {}, score {:.4})",
                    best.entry_day,
                    best.yt_price,
                    pct(best.avg_roi),
                    best.risk_reward_score.unwrap_or_default()
                )?;
                for &fdv in fdvs {
                    writeln!(
                        out,
                        "  FDV ${fdv:.0}: breakeven YT price {}, {} profitable days ahead",
                        price(best.breakeven_at(fdv)),
                        best.future_profitable_days(fdv)
                    )?;
                }
            }
            None => writeln!(out, "Best risk/reward: n/a (no spend)")?,
        }

        for &fdv in fdvs {
            writeln!(out)?;
            writeln!(out, "FDV ${fdv:.0}")?;
            writeln!(
                out,
                "  {:<6} {:<12} {:<10} {:<12} {:<11}",
                "day", "YT price", "ROI", "breakeven", "future days"
            )?;
            for p in sweep.top_by_roi(fdv, top) {
                writeln!(
                    out,
                    "  {:<6} {:<12.6} {:<10} {:<12} {:<11}",
                    p.entry_day,
                    p.yt_price,
                    pct(p.roi_at(fdv)),
                    price(p.breakeven_at(fdv)),
                    p.future_profitable_days(fdv)
                )?;
            }
            writeln!(
                out,
                "  Profitable entry days: {}/{}",
                sweep.profitable_days(fdv),
                sweep.points.len()
            )?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ytdrop_core::SimulationConfig;
    use ytdrop_sim::{simulate_airdrop, timing_sweep};

    #[test]
    fn percent_formatting() {
        assert_eq!(pct(Some(0.1234)), "12.34%");
        assert_eq!(pct(None), "n/a");
    }

    #[test]
    fn simulation_report_lists_every_fdv() {
        let cfg = SimulationConfig::example();
        let result = simulate_airdrop(&cfg).unwrap();
        let mut out = String::new();
        write_simulation(&mut out, &result).unwrap();
        assert!(out.contains("yzUSD-YT"));
        assert!(out.contains("TvlGenerated"));
        assert_eq!(out.lines().filter(|l| l.contains('%')).count(), 1 + 1 + cfg.fdv_list.len());
    }

    #[test]
    fn sweep_report_has_section_per_fdv() {
        let cfg = SimulationConfig::example();
        let sweeps = timing_sweep(&cfg, Some(&[0, 10, 20])).unwrap();
        let mut out = String::new();
        write_sweep(&mut out, &sweeps, &cfg.fdv_list, 2).unwrap();
        assert!(out.contains("=== ENTRY TIMING: yzUSD-YT ==="));
        assert_eq!(out.matches("Profitable entry days:").count(), cfg.fdv_list.len());
        assert!(out.contains("/3"));
        assert_eq!(out.matches("breakeven YT price").count(), cfg.fdv_list.len());
        assert_eq!(out.matches("future days").count(), cfg.fdv_list.len());
    }

    #[test]
    fn zero_spend_sweep_prints_no_breakeven() {
        let mut cfg = SimulationConfig::example();
        for h in &mut cfg.user_yt_tokens {
            h.spend_usd = 0.0;
        }
        let sweeps = timing_sweep(&cfg, Some(&[0])).unwrap();
        let mut out = String::new();
        write_sweep(&mut out, &sweeps, &cfg.fdv_list, 1).unwrap();
        assert!(out.contains("Best risk/reward: n/a"));
        assert!(!out.contains("breakeven YT price"));
        assert!(out.contains("n/a"));
    }
}
