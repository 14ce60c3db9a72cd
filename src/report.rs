//! Fixed-format console report
//!
//! Rounding here is display-only (two decimals for means/SDs/diff/se,
//! three for t, two for df). The statistics themselves stay at full
//! precision upstream.

use std::io::{self, Write};

use crate::stats::{SummaryStats, WelchTest};

/// Write the full report: overall and per-group summaries, then the
/// Welch test block with an interpretive sentence.
pub fn write_report(
    out: &mut impl Write,
    overall: &SummaryStats,
    weekday: &SummaryStats,
    weekend: &SummaryStats,
    test: &WelchTest,
) -> io::Result<()> {
    writeln!(out, "Overall mean (min): {:.2}", overall.mean)?;
    writeln!(out, "Overall SD (min): {:.2}", overall.sd)?;
    writeln!(out)?;

    writeln!(out, "Weekday mean (min): {:.2}", weekday.mean)?;
    writeln!(out, "Weekday SD (min): {:.2}", weekday.sd)?;
    writeln!(out, "Weekend mean (min): {:.2}", weekend.mean)?;
    writeln!(out, "Weekend SD (min): {:.2}", weekend.sd)?;
    writeln!(out)?;

    writeln!(out, "Welch two-sample t-test (Weekday - Weekend)")?;
    writeln!(out, "  Difference in means (min): {:.2}", test.mean_diff)?;
    writeln!(out, "  Standard error: {:.2}", test.std_error)?;
    writeln!(out, "  t-statistic: {:.3}", test.t)?;
    writeln!(out, "  Approx. df: {:.2}", test.df)?;

    writeln!(out, "Interpretation: {}", interpretation(test.t))?;
    writeln!(
        out,
        "No p-value is computed here; feed t and df into a statistical \
         tool or t-distribution table to judge significance."
    )?;

    Ok(())
}

/// Write the list of produced chart files.
pub fn write_saved_plots(out: &mut impl Write, paths: &[std::path::PathBuf]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Plots saved as:")?;
    for path in paths {
        writeln!(out, "  {}", path.display())?;
    }
    Ok(())
}

fn interpretation(t: f64) -> &'static str {
    if t > 0.0 {
        "t is positive, so weekday usage is higher on average."
    } else if t < 0.0 {
        "t is negative, so weekend usage is higher on average."
    } else {
        "t is zero, the group means are identical."
    }
}
