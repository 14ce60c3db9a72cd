//! Descriptive statistics and Welch's unequal-variances t-test
//!
//! This is the core of the program: everything here is pure computation
//! over borrowed slices, with no filesystem or graphics dependency. All
//! intermediate values are kept at full f64 precision; rounding happens
//! only in the report layer.
//!
//! Deliberate boundary: `welch_t_test` stops at the t-statistic and the
//! Welch–Satterthwaite degrees of freedom. No p-value is computed here.

use tracing::debug;

use crate::error::{Result, UsageError};
use crate::loader::{Category, Record};

/// Mean and sample standard deviation of one group
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStats {
    pub mean: f64,
    pub sd: f64,
}

/// Result of a Welch two-sample t-test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WelchTest {
    /// t-statistic (positive when group1's mean is larger)
    pub t: f64,
    /// Welch–Satterthwaite approximate degrees of freedom
    pub df: f64,
    /// Difference in means, group1 - group2
    pub mean_diff: f64,
    /// Pooled standard error sqrt(s1^2/n1 + s2^2/n2)
    pub std_error: f64,
}

/// Arithmetic mean. Fails on an empty slice.
pub fn mean(x: &[f64]) -> Result<f64> {
    if x.is_empty() {
        return Err(UsageError::EmptyGroup);
    }
    Ok(x.iter().sum::<f64>() / x.len() as f64)
}

/// Sample standard deviation with Bessel's correction (n-1 denominator).
/// Fails when fewer than two samples are given.
pub fn sample_sd(x: &[f64]) -> Result<f64> {
    if x.len() < 2 {
        return Err(UsageError::TooFewSamples {
            needed: 2,
            got: x.len(),
        });
    }
    let m = mean(x)?;
    let sum_sq: f64 = x.iter().map(|xi| (xi - m).powi(2)).sum();
    Ok((sum_sq / (x.len() - 1) as f64).sqrt())
}

/// Mean and sample SD in one call.
pub fn summarize(x: &[f64]) -> Result<SummaryStats> {
    Ok(SummaryStats {
        mean: mean(x)?,
        sd: sample_sd(x)?,
    })
}

/// Partition minute values into (weekday, weekend) groups.
///
/// Order within each group follows input order. Categories are a closed
/// enum after loading, so nothing is ever dropped here.
pub fn split_by_category(records: &[Record]) -> (Vec<f64>, Vec<f64>) {
    let mut weekday = Vec::new();
    let mut weekend = Vec::new();
    for record in records {
        let minutes = f64::from(record.total_minutes);
        match record.category {
            Category::Weekday => weekday.push(minutes),
            Category::Weekend => weekend.push(minutes),
        }
    }
    debug!(
        weekday = weekday.len(),
        weekend = weekend.len(),
        "split records by category"
    );
    (weekday, weekend)
}

/// Welch two-sample t-test for a difference in means, not assuming equal
/// variances.
///
/// Returns the t-statistic, the Welch–Satterthwaite degrees of freedom,
/// the raw mean difference (group1 - group2) and the pooled standard
/// error. Requires at least two samples per group and a nonzero standard
/// error.
pub fn welch_t_test(group1: &[f64], group2: &[f64]) -> Result<WelchTest> {
    let (n1, n2) = (group1.len(), group2.len());
    let (m1, m2) = (mean(group1)?, mean(group2)?);
    let (s1, s2) = (sample_sd(group1)?, sample_sd(group2)?);

    // per-group variance of the mean, s_i^2 / n_i
    let v1 = s1 * s1 / n1 as f64;
    let v2 = s2 * s2 / n2 as f64;

    let std_error = (v1 + v2).sqrt();
    if std_error == 0.0 {
        return Err(UsageError::ZeroStandardError);
    }

    let mean_diff = m1 - m2;
    let t = mean_diff / std_error;

    // Welch–Satterthwaite approximation
    let df = (v1 + v2).powi(2) / (v1.powi(2) / (n1 - 1) as f64 + v2.powi(2) / (n2 - 1) as f64);

    debug!(t, df, mean_diff, std_error, "computed Welch t-test");
    Ok(WelchTest {
        t,
        df,
        mean_diff,
        std_error,
    })
}
