//! Chart rendering via plotters
//!
//! Three independent renderers, each borrowing the analyzed data and
//! writing one fixed-name PNG into the target directory (overwriting any
//! existing file). The statistics core never touches this module, so it
//! stays testable without a graphics stack.

use std::path::{Path, PathBuf};

use plotters::prelude::*;
use tracing::debug;

use crate::error::{Result, UsageError};
use crate::loader::Record;

pub const BOXPLOT_FILE: &str = "boxplot_weekday_weekend.png";
pub const SCATTER_FILE: &str = "scatter_daily_usage.png";
pub const HISTOGRAM_FILE: &str = "hist_weekday_weekend.png";

/// 6.4in x 4.8in at 300 DPI
const CHART_SIZE: (u32, u32) = (1920, 1440);

const HIST_BINS: usize = 10;

fn render_failed(e: impl std::fmt::Display) -> UsageError {
    UsageError::Render(e.to_string())
}

/// Box plot comparing the two groups side by side.
pub fn render_boxplot(weekday: &[f64], weekend: &[f64], out_dir: &Path) -> Result<PathBuf> {
    let path = out_dir.join(BOXPLOT_FILE);
    // inner scope: the backend borrows `path` until it is dropped
    {
        let root = BitMapBackend::new(&path, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(render_failed)?;

        let weekday_quartiles = Quartiles::new(weekday);
        let weekend_quartiles = Quartiles::new(weekend);
        // whiskers reach q3 + 1.5*IQR, which can sit above the data max
        let y_max = weekday_quartiles
            .values()
            .iter()
            .chain(weekend_quartiles.values().iter())
            .fold(f32::MIN, |a, &b| a.max(b))
            * 1.1;
        let labels = ["Weekdays", "Weekends"];

        let mut chart = ChartBuilder::on(&root)
            .caption("Phone Usage: Weekdays vs Weekends", ("sans-serif", 60))
            .margin(40)
            .x_label_area_size(90)
            .y_label_area_size(130)
            .build_cartesian_2d(labels[..].into_segmented(), 0f32..y_max)
            .map_err(render_failed)?;

        chart
            .configure_mesh()
            .y_desc("Minutes")
            .axis_desc_style(("sans-serif", 40))
            .label_style(("sans-serif", 32))
            .disable_x_mesh()
            .draw()
            .map_err(render_failed)?;

        chart
            .draw_series(vec![
                Boxplot::new_vertical(SegmentValue::CenterOf(&"Weekdays"), &weekday_quartiles)
                    .width(200)
                    .whisker_width(0.5),
                Boxplot::new_vertical(SegmentValue::CenterOf(&"Weekends"), &weekend_quartiles)
                    .width(200)
                    .whisker_width(0.5),
            ])
            .map_err(render_failed)?;

        root.present().map_err(render_failed)?;
    }
    debug!(path = %path.display(), "rendered box plot");
    Ok(path)
}

/// Scatter plot of minutes against day index, over all records.
pub fn render_scatter(records: &[Record], out_dir: &Path) -> Result<PathBuf> {
    let path = out_dir.join(SCATTER_FILE);
    {
        let root = BitMapBackend::new(&path, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(render_failed)?;

        let x_max = records.iter().map(|r| r.day).max().unwrap_or(1) + 1;
        let y_max = records
            .iter()
            .map(|r| f64::from(r.total_minutes))
            .fold(f64::MIN, f64::max)
            * 1.1;

        let mut chart = ChartBuilder::on(&root)
            .caption(
                format!("Daily Phone Usage Over {} Days", records.len()),
                ("sans-serif", 60),
            )
            .margin(40)
            .x_label_area_size(90)
            .y_label_area_size(130)
            .build_cartesian_2d(0u32..x_max, 0f64..y_max)
            .map_err(render_failed)?;

        chart
            .configure_mesh()
            .x_desc("Day")
            .y_desc("Minutes")
            .axis_desc_style(("sans-serif", 40))
            .label_style(("sans-serif", 32))
            .x_labels(records.len().max(2))
            .draw()
            .map_err(render_failed)?;

        chart
            .draw_series(records.iter().map(|r| {
                Circle::new(
                    (r.day, f64::from(r.total_minutes)),
                    10,
                    BLUE.mix(0.8).filled(),
                )
            }))
            .map_err(render_failed)?;

        root.present().map_err(render_failed)?;
    }
    debug!(path = %path.display(), "rendered scatter plot");
    Ok(path)
}

/// Overlaid semi-transparent histograms of the two groups.
///
/// Both groups share one set of equal-width bins spanning the combined
/// value range, so the bars are directly comparable.
pub fn render_histogram(weekday: &[f64], weekend: &[f64], out_dir: &Path) -> Result<PathBuf> {
    let path = out_dir.join(HISTOGRAM_FILE);
    {
        let root = BitMapBackend::new(&path, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(render_failed)?;

        let all = weekday.iter().chain(weekend.iter());
        let lo = all.clone().fold(f64::MAX, |a, &b| a.min(b));
        let hi = all.fold(f64::MIN, |a, &b| a.max(b));
        let width = ((hi - lo) / HIST_BINS as f64).max(1.0);

        let weekday_counts = bin_counts(weekday, lo, width);
        let weekend_counts = bin_counts(weekend, lo, width);
        let y_max = weekday_counts
            .iter()
            .chain(weekend_counts.iter())
            .copied()
            .max()
            .unwrap_or(1)
            + 1;

        let mut chart = ChartBuilder::on(&root)
            .caption(
                "Histogram of Phone Usage: Weekdays vs Weekends",
                ("sans-serif", 60),
            )
            .margin(40)
            .x_label_area_size(90)
            .y_label_area_size(130)
            .build_cartesian_2d(lo..lo + width * HIST_BINS as f64, 0u32..y_max)
            .map_err(render_failed)?;

        chart
            .configure_mesh()
            .x_desc("Minutes")
            .y_desc("Frequency")
            .axis_desc_style(("sans-serif", 40))
            .label_style(("sans-serif", 32))
            .draw()
            .map_err(render_failed)?;

        for (counts, color, name) in [
            (&weekday_counts, BLUE, "Weekdays"),
            (&weekend_counts, RED, "Weekends"),
        ] {
            chart
                .draw_series(counts.iter().enumerate().filter(|(_, &c)| c > 0).map(
                    |(i, &c)| {
                        let x0 = lo + i as f64 * width;
                        Rectangle::new([(x0, 0), (x0 + width, c)], color.mix(0.6).filled())
                    },
                ))
                .map_err(render_failed)?
                .label(name)
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - 8), (x + 16, y + 8)], color.mix(0.6).filled())
                });
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", 36))
            .draw()
            .map_err(render_failed)?;

        root.present().map_err(render_failed)?;
    }
    debug!(path = %path.display(), "rendered histogram");
    Ok(path)
}

/// Count values per bin. Bins are `[lo + i*width, lo + (i+1)*width)`,
/// with the top edge closed so the maximum lands in the last bin.
fn bin_counts(values: &[f64], lo: f64, width: f64) -> Vec<u32> {
    let mut counts = vec![0u32; HIST_BINS];
    for &v in values {
        let idx = (((v - lo) / width) as usize).min(HIST_BINS - 1);
        counts[idx] += 1;
    }
    counts
}
