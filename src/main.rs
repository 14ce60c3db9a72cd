use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use screenstat::{cli::Cli, loader, plot, report, stats};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let records = loader::load_records(&cli.data_file)?;
    let (weekday, weekend) = stats::split_by_category(&records);
    let minutes: Vec<f64> = records
        .iter()
        .map(|r| f64::from(r.total_minutes))
        .collect();

    let overall = stats::summarize(&minutes)?;
    let weekday_summary = stats::summarize(&weekday)?;
    let weekend_summary = stats::summarize(&weekend)?;
    let test = stats::welch_t_test(&weekday, &weekend)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_report(
        &mut out,
        &overall,
        &weekday_summary,
        &weekend_summary,
        &test,
    )?;
    out.flush()?;

    let produced = vec![
        plot::render_boxplot(&weekday, &weekend, &cli.out_dir)?,
        plot::render_scatter(&records, &cli.out_dir)?,
        plot::render_histogram(&weekday, &weekend, &cli.out_dir)?,
    ];

    report::write_saved_plots(&mut out, &produced)?;
    Ok(())
}
