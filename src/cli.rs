//! CLI argument parsing for Screenstat

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "screenstat")]
#[command(version)]
#[command(about = "Weekday vs weekend phone usage statistics with charts", long_about = None)]
pub struct Cli {
    /// CSV input with columns day, total_minutes, type
    #[arg(value_name = "FILE", default_value = "data/phone_usage_data.csv")]
    pub data_file: PathBuf,

    /// Directory the chart PNGs are written into
    #[arg(long = "out-dir", value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Enable debug logging to stderr
    #[arg(long)]
    pub debug: bool,
}
