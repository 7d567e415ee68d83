use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Kalkulator IMT: BMI and occupational calorie needs per Indonesian health standards.
#[derive(Parser, Debug)]
#[command(name = "imt_calculator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Log level for diagnostics on stderr (overrides RUST_LOG).
    #[arg(long, global = true, env = "IMT_LOG_LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Fill in the form interactively and show the results.
    #[default]
    Check,

    /// Compute the results once from command-line values.
    Calc {
        /// Body weight in kilograms.
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        weight: String,

        /// Body height in centimeters.
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        height: String,

        /// Workload tier: Ringan, Sedang, Berat (or I/II/III, light/moderate/heavy).
        #[arg(long, default_value = "none")]
        workload: String,

        /// Working hours per day.
        #[arg(long, default_value = "4", allow_hyphen_values = true)]
        duration: String,

        /// Print the assessment as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Evaluate every row of a CSV file.
    Batch {
        /// CSV with a weight,height,workload,duration header.
        #[arg(short, long)]
        input: PathBuf,

        /// Destination CSV for the results.
        #[arg(short, long, default_value = "imt_results.csv")]
        output: PathBuf,
    },

    /// Print the classification legend, workload tiers, and menu catalog.
    Tables,
}
