use clap::Parser;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

use imt_calculator_rs::cli::{Cli, Command};
use imt_calculator_rs::engine::assess;
use imt_calculator_rs::error::Result;
use imt_calculator_rs::interface::{
    collect_form_input, display_assessment, display_reference_tables, prompt_yes_no,
};
use imt_calculator_rs::models::FormInput;
use imt_calculator_rs::state::{load_inputs, write_results, FormState};

const DEFAULT_LOG_DIRECTIVE: &str = "imt_calculator_rs=warn";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr so stdout only carries results.
fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(format!("imt_calculator_rs={}", level)),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();
    info!(?command, "dispatching command");

    match command {
        Command::Check => cmd_check(),
        Command::Calc {
            weight,
            height,
            workload,
            duration,
            json,
        } => cmd_calc(weight, height, workload, duration, json),
        Command::Batch { input, output } => cmd_batch(&input, &output),
        Command::Tables => {
            display_reference_tables();
            Ok(())
        }
    }
}

/// Fill in the form interactively, recomputing after every round.
fn cmd_check() -> Result<()> {
    println!("Kalkulator IMT - Standar Kemenkes RI");
    println!(
        "Hitung Indeks Massa Tubuh Anda untuk mengetahui status gizi berdasarkan standar populasi Indonesia."
    );
    println!();

    let mut form = FormState::new();

    loop {
        let input = collect_form_input(form.input())?;
        let assessment = form.replace(input);
        display_assessment(assessment);

        let again = prompt_yes_no("Hitung ulang dengan data lain?", false)?;
        if !again {
            break;
        }
    }

    Ok(())
}

/// One-shot calculation from command-line values.
fn cmd_calc(
    weight: String,
    height: String,
    workload: String,
    duration: String,
    json: bool,
) -> Result<()> {
    let input = FormInput::parse(weight, height, &workload, duration)?;
    let assessment = assess(&input);

    if json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        display_assessment(&assessment);
    }

    Ok(())
}

/// Evaluate a CSV of form inputs and write the results next to it.
fn cmd_batch(input: &Path, output: &Path) -> Result<()> {
    let inputs = load_inputs(input)?;
    if inputs.is_empty() {
        println!("No rows to evaluate.");
        return Ok(());
    }

    let results: Vec<_> = inputs.iter().map(assess).collect();
    write_results(output, &results)?;

    let classified = results.iter().filter(|r| r.category.is_known()).count();
    let with_menu = results.iter().filter(|r| r.menu.is_some()).count();
    println!("Evaluated {} rows ({} with IMT, {} with menu).", results.len(), classified, with_menu);
    println!("Results written to {}", output.display());

    Ok(())
}
