use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;

mod config;
mod domain;
mod geometry;
mod output;
mod parser;

use config::FileConfig;
use parser::{parse_coordinations, parse_stands};

/// Convert EuroScope plugin text dumps into the static JSON data files
/// consumed by the controller front-end.
///
/// Examples:
///   # Convert the stand dump from the default EuroScope location
///   esdatagen stands
///
///   # Convert a specific dump into a specific output file
///   esdatagen stands -i GRpluginStands.txt -o frontend/src/data/stands.json
///
///   # Convert a coordination sheet
///   esdatagen coordinations -i coordinations.txt
#[derive(Parser, Debug)]
#[command(name = "esdatagen")]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert the ground-radar plugin stand dump to per-airport stand JSON
    Stands {
        /// Input dump (defaults to the EuroScope plugin file under APPDATA)
        #[arg(short = 'i', long)]
        input: Option<PathBuf>,

        /// Output JSON file
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },
    /// Convert a coordination sheet to grouped coordination JSON
    Coordinations {
        /// Input text file
        #[arg(short = 'i', long)]
        input: Option<PathBuf>,

        /// Output JSON file
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let file_config = FileConfig::load();

    println!("esdatagen - EuroScope data to JSON converter");
    println!("============================================");
    println!();

    match args.command {
        Command::Stands { input, output } => {
            run_stands(input, output, file_config.as_ref(), args.verbose)?
        }
        Command::Coordinations { input, output } => {
            run_coordinations(input, output, file_config.as_ref(), args.verbose)?
        }
    }

    println!();
    println!(
        "Done! Total time: {:.1}s",
        total_start.elapsed().as_secs_f32()
    );

    Ok(())
}

fn run_stands(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    file_config: Option<&FileConfig>,
    verbose: bool,
) -> Result<()> {
    let input_path = match input.or_else(|| file_config.and_then(|c| c.stands_input.clone())) {
        Some(path) => path,
        None => config::default_stands_input()?,
    };
    let output_path = output
        .or_else(|| file_config.and_then(|c| c.stands_output.clone()))
        .unwrap_or_else(|| PathBuf::from("stands.json"));

    if verbose {
        println!("Configuration:");
        println!("  Input: {}", input_path.display());
        println!("  Output: {}", output_path.display());
        println!();
    }

    let contents = std::fs::read_to_string(&input_path)
        .with_context(|| format!("Failed to read stand dump: {}", input_path.display()))?;

    let spinner = create_spinner("Parsing stand dump...");
    let start = Instant::now();
    let mut stands = parse_stands(&contents).context("Failed to parse stand dump")?;
    spinner.finish_with_message(format!(
        "Parsed {} stands across {} airports [{:.1}s]",
        stands.stand_count(),
        stands.airport_count(),
        start.elapsed().as_secs_f32()
    ));

    let incomplete = stands.finalize_centers();
    for (airport, stand) in &incomplete {
        println!("Warning: stand {} at {} has no center or coords", stand, airport);
    }
    if verbose {
        println!(
            "  {} stands carry a center, {} left incomplete",
            stands.stand_count() - incomplete.len(),
            incomplete.len()
        );
    }

    output::write_json(&output_path, &stands).context("Failed to write stands JSON")?;

    println!("Output: {}", output_path.display());
    Ok(())
}

fn run_coordinations(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    file_config: Option<&FileConfig>,
    verbose: bool,
) -> Result<()> {
    let input_path = input
        .or_else(|| file_config.and_then(|c| c.coordinations_input.clone()))
        .unwrap_or_else(|| PathBuf::from("coordinations.txt"));
    let output_path = output
        .or_else(|| file_config.and_then(|c| c.coordinations_output.clone()))
        .unwrap_or_else(|| PathBuf::from("coordinations.json"));

    if verbose {
        println!("Configuration:");
        println!("  Input: {}", input_path.display());
        println!("  Output: {}", output_path.display());
        println!();
    }

    let contents = std::fs::read_to_string(&input_path)
        .with_context(|| format!("Failed to read coordination sheet: {}", input_path.display()))?;

    let spinner = create_spinner("Parsing coordination sheet...");
    let start = Instant::now();
    let records = parse_coordinations(&contents).context("Failed to parse coordination sheet")?;
    spinner.finish_with_message(format!(
        "Parsed {} coordination records [{:.1}s]",
        records.len(),
        start.elapsed().as_secs_f32()
    ));

    output::write_json(&output_path, &records).context("Failed to write coordinations JSON")?;

    println!("Output: {}", output_path.display());
    Ok(())
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
