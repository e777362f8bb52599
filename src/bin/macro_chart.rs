use std::path::PathBuf;

use clap::Parser;

use snapfit_rs::chart::{SweepConfig, parse_weights, print_summary, run_sweep, write_csv};
use snapfit_rs::planner::DEFAULT_BODY_FAT_PERCENT;

#[derive(Parser, Debug)]
#[command(name = "macro-chart")]
#[command(about = "Sweep body weights through the macro planner and chart the results")]
struct Args {
    /// Body weights in kg (comma-separated)
    #[arg(long, default_value = "55,70,85,100,115")]
    weights: String,

    /// Body fat percentage used for every row
    #[arg(long, default_value_t = DEFAULT_BODY_FAT_PERCENT)]
    body_fat: f64,

    /// Output CSV file
    #[arg(long, default_value = "macro_chart.csv")]
    csv: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    snapfit_rs::logging::init(args.verbose);

    let weights_kg = parse_weights(&args.weights);
    if weights_kg.is_empty() {
        eprintln!("Error: no valid weights provided");
        std::process::exit(1);
    }
    println!("Charting weights (kg): {:?}", weights_kg);

    let config = SweepConfig {
        weights_kg,
        body_fat_percent: args.body_fat,
        ..SweepConfig::default()
    };

    let rows = match run_sweep(&config) {
        Ok(rows) => rows,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    print_summary(&rows);

    if let Err(e) = write_csv(&rows, &args.csv) {
        eprintln!("Error writing CSV: {}", e);
        std::process::exit(1);
    }
    println!("Wrote {} plans to {:?}", rows.len(), args.csv);
}
