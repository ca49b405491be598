mod loader;
mod ui;

use std::error::Error;
use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Parser;
use k_nn::KnnClassifier;
use ndarray::Array1;
use qbpred::service::{CollegeProfile, StatForecaster};
use qbpred::{synthetic_records, usable_records, L2Dist, QbRecord};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Forecast NFL quarterback stats from college averages"
)]
struct Cli {
    /// CSV dataset with college and NFL per-season averages.
    #[arg(long, default_value = "data/qb_stats_sample.csv")]
    data: PathBuf,

    /// Generate this many synthetic records instead of reading a CSV.
    #[arg(long, value_name = "ROWS")]
    synthetic: Option<usize>,

    /// Seed for the synthetic generator.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Default neighbor count offered by the k-NN prompt.
    #[arg(long)]
    k: Option<usize>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let (records, uses_wins) = match cli.synthetic {
        Some(rows) => (synthetic_records(rows, cli.seed), true),
        None => {
            let loaded = loader::load_records(&cli.data)?;
            if loaded.skipped > 0 {
                eprintln!("warning: {} rows could not be parsed", loaded.skipped);
            }
            (loaded.records, loaded.uses_wins)
        }
    };
    if records.is_empty() {
        return Err("the dataset contains no usable rows".into());
    }

    ui::print_banner();
    println!("Loaded {} quarterback records.", records.len());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        ui::print_menu();
        match ui::read_choice(&mut input).as_str() {
            "1" => run_regression(&mut input, &records)?,
            "2" => run_success_query(&mut input, &records, uses_wins, cli.k),
            "q" | "Q" => break,
            other => println!("unknown choice '{other}'"),
        }
    }

    Ok(())
}

fn run_regression<R: BufRead>(
    input: &mut R,
    records: &[QbRecord<f64>],
) -> Result<(), Box<dyn Error>> {
    let profile = CollegeProfile::new(
        ui::prompt_stat(input, "touchdowns"),
        ui::prompt_stat(input, "yards"),
        ui::prompt_stat(input, "interceptions"),
    );
    let report = StatForecaster::default().forecast(records, &profile)?;
    ui::print_report(&report);
    Ok(())
}

fn run_success_query<R: BufRead>(
    input: &mut R,
    records: &[QbRecord<f64>],
    uses_wins: bool,
    k_flag: Option<usize>,
) {
    let mut query = vec![
        ui::prompt_stat(input, "touchdowns"),
        ui::prompt_stat(input, "yards"),
        ui::prompt_stat(input, "interceptions"),
    ];
    if uses_wins {
        query.push(ui::prompt_stat(input, "wins"));
    }

    let default_k = k_flag.unwrap_or_else(|| usable_records(records).min(100));
    let k = ui::prompt_k(input, default_k);

    // Construction re-validates k against the usable rows, so a hand-typed
    // count is rejected with a message rather than silently clamped.
    let classifier = match KnnClassifier::new(k, records, L2Dist) {
        Ok(classifier) => classifier,
        Err(err) => {
            eprintln!("cannot run the query: {err}");
            return;
        }
    };

    let query = Array1::from_vec(query);
    match classifier.predict_success_rate(query.view()) {
        Ok(rate) => {
            println!();
            println!(
                "{rate:.1}% of the {} most similar college careers went on to NFL success.",
                classifier.k()
            );
        }
        Err(err) => eprintln!("cannot run the query: {err}"),
    }
}
