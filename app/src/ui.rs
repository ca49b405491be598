//! Console prompts and report printing.
//!
//! Every prompt reads from a caller-supplied [`BufRead`] so the flows can be
//! driven by a cursor in tests. Unparseable interactive input falls back to a
//! stated default instead of aborting the session.

use std::io::{self, BufRead, Write};

use qbpred::service::ForecastReport;
use qbpred::StatPair;

pub fn print_banner() {
    println!("WELCOME TO QB SUCCESS PREDICTOR");
}

pub fn print_menu() {
    println!();
    println!("======[MENU]======");
    println!("1. Linear regression forecast");
    println!("2. k-NN success percentage");
    println!("q. Quit");
}

fn prompt_line<R: BufRead>(input: &mut R, prompt: &str) -> Option<String> {
    print!("{prompt}");
    io::stdout().flush().ok();
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_owned()),
    }
}

/// Reads a menu choice. End of input quits the session.
pub fn read_choice<R: BufRead>(input: &mut R) -> String {
    prompt_line(input, "> ").unwrap_or_else(|| String::from("q"))
}

/// Asks for one college average. Anything that does not parse becomes 0 so a
/// stray keystroke does not end an interactive session.
pub fn prompt_stat<R: BufRead>(input: &mut R, label: &str) -> f64 {
    let line = match prompt_line(input, &format!("Enter your average {label}: ")) {
        Some(line) => line,
        None => {
            eprintln!("no input, using 0 instead");
            return 0.0;
        }
    };
    match line.parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            eprintln!("'{line}' is not a number, using 0 instead");
            0.0
        }
    }
}

/// Asks for the neighbor count, offering a dataset-derived default. An empty
/// line takes the default; an explicit value is passed through unchanged, so
/// an out-of-range count surfaces the classifier's own error.
pub fn prompt_k<R: BufRead>(input: &mut R, default_k: usize) -> usize {
    let line = match prompt_line(input, &format!("Number of neighbors k [{default_k}]: ")) {
        Some(line) => line,
        None => return default_k,
    };
    if line.is_empty() {
        return default_k;
    }
    match line.parse::<usize>() {
        Ok(k) => k,
        Err(_) => {
            eprintln!("'{line}' is not a valid neighbor count, using {default_k} instead");
            default_k
        }
    }
}

pub fn print_report(report: &ForecastReport<f64>) {
    println!();
    for pair in StatPair::ALL {
        match report.get(pair) {
            Some(forecast) => {
                println!("{} ({} samples)", pair.label(), forecast.samples);
                println!(
                    "  regression equation: y = {:.4}x + {:.4}",
                    forecast.line.slope, forecast.line.intercept
                );
                println!("  RMSE: {:.3}", forecast.rmse);
                println!(
                    "  predicted NFL average {}: {:.2}",
                    pair.label(),
                    forecast.predicted
                );
            }
            None => println!("{}: no usable data for this pair", pair.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn choice_is_trimmed_and_eof_quits() {
        let mut input = Cursor::new("  1  \n");
        assert_eq!(read_choice(&mut input), "1");
        assert_eq!(read_choice(&mut input), "q");
    }

    #[test]
    fn stats_parse_or_fall_back_to_zero() {
        let mut input = Cursor::new("24.5\nnot-a-number\n");
        assert_eq!(prompt_stat(&mut input, "touchdowns"), 24.5);
        assert_eq!(prompt_stat(&mut input, "yards"), 0.0);
        assert_eq!(prompt_stat(&mut input, "interceptions"), 0.0);
    }

    #[test]
    fn neighbor_count_defaults_but_passes_explicit_values_through() {
        let mut input = Cursor::new("\n25\n0\nlots\n");
        assert_eq!(prompt_k(&mut input, 10), 10);
        assert_eq!(prompt_k(&mut input, 10), 25);
        // 0 is forwarded as typed; the classifier is the one that rejects it.
        assert_eq!(prompt_k(&mut input, 10), 0);
        assert_eq!(prompt_k(&mut input, 10), 10);
        assert_eq!(prompt_k(&mut input, 10), 10);
    }
}
