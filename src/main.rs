//! CLI entry point for the grade mapper tool.
//!
//! Provides subcommands for printing a final-grade mapping to the
//! console, rendering it as a static HTML page, and exporting the full
//! exam-to-final table as CSV.

use anyhow::Result;
use clap::{Parser, Subcommand};
use grade_mapper::mapper::aggregate::compute_mapping;
use grade_mapper::mapper::report::build_report;
use grade_mapper::output::{append_outcomes, print_pretty, render_json, render_text};
use grade_mapper::render::write_page;
use grade_mapper::validate::{ValidationError, parse_number, validate};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "grade_mapper")]
#[command(about = "Maps possible exam scores to final course grades", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the final-grade mapping for a frequency grade and exam weight
    Map {
        /// Frequency (coursework) grade on the [0, 20] scale
        #[arg(value_name = "FREQ_GRADE")]
        freq_grade: String,

        /// How much the exam is worth in the final grade, in percent
        #[arg(value_name = "EXAM_PERCENTAGE")]
        exam_percentage: String,

        /// Minimum passing exam grade; lower scores collapse into a failing band
        #[arg(short, long)]
        min_grade: Option<String>,

        /// Print the report as pretty JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Render the mapping as a static HTML page
    Page {
        /// Frequency (coursework) grade on the [0, 20] scale
        #[arg(value_name = "FREQ_GRADE")]
        freq_grade: String,

        /// How much the exam is worth in the final grade, in percent
        #[arg(value_name = "EXAM_PERCENTAGE")]
        exam_percentage: String,

        /// Minimum passing exam grade; lower scores collapse into a failing band
        #[arg(short, long)]
        min_grade: Option<String>,

        /// HTML file to write
        #[arg(short, long, default_value = "grades.html")]
        output: String,
    },
    /// Export the full exam-to-final table as CSV
    Export {
        /// Frequency (coursework) grade on the [0, 20] scale
        #[arg(value_name = "FREQ_GRADE")]
        freq_grade: String,

        /// How much the exam is worth in the final grade, in percent
        #[arg(value_name = "EXAM_PERCENTAGE")]
        exam_percentage: String,

        /// CSV file to append the mapping to
        #[arg(short, long, default_value = "mapping.csv")]
        output: String,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/grade_mapper.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("grade_mapper.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Map {
            freq_grade,
            exam_percentage,
            min_grade,
            json,
        } => {
            let (freq, pct, min) = validated(&freq_grade, &exam_percentage, min_grade.as_deref());
            let report = build_report(freq, pct, min);
            print_pretty(&report);

            if json {
                println!("{}", render_json(&report)?);
            } else {
                print!("{}", render_text(&report));
            }
        }
        Commands::Page {
            freq_grade,
            exam_percentage,
            min_grade,
            output,
        } => {
            let (freq, pct, min) = validated(&freq_grade, &exam_percentage, min_grade.as_deref());
            let report = build_report(freq, pct, min);
            write_page(&output, &report)?;
        }
        Commands::Export {
            freq_grade,
            exam_percentage,
            output,
        } => {
            let (freq, pct, _) = validated(&freq_grade, &exam_percentage, None);
            let mapping = compute_mapping(freq, pct);
            append_outcomes(&output, &mapping)?;
            info!(rows = mapping.outcomes.len(), output = %output, "Mapping exported");
        }
    }

    Ok(())
}

/// Parses and validates the raw CLI parameters, terminating the process
/// with the failure kind's exit code on invalid input.
fn validated(
    freq_grade: &str,
    exam_percentage: &str,
    min_grade: Option<&str>,
) -> (f64, f64, Option<f64>) {
    match try_validated(freq_grade, exam_percentage, min_grade) {
        Ok(values) => values,
        Err(e) => {
            error!(error = %e, "Invalid input");
            std::process::exit(e.exit_code());
        }
    }
}

#[tracing::instrument]
fn try_validated(
    freq_grade: &str,
    exam_percentage: &str,
    min_grade: Option<&str>,
) -> Result<(f64, f64, Option<f64>), ValidationError> {
    let freq = parse_number("frequency grade", freq_grade)?;
    let pct = parse_number("exam percentage", exam_percentage)?;
    let min = match min_grade {
        Some(raw) => Some(parse_number("exam minimum grade", raw)?),
        None => None,
    };

    validate(freq, pct, min)?;
    Ok((freq, pct, min))
}
