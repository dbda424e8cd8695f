//! Report rendering for the authpulse CLI.
//!
//! Supports a human-readable table and JSON output.

use clap::ValueEnum;
use colored::*;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use authpulse_core::runner::RunReport;

/// Output format selection.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    /// Render as a formatted table
    #[default]
    Table,
    /// Render as JSON
    Json,
}

/// Print a success message to stdout.
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// Print an error message to stderr.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERROR]".red().bold(), msg);
}

/// Print key-value details to the terminal.
pub fn print_detail(key: &str, value: &str) {
    println!("  {}: {}", key.cyan(), value);
}

/// Print a section header.
pub fn print_header(title: &str) {
    println!();
    println!("{}", title.bold().underline());
    println!();
}

#[derive(Tabled)]
struct IterationRow {
    #[tabled(rename = "#")]
    index: u32,
    #[tabled(rename = "Duration (ms)")]
    duration_ms: u64,
    #[tabled(rename = "Outcome")]
    outcome: String,
    #[tabled(rename = "Visible projects")]
    projects: String,
}

/// Render the run report in the requested format.
pub fn print_report(report: &RunReport, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report).expect("serialize report");
            println!("{}", json);
        }
        OutputFormat::Table => {
            let rows: Vec<IterationRow> = report
                .outcomes
                .iter()
                .map(|outcome| IterationRow {
                    index: outcome.index,
                    duration_ms: outcome.duration_ms,
                    outcome: match &outcome.error {
                        None => "ok".to_string(),
                        Some(error) => error.clone(),
                    },
                    projects: outcome
                        .projects
                        .as_ref()
                        .map(|p| p.join(", "))
                        .unwrap_or_default(),
                })
                .collect();

            print_header("Authorization checks");
            let table = Table::new(rows)
                .with(Style::rounded())
                .with(Modify::new(Columns::first()).with(Alignment::left()))
                .to_string();
            println!("{}", table);
            println!();

            print_detail("Run", &report.run_id.to_string());
            print_detail("Started", &report.started_at.to_rfc3339());
            print_detail(
                "Total time",
                &format!("{} ms", report.total_duration().as_millis()),
            );

            if report.failures() == 0 {
                print_success(&format!("{} checks passed", report.successes()));
            } else {
                print_error(&format!(
                    "{} of {} checks failed",
                    report.failures(),
                    report.outcomes.len()
                ));
            }
        }
    }
}
