//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::analysis::StrengthReport;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print a strength report as a two-column table.
pub fn print_strength_report(report: &StrengthReport) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Check", "Result"]);

    let score = format!("{}/4", report.score);
    let score = match report.score {
        0 | 1 => style(score).red().bold().to_string(),
        2 => style(score).yellow().bold().to_string(),
        _ => style(score).green().bold().to_string(),
    };

    table.add_row(vec!["Strength".to_string(), score]);
    table.add_row(vec!["Feedback".to_string(), report.feedback.clone()]);
    table.add_row(vec!["Crack time".to_string(), report.crack_time.clone()]);

    println!("{table}");

    for suggestion in &report.suggestions {
        tip(suggestion);
    }
}
