//! Report formatting and printing utilities.
//!
//! This module is separate from the command logic to allow holepunch to be
//! used as a library without printing side effects.

use colored::Colorize;

use crate::commands::update::{LocaleOutcome, UpdateSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::Classification;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print the result of an update run: a scan summary line followed by one
/// block per locale with its classification and key listings.
pub fn print_update(summary: &UpdateSummary, verbose: bool) {
    println!(
        "Found {} localization {} in {} source {}",
        summary.keys_found,
        pluralize(summary.keys_found, "string", "strings"),
        summary.files_scanned,
        pluralize(summary.files_scanned, "file", "files"),
    );

    for outcome in &summary.locales {
        print_locale(outcome, verbose);
    }

    let count = summary.locales.len();
    println!(
        "\n{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Reconciled {} locale {}",
            count,
            pluralize(count, "file", "files")
        )
        .green()
    );
}

fn print_locale(outcome: &LocaleOutcome, verbose: bool) {
    let heading = match outcome.report.classification {
        Classification::New => "Creating new locale".green(),
        Classification::Updated => "Updating existing locale".yellow(),
        Classification::Unchanged => "Locale is up to date".dimmed(),
    };

    println!("\n[[ {} ]] {}", outcome.locale.bold().cyan(), heading);
    if verbose {
        println!("  {} {}", "-->".blue(), outcome.path.display());
    }

    if !outcome.report.removed.is_empty() {
        println!("  {}", "Removed:".bold().red());
        for key in &outcome.report.removed {
            println!("    '{}'", key);
        }
    }
    if !outcome.report.untranslated.is_empty() {
        println!("  {}", "Untranslated:".bold().yellow());
        for key in &outcome.report.untranslated {
            println!("    '{}'", key);
        }
    }
}

pub fn print_init() {
    println!("{} {}", SUCCESS_MARK.green(), format!("Created {}", CONFIG_FILE_NAME).green());
}

fn pluralize<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
