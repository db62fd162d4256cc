//! Shared human-readable output helpers.

use colored::{ColoredString, Colorize};
use squat_model::{BalanceZone, ValidationResult};

/// Prints validation errors and warnings, one per line.
pub(super) fn print_validation_messages(result: &ValidationResult) {
    for error in &result.errors {
        let path = error
            .path
            .as_ref()
            .map(|p| format!(" at {}", p))
            .unwrap_or_default();
        println!(
            "  {} [{}]{}: {}",
            "x".red(),
            error.code,
            path.dimmed(),
            error.message
        );
    }
    for warning in &result.warnings {
        let path = warning
            .path
            .as_ref()
            .map(|p| format!(" at {}", p))
            .unwrap_or_default();
        println!(
            "  {} [{}]{}: {}",
            "!".yellow(),
            warning.code,
            path.dimmed(),
            warning.message
        );
    }
}

/// Zone title colored like its plot background.
pub(super) fn zone_label(zone: BalanceZone) -> ColoredString {
    let title = zone.title().to_uppercase();
    match zone {
        BalanceZone::Stable => title.green().bold(),
        BalanceZone::Caution => title.yellow().bold(),
        BalanceZone::Fall => title.red().bold(),
    }
}
