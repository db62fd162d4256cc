//! Profiles command implementation
//!
//! Lists the mass-fraction tables.

use anyhow::{Context, Result};
use colored::Colorize;
use squat_model::{MassProfile, Segment};
use std::process::ExitCode;

use super::json_output::{ProfileEntry, ProfilesOutput};

/// Builds the JSON document listing both profiles.
pub fn build_output() -> ProfilesOutput {
    ProfilesOutput {
        success: true,
        errors: Vec::new(),
        warnings: Vec::new(),
        result: MassProfile::ALL
            .iter()
            .map(|&profile| ProfileEntry {
                profile,
                fractions: *profile.fractions(),
                total: profile.total(),
            })
            .collect(),
    }
}

/// Run the profiles command
pub fn run(json_output: bool) -> Result<ExitCode> {
    if json_output {
        let json = serde_json::to_string_pretty(&build_output())
            .context("Failed to serialize profiles")?;
        println!("{}", json);
        return Ok(ExitCode::SUCCESS);
    }

    for profile in MassProfile::ALL {
        println!("{}", profile.as_str().cyan().bold());
        for segment in Segment::ALL {
            println!("  {:<12} {:.4}", segment.as_str(), profile.fraction(segment));
        }
        println!(
            "  {:<12} {:.4}",
            "sum".dimmed(),
            profile.total()
        );
    }
    Ok(ExitCode::SUCCESS)
}
