//! Validate command implementation
//!
//! Checks pose inputs against the nominal ranges without printing a result.

use anyhow::{Context, Result};
use colored::Colorize;
use squat_model::{validate_and_evaluate, MassProfile, PoseInputs, ValidationResult};
use std::process::ExitCode;

use super::json_output::{
    input_error_to_json, validation_error_to_json, validation_warning_to_json, ValidateOutput,
};
use super::reporting::print_validation_messages;
use crate::input::{resolve, PoseArgs};

/// Run the validate command
///
/// # Arguments
/// * `args` - Pose flags and optional input file
/// * `profile` - Mass-fraction profile used for the body COM boundary check
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(args: &PoseArgs, profile: MassProfile, json_output: bool) -> Result<ExitCode> {
    if json_output {
        let output = build_output(args, profile);
        println!(
            "{}",
            serde_json::to_string_pretty(&output).context("Failed to serialize output")?
        );
        return Ok(exit_code(output.success));
    }

    let resolved = resolve(args).context("Failed to load pose inputs")?;
    println!(
        "{} {} input ({})",
        "Validating:".cyan().bold(),
        resolved.source.as_str(),
        profile
    );

    let validation = full_validation(&resolved.inputs, profile);
    print_validation_messages(&validation);

    if validation.is_ok() {
        println!("\n{} Pose is valid", "SUCCESS".green().bold());
    } else {
        println!(
            "\n{} Pose has {} error(s)",
            "FAILED".red().bold(),
            validation.errors.len()
        );
    }
    Ok(exit_code(validation.is_ok()))
}

/// Input checks, plus geometric warnings when the inputs pass.
///
/// Only the body COM boundary check depends on the profile.
fn full_validation(inputs: &PoseInputs, profile: MassProfile) -> ValidationResult {
    validate_and_evaluate(inputs, profile).0
}

/// Builds the JSON document for a validation run.
pub fn build_output(args: &PoseArgs, profile: MassProfile) -> ValidateOutput {
    match resolve(args) {
        Ok(resolved) => {
            let validation = full_validation(&resolved.inputs, profile);
            ValidateOutput {
                success: validation.is_ok(),
                errors: validation.errors.iter().map(validation_error_to_json).collect(),
                warnings: validation
                    .warnings
                    .iter()
                    .map(validation_warning_to_json)
                    .collect(),
                result: Some(resolved.inputs),
            }
        }
        Err(e) => ValidateOutput {
            success: false,
            errors: vec![input_error_to_json(&e)],
            warnings: Vec::new(),
            result: None,
        },
    }
}

fn exit_code(ok: bool) -> ExitCode {
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
