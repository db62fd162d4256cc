//! Evaluate command implementation
//!
//! Resolves pose inputs, evaluates the model once, and prints the key points,
//! segment COMs, body COM and balance zone.

use anyhow::{Context, Result};
use colored::Colorize;
use squat_model::{
    evaluate, validate_and_evaluate, validate_pose, validate_result, MassProfile, PoseInputs,
    PoseResult, Segment, ValidationResult,
};
use std::process::ExitCode;

use super::json_output::{
    error_codes, input_error_to_json, validation_error_to_json, validation_warning_to_json,
    EvaluateOutput, JsonError,
};
use super::reporting::{print_validation_messages, zone_label};
use crate::input::{resolve, PoseArgs};

/// Run the evaluate command
///
/// # Arguments
/// * `args` - Pose flags and optional input file
/// * `profile` - Mass-fraction profile
/// * `json_output` - Whether to output machine-readable JSON
/// * `pretty` - Pretty-print JSON output
/// * `unchecked` - Evaluate even if inputs fail validation
///
/// # Returns
/// Exit code: 0 on success, 1 if inputs are invalid
pub fn run(
    args: &PoseArgs,
    profile: MassProfile,
    json_output: bool,
    pretty: bool,
    unchecked: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(args, profile, pretty, unchecked)
    } else {
        run_human(args, profile, unchecked)
    }
}

/// Validates (unless `unchecked`) and evaluates the inputs.
///
/// Returns the validation outcome, with geometric warnings appended, and the
/// result if evaluation ran.
pub fn checked_evaluate(
    inputs: &PoseInputs,
    profile: MassProfile,
    unchecked: bool,
) -> (ValidationResult, Option<PoseResult>) {
    let (validation, result) = if unchecked {
        let mut validation = validate_pose(inputs);
        let result = evaluate(inputs, profile);
        for warning in validate_result(&result) {
            validation.add_warning(warning);
        }
        (validation, result)
    } else {
        match validate_and_evaluate(inputs, profile) {
            (validation, Some(result)) => (validation, result),
            (validation, None) => {
                tracing::debug!(errors = validation.errors.len(), "inputs rejected");
                return (validation, None);
            }
        }
    };
    tracing::info!(
        profile = %profile,
        zone = %result.zone,
        cm_x = result.cm_body.x,
        cm_y = result.cm_body.y,
        "pose evaluated"
    );
    (validation, Some(result))
}

/// Builds the JSON document for an evaluation.
pub fn build_output(args: &PoseArgs, profile: MassProfile, unchecked: bool) -> EvaluateOutput {
    let resolved = match resolve(args) {
        Ok(r) => r,
        Err(e) => {
            return EvaluateOutput {
                success: false,
                errors: vec![input_error_to_json(&e)],
                warnings: Vec::new(),
                result: None,
            }
        }
    };

    let (validation, result) = checked_evaluate(&resolved.inputs, profile, unchecked);
    EvaluateOutput {
        success: result.is_some(),
        errors: validation.errors.iter().map(validation_error_to_json).collect(),
        warnings: validation
            .warnings
            .iter()
            .map(validation_warning_to_json)
            .collect(),
        result,
    }
}

fn run_json(
    args: &PoseArgs,
    profile: MassProfile,
    pretty: bool,
    unchecked: bool,
) -> Result<ExitCode> {
    let output = build_output(args, profile, unchecked);
    let serialized = if pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    };
    let json = match serialized {
        Ok(json) => json,
        Err(e) => {
            let err = JsonError::new(error_codes::JSON_SERIALIZE, e.to_string());
            serde_json::to_string(&err).context("Failed to serialize error")?
        }
    };
    println!("{}", json);

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn run_human(args: &PoseArgs, profile: MassProfile, unchecked: bool) -> Result<ExitCode> {
    let resolved = resolve(args).context("Failed to load pose inputs")?;
    let inputs = resolved.inputs;

    println!(
        "{} ankle {}°, knee {}°, hip {}° | foot {}, shank {}, thigh {}, trunk {} ({})",
        "Pose:".cyan().bold(),
        inputs.ankle_angle,
        inputs.knee_angle,
        inputs.hip_angle,
        inputs.foot_len,
        inputs.shank_len,
        inputs.thigh_len,
        inputs.trunk_len,
        resolved.source.as_str()
    );
    println!("{} {}", "Profile:".dimmed(), profile);

    let (validation, result) = checked_evaluate(&inputs, profile, unchecked);
    print_validation_messages(&validation);

    let Some(result) = result else {
        if let Err(e) = validation.into_model_result() {
            println!(
                "\n{} {}; pass --unchecked to evaluate anyway",
                "INVALID".red().bold(),
                e
            );
        }
        return Ok(ExitCode::from(1));
    };

    print_result(&result);
    Ok(ExitCode::SUCCESS)
}

fn print_result(result: &PoseResult) {
    let k = &result.keypoints;
    println!("\n{}", "Key points:".cyan().bold());
    for (name, point) in [
        ("heel", k.heel),
        ("toe", k.toe),
        ("ankle", k.ankle),
        ("knee", k.knee),
        ("hip", k.hip),
        ("head", k.head),
    ] {
        println!("  {:<10} {}", name, point);
    }

    println!("\n{}", "Segment COM:".cyan().bold());
    for segment in Segment::ALL {
        println!(
            "  {:<10} {}  {}",
            segment.as_str(),
            result.segment_coms.get(segment),
            format!("w={:.4}", result.profile.fraction(segment)).dimmed()
        );
    }

    println!(
        "\n{} {}  {}",
        "Body COM:".cyan().bold(),
        result.cm_body,
        format!("(sum of fractions {:.4})", result.profile.total()).dimmed()
    );
    println!("{} {}", "Balance:".cyan().bold(), zone_label(result.zone));
}

#[cfg(test)]
mod tests {
    use super::*;
    use squat_model::BalanceZone;

    #[test]
    fn evaluate_defaults_success() {
        let code = run(&PoseArgs::default(), MassProfile::Male, false, false, false).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn evaluate_json_defaults() {
        let output = build_output(&PoseArgs::default(), MassProfile::Male, false);
        assert!(output.success);
        assert!(output.errors.is_empty());
        assert_eq!(output.result.unwrap().zone, BalanceZone::Caution);
    }

    #[test]
    fn evaluate_rejects_out_of_range() {
        let args = PoseArgs {
            hip: Some(10.0),
            ..Default::default()
        };
        let output = build_output(&args, MassProfile::Male, false);
        assert!(!output.success);
        assert_eq!(output.errors[0].code, "E002");
        assert_eq!(output.errors[0].path.as_deref(), Some("hip_angle"));
        assert!(output.result.is_none());

        let code = run(&args, MassProfile::Male, false, false, false).unwrap();
        assert_eq!(code, ExitCode::from(1));
    }

    #[test]
    fn evaluate_unchecked_runs_anyway() {
        let args = PoseArgs {
            hip: Some(10.0),
            ..Default::default()
        };
        let output = build_output(&args, MassProfile::Female, true);
        assert!(output.success);
        assert_eq!(output.errors.len(), 1);
        assert_eq!(output.result.unwrap().inputs.hip_angle, 10.0);
    }

    #[test]
    fn evaluate_missing_file_fails() {
        let args = PoseArgs {
            input: Some("/nonexistent/pose.json".into()),
            ..Default::default()
        };
        assert!(run(&args, MassProfile::Male, false, false, false).is_err());

        let output = build_output(&args, MassProfile::Male, false);
        assert!(!output.success);
        assert_eq!(output.errors[0].code, "CLI_001");
        assert_eq!(output.errors[0].file.as_deref(), Some("/nonexistent/pose.json"));
    }
}
