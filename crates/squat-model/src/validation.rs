//! Pose validation.
//!
//! [`evaluate`](crate::evaluate) accepts any input. These checks are opt-in and
//! report how inputs compare with the nominal slider ranges, plus geometric
//! oddities in an evaluated result.

use crate::balance::on_support_boundary;
use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::pose::PoseInputs;
use crate::result::PoseResult;

/// Validates pose inputs against the nominal ranges.
///
/// # Errors reported
/// * `E001` for NaN or infinite fields
/// * `E002` for angles outside their range
/// * `E003` for lengths that are not strictly positive
///
/// # Example
/// ```
/// use squat_model::{validate_pose, PoseInputs};
///
/// assert!(validate_pose(&PoseInputs::default()).is_ok());
/// assert!(!validate_pose(&PoseInputs::default().with_angles(60.0, 5.0, 90.0)).is_ok());
/// ```
pub fn validate_pose(inputs: &PoseInputs) -> ValidationResult {
    let mut result = ValidationResult::success();

    for (name, value, range) in inputs.angles() {
        if !value.is_finite() {
            result.add_error(non_finite(name, value));
        } else if !range.contains(value) {
            result.add_error(ValidationError::with_path(
                ErrorCode::AngleOutOfRange,
                format!(
                    "{} must be in [{}, {}], got {}",
                    name, range.min, range.max, value
                ),
                name,
            ));
        }
    }

    for (name, value) in inputs.lengths() {
        if !value.is_finite() {
            result.add_error(non_finite(name, value));
        } else if value <= 0.0 {
            result.add_error(ValidationError::with_path(
                ErrorCode::NonPositiveLength,
                format!("{} must be positive, got {}", name, value),
                name,
            ));
        }
    }

    result
}

fn non_finite(name: &str, value: f64) -> ValidationError {
    ValidationError::with_path(
        ErrorCode::NonFiniteValue,
        format!("{} must be finite, got {}", name, value),
        name,
    )
}

/// Geometric warnings for an evaluated pose.
pub fn validate_result(result: &PoseResult) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let k = &result.keypoints;

    if on_support_boundary(result.cm_body, k.heel, k.ankle, k.toe) {
        warnings.push(ValidationWarning::with_path(
            WarningCode::ComOnSupportBoundary,
            format!(
                "body COM x = {} lies exactly on a support boundary and is classified as {}",
                result.cm_body.x, result.zone
            ),
            "cm_body",
        ));
    }

    for (name, point) in [("knee", k.knee), ("hip", k.hip), ("head", k.head)] {
        if point.y < 0.0 {
            warnings.push(ValidationWarning::with_path(
                WarningCode::BelowGround,
                format!("{} is below the ground line (y = {:.3})", name, point.y),
                name,
            ));
        }
    }

    warnings
}

/// Validates inputs and, if they pass, evaluates and appends geometric warnings.
pub fn validate_and_evaluate(
    inputs: &PoseInputs,
    profile: crate::MassProfile,
) -> (ValidationResult, Option<PoseResult>) {
    let mut validation = validate_pose(inputs);
    if !validation.is_ok() {
        return (validation, None);
    }
    let result = crate::evaluate(inputs, profile);
    for warning in validate_result(&result) {
        validation.add_warning(warning);
    }
    (validation, Some(result))
}
