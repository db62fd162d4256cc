//! JSON output types for machine-readable CLI output.
//!
//! Used by the `--json` flag on `evaluate`, `validate` and `profiles`.

use serde::{Deserialize, Serialize};
use squat_model::{MassProfile, PoseInputs, PoseResult, ValidationError, ValidationWarning};

use crate::input::InputError;

/// Error codes for CLI operations.
///
/// Model validation errors pass through with their own `E0xx` codes.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// JSON parse error
    pub const JSON_PARSE: &str = "CLI_002";
    /// JSON serialization error
    pub const JSON_SERIALIZE: &str = "CLI_003";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E002")
    pub code: String,
    pub message: String,
    /// Input field the error refers to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
            file: None,
        }
    }

    /// Sets the file path.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Converts a model validation error.
pub fn validation_error_to_json(error: &ValidationError) -> JsonError {
    JsonError {
        code: error.code.code().to_string(),
        message: error.message.clone(),
        path: error.path.clone(),
        file: None,
    }
}

/// Converts a model validation warning.
pub fn validation_warning_to_json(warning: &ValidationWarning) -> JsonWarning {
    JsonWarning {
        code: warning.code.code().to_string(),
        message: warning.message.clone(),
        path: warning.path.clone(),
    }
}

/// Converts an input loading error.
pub fn input_error_to_json(error: &InputError) -> JsonError {
    let file = match error {
        InputError::FileRead { path, .. } | InputError::JsonParse { path, .. } => {
            path.display().to_string()
        }
    };
    JsonError::new(error.code(), error.to_string()).with_file(file)
}

/// JSON output for the `evaluate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateOutput {
    pub success: bool,
    pub errors: Vec<JsonError>,
    pub warnings: Vec<JsonWarning>,
    /// Present when evaluation ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<PoseResult>,
}

/// JSON output for the `validate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateOutput {
    pub success: bool,
    pub errors: Vec<JsonError>,
    pub warnings: Vec<JsonWarning>,
    /// The inputs that were checked, when they could be loaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<PoseInputs>,
}

/// One row of the `profiles` output.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileEntry {
    pub profile: MassProfile,
    pub fractions: squat_model::MassFractions,
    pub total: f64,
}

/// JSON output for the `profiles` command.
#[derive(Debug, Clone, Serialize)]
pub struct ProfilesOutput {
    pub success: bool,
    pub errors: Vec<JsonError>,
    pub warnings: Vec<JsonWarning>,
    pub result: Vec<ProfileEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use squat_model::{ErrorCode, WarningCode};

    #[test]
    fn test_validation_error_conversion() {
        let err = ValidationError::with_path(ErrorCode::NonPositiveLength, "bad", "foot_len");
        let json = validation_error_to_json(&err);
        assert_eq!(json.code, "E003");
        assert_eq!(json.path.as_deref(), Some("foot_len"));
        assert!(json.file.is_none());
    }

    #[test]
    fn test_warning_conversion() {
        let warning =
            ValidationWarning::with_path(WarningCode::BelowGround, "hip below ground", "hip");
        let json = validation_warning_to_json(&warning);
        assert_eq!(json.code, "W002");
        assert_eq!(json.path.as_deref(), Some("hip"));
    }

    #[test]
    fn test_optional_fields_skipped() {
        let json = serde_json::to_string(&JsonError::new("CLI_003", "oops")).unwrap();
        assert_eq!(json, r#"{"code":"CLI_003","message":"oops"}"#);
    }
}
