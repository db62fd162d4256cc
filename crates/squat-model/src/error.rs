//! Error and diagnostic types.
//!
//! The pose computation itself is infallible. These types cover the edges
//! around it: parsing inputs, naming profiles, and reporting how inputs sit
//! against the nominal slider ranges.

use thiserror::Error;

/// Error codes for pose validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: A field is NaN or infinite
    NonFiniteValue,
    /// E002: An angle is outside its nominal range
    AngleOutOfRange,
    /// E003: A segment length is zero or negative
    NonPositiveLength,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::NonFiniteValue => "E001",
            ErrorCode::AngleOutOfRange => "E002",
            ErrorCode::NonPositiveLength => "E003",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Warning codes for pose validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: Body COM sits exactly on a support-region boundary
    ComOnSupportBoundary,
    /// W002: A joint or the head lies below the ground line
    BelowGround,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::ComOnSupportBoundary => "W001",
            WarningCode::BelowGround => "W002",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub code: ErrorCode,
    pub message: String,
    /// Input field the error refers to (e.g., "knee_angle").
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error tied to an input field.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validation warning with code, message, and optional field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    pub code: WarningCode,
    pub message: String,
    pub path: Option<String>,
}

impl ValidationWarning {
    /// Creates a new validation warning tied to a field.
    pub fn with_path(
        code: WarningCode,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

/// Top-level error type for model operations.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Pose validation failed with one or more errors.
    #[error("pose validation failed with {0} error(s)")]
    Validation(usize),

    /// Unknown mass-profile name.
    #[error("unknown mass profile: {0} (expected male or female)")]
    UnknownProfile(String),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Result of pose validation.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether validation passed (no errors).
    pub ok: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Creates a successful validation result.
    pub fn success() -> Self {
        Self {
            ok: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
        self.ok = false;
    }

    /// Adds a warning to the result.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// Converts to a Result, returning Err if there are errors.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, Vec<ValidationError>> {
        if self.ok {
            Ok(self.warnings)
        } else {
            Err(self.errors)
        }
    }

    /// Like [`into_result`](Self::into_result), but collapses the errors
    /// into a [`ModelError::Validation`] count.
    pub fn into_model_result(self) -> Result<Vec<ValidationWarning>, ModelError> {
        if self.ok {
            Ok(self.warnings)
        } else {
            Err(ModelError::Validation(self.errors.len()))
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::success()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(ErrorCode::NonFiniteValue.code(), "E001");
        assert_eq!(ErrorCode::AngleOutOfRange.to_string(), "E002");
        assert_eq!(ErrorCode::NonPositiveLength.code(), "E003");
        assert_eq!(WarningCode::ComOnSupportBoundary.code(), "W001");
        assert_eq!(WarningCode::BelowGround.to_string(), "W002");
    }

    #[test]
    fn test_error_display_with_path() {
        let err = ValidationError::with_path(
            ErrorCode::AngleOutOfRange,
            "knee_angle must be in [10, 180], got 200",
            "knee_angle",
        );
        assert_eq!(
            err.to_string(),
            "E002: knee_angle must be in [10, 180], got 200 (at knee_angle)"
        );
    }

    #[test]
    fn test_result_accumulates() {
        let mut result = ValidationResult::success();
        assert!(result.is_ok());
        result.add_warning(ValidationWarning::with_path(
            WarningCode::BelowGround,
            "hip below",
            "hip",
        ));
        assert!(result.is_ok());
        result.add_error(ValidationError::with_path(
            ErrorCode::NonFiniteValue,
            "NaN",
            "knee_angle",
        ));
        assert!(!result.is_ok());
        assert_eq!(result.into_result().unwrap_err().len(), 1);
    }

    #[test]
    fn test_into_model_result_counts_errors() {
        let mut result = ValidationResult::success();
        result.add_warning(ValidationWarning::with_path(
            WarningCode::ComOnSupportBoundary,
            "on boundary",
            "cm_body",
        ));
        assert_eq!(result.clone().into_model_result().unwrap().len(), 1);

        for path in ["foot_len", "shank_len"] {
            result.add_error(ValidationError::with_path(
                ErrorCode::NonPositiveLength,
                "not positive",
                path,
            ));
        }
        let err = result.into_model_result().unwrap_err();
        assert!(matches!(err, ModelError::Validation(2)));
        assert_eq!(err.to_string(), "pose validation failed with 2 error(s)");
    }
}
