//! Resolving pose inputs from defaults, a JSON file, and command-line flags.
//!
//! Layers apply in order: built-in defaults, then the `--input` file (whose
//! missing fields keep the defaults), then any explicit flag.

use clap::Args;
use squat_model::PoseInputs;
use std::path::{Path, PathBuf};

/// Pose flags shared by every command that evaluates a pose.
#[derive(Debug, Clone, Default, Args)]
pub struct PoseArgs {
    /// JSON file with pose inputs (flags override its fields)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Ankle angle in degrees (shank direction, nominal 30-130)
    #[arg(long, allow_negative_numbers = true)]
    pub ankle: Option<f64>,

    /// Knee angle in degrees (nominal 10-180)
    #[arg(long, allow_negative_numbers = true)]
    pub knee: Option<f64>,

    /// Hip angle in degrees (nominal 30-180)
    #[arg(long, allow_negative_numbers = true)]
    pub hip: Option<f64>,

    /// Foot length
    #[arg(long, allow_negative_numbers = true)]
    pub foot: Option<f64>,

    /// Shank length
    #[arg(long, allow_negative_numbers = true)]
    pub shank: Option<f64>,

    /// Thigh length
    #[arg(long, allow_negative_numbers = true)]
    pub thigh: Option<f64>,

    /// Trunk length
    #[arg(long, allow_negative_numbers = true)]
    pub trunk: Option<f64>,
}

impl PoseArgs {
    /// Applies explicit flags on top of `base`.
    pub fn apply(&self, base: PoseInputs) -> PoseInputs {
        PoseInputs {
            ankle_angle: self.ankle.unwrap_or(base.ankle_angle),
            knee_angle: self.knee.unwrap_or(base.knee_angle),
            hip_angle: self.hip.unwrap_or(base.hip_angle),
            foot_len: self.foot.unwrap_or(base.foot_len),
            shank_len: self.shank.unwrap_or(base.shank_len),
            thigh_len: self.thigh.unwrap_or(base.thigh_len),
            trunk_len: self.trunk.unwrap_or(base.trunk_len),
        }
    }

    /// Number of flags given explicitly.
    pub fn override_count(&self) -> usize {
        [
            self.ankle, self.knee, self.hip, self.foot, self.shank, self.thigh, self.trunk,
        ]
        .iter()
        .filter(|v| v.is_some())
        .count()
    }
}

/// Where the resolved inputs came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    /// Defaults and flags only.
    Flags,
    /// A JSON file, possibly overridden by flags.
    File,
}

impl InputSource {
    /// Returns the string representation for output.
    pub fn as_str(&self) -> &'static str {
        match self {
            InputSource::Flags => "flags",
            InputSource::File => "file",
        }
    }
}

/// Fully resolved inputs.
#[derive(Debug, Clone)]
pub struct ResolvedInput {
    pub inputs: PoseInputs,
    pub source: InputSource,
}

/// Errors that can occur while loading inputs.
#[derive(Debug)]
pub enum InputError {
    /// File could not be read.
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON parsing failed.
    JsonParse { path: PathBuf, message: String },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::FileRead { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            InputError::JsonParse { path, message } => {
                write!(f, "invalid pose file {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::FileRead { source, .. } => Some(source),
            InputError::JsonParse { .. } => None,
        }
    }
}

impl InputError {
    /// Stable error code for JSON output.
    pub fn code(&self) -> &'static str {
        use crate::commands::json_output::error_codes;
        match self {
            InputError::FileRead { .. } => error_codes::FILE_READ,
            InputError::JsonParse { .. } => error_codes::JSON_PARSE,
        }
    }
}

/// Loads pose inputs from a JSON file.
pub fn load_pose_file(path: &Path) -> Result<PoseInputs, InputError> {
    let content = std::fs::read_to_string(path).map_err(|source| InputError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    PoseInputs::from_json(&content).map_err(|e| InputError::JsonParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Resolves the inputs for a command.
pub fn resolve(args: &PoseArgs) -> Result<ResolvedInput, InputError> {
    let (base, source) = match &args.input {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading pose file");
            (load_pose_file(path)?, InputSource::File)
        }
        None => (PoseInputs::default(), InputSource::Flags),
    };
    let inputs = args.apply(base);
    tracing::debug!(
        source = source.as_str(),
        overrides = args.override_count(),
        ?inputs,
        "resolved pose inputs"
    );
    Ok(ResolvedInput { inputs, source })
}
