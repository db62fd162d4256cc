//! Pose inputs: three joint angles and four segment lengths.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Nominal range of an input, as offered by the input sliders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputRange {
    pub min: f64,
    pub max: f64,
}

impl InputRange {
    /// Inclusive containment check.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Ankle angle range in degrees.
pub const ANKLE_RANGE: InputRange = InputRange {
    min: 30.0,
    max: 130.0,
};
/// Knee angle range in degrees.
pub const KNEE_RANGE: InputRange = InputRange {
    min: 10.0,
    max: 180.0,
};
/// Hip angle range in degrees.
pub const HIP_RANGE: InputRange = InputRange {
    min: 30.0,
    max: 180.0,
};

/// Scalar inputs that fully determine a pose.
///
/// Angles are in degrees, lengths in centimeters by convention. Missing JSON
/// fields fall back to [`PoseInputs::default`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PoseInputs {
    /// Shank direction from the positive x-axis.
    pub ankle_angle: f64,
    pub knee_angle: f64,
    pub hip_angle: f64,
    pub foot_len: f64,
    pub shank_len: f64,
    pub thigh_len: f64,
    pub trunk_len: f64,
}

impl PoseInputs {
    pub const DEFAULT_ANKLE_ANGLE: f64 = 60.0;
    pub const DEFAULT_KNEE_ANGLE: f64 = 90.0;
    pub const DEFAULT_HIP_ANGLE: f64 = 90.0;
    pub const DEFAULT_FOOT_LEN: f64 = 28.0;
    pub const DEFAULT_SHANK_LEN: f64 = 50.0;
    pub const DEFAULT_THIGH_LEN: f64 = 50.0;
    pub const DEFAULT_TRUNK_LEN: f64 = 80.0;

    /// Creates inputs from angles `(ankle, knee, hip)` and lengths
    /// `(foot, shank, thigh, trunk)`.
    pub fn new(angles: [f64; 3], lengths: [f64; 4]) -> Self {
        let [ankle_angle, knee_angle, hip_angle] = angles;
        let [foot_len, shank_len, thigh_len, trunk_len] = lengths;
        Self {
            ankle_angle,
            knee_angle,
            hip_angle,
            foot_len,
            shank_len,
            thigh_len,
            trunk_len,
        }
    }

    /// Replaces the three joint angles, keeping the lengths.
    pub fn with_angles(mut self, ankle: f64, knee: f64, hip: f64) -> Self {
        self.ankle_angle = ankle;
        self.knee_angle = knee;
        self.hip_angle = hip;
        self
    }

    /// Replaces the four segment lengths, keeping the angles.
    pub fn with_lengths(mut self, foot: f64, shank: f64, thigh: f64, trunk: f64) -> Self {
        self.foot_len = foot;
        self.shank_len = shank;
        self.thigh_len = thigh;
        self.trunk_len = trunk;
        self
    }

    /// Angle fields with their names and nominal ranges.
    pub fn angles(&self) -> [(&'static str, f64, InputRange); 3] {
        [
            ("ankle_angle", self.ankle_angle, ANKLE_RANGE),
            ("knee_angle", self.knee_angle, KNEE_RANGE),
            ("hip_angle", self.hip_angle, HIP_RANGE),
        ]
    }

    /// Length fields with their names.
    pub fn lengths(&self) -> [(&'static str, f64); 4] {
        [
            ("foot_len", self.foot_len),
            ("shank_len", self.shank_len),
            ("thigh_len", self.thigh_len),
            ("trunk_len", self.trunk_len),
        ]
    }

    /// Parses inputs from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes inputs to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for PoseInputs {
    fn default() -> Self {
        Self {
            ankle_angle: Self::DEFAULT_ANKLE_ANGLE,
            knee_angle: Self::DEFAULT_KNEE_ANGLE,
            hip_angle: Self::DEFAULT_HIP_ANGLE,
            foot_len: Self::DEFAULT_FOOT_LEN,
            shank_len: Self::DEFAULT_SHANK_LEN,
            thigh_len: Self::DEFAULT_THIGH_LEN,
            trunk_len: Self::DEFAULT_TRUNK_LEN,
        }
    }
}
