//! The single evaluation entry point and its bundled result.

use serde::{Deserialize, Serialize};

use crate::balance::{classify_balance, BalanceZone};
use crate::com::{compute_com, SegmentComs};
use crate::geometry::Point2;
use crate::kinematics::{keypoints_with_angles, segment_angles, KeyPoints, SegmentAngles};
use crate::pose::PoseInputs;
use crate::profile::MassProfile;

/// Everything derived from one set of inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoseResult {
    pub inputs: PoseInputs,
    pub profile: MassProfile,
    pub angles: SegmentAngles,
    pub keypoints: KeyPoints,
    pub segment_coms: SegmentComs,
    pub cm_body: Point2,
    pub zone: BalanceZone,
}

impl PoseResult {
    /// Serializes the result to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the result to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Evaluates a pose: kinematics, segment COMs, body COM and balance zone.
///
/// Pure and stateless; identical inputs give bit-identical results.
///
/// # Example
/// ```
/// use squat_model::{evaluate, BalanceZone, MassProfile, PoseInputs};
///
/// let result = evaluate(&PoseInputs::default(), MassProfile::Male);
/// assert_eq!(result.keypoints.toe.x, 28.0);
/// assert_eq!(result.zone, BalanceZone::Caution);
/// ```
pub fn evaluate(inputs: &PoseInputs, profile: MassProfile) -> PoseResult {
    let angles = segment_angles(inputs);
    let keypoints = keypoints_with_angles(inputs, &angles);
    let com = compute_com(&keypoints, inputs, &angles, profile);
    let zone = classify_balance(com.cm_body, keypoints.heel, keypoints.ankle, keypoints.toe);

    PoseResult {
        inputs: *inputs,
        profile,
        angles,
        keypoints,
        segment_coms: com.segments,
        cm_body: com.cm_body,
        zone,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinematics::compute_keypoints;

    #[test]
    fn test_evaluate_matches_components() {
        let inputs = PoseInputs::default().with_angles(75.0, 130.0, 100.0);
        let result = evaluate(&inputs, MassProfile::Female);
        assert_eq!(result.keypoints, compute_keypoints(&inputs));
        assert_eq!(result.angles, segment_angles(&inputs));
        assert_eq!(result.inputs, inputs);
        assert_eq!(result.profile, MassProfile::Female);
    }

    #[test]
    fn test_idempotent() {
        let inputs = PoseInputs::default().with_angles(48.0, 77.0, 140.0);
        let a = evaluate(&inputs, MassProfile::Male);
        let b = evaluate(&inputs, MassProfile::Male);
        assert_eq!(a, b);
        assert_eq!(a.to_json().unwrap(), b.to_json().unwrap());
    }

    #[test]
    fn test_profile_switch_only_moves_body_com() {
        let inputs = PoseInputs::default();
        let male = evaluate(&inputs, MassProfile::Male);
        let female = evaluate(&inputs, MassProfile::Female);
        assert_eq!(male.keypoints, female.keypoints);
        assert_eq!(male.segment_coms, female.segment_coms);
        assert_ne!(male.cm_body, female.cm_body);
    }

    #[test]
    fn test_reference_zones() {
        assert_eq!(
            evaluate(&PoseInputs::default(), MassProfile::Male).zone,
            BalanceZone::Caution
        );
        assert_eq!(
            evaluate(&PoseInputs::default(), MassProfile::Female).zone,
            BalanceZone::Caution
        );
        // leaning the trunk forward
        let forward = PoseInputs::default().with_angles(60.0, 90.0, 60.0);
        assert_eq!(evaluate(&forward, MassProfile::Male).zone, BalanceZone::Stable);
        // leaning back
        let back = PoseInputs::default().with_angles(60.0, 90.0, 120.0);
        assert_eq!(evaluate(&back, MassProfile::Male).zone, BalanceZone::Fall);
    }

    #[test]
    fn test_json_shape() {
        let json = evaluate(&PoseInputs::default(), MassProfile::Male)
            .to_json()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["zone"], "caution");
        assert_eq!(value["profile"], "male");
        assert_eq!(value["keypoints"]["toe"]["x"], 28.0);
        assert!(value["segment_coms"]["cm_trunk"].is_object());
    }
}
