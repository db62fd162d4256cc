//! Forward kinematics of the heel-anchored chain.
//!
//! The foot is a rigid triangle (heel, toe, ankle) sitting on the ground with
//! the heel at the origin. Shank, thigh and trunk hang off it as rigid
//! segments. The ankle angle is used directly as the shank's direction from
//! the positive x-axis, not as an included angle between foot and shank.

use serde::{Deserialize, Serialize};

use crate::geometry::Point2;
use crate::pose::PoseInputs;

/// Ankle position along the foot, as a fraction of `foot_len`.
pub const ANKLE_FORWARD_FRACTION: f64 = 1.0 / 5.0;
/// Ankle height above the ground, as a fraction of `foot_len`.
pub const ANKLE_HEIGHT_FRACTION: f64 = 1.0 / 4.0;

/// The six skeletal key points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyPoints {
    pub heel: Point2,
    pub toe: Point2,
    pub ankle: Point2,
    pub knee: Point2,
    pub hip: Point2,
    pub head: Point2,
}

/// World-space segment directions in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentAngles {
    /// Shank direction; equal to the ankle angle.
    pub shank: f64,
    /// `180 - (knee - ankle)`.
    pub thigh: f64,
    /// `knee - ankle`.
    pub purple: f64,
    /// `hip - purple`.
    pub trunk: f64,
}

/// Derives the absolute segment directions from the joint angles.
pub fn segment_angles(inputs: &PoseInputs) -> SegmentAngles {
    let purple = inputs.knee_angle - inputs.ankle_angle;
    SegmentAngles {
        shank: inputs.ankle_angle,
        thigh: 180.0 - purple,
        purple,
        trunk: inputs.hip_angle - purple,
    }
}

/// Computes the key points for a pose.
///
/// Any real input produces a result; no plausibility checks are made.
pub fn compute_keypoints(inputs: &PoseInputs) -> KeyPoints {
    keypoints_with_angles(inputs, &segment_angles(inputs))
}

pub(crate) fn keypoints_with_angles(inputs: &PoseInputs, angles: &SegmentAngles) -> KeyPoints {
    let heel = Point2::ORIGIN;
    let toe = Point2::new(heel.x + inputs.foot_len, 0.0);
    let ankle = Point2::new(
        heel.x + inputs.foot_len * ANKLE_FORWARD_FRACTION,
        heel.y + inputs.foot_len * ANKLE_HEIGHT_FRACTION,
    );
    let knee = ankle.offset_polar(inputs.shank_len, angles.shank);
    let hip = knee.offset_polar(inputs.thigh_len, angles.thigh);
    let head = hip.offset_polar(inputs.trunk_len, angles.trunk);

    KeyPoints {
        heel,
        toe,
        ankle,
        knee,
        hip,
        head,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel_close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0)
    }

    #[test]
    fn test_reference_pose() {
        let k = compute_keypoints(&PoseInputs::default());
        let s3 = 3.0_f64.sqrt();

        assert_eq!(k.heel, Point2::ORIGIN);
        assert_eq!(k.toe, Point2::new(28.0, 0.0));
        assert!(rel_close(k.ankle.x, 5.6));
        assert!(rel_close(k.ankle.y, 7.0));
        assert!(rel_close(k.knee.x, 30.6));
        assert!(rel_close(k.knee.y, 7.0 + 25.0 * s3));
        // thigh at 150 degrees
        assert!(rel_close(k.hip.x, 30.6 - 25.0 * s3));
        assert!(rel_close(k.hip.y, 32.0 + 25.0 * s3));
        // trunk at 60 degrees
        assert!(rel_close(k.head.x, 70.6 - 25.0 * s3));
        assert!(rel_close(k.head.y, 32.0 + 65.0 * s3));
    }

    #[test]
    fn test_segment_angles() {
        let a = segment_angles(&PoseInputs::default());
        assert_eq!(a.shank, 60.0);
        assert_eq!(a.purple, 30.0);
        assert_eq!(a.thigh, 150.0);
        assert_eq!(a.trunk, 60.0);
    }

    #[test]
    fn test_chain_lengths() {
        let inputs = PoseInputs::default()
            .with_angles(37.0, 155.0, 41.0)
            .with_lengths(24.0, 43.0, 47.5, 66.0);
        let k = compute_keypoints(&inputs);
        assert!(rel_close(k.ankle.distance_to(k.knee), 43.0));
        assert!(rel_close(k.knee.distance_to(k.hip), 47.5));
        assert!(rel_close(k.hip.distance_to(k.head), 66.0));
    }

    #[test]
    fn test_upright_stance_is_vertical() {
        let inputs = PoseInputs::default().with_angles(90.0, 180.0, 180.0);
        let k = compute_keypoints(&inputs);
        assert!((k.knee.x - k.ankle.x).abs() < 1e-9);
        assert!((k.hip.x - k.ankle.x).abs() < 1e-9);
        assert!((k.head.x - k.ankle.x).abs() < 1e-9);
        assert!(rel_close(k.head.y, 7.0 + 50.0 + 50.0 + 80.0));
    }

    #[test]
    fn test_degenerate_inputs_still_produce_points() {
        let inputs = PoseInputs::new([-400.0, 720.0, 0.0], [0.0, -10.0, 0.0, -5.0]);
        let k = compute_keypoints(&inputs);
        assert_eq!(k.toe, Point2::ORIGIN);
        assert!(k.head.is_finite());
    }
}
