//! Segment and whole-body center of mass.

use serde::{Deserialize, Serialize};

use crate::geometry::Point2;
use crate::kinematics::{KeyPoints, SegmentAngles, ANKLE_HEIGHT_FRACTION};
use crate::pose::PoseInputs;
use crate::profile::{MassProfile, Segment};

/// Foot COM along the foot, as a fraction of `foot_len`.
pub const FOOT_COM_FORWARD_FRACTION: f64 = 1.0 / 3.0;
/// Foot COM height, as a fraction of the foot height (`foot_len / 4`).
pub const FOOT_COM_HEIGHT_FRACTION: f64 = 1.0 / 3.0;
/// Shank COM offset from the ankle.
pub const SHANK_COM_FRACTION: f64 = 0.565;
/// Thigh COM offset from the knee.
pub const THIGH_COM_FRACTION: f64 = 0.565;
/// Trunk COM offset from the hip.
pub const TRUNK_COM_FRACTION: f64 = 0.300;

/// COM of each segment category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentComs {
    pub cm_foot: Point2,
    pub cm_shank: Point2,
    pub cm_thigh: Point2,
    pub cm_trunk: Point2,
    /// Coincides with the head key point.
    pub cm_head: Point2,
}

impl SegmentComs {
    /// COM point for one segment category.
    pub fn get(&self, segment: Segment) -> Point2 {
        match segment {
            Segment::Foot => self.cm_foot,
            Segment::Shank => self.cm_shank,
            Segment::Thigh => self.cm_thigh,
            Segment::TrunkArms => self.cm_trunk,
            Segment::Head => self.cm_head,
        }
    }
}

/// Segment COMs plus the mass-weighted whole-body COM.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CenterOfMass {
    pub segments: SegmentComs,
    pub cm_body: Point2,
}

/// Places each segment's COM at its fixed fractional offset.
pub fn segment_coms(
    keypoints: &KeyPoints,
    inputs: &PoseInputs,
    angles: &SegmentAngles,
) -> SegmentComs {
    let heel = keypoints.heel;
    let foot_height = inputs.foot_len * ANKLE_HEIGHT_FRACTION;

    SegmentComs {
        cm_foot: Point2::new(
            heel.x + inputs.foot_len * FOOT_COM_FORWARD_FRACTION,
            heel.y + foot_height * FOOT_COM_HEIGHT_FRACTION,
        ),
        cm_shank: keypoints
            .ankle
            .offset_polar(inputs.shank_len * SHANK_COM_FRACTION, angles.shank),
        cm_thigh: keypoints
            .knee
            .offset_polar(inputs.thigh_len * THIGH_COM_FRACTION, angles.thigh),
        cm_trunk: keypoints
            .hip
            .offset_polar(inputs.trunk_len * TRUNK_COM_FRACTION, angles.trunk),
        cm_head: keypoints.head,
    }
}

/// Mass-fraction-weighted average of the segment COMs.
///
/// Normalizes by the profile's actual fraction sum, which is not 1.
pub fn body_com(segments: &SegmentComs, profile: MassProfile) -> Point2 {
    let (sx, sy) = Segment::ALL.iter().fold((0.0, 0.0), |(sx, sy), &segment| {
        let w = profile.fraction(segment);
        let p = segments.get(segment);
        (sx + w * p.x, sy + w * p.y)
    });
    let total = profile.total();
    Point2::new(sx / total, sy / total)
}

/// Computes segment COMs and the whole-body COM.
pub fn compute_com(
    keypoints: &KeyPoints,
    inputs: &PoseInputs,
    angles: &SegmentAngles,
    profile: MassProfile,
) -> CenterOfMass {
    let segments = segment_coms(keypoints, inputs, angles);
    CenterOfMass {
        cm_body: body_com(&segments, profile),
        segments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinematics::{compute_keypoints, segment_angles};

    fn reference() -> (KeyPoints, PoseInputs, SegmentAngles) {
        let inputs = PoseInputs::default();
        (compute_keypoints(&inputs), inputs, segment_angles(&inputs))
    }

    #[test]
    fn test_foot_com() {
        let (k, inputs, a) = reference();
        let s = segment_coms(&k, &inputs, &a);
        assert!((s.cm_foot.x - 28.0 / 3.0).abs() < 1e-12);
        assert!((s.cm_foot.y - 7.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_segment_offsets_along_segments() {
        let (k, inputs, a) = reference();
        let s = segment_coms(&k, &inputs, &a);
        assert!((k.ankle.distance_to(s.cm_shank) - 50.0 * 0.565).abs() < 1e-9);
        assert!((k.knee.distance_to(s.cm_thigh) - 50.0 * 0.565).abs() < 1e-9);
        assert!((k.hip.distance_to(s.cm_trunk) - 80.0 * 0.3).abs() < 1e-9);
        // collinear with the distal and proximal points
        let along = k.ankle.distance_to(s.cm_shank) + s.cm_shank.distance_to(k.knee);
        assert!((along - 50.0).abs() < 1e-9);
        assert_eq!(s.cm_head, k.head);
    }

    #[test]
    fn test_body_com_normalizes_by_fraction_sum() {
        let (k, inputs, a) = reference();
        let com = compute_com(&k, &inputs, &a, MassProfile::Male);
        let f = MassProfile::Male.fractions();
        let s = com.segments;
        let weighted_x = f.head * s.cm_head.x
            + f.trunk_arms * s.cm_trunk.x
            + f.thigh * s.cm_thigh.x
            + f.shank * s.cm_shank.x
            + f.foot * s.cm_foot.x;
        let expected = weighted_x / f.total();
        assert!((com.cm_body.x - expected).abs() < 1e-9);
        assert!((com.cm_body.x - weighted_x).abs() > 0.1);
    }

    #[test]
    fn test_reference_body_com() {
        let (k, inputs, a) = reference();
        let male = compute_com(&k, &inputs, &a, MassProfile::Male).cm_body;
        let female = compute_com(&k, &inputs, &a, MassProfile::Female).cm_body;
        assert!((male.x - 4.818641468367755).abs() < 1e-9);
        assert!((male.y - 85.49755855198414).abs() < 1e-9);
        assert!((female.x - 5.173004752211353).abs() < 1e-9);
        assert!((female.y - 84.17165289124394).abs() < 1e-9);
    }

    #[test]
    fn test_body_com_of_coincident_segments() {
        let p = Point2::new(4.0, -3.0);
        let segments = SegmentComs {
            cm_foot: p,
            cm_shank: p,
            cm_thigh: p,
            cm_trunk: p,
            cm_head: p,
        };
        let com = body_com(&segments, MassProfile::Female);
        assert!((com.x - 4.0).abs() < 1e-12);
        assert!((com.y + 3.0).abs() < 1e-12);
    }
}
