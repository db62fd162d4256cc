//! Drawing plan for a presentation layer.
//!
//! A [`Scene`] lists the primitives a renderer draws for one result: the
//! skeleton as ordered line segments, the head circle, COM markers, the
//! plumb line from the body COM to the ground, and the zone color.

use serde::{Deserialize, Serialize};

use crate::balance::BalanceZone;
use crate::geometry::Point2;
use crate::profile::Segment;
use crate::result::PoseResult;

/// Head circle radius in length units.
pub const HEAD_RADIUS: f64 = 11.0;

/// Named edges of the skeleton, in drawing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bone {
    Sole,
    ToeToAnkle,
    AnkleToHeel,
    Shank,
    Thigh,
    Trunk,
}

/// A straight line between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub bone: Bone,
    pub start: Point2,
    pub end: Point2,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point2,
    pub radius: f64,
}

/// A segment COM marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentMarker {
    pub segment: Segment,
    pub position: Point2,
}

/// Axis-aligned bounds of everything drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Point2,
    pub max: Point2,
}

impl Bounds {
    fn around(point: Point2) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    fn include(&mut self, point: Point2) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// Everything a renderer needs to draw one pose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub skeleton: Vec<LineSegment>,
    pub head: Circle,
    pub segment_markers: Vec<SegmentMarker>,
    pub body_marker: Point2,
    /// From the body COM straight down to y = 0.
    pub plumb_line: (Point2, Point2),
    pub zone: BalanceZone,
    pub zone_color: String,
    pub bounds: Bounds,
}

impl Scene {
    /// Builds the drawing plan for an evaluated pose.
    pub fn from_result(result: &PoseResult) -> Self {
        let k = &result.keypoints;
        let skeleton = vec![
            LineSegment {
                bone: Bone::Sole,
                start: k.heel,
                end: k.toe,
            },
            LineSegment {
                bone: Bone::ToeToAnkle,
                start: k.toe,
                end: k.ankle,
            },
            LineSegment {
                bone: Bone::AnkleToHeel,
                start: k.ankle,
                end: k.heel,
            },
            LineSegment {
                bone: Bone::Shank,
                start: k.ankle,
                end: k.knee,
            },
            LineSegment {
                bone: Bone::Thigh,
                start: k.knee,
                end: k.hip,
            },
            LineSegment {
                bone: Bone::Trunk,
                start: k.hip,
                end: k.head,
            },
        ];

        let segment_markers = Segment::ALL
            .iter()
            .map(|&segment| SegmentMarker {
                segment,
                position: result.segment_coms.get(segment),
            })
            .collect::<Vec<_>>();

        let head = Circle {
            center: k.head,
            radius: HEAD_RADIUS,
        };
        let cm = result.cm_body;
        let plumb_line = (cm, Point2::new(cm.x, 0.0));

        let mut bounds = Bounds::around(k.heel);
        for line in &skeleton {
            bounds.include(line.start);
            bounds.include(line.end);
        }
        for marker in &segment_markers {
            bounds.include(marker.position);
        }
        bounds.include(cm);
        bounds.include(plumb_line.1);
        bounds.include(Point2::new(head.center.x - head.radius, head.center.y - head.radius));
        bounds.include(Point2::new(head.center.x + head.radius, head.center.y + head.radius));

        Self {
            skeleton,
            head,
            segment_markers,
            body_marker: cm,
            plumb_line,
            zone: result.zone,
            zone_color: result.zone.color().to_string(),
            bounds,
        }
    }

    /// Serializes the scene to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
