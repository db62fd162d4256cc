//! Squat Pose & Balance Model
//!
//! A sagittal-plane stick figure of a body in a squat. Three joint angles and
//! four segment lengths drive a heel-anchored kinematic chain; segment centers
//! of mass are weighted by a fixed mass-fraction profile into a whole-body
//! COM, which is classified against the foot's support region.
//!
//! # Example
//!
//! ```
//! use squat_model::{evaluate, BalanceZone, MassProfile, PoseInputs, Scene};
//!
//! let inputs = PoseInputs::default().with_angles(60.0, 90.0, 60.0);
//! let result = evaluate(&inputs, MassProfile::Male);
//! assert_eq!(result.zone, BalanceZone::Stable);
//!
//! let scene = Scene::from_result(&result);
//! assert_eq!(scene.skeleton.len(), 6);
//! ```
//!
//! # Modules
//!
//! - [`pose`]: Input angles and lengths, defaults, nominal ranges
//! - [`profile`]: Segment categories and mass-fraction tables
//! - [`kinematics`]: Key points and segment directions
//! - [`com`]: Segment and whole-body center of mass
//! - [`balance`]: Balance zones
//! - [`result`]: The `evaluate` entry point
//! - [`scene`]: Drawing plan for renderers
//! - [`validation`]: Opt-in input and geometry diagnostics

pub mod balance;
pub mod com;
pub mod error;
pub mod geometry;
pub mod kinematics;
pub mod pose;
pub mod profile;
pub mod result;
pub mod scene;
pub mod validation;

pub use balance::{classify_balance, BalanceZone};
pub use com::{compute_com, CenterOfMass, SegmentComs};
pub use error::{
    ErrorCode, ModelError, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
pub use geometry::{cosd, sind, Point2};
pub use kinematics::{compute_keypoints, segment_angles, KeyPoints, SegmentAngles};
pub use pose::{InputRange, PoseInputs, ANKLE_RANGE, HIP_RANGE, KNEE_RANGE};
pub use profile::{MassFractions, MassProfile, Segment};
pub use result::{evaluate, PoseResult};
pub use scene::{Bone, Bounds, Circle, LineSegment, Scene, SegmentMarker, HEAD_RADIUS};
pub use validation::{validate_and_evaluate, validate_pose, validate_result};
