//! Named poses with their expected balance zone under the male profile.

use squat_model::{BalanceZone, PoseInputs};

/// A named pose fixture.
#[derive(Debug, Clone, Copy)]
pub struct PoseFixture {
    pub name: &'static str,
    pub inputs: PoseInputs,
    pub expected_zone: BalanceZone,
}

fn angles(ankle: f64, knee: f64, hip: f64) -> PoseInputs {
    PoseInputs::default().with_angles(ankle, knee, hip)
}

/// Poses covering all three zones with default segment lengths.
pub fn zone_fixtures() -> Vec<PoseFixture> {
    vec![
        PoseFixture {
            name: "initial_squat",
            inputs: PoseInputs::default(),
            expected_zone: BalanceZone::Caution,
        },
        PoseFixture {
            name: "trunk_forward",
            inputs: angles(60.0, 90.0, 60.0),
            expected_zone: BalanceZone::Stable,
        },
        PoseFixture {
            name: "upright",
            inputs: angles(90.0, 180.0, 180.0),
            expected_zone: BalanceZone::Stable,
        },
        PoseFixture {
            name: "trunk_back",
            inputs: angles(60.0, 90.0, 120.0),
            expected_zone: BalanceZone::Fall,
        },
        PoseFixture {
            name: "deep_sit_back",
            inputs: angles(80.0, 120.0, 150.0),
            expected_zone: BalanceZone::Fall,
        },
        PoseFixture {
            name: "shins_back",
            inputs: angles(120.0, 170.0, 170.0),
            expected_zone: BalanceZone::Fall,
        },
        PoseFixture {
            name: "shallow_shins",
            inputs: angles(45.0, 60.0, 90.0),
            expected_zone: BalanceZone::Caution,
        },
    ]
}
