//! Segment categories and mass-fraction profiles.
//!
//! The stick figure collapses a two-armed, two-legged body onto a single
//! sagittal chain, so the arm fractions are doubled into `trunk_arms` and the
//! leg fractions are doubled into `thigh`, `shank` and `foot`. Fractions are
//! after Plagenhoef et al. (1983). Neither table sums to 1; always divide by
//! [`MassProfile::total`].

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Body-segment categories of the stick figure, distal to proximal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    Foot,
    Shank,
    Thigh,
    TrunkArms,
    Head,
}

impl Segment {
    /// All segments in chain order (foot first).
    pub const ALL: [Segment; 5] = [
        Segment::Foot,
        Segment::Shank,
        Segment::Thigh,
        Segment::TrunkArms,
        Segment::Head,
    ];

    /// Returns the segment name as used in JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Segment::Foot => "foot",
            Segment::Shank => "shank",
            Segment::Thigh => "thigh",
            Segment::TrunkArms => "trunk_arms",
            Segment::Head => "head",
        }
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-segment fractions of total body mass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MassFractions {
    pub head: f64,
    pub trunk_arms: f64,
    pub thigh: f64,
    pub shank: f64,
    pub foot: f64,
}

impl MassFractions {
    /// Fraction assigned to one segment.
    pub fn get(&self, segment: Segment) -> f64 {
        match segment {
            Segment::Foot => self.foot,
            Segment::Shank => self.shank,
            Segment::Thigh => self.thigh,
            Segment::TrunkArms => self.trunk_arms,
            Segment::Head => self.head,
        }
    }

    /// Sum of all five fractions.
    pub fn total(&self) -> f64 {
        Segment::ALL.iter().map(|s| self.get(*s)).sum()
    }
}

// Per-limb values (upper arm + forearm + hand, thigh, shank, foot) doubled for both sides.
const MALE: MassFractions = MassFractions {
    head: 0.0826,
    trunk_arms: 0.551 + 2.0 * (0.0325 + 0.0187 + 0.0065),
    thigh: 2.0 * 0.105,
    shank: 2.0 * 0.0475,
    foot: 2.0 * 0.0143,
};

const FEMALE: MassFractions = MassFractions {
    head: 0.0820,
    trunk_arms: 0.532 + 2.0 * (0.0290 + 0.0157 + 0.0050),
    thigh: 2.0 * 0.118,
    shank: 2.0 * 0.0535,
    foot: 2.0 * 0.0133,
};

/// Selector for one of the fixed mass-fraction tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MassProfile {
    #[default]
    Male,
    Female,
}

impl MassProfile {
    /// Both profiles, in display order.
    pub const ALL: [MassProfile; 2] = [MassProfile::Male, MassProfile::Female];

    /// Returns the constant fraction table for this profile.
    pub fn fractions(&self) -> &'static MassFractions {
        match self {
            MassProfile::Male => &MALE,
            MassProfile::Female => &FEMALE,
        }
    }

    /// Fraction for a single segment.
    pub fn fraction(&self, segment: Segment) -> f64 {
        self.fractions().get(segment)
    }

    /// Sum of this profile's fractions (greater than 1).
    pub fn total(&self) -> f64 {
        self.fractions().total()
    }

    /// Returns the profile name.
    pub fn as_str(&self) -> &'static str {
        match self {
            MassProfile::Male => "male",
            MassProfile::Female => "female",
        }
    }

    /// Looks up a profile by name (case-insensitive; `m`/`f` accepted).
    pub fn by_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Some(MassProfile::Male),
            "female" | "f" => Some(MassProfile::Female),
            _ => None,
        }
    }
}

impl std::str::FromStr for MassProfile {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MassProfile::by_name(s).ok_or_else(|| ModelError::UnknownProfile(s.to_string()))
    }
}

impl std::fmt::Display for MassProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
