//! Fixed catalogue of annotated bird parts.
//!
//! Annotation files carry exactly one keypoint per part, in this order.
//! Position is identity: estimator inputs and outputs are index-aligned
//! to the catalogue and the order is preserved end to end.

use serde::Serialize;
use std::fmt;

/// Number of catalogue parts, and therefore the required length of every
/// keypoint list and result list.
pub const PART_COUNT: usize = 15;

/// One semantic body part, in canonical annotation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Part {
    Back,
    Beak,
    Belly,
    Breast,
    Crown,
    Forehead,
    LeftEye,
    LeftLeg,
    LeftWing,
    Nape,
    RightEye,
    RightLeg,
    RightWing,
    Tail,
    Throat,
}

impl Part {
    /// All parts in canonical order; index `i` labels keypoint `i`.
    pub const ALL: [Part; PART_COUNT] = [
        Part::Back,
        Part::Beak,
        Part::Belly,
        Part::Breast,
        Part::Crown,
        Part::Forehead,
        Part::LeftEye,
        Part::LeftLeg,
        Part::LeftWing,
        Part::Nape,
        Part::RightEye,
        Part::RightLeg,
        Part::RightWing,
        Part::Tail,
        Part::Throat,
    ];

    /// Human-readable name matching the upstream `parts.txt` labels.
    pub fn name(self) -> &'static str {
        match self {
            Part::Back => "back",
            Part::Beak => "beak",
            Part::Belly => "belly",
            Part::Breast => "breast",
            Part::Crown => "crown",
            Part::Forehead => "forehead",
            Part::LeftEye => "left eye",
            Part::LeftLeg => "left leg",
            Part::LeftWing => "left wing",
            Part::Nape => "nape",
            Part::RightEye => "right eye",
            Part::RightLeg => "right leg",
            Part::RightWing => "right wing",
            Part::Tail => "tail",
            Part::Throat => "throat",
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
