//! Parameterised families: the calibration dot and the biathlon plate
//!
//! Both are printed at a scale fixed by the request rather than fitted
//! to the page.

use super::{CanonicalTarget, Design, Ring, RingFill, RingSet, RingShape};
use crate::constants::MM_PER_INCH;
use crate::types::{Colour, DistanceUnit, Family, Variant};

/// Nominal one-inch dot; the requested diameter in inches is its scale
pub(super) static DOT: CanonicalTarget = CanonicalTarget {
    family: Family::Dot,
    class: 1,
    variant: Variant::Standard,
    name: "Calibration dot",
    width: 1.0,
    height: 1.0,
    face: Colour::White,
    design: Design::Dot,
    inner_extent: None,
    distances: &[],
    unit: DistanceUnit::Metres,
};

const fn mm(value: f64) -> f64 {
    value / MM_PER_INCH
}

/// Centre spacing of the five aiming blacks
const SPACING: f64 = mm(165.0);

static PRONE: [Ring; 2] = [
    Ring {
        shape: RingShape::Circle {
            diameter: mm(115.0),
        },
        fill: RingFill::Solid,
        colour: Colour::Black,
        ground: Colour::White,
    },
    Ring {
        shape: RingShape::Circle {
            diameter: mm(45.0),
        },
        fill: RingFill::Line { width: mm(1.5) },
        colour: Colour::White,
        ground: Colour::Black,
    },
];

static STANDING: [Ring; 1] = [Ring {
    shape: RingShape::Circle {
        diameter: mm(115.0),
    },
    fill: RingFill::Solid,
    colour: Colour::Black,
    ground: Colour::White,
}];

const fn five_across(rings: &'static [Ring]) -> [RingSet; 5] {
    [
        RingSet {
            offset: (-2.0 * SPACING, 0.0),
            rings,
        },
        RingSet {
            offset: (-SPACING, 0.0),
            rings,
        },
        RingSet {
            offset: (0.0, 0.0),
            rings,
        },
        RingSet {
            offset: (SPACING, 0.0),
            rings,
        },
        RingSet {
            offset: (2.0 * SPACING, 0.0),
            rings,
        },
    ]
}

static PRONE_SETS: [RingSet; 5] = five_across(&PRONE);
static STANDING_SETS: [RingSet; 5] = five_across(&STANDING);

const fn plate(variant: Variant, name: &'static str, sets: &'static [RingSet]) -> CanonicalTarget {
    CanonicalTarget {
        family: Family::Biathlon,
        class: 1,
        variant,
        name,
        width: mm(825.0),
        height: mm(165.0),
        face: Colour::White,
        design: Design::Rings(sets),
        inner_extent: None,
        distances: &[50.0],
        unit: DistanceUnit::Metres,
    }
}

pub(super) static BIATHLON_PRONE: CanonicalTarget =
    plate(Variant::Prone, "Biathlon prone, 45 mm hit zones", &PRONE_SETS);

pub(super) static BIATHLON_STANDING: CanonicalTarget = plate(
    Variant::Standing,
    "Biathlon standing, 115 mm hit zones",
    &STANDING_SETS,
);
