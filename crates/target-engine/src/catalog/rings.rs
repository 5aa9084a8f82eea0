//! Bullseye ring targets of the volunteer and Bisley eras, distances in yards

use super::{CanonicalTarget, Design, Ring, RingFill, RingSet, RingShape};
use crate::types::{Colour, DistanceUnit, Family, Variant};

/// Ring line width on the full-size iron targets, inches
const RING_LINE: f64 = 0.5;

const fn circle(diameter: f64) -> Ring {
    Ring {
        shape: RingShape::Circle { diameter },
        fill: RingFill::Line { width: RING_LINE },
        colour: Colour::Black,
        ground: Colour::White,
    }
}

const fn ellipse(width: f64, height: f64) -> Ring {
    Ring {
        shape: RingShape::Ellipse { width, height },
        fill: RingFill::Line { width: RING_LINE },
        colour: Colour::Black,
        ground: Colour::White,
    }
}

const fn bull(diameter: f64) -> Ring {
    Ring {
        shape: RingShape::Circle { diameter },
        fill: RingFill::Solid,
        colour: Colour::Black,
        ground: Colour::White,
    }
}

const fn centred(rings: &'static [Ring]) -> RingSet {
    RingSet {
        offset: (0.0, 0.0),
        rings,
    }
}

const fn ring_target(
    family: Family,
    class: u8,
    name: &'static str,
    size: (f64, f64),
    sets: &'static [RingSet],
    inner_extent: (f64, f64),
    distances: &'static [f64],
) -> CanonicalTarget {
    CanonicalTarget {
        family,
        class,
        variant: Variant::Standard,
        name,
        width: size.0,
        height: size.1,
        face: Colour::White,
        design: Design::Rings(sets),
        inner_extent: Some(inner_extent),
        distances,
        unit: DistanceUnit::Yards,
    }
}

// 1862: elliptical centre and outer rings around a round bull

static RINGS_1862_C1: [Ring; 3] = [ellipse(84.0, 66.0), ellipse(54.0, 48.0), bull(36.0)];
static SETS_1862_C1: [RingSet; 1] = [centred(&RINGS_1862_C1)];
static RINGS_1862_C2: [Ring; 3] = [ellipse(60.0, 66.0), ellipse(36.0, 48.0), bull(24.0)];
static SETS_1862_C2: [RingSet; 1] = [centred(&RINGS_1862_C2)];
static RINGS_1862_C3: [Ring; 3] = [ellipse(36.0, 54.0), ellipse(24.0, 36.0), bull(8.0)];
static SETS_1862_C3: [RingSet; 1] = [centred(&RINGS_1862_C3)];

pub(super) static RING_1862: [CanonicalTarget; 3] = [
    ring_target(
        Family::Ring1862,
        1,
        "1862 First Class, 700 to 1000 yards",
        (96.0, 72.0),
        &SETS_1862_C1,
        (54.0, 48.0),
        &[700.0, 800.0, 900.0, 1000.0],
    ),
    ring_target(
        Family::Ring1862,
        2,
        "1862 Second Class, 400 to 600 yards",
        (72.0, 72.0),
        &SETS_1862_C2,
        (36.0, 48.0),
        &[400.0, 500.0, 600.0],
    ),
    ring_target(
        Family::Ring1862,
        3,
        "1862 Third Class, 200 and 300 yards",
        (48.0, 72.0),
        &SETS_1862_C3,
        (24.0, 36.0),
        &[200.0, 300.0],
    ),
];

// 1883: circular magpie, inner and bull on the same oblong frames

static RINGS_1883_C1: [Ring; 3] = [circle(66.0), circle(48.0), bull(36.0)];
static SETS_1883_C1: [RingSet; 1] = [centred(&RINGS_1883_C1)];
static RINGS_1883_C2: [Ring; 3] = [circle(54.0), circle(36.0), bull(22.0)];
static SETS_1883_C2: [RingSet; 1] = [centred(&RINGS_1883_C2)];
static RINGS_1883_C3: [Ring; 3] = [circle(34.0), circle(20.0), bull(8.0)];
static SETS_1883_C3: [RingSet; 1] = [centred(&RINGS_1883_C3)];

pub(super) static RING_1883: [CanonicalTarget; 3] = [
    ring_target(
        Family::Ring1883,
        1,
        "1883 First Class, 600 to 1000 yards",
        (96.0, 72.0),
        &SETS_1883_C1,
        (48.0, 48.0),
        &[600.0, 800.0, 1000.0],
    ),
    ring_target(
        Family::Ring1883,
        2,
        "1883 Second Class, 400 and 500 yards",
        (72.0, 72.0),
        &SETS_1883_C2,
        (36.0, 36.0),
        &[400.0, 500.0],
    ),
    ring_target(
        Family::Ring1883,
        3,
        "1883 Third Class, 200 and 300 yards",
        (48.0, 72.0),
        &SETS_1883_C3,
        (20.0, 20.0),
        &[200.0, 300.0],
    ),
];

// 1908: square short-range frame, long frame for the match distances

static RINGS_1908_C1: [Ring; 3] = [circle(66.0), circle(48.0), bull(36.0)];
static SETS_1908_C1: [RingSet; 1] = [centred(&RINGS_1908_C1)];
static RINGS_1908_C2: [Ring; 3] = [circle(60.0), circle(42.0), bull(20.0)];
static SETS_1908_C2: [RingSet; 1] = [centred(&RINGS_1908_C2)];
static RINGS_1908_C3: [Ring; 3] = [circle(32.0), circle(20.0), bull(8.0)];
static SETS_1908_C3: [RingSet; 1] = [centred(&RINGS_1908_C3)];

pub(super) static RING_1908: [CanonicalTarget; 3] = [
    ring_target(
        Family::Ring1908,
        1,
        "1908 Long Range, 800 to 1000 yards",
        (120.0, 72.0),
        &SETS_1908_C1,
        (48.0, 48.0),
        &[800.0, 900.0, 1000.0],
    ),
    ring_target(
        Family::Ring1908,
        2,
        "1908 Mid Range, 300 to 600 yards",
        (72.0, 72.0),
        &SETS_1908_C2,
        (42.0, 42.0),
        &[300.0, 500.0, 600.0],
    ),
    ring_target(
        Family::Ring1908,
        3,
        "1908 Short Range, 200 yards",
        (48.0, 48.0),
        &SETS_1908_C3,
        (20.0, 20.0),
        &[200.0],
    ),
];
