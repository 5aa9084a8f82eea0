//! Banded service-rifle targets, distances in yards

use super::{BandPattern, CanonicalTarget, Design, Region};
use crate::types::{Colour, DistanceUnit, Family, Variant};

const PATCH: Region = Region {
    width: 10.0,
    height: 6.0,
    offset: (0.0, 12.0),
};

const fn bands(side: Option<Region>) -> BandPattern {
    BandPattern {
        band_width: 6.0,
        band_colour: Colour::Khaki,
        patch: PATCH,
        patch_colour: Colour::Black,
        side,
        side_colour: Colour::Brown,
    }
}

pub(super) static SERVICE: [CanonicalTarget; 2] = [
    CanonicalTarget {
        family: Family::Service,
        class: 1,
        variant: Variant::Standard,
        name: "Service target, band and patches",
        width: 48.0,
        height: 48.0,
        face: Colour::Khaki,
        design: Design::Bands(bands(None)),
        inner_extent: None,
        distances: &[200.0, 300.0, 500.0],
        unit: DistanceUnit::Yards,
    },
    CanonicalTarget {
        family: Family::Service,
        class: 2,
        variant: Variant::Standard,
        name: "Service target with flank regions",
        width: 72.0,
        height: 48.0,
        face: Colour::Khaki,
        design: Design::Bands(bands(Some(Region {
            width: 12.0,
            height: 24.0,
            offset: (24.0, 0.0),
        }))),
        inner_extent: None,
        distances: &[300.0, 500.0, 600.0],
        unit: DistanceUnit::Yards,
    },
];
