//! Silhouette figure targets on a two-tone ground, distances in yards

use super::{CanonicalTarget, Design, FigureOutline, FigurePlacement, Segment};
use crate::types::{Colour, DistanceUnit, Family, Variant};

const fn line(dx: f64, dy: f64) -> Segment {
    Segment::Line { dx, dy }
}

const fn curve(control: (f64, f64), end: (f64, f64)) -> Segment {
    Segment::Curve { control, end }
}

static HEAD_AND_SHOULDERS: FigureOutline = FigureOutline {
    name: "head and shoulders",
    width: 18.0,
    height: 20.0,
    segments: &[
        line(0.0, 8.0),
        curve((0.0, 4.0), (6.0, 4.0)),
        line(0.5, 1.0),
        line(0.0, 1.0),
        curve((0.0, 6.0), (2.5, 6.0)),
        curve((2.5, 0.0), (2.5, -6.0)),
        line(0.0, -1.0),
        line(0.5, -1.0),
        curve((6.0, 0.0), (6.0, -4.0)),
        line(0.0, -8.0),
    ],
};

static STANDING: FigureOutline = FigureOutline {
    name: "standing",
    width: 16.0,
    height: 61.0,
    segments: &[
        line(0.0, 44.0),
        curve((0.0, 4.0), (5.0, 6.0)),
        line(0.5, 1.0),
        line(0.0, 2.0),
        curve((0.0, 8.0), (2.5, 8.0)),
        curve((2.5, 0.0), (2.5, -8.0)),
        line(0.0, -2.0),
        line(0.5, -1.0),
        curve((5.0, -2.0), (5.0, -6.0)),
        line(0.0, -44.0),
    ],
};

static KNEELING: FigureOutline = FigureOutline {
    name: "kneeling",
    width: 16.0,
    height: 36.0,
    segments: &[
        line(0.0, 22.0),
        curve((0.0, 4.0), (5.0, 6.0)),
        line(0.5, 1.0),
        line(0.0, 1.0),
        curve((0.0, 6.0), (2.5, 6.0)),
        curve((2.5, 0.0), (2.5, -6.0)),
        line(0.0, -1.0),
        line(0.5, -1.0),
        curve((5.0, -2.0), (5.0, -6.0)),
        line(0.0, -22.0),
    ],
};

static THREE_HEADS: [FigurePlacement; 3] = [
    FigurePlacement {
        anchor: 12.0,
        outline: &HEAD_AND_SHOULDERS,
    },
    FigurePlacement {
        anchor: 36.0,
        outline: &HEAD_AND_SHOULDERS,
    },
    FigurePlacement {
        anchor: 60.0,
        outline: &HEAD_AND_SHOULDERS,
    },
];

static FOUR_STANDING: [FigurePlacement; 4] = [
    FigurePlacement {
        anchor: 12.0,
        outline: &STANDING,
    },
    FigurePlacement {
        anchor: 36.0,
        outline: &STANDING,
    },
    FigurePlacement {
        anchor: 60.0,
        outline: &STANDING,
    },
    FigurePlacement {
        anchor: 84.0,
        outline: &STANDING,
    },
];

static ONE_KNEELING: [FigurePlacement; 1] = [FigurePlacement {
    anchor: 18.0,
    outline: &KNEELING,
}];

const fn figure_target(
    class: u8,
    name: &'static str,
    size: (f64, f64),
    figures: &'static [FigurePlacement],
    distances: &'static [f64],
) -> CanonicalTarget {
    CanonicalTarget {
        family: Family::Figure,
        class,
        variant: Variant::Standard,
        name,
        width: size.0,
        height: size.1,
        face: Colour::Green,
        design: Design::Figures {
            figures,
            colour: Colour::Brown,
        },
        inner_extent: None,
        distances,
        unit: DistanceUnit::Yards,
    }
}

pub(super) static FIGURE: [CanonicalTarget; 3] = [
    figure_target(
        1,
        "Three head-and-shoulders figures",
        (72.0, 36.0),
        &THREE_HEADS,
        &[100.0, 200.0, 300.0],
    ),
    figure_target(
        2,
        "Four standing figures",
        (96.0, 72.0),
        &FOUR_STANDING,
        &[200.0, 400.0, 600.0],
    ),
    figure_target(
        3,
        "Single kneeling figure",
        (36.0, 48.0),
        &ONE_KNEELING,
        &[100.0, 200.0],
    ),
];
