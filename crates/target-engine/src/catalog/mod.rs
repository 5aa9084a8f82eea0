//! Static catalog of canonical target designs
//!
//! Every entry is a compile-time constant keyed by family, size class and
//! variant. Dimensions are canonical inches; the engine scales them onto
//! the page. Lookups never fall back to a default entry.

mod figures;
mod rings;
mod service;
mod special;

use crate::types::{Colour, DistanceUnit, Family, Result, TargetError, Variant};

/// Outline of a single ring
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RingShape {
    Circle { diameter: f64 },
    Ellipse { width: f64, height: f64 },
}

impl RingShape {
    /// Full width and height of the ring
    pub fn extent(self) -> (f64, f64) {
        match self {
            RingShape::Circle { diameter } => (diameter, diameter),
            RingShape::Ellipse { width, height } => (width, height),
        }
    }

    /// Shrink the outline by `amount` on every side
    pub fn inset(self, amount: f64) -> RingShape {
        match self {
            RingShape::Circle { diameter } => RingShape::Circle {
                diameter: (diameter - 2.0 * amount).max(0.0),
            },
            RingShape::Ellipse { width, height } => RingShape::Ellipse {
                width: (width - 2.0 * amount).max(0.0),
                height: (height - 2.0 * amount).max(0.0),
            },
        }
    }
}

/// How a ring is painted
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RingFill {
    /// Filled disc (aiming mark, bull)
    Solid,
    /// Annulus of the given line width in canonical inches
    Line { width: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub shape: RingShape,
    pub fill: RingFill,
    /// Colour of the ring itself
    pub colour: Colour,
    /// Colour painted back inside an annulus
    pub ground: Colour,
}

/// Concentric rings sharing one centre
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSet {
    /// Offset of the shared centre from the design centre, canonical inches
    pub offset: (f64, f64),
    /// Outermost ring first
    pub rings: &'static [Ring],
}

/// One step of a figure outline, relative to the current point
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    Line { dx: f64, dy: f64 },
    /// Curve whose first control point is the current point
    Curve {
        control: (f64, f64),
        end: (f64, f64),
    },
}

/// Closed silhouette outline starting at its bottom-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureOutline {
    pub name: &'static str,
    pub width: f64,
    pub height: f64,
    pub segments: &'static [Segment],
}

/// A figure placed along the target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigurePlacement {
    /// Distance of the figure's centre line from the design's left edge, canonical inches
    pub anchor: f64,
    pub outline: &'static FigureOutline,
}

/// Rectangular region given by size and centre offset from the design centre
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub width: f64,
    pub height: f64,
    pub offset: (f64, f64),
}

/// Vertical band with symmetric patches and optional side regions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandPattern {
    /// Width of the full-height centre band
    pub band_width: f64,
    pub band_colour: Colour,
    /// Patch above centre; the one below is its mirror
    pub patch: Region,
    pub patch_colour: Colour,
    /// Right-hand side region; the left one is its mirror
    pub side: Option<Region>,
    pub side_colour: Colour,
}

/// Per-family shape emission strategy
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Design {
    Rings(&'static [RingSet]),
    Figures {
        figures: &'static [FigurePlacement],
        colour: Colour,
    },
    Bands(BandPattern),
    /// Single disc whose colours come from the request
    Dot,
}

/// Immutable canonical description of one target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanonicalTarget {
    pub family: Family,
    pub class: u8,
    pub variant: Variant,
    pub name: &'static str,
    /// Canonical width in inches
    pub width: f64,
    /// Canonical height in inches
    pub height: f64,
    /// Colour of the target face behind the design
    pub face: Colour,
    pub design: Design,
    /// Inner scoring ring extent, used by centre-only scaling
    pub inner_extent: Option<(f64, f64)>,
    /// Distances the original was shot at
    pub distances: &'static [f64],
    pub unit: DistanceUnit,
}

/// Look up the canonical design for a family, class and variant
pub fn lookup(family: Family, class: u8, variant: Variant) -> Result<&'static CanonicalTarget> {
    let entry = match (family, variant) {
        (Family::Ring1862, Variant::Standard) => rings::RING_1862.get(class_index(class)),
        (Family::Ring1883, Variant::Standard) => rings::RING_1883.get(class_index(class)),
        (Family::Ring1908, Variant::Standard) => rings::RING_1908.get(class_index(class)),
        (Family::Figure, Variant::Standard) => figures::FIGURE.get(class_index(class)),
        (Family::Service, Variant::Standard) => service::SERVICE.get(class_index(class)),
        (Family::Dot, Variant::Standard) if class == 1 => Some(&special::DOT),
        (Family::Biathlon, Variant::Prone) if class == 1 => Some(&special::BIATHLON_PRONE),
        (Family::Biathlon, Variant::Standing) if class == 1 => Some(&special::BIATHLON_STANDING),
        _ => None,
    };

    entry.ok_or(TargetError::CatalogMiss {
        family,
        class,
        variant,
    })
}

/// Every entry in the catalog
pub fn entries() -> impl Iterator<Item = &'static CanonicalTarget> {
    rings::RING_1862
        .iter()
        .chain(rings::RING_1883.iter())
        .chain(rings::RING_1908.iter())
        .chain(figures::FIGURE.iter())
        .chain(service::SERVICE.iter())
        .chain([
            &special::DOT,
            &special::BIATHLON_PRONE,
            &special::BIATHLON_STANDING,
        ])
}

/// Classes are numbered from 1; anything else misses every table
fn class_index(class: u8) -> usize {
    usize::from(class).wrapping_sub(1)
}
