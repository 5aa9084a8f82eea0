//! Geometry generation: catalog designs to page-space primitives
//!
//! All shapes are positioned through a [`Frame`], which carries the scaled
//! design region and the points-per-canonical-inch factor:
//! - Rings are centred on the drawable rectangle's midpoint
//! - Figures are anchored from the region's left edge
//! - Bands are offsets from the centre

mod bands;
mod boundary;
mod figures;
mod primitives;
mod rings;

pub use boundary::boundary_markers;
pub use primitives::*;

use crate::catalog::{CanonicalTarget, Design};
use crate::constants::POINTS_PER_INCH;
use crate::page::Rect;
use crate::types::Colour;

/// Maps canonical inches onto the page for one request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Drawable rectangle of the page
    pub drawable: Rect,
    /// Full scaled design; extends past the page in centre-only mode
    pub region: Rect,
    /// Points per canonical inch (`image_scale * 72`)
    pub points_per_inch: f64,
}

impl Frame {
    pub fn new(drawable: Rect, region: Rect, image_scale: f64) -> Self {
        Self {
            drawable,
            region,
            points_per_inch: image_scale * POINTS_PER_INCH,
        }
    }

    /// Scaled length of a canonical measurement
    pub fn length(&self, inches: f64) -> f64 {
        inches * self.points_per_inch
    }

    /// Midpoint of the drawable rectangle
    pub fn centre(&self) -> Point {
        Point::new(self.drawable.center_x(), self.drawable.center_y())
    }

    /// Point at a canonical offset from the drawable midpoint
    pub fn from_centre(&self, dx: f64, dy: f64) -> Point {
        self.offset(self.centre(), dx, dy)
    }

    /// Point at a canonical offset from the region's bottom-left corner
    pub fn from_origin(&self, dx: f64, dy: f64) -> Point {
        self.offset(Point::new(self.region.x, self.region.y), dx, dy)
    }

    /// Move `point` by a canonical offset
    pub fn offset(&self, point: Point, dx: f64, dy: f64) -> Point {
        Point::new(point.x + self.length(dx), point.y + self.length(dy))
    }
}

/// Request-chosen colours
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Upper half of a two-tone ground
    pub top: Colour,
    /// Lower half of a two-tone ground
    pub bottom: Colour,
    pub dot: Colour,
    pub dot_ground: Colour,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            top: Colour::Sky,
            bottom: Colour::Green,
            dot: Colour::Black,
            dot_ground: Colour::White,
        }
    }
}

/// Generate the background and design primitives for a target
pub fn generate(
    target: &CanonicalTarget,
    frame: &Frame,
    palette: &Palette,
    figure_centred: bool,
) -> Vec<DrawItem> {
    let mut items = background(target, frame, palette);

    match target.design {
        Design::Rings(sets) => items.extend(rings::ring_sets(sets, frame)),
        Design::Figures { figures, colour } => items.extend(figures::figures(
            figures,
            colour,
            target.height,
            frame,
            figure_centred,
        )),
        Design::Bands(pattern) => items.extend(bands::bands(&pattern, target.height, frame)),
        Design::Dot => items.extend(rings::dot(frame, palette)),
    }

    log::debug!(
        "{}: {} design primitives at {:.4} pt/in",
        target.name,
        items.len(),
        frame.points_per_inch
    );

    items
}

fn background(target: &CanonicalTarget, frame: &Frame, palette: &Palette) -> Vec<DrawItem> {
    let fill = |rect: Rect, colour: Colour| {
        DrawItem::new(
            Layer::Background,
            Paint::Fill(colour),
            Primitive::Rectangle {
                corner1: Point::new(rect.x, rect.y),
                corner2: Point::new(rect.right(), rect.top()),
            },
        )
    };

    let region = frame.region;
    match target.design {
        Design::Dot => vec![fill(frame.drawable, palette.dot_ground)],
        _ if target.family.is_two_tone() => {
            let half = region.height / 2.0;
            vec![
                fill(
                    Rect::new(region.x, region.y + half, region.width, half),
                    palette.top,
                ),
                fill(
                    Rect::new(region.x, region.y, region.width, half),
                    palette.bottom,
                ),
            ]
        }
        _ => vec![fill(region, target.face)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::lookup;
    use crate::types::{Family, Variant};

    fn letter_frame(scale: f64, width_in: f64, height_in: f64) -> Frame {
        let drawable = Rect::new(0.0, 0.0, 612.0, 792.0);
        let region = Rect::centred(
            306.0,
            396.0,
            width_in * scale * 72.0,
            height_in * scale * 72.0,
        );
        Frame::new(drawable, region, scale)
    }

    #[test]
    fn test_frame_offsets() {
        let frame = letter_frame(0.5, 10.0, 10.0);
        assert_eq!(frame.length(2.0), 72.0);
        assert_eq!(frame.from_centre(1.0, -1.0), Point::new(342.0, 360.0));
        assert_eq!(frame.from_origin(0.0, 0.0), Point::new(126.0, 216.0));
    }

    #[test]
    fn test_two_tone_background() {
        let target = lookup(Family::Figure, 1, Variant::Standard).unwrap();
        let frame = letter_frame(0.1, target.width, target.height);
        let palette = Palette::default();
        let items = generate(target, &frame, &palette, false);

        let backgrounds: Vec<_> = items
            .iter()
            .filter(|item| item.layer == Layer::Background)
            .collect();
        assert_eq!(backgrounds.len(), 2);
        assert_eq!(backgrounds[0].paint, Paint::Fill(Colour::Sky));
        assert_eq!(backgrounds[1].paint, Paint::Fill(Colour::Green));
    }

    #[test]
    fn test_ring_face_background() {
        let target = lookup(Family::Ring1908, 2, Variant::Standard).unwrap();
        let frame = letter_frame(0.1, target.width, target.height);
        let items = generate(target, &frame, &Palette::default(), false);
        assert_eq!(items[0].layer, Layer::Background);
        assert_eq!(items[0].paint, Paint::Fill(Colour::White));
    }
}
