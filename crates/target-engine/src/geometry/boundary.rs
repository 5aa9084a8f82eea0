//! Lines marking the edge of the scaled design

use super::{DrawItem, Layer, Paint, Point, Primitive};
use crate::constants::BOUNDARY_LINE_WIDTH;
use crate::page::Rect;
use crate::scale::ScaleResult;
use crate::types::Colour;

/// Four full-length edge lines around `region`.
///
/// Empty when the design fills the drawable rectangle on both axes, or
/// when the page shows only the centre of the design.
pub fn boundary_markers(scale: &ScaleResult, region: &Rect, centre_only: bool) -> Vec<DrawItem> {
    if centre_only || !scale.has_margin() {
        return Vec::new();
    }

    let (x1, y1, x2, y2) = region.corners();
    let paint = Paint::Stroke {
        colour: Colour::Black,
        width: BOUNDARY_LINE_WIDTH,
    };

    [
        [(x1, y1), (x1, y2)],
        [(x2, y1), (x2, y2)],
        [(x1, y1), (x2, y1)],
        [(x1, y2), (x2, y2)],
    ]
    .into_iter()
    .map(|[from, to]| {
        DrawItem::new(
            Layer::Boundary,
            paint,
            Primitive::Polyline {
                points: vec![Point::new(from.0, from.1), Point::new(to.0, to.1)],
            },
        )
    })
    .collect()
}
