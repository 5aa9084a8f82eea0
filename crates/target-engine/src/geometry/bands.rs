//! Band, patch and side regions of the service targets

use super::{DrawItem, Frame, Layer, Paint, Primitive};
use crate::catalog::{BandPattern, Region};
use crate::types::Colour;

pub(super) fn bands(pattern: &BandPattern, design_height: f64, frame: &Frame) -> Vec<DrawItem> {
    let mut items = vec![rect(
        frame,
        pattern.band_colour,
        Region {
            width: pattern.band_width,
            height: design_height,
            offset: (0.0, 0.0),
        },
    )];

    for patch in mirrored(pattern.patch, false) {
        items.push(rect(frame, pattern.patch_colour, patch));
    }
    if let Some(side) = pattern.side {
        for side in mirrored(side, true) {
            items.push(rect(frame, pattern.side_colour, side));
        }
    }

    items
}

/// A region and its reflection through the centre on one axis
fn mirrored(region: Region, horizontal: bool) -> [Region; 2] {
    let (dx, dy) = region.offset;
    let reflected = if horizontal { (-dx, dy) } else { (dx, -dy) };
    [
        region,
        Region {
            offset: reflected,
            ..region
        },
    ]
}

fn rect(frame: &Frame, colour: Colour, region: Region) -> DrawItem {
    let (dx, dy) = region.offset;
    let corner1 = frame.from_centre(dx - region.width / 2.0, dy - region.height / 2.0);
    let corner2 = frame.from_centre(dx + region.width / 2.0, dy + region.height / 2.0);
    DrawItem::new(
        Layer::Figures,
        Paint::Fill(colour),
        Primitive::Rectangle { corner1, corner2 },
    )
}
