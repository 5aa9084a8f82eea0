//! Concentric ring sets and the calibration dot

use super::{DrawItem, Frame, Layer, Paint, Palette, Point, Primitive};
use crate::catalog::{RingFill, RingSet, RingShape};
use crate::constants::CROSSHAIR_LINE_WIDTH;
use crate::types::Colour;

/// Emit every ring of every set, outermost first within a set.
///
/// An annulus is a disc in the ring colour covered by an inset disc in the
/// ground colour, so painting order alone produces the line.
pub(super) fn ring_sets(sets: &[RingSet], frame: &Frame) -> Vec<DrawItem> {
    let mut items = Vec::new();

    for set in sets {
        let centre = frame.from_centre(set.offset.0, set.offset.1);
        for ring in set.rings {
            items.push(disc(frame, centre, ring.shape, ring.colour));
            if let RingFill::Line { width } = ring.fill {
                items.push(disc(frame, centre, ring.shape.inset(width), ring.ground));
            }
        }
    }

    items
}

fn disc(frame: &Frame, center: Point, shape: RingShape, colour: Colour) -> DrawItem {
    let primitive = match shape {
        RingShape::Circle { diameter } => Primitive::Circle {
            center,
            radius: frame.length(diameter) / 2.0,
        },
        RingShape::Ellipse { width, height } => Primitive::Ellipse {
            center,
            rx: frame.length(width) / 2.0,
            ry: frame.length(height) / 2.0,
        },
    };
    DrawItem::new(Layer::Rings, Paint::Fill(colour), primitive)
}

/// The dot, with a crosshair in the background colour across it
pub(super) fn dot(frame: &Frame, palette: &Palette) -> Vec<DrawItem> {
    let centre = frame.centre();
    let radius = frame.length(0.5);

    let stroke = Paint::Stroke {
        colour: palette.dot_ground,
        width: CROSSHAIR_LINE_WIDTH,
    };

    vec![
        DrawItem::new(
            Layer::Rings,
            Paint::Fill(palette.dot),
            Primitive::Circle {
                center: centre,
                radius,
            },
        ),
        DrawItem::new(
            Layer::Rings,
            stroke,
            Primitive::Polyline {
                points: vec![
                    Point::new(centre.x - radius, centre.y),
                    Point::new(centre.x + radius, centre.y),
                ],
            },
        ),
        DrawItem::new(
            Layer::Rings,
            stroke,
            Primitive::Polyline {
                points: vec![
                    Point::new(centre.x, centre.y - radius),
                    Point::new(centre.x, centre.y + radius),
                ],
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{lookup, Design};
    use crate::page::Rect;
    use crate::types::{Family, Variant};

    fn frame(scale: f64) -> Frame {
        let drawable = Rect::new(0.0, 0.0, 600.0, 800.0);
        Frame::new(drawable, Rect::centred(300.0, 400.0, 100.0, 100.0), scale)
    }

    #[test]
    fn test_annulus_emits_inset_disc() {
        let target = lookup(Family::Ring1883, 2, Variant::Standard).unwrap();
        let Design::Rings(sets) = target.design else {
            panic!("ring family without ring sets");
        };
        let items = ring_sets(sets, &frame(0.1));

        // Two annuli and a bull
        assert_eq!(items.len(), 5);
        match (&items[0].primitive, &items[1].primitive) {
            (Primitive::Circle { radius: outer, .. }, Primitive::Circle { radius: inner, .. }) => {
                assert!(inner < outer);
                assert_eq!(items[1].paint, Paint::Fill(Colour::White));
            }
            other => panic!("unexpected primitives {other:?}"),
        }
    }

    #[test]
    fn test_ellipse_semi_axes() {
        let target = lookup(Family::Ring1862, 1, Variant::Standard).unwrap();
        let Design::Rings(sets) = target.design else {
            panic!("ring family without ring sets");
        };
        let items = ring_sets(sets, &frame(1.0));
        match items[0].primitive {
            Primitive::Ellipse { rx, ry, center } => {
                assert_eq!(rx, 84.0 * 72.0 / 2.0);
                assert_eq!(ry, 66.0 * 72.0 / 2.0);
                assert_eq!(center, Point::new(300.0, 400.0));
            }
            ref other => panic!("expected ellipse, got {other:?}"),
        }
    }

    #[test]
    fn test_dot_crosshair() {
        let palette = Palette {
            dot: Colour::Red,
            dot_ground: Colour::Yellow,
            ..Palette::default()
        };
        let items = dot(&frame(2.0), &palette);
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].primitive, Primitive::Circle {
            center: Point::new(300.0, 400.0),
            radius: 72.0,
        });
        assert!(items[1..].iter().all(|item| matches!(
            item.paint,
            Paint::Stroke { colour: Colour::Yellow, .. }
        )));
    }
}
