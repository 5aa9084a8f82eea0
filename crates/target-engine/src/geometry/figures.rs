//! Silhouette figures

use super::{DrawItem, Frame, Layer, Paint, PathSegment, Primitive};
use crate::catalog::{FigurePlacement, Segment};
use crate::types::Colour;

/// Emit one filled path per placed figure.
///
/// Figures stand on the bottom edge of the design unless `centred`, in
/// which case each is centred vertically.
pub(super) fn figures(
    placements: &[FigurePlacement],
    colour: Colour,
    design_height: f64,
    frame: &Frame,
    centred: bool,
) -> Vec<DrawItem> {
    placements
        .iter()
        .map(|placement| {
            let outline = placement.outline;
            let left = placement.anchor - outline.width / 2.0;
            let bottom = if centred {
                (design_height - outline.height) / 2.0
            } else {
                0.0
            };

            let start = frame.from_origin(left, bottom);
            let mut current = start;
            let segments = outline
                .segments
                .iter()
                .map(|segment| match *segment {
                    Segment::Line { dx, dy } => {
                        current = frame.offset(current, dx, dy);
                        PathSegment::Line(current)
                    }
                    Segment::Curve { control, end } => {
                        let control = frame.offset(current, control.0, control.1);
                        current = frame.offset(current, end.0, end.1);
                        PathSegment::Curve {
                            control,
                            end: current,
                        }
                    }
                })
                .collect();

            DrawItem::new(
                Layer::Figures,
                Paint::Fill(colour),
                Primitive::Path { start, segments },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{lookup, Design};
    use crate::geometry::Point;
    use crate::page::Rect;
    use crate::types::{Family, Variant};

    /// Bounding box of a path's end and control points
    fn path_bounds(start: Point, segments: &[PathSegment]) -> (Point, Point) {
        let mut min = start;
        let mut max = start;
        let mut grow = |p: Point| {
            min = Point::new(min.x.min(p.x), min.y.min(p.y));
            max = Point::new(max.x.max(p.x), max.y.max(p.y));
        };
        for segment in segments {
            match *segment {
                PathSegment::Line(p) => grow(p),
                PathSegment::Curve { control, end } => {
                    grow(control);
                    grow(end);
                }
            }
        }
        (min, max)
    }

    fn placed(class: u8, centred: bool) -> (Frame, Vec<DrawItem>) {
        let target = lookup(Family::Figure, class, Variant::Standard).unwrap();
        let Design::Figures { figures: list, colour } = target.design else {
            panic!("figure family without figures");
        };
        let k = 0.1;
        let region = Rect::centred(306.0, 396.0, target.width * k * 72.0, target.height * k * 72.0);
        let frame = Frame::new(Rect::new(0.0, 0.0, 612.0, 792.0), region, k);
        let items = figures(list, colour, target.height, &frame, centred);
        (frame, items)
    }

    #[test]
    fn test_figures_inside_region() {
        for class in 1..=3 {
            let (frame, items) = placed(class, false);
            assert!(!items.is_empty());
            for item in &items {
                let Primitive::Path { start, segments } = &item.primitive else {
                    panic!("figure should be a path");
                };
                let (min, max) = path_bounds(*start, segments);
                assert!(min.x >= frame.region.x - 1e-6);
                assert!(max.x <= frame.region.right() + 1e-6);
                assert!((min.y - frame.region.y).abs() < 1e-6);
                assert!(max.y <= frame.region.top() + 1e-6);
            }
        }
    }

    #[test]
    fn test_centred_figures_straddle_middle() {
        let (frame, items) = placed(1, true);
        for item in &items {
            let Primitive::Path { start, segments } = &item.primitive else {
                panic!("figure should be a path");
            };
            let (min, max) = path_bounds(*start, segments);
            let middle = (min.y + max.y) / 2.0;
            assert!((middle - frame.region.center_y()).abs() < 1e-6);
        }
    }
}
