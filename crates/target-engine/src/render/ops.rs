//! PDF content stream operators for draw items

use crate::constants::{BEZIER_CIRCLE_FACTOR, TEXT_FONT_NAME};
use crate::geometry::{DrawItem, Paint, PathSegment, Point, Primitive};
use crate::page::Rect;

/// Content stream for a page, clipped to `clip`
pub fn page_content(items: &[DrawItem], clip: &Rect) -> String {
    let mut ops = String::new();

    ops.push_str("q\n");
    ops.push_str(&format!(
        "{} {} {} {} re W n\n",
        num(clip.x),
        num(clip.y),
        num(clip.width),
        num(clip.height)
    ));

    for item in items {
        ops.push_str(&item_ops(item));
    }

    ops.push_str("Q\n");
    ops
}

fn item_ops(item: &DrawItem) -> String {
    if let Primitive::TextRun {
        position,
        font_size,
        text,
    } = &item.primitive
    {
        return text_ops(*position, *font_size, text, item.paint);
    }

    let mut ops = String::new();
    ops.push_str("q\n");
    ops.push_str(&paint_state(item.paint));
    ops.push_str(&path_ops(&item.primitive));
    ops.push_str(match item.paint {
        Paint::Fill(_) => "f\n",
        Paint::Stroke { .. } => "S\n",
    });
    ops.push_str("Q\n");
    ops
}

fn paint_state(paint: Paint) -> String {
    match paint {
        Paint::Fill(colour) => {
            let (r, g, b) = colour.rgb();
            format!("{} {} {} rg\n", num(r), num(g), num(b))
        }
        Paint::Stroke { colour, width } => {
            let (r, g, b) = colour.rgb();
            format!("{} {} {} RG {} w\n", num(r), num(g), num(b), num(width))
        }
    }
}

fn path_ops(primitive: &Primitive) -> String {
    match primitive {
        Primitive::Circle { center, radius } => ellipse_path(*center, *radius, *radius),
        Primitive::Ellipse { center, rx, ry } => ellipse_path(*center, *rx, *ry),
        Primitive::Rectangle { corner1, corner2 } => {
            let x = corner1.x.min(corner2.x);
            let y = corner1.y.min(corner2.y);
            format!(
                "{} {} {} {} re\n",
                num(x),
                num(y),
                num((corner2.x - corner1.x).abs()),
                num((corner2.y - corner1.y).abs())
            )
        }
        Primitive::Polyline { points } => {
            let mut ops = String::new();
            for (i, point) in points.iter().enumerate() {
                let op = if i == 0 { "m" } else { "l" };
                ops.push_str(&format!("{} {} {}\n", num(point.x), num(point.y), op));
            }
            ops
        }
        Primitive::Path { start, segments } => {
            let mut ops = format!("{} {} m\n", num(start.x), num(start.y));
            for segment in segments {
                match segment {
                    PathSegment::Line(p) => {
                        ops.push_str(&format!("{} {} l\n", num(p.x), num(p.y)));
                    }
                    // First control point is the current point
                    PathSegment::Curve { control, end } => {
                        ops.push_str(&format!(
                            "{} {} {} {} v\n",
                            num(control.x),
                            num(control.y),
                            num(end.x),
                            num(end.y)
                        ));
                    }
                }
            }
            ops.push_str("h\n");
            ops
        }
        Primitive::TextRun { .. } => String::new(),
    }
}

/// Ellipse as four cubic Béziers, counter-clockwise from the rightmost point
fn ellipse_path(center: Point, rx: f64, ry: f64) -> String {
    let (cx, cy) = (center.x, center.y);
    let kx = rx * BEZIER_CIRCLE_FACTOR;
    let ky = ry * BEZIER_CIRCLE_FACTOR;

    let mut ops = String::new();
    ops.push_str(&format!("{} {} m\n", num(cx + rx), num(cy)));
    let quadrants = [
        (cx + rx, cy + ky, cx + kx, cy + ry, cx, cy + ry),
        (cx - kx, cy + ry, cx - rx, cy + ky, cx - rx, cy),
        (cx - rx, cy - ky, cx - kx, cy - ry, cx, cy - ry),
        (cx + kx, cy - ry, cx + rx, cy - ky, cx + rx, cy),
    ];
    for (x1, y1, x2, y2, x3, y3) in quadrants {
        ops.push_str(&format!(
            "{} {} {} {} {} {} c\n",
            num(x1),
            num(y1),
            num(x2),
            num(y2),
            num(x3),
            num(y3)
        ));
    }
    ops.push_str("h\n");
    ops
}

fn text_ops(position: Point, font_size: f64, text: &str, paint: Paint) -> String {
    let colour = match paint {
        Paint::Fill(colour) | Paint::Stroke { colour, .. } => colour,
    };
    let (r, g, b) = colour.rgb();
    format!(
        "BT {} {} {} rg /{} {} Tf {} {} Td ({}) Tj ET\n",
        num(r),
        num(g),
        num(b),
        TEXT_FONT_NAME,
        num(font_size),
        num(position.x),
        num(position.y),
        escape_text(text)
    )
}

/// Escape a string for a PDF literal; characters outside ASCII become `?`
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '(' | ')' => {
                escaped.push('\\');
                escaped.push(c);
            }
            c if c.is_ascii() && !c.is_ascii_control() => escaped.push(c),
            _ => escaped.push('?'),
        }
    }
    escaped
}

/// Compact decimal form: at most four places, no trailing zeros
fn num(value: f64) -> String {
    let text = format!("{:.4}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    match text {
        "-0" | "" => "0".to_string(),
        _ => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Layer;
    use crate::types::Colour;

    #[test]
    fn test_num_formatting() {
        assert_eq!(num(612.0), "612");
        assert_eq!(num(0.5), "0.5");
        assert_eq!(num(1.0 / 3.0), "0.3333");
        assert_eq!(num(-0.00001), "0");
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a (b) \\c"), "a \\(b\\) \\\\c");
        assert_eq!(escape_text("Béziers"), "B?ziers");
    }

    #[test]
    fn test_circle_uses_four_curves() {
        let item = DrawItem::new(
            Layer::Rings,
            Paint::Fill(Colour::Black),
            Primitive::Circle {
                center: Point::new(100.0, 100.0),
                radius: 50.0,
            },
        );
        let ops = item_ops(&item);
        assert_eq!(ops.matches(" c\n").count(), 4);
        assert!(ops.contains("150 100 m\n"));
        assert!(ops.contains("0 0 0 rg\n"));
        assert!(ops.ends_with("f\nQ\n"));
    }

    #[test]
    fn test_path_curves_use_v() {
        let item = DrawItem::new(
            Layer::Figures,
            Paint::Fill(Colour::Brown),
            Primitive::Path {
                start: Point::new(0.0, 0.0),
                segments: vec![
                    PathSegment::Line(Point::new(0.0, 10.0)),
                    PathSegment::Curve {
                        control: Point::new(0.0, 15.0),
                        end: Point::new(5.0, 15.0),
                    },
                ],
            },
        );
        let ops = item_ops(&item);
        assert!(ops.contains("0 10 l\n0 15 5 15 v\nh\n"));
    }

    #[test]
    fn test_stroke_sets_width() {
        let item = DrawItem::new(
            Layer::Boundary,
            Paint::Stroke {
                colour: Colour::Black,
                width: 0.5,
            },
            Primitive::Polyline {
                points: vec![Point::new(0.0, 0.0), Point::new(0.0, 792.0)],
            },
        );
        let ops = item_ops(&item);
        assert!(ops.contains("0 0 0 RG 0.5 w\n0 0 m\n0 792 l\nS\n"));
    }

    #[test]
    fn test_text_run() {
        let item = DrawItem::new(
            Layer::Text,
            Paint::Fill(Colour::Black),
            Primitive::TextRun {
                position: Point::new(12.0, 770.0),
                font_size: 10.0,
                text: "Printed size: (x)".to_string(),
            },
        );
        assert_eq!(
            item_ops(&item),
            "BT 0 0 0 rg /F1 10 Tf 12 770 Td (Printed size: \\(x\\)) Tj ET\n"
        );
    }
}
