//! Equivalent-distance and printed-size text
//!
//! Every number printed here is derived from the same `image_scale` the
//! geometry was drawn with, so the text always agrees with the drawing.

use std::fmt;

use crate::catalog::CanonicalTarget;
use crate::constants::{LINE_SPACING, TEXT_INSET};
use crate::geometry::{DrawItem, Layer, Paint, Point, Primitive};
use crate::page::Rect;
use crate::types::{Colour, DistanceUnit};
use crate::units::{points_to_inches, points_to_mm, round};

/// One "shooting at X is equivalent to original at Y" statement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equivalence {
    /// Distance to shoot the printed target at, in the family's unit
    pub shooting: f64,
    /// `shooting` in the other unit
    pub converted: f64,
    /// Distance the original was shot at
    pub canonical: f64,
    pub unit: DistanceUnit,
}

impl Equivalence {
    /// The equivalent is rounded to whole units, then the rounded value is
    /// converted and rounded again so both halves of the line agree.
    pub fn new(canonical: f64, image_scale: f64, unit: DistanceUnit) -> Self {
        let shooting = round(canonical * image_scale, 0);
        Self {
            shooting,
            converted: round(unit.convert(shooting), 0),
            canonical,
            unit,
        }
    }
}

impl fmt::Display for Equivalence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Shooting at {} {} ({} {}) is equivalent to original at {} {}",
            number(self.shooting),
            self.unit.label(),
            number(self.converted),
            self.unit.other().label(),
            number(self.canonical),
            self.unit.label()
        )
    }
}

/// One equivalence per canonical distance, in catalog order
pub fn equivalent_distances(
    image_scale: f64,
    distances: &[f64],
    unit: DistanceUnit,
) -> Vec<Equivalence> {
    distances
        .iter()
        .map(|&distance| Equivalence::new(distance, image_scale, unit))
        .collect()
}

/// Physical size of the printed design
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrintedSize {
    pub width_in: f64,
    pub height_in: f64,
    pub width_mm: f64,
    pub height_mm: f64,
}

impl PrintedSize {
    /// Inches to two places, millimetres to one
    pub fn from_points(width: f64, height: f64) -> Self {
        Self {
            width_in: round(points_to_inches(width), 2),
            height_in: round(points_to_inches(height), 2),
            width_mm: round(points_to_mm(width), 1),
            height_mm: round(points_to_mm(height), 1),
        }
    }
}

impl fmt::Display for PrintedSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Printed size: {:.2} x {:.2} in ({:.1} x {:.1} mm)",
            self.width_in, self.height_in, self.width_mm, self.height_mm
        )
    }
}

/// The requested design does not fit the drawable rectangle.
///
/// Not an error: the page is still produced, carrying this text instead of
/// the target.
#[derive(Debug, Clone, PartialEq)]
pub struct OversizeWarning {
    pub target: String,
    /// Requested design size in points
    pub requested: (f64, f64),
    /// Drawable rectangle size in points
    pub available: (f64, f64),
}

impl OversizeWarning {
    pub fn lines(&self) -> Vec<String> {
        let size = |(w, h): (f64, f64)| {
            format!(
                "{:.1} x {:.1} mm",
                round(points_to_mm(w), 1),
                round(points_to_mm(h), 1)
            )
        };
        vec![
            format!("WARNING: {} does not fit on this page", self.target),
            format!("Requested size: {}", size(self.requested)),
            format!("Printable area: {}", size(self.available)),
            "Choose a larger paper size or a smaller target.".to_string(),
        ]
    }
}

impl fmt::Display for OversizeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

/// Title, equivalence lines and printed size for a drawn target.
///
/// `region` is the full scaled design, which in centre-only mode is larger
/// than the fitted inner extent.
pub fn annotation_lines(
    target: &CanonicalTarget,
    distances: &[f64],
    image_scale: f64,
    region: &Rect,
    extra: &[String],
) -> Vec<String> {
    let mut lines = vec![title(target)];
    lines.extend(extra.iter().cloned());
    lines.extend(
        equivalent_distances(image_scale, distances, target.unit)
            .iter()
            .map(ToString::to_string),
    );
    lines.push(PrintedSize::from_points(region.width, region.height).to_string());
    lines
}

pub fn title(target: &CanonicalTarget) -> String {
    format!("{} class {}: {}", target.family, target.class, target.name)
}

/// Stack text lines downward from the top-left of `drawable`
pub fn layout_text(lines: &[String], drawable: &Rect, font_size: f64) -> Vec<DrawItem> {
    let x = drawable.x + TEXT_INSET;
    let top = drawable.top() - TEXT_INSET - font_size;
    let step = font_size * LINE_SPACING;

    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            DrawItem::new(
                Layer::Text,
                Paint::Fill(Colour::Black),
                Primitive::TextRun {
                    position: Point::new(x, top - step * i as f64),
                    font_size,
                    text: line.clone(),
                },
            )
        })
        .collect()
}

/// Whole numbers print without a fractional part
fn number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::lookup;
    use crate::scale;
    use crate::types::{Family, Variant};

    #[test]
    fn test_equivalence_wording() {
        let eq = Equivalence::new(300.0, 0.1528, DistanceUnit::Yards);
        assert_eq!(eq.shooting, 46.0);
        assert_eq!(eq.converted, 42.0);
        assert_eq!(
            eq.to_string(),
            "Shooting at 46 Yards (42 Metres) is equivalent to original at 300 Yards"
        );
    }

    #[test]
    fn test_converts_the_rounded_distance() {
        let eq = Equivalence::new(1000.0, 0.0515, DistanceUnit::Yards);
        assert_eq!(
            eq.to_string(),
            "Shooting at 52 Yards (48 Metres) is equivalent to original at 1000 Yards"
        );

        let eq = Equivalence::new(300.0, 10.4 / 300.0, DistanceUnit::Yards);
        assert_eq!((eq.shooting, eq.converted), (10.0, 9.0));
    }

    #[test]
    fn test_metres_convert_to_yards() {
        let eq = Equivalence::new(50.0, 0.2, DistanceUnit::Metres);
        assert_eq!(
            eq.to_string(),
            "Shooting at 10 Metres (11 Yards) is equivalent to original at 50 Metres"
        );
    }

    #[test]
    fn test_printed_size() {
        let size = PrintedSize::from_points(528.0, 792.0);
        assert_eq!(
            size.to_string(),
            "Printed size: 7.33 x 11.00 in (186.3 x 279.4 mm)"
        );
    }

    #[test]
    fn test_annotation_lines_order() {
        let target = lookup(Family::Ring1883, 3, Variant::Standard).unwrap();
        let result = scale::fit(612.0, 792.0, target.width * 72.0, target.height * 72.0);
        let region = result.region(&Rect::new(0.0, 0.0, 612.0, 792.0));
        let lines = annotation_lines(target, target.distances, result.image_scale, &region, &[]);

        assert_eq!(lines.len(), 2 + target.distances.len());
        assert!(lines[0].starts_with("1883 class 3"));
        assert!(lines[1].starts_with("Shooting at "));
        assert!(lines.last().unwrap().starts_with("Printed size: "));
    }

    #[test]
    fn test_layout_runs_downward() {
        let lines = vec!["one".to_string(), "two".to_string()];
        let items = layout_text(&lines, &Rect::new(0.0, 0.0, 612.0, 792.0), 10.0);
        let ys: Vec<f64> = items
            .iter()
            .map(|item| match item.primitive {
                Primitive::TextRun { position, .. } => position.y,
                _ => panic!("expected text"),
            })
            .collect();
        assert_eq!(ys, vec![770.0, 757.5]);
    }

    #[test]
    fn test_warning_lines() {
        let warning = OversizeWarning {
            target: "Calibration dot".to_string(),
            requested: (72.0 * 500.0 / 25.4, 72.0 * 500.0 / 25.4),
            available: (612.0, 792.0),
        };
        let lines = warning.lines();
        assert_eq!(lines[1], "Requested size: 500.0 x 500.0 mm");
        assert_eq!(lines[2], "Printable area: 215.9 x 279.4 mm");
    }
}
