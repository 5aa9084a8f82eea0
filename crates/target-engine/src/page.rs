//! Page geometry: media rectangle, orientation and trim

use crate::types::{Orientation, PaperSize, Result, TargetError};
use crate::units::{inches_to_points, points_to_inches};

/// A rectangular area in points, origin at the bottom-left of the page
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f64,
    /// Y position (bottom edge)
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size centred on a point
    pub fn centred(center_x: f64, center_y: f64, width: f64, height: f64) -> Self {
        Self::new(center_x - width / 2.0, center_y - height / 2.0, width, height)
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    /// Center x coordinate
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Center y coordinate
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Corners as `(x1, y1, x2, y2)`
    pub fn corners(&self) -> (f64, f64, f64, f64) {
        (self.x, self.y, self.right(), self.top())
    }

    pub fn contains(&self, other: &Rect, tolerance: f64) -> bool {
        other.x >= self.x - tolerance
            && other.y >= self.y - tolerance
            && other.right() <= self.right() + tolerance
            && other.top() <= self.top() + tolerance
    }
}

/// Resolved media and drawable rectangles for one request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub paper: PaperSize,
    pub orientation: Orientation,
    /// Full sheet, origin at zero
    pub media: Rect,
    /// Area left after the trim margin is taken off every edge
    pub drawable: Rect,
}

/// Resolve a paper size, orientation and trim margin (inches) into page rectangles.
///
/// Landscape exchanges the media axes before the trim is applied. The trim must
/// leave a drawable rectangle of positive size on both axes.
pub fn resolve_page(
    paper: PaperSize,
    orientation: Orientation,
    trim_in: f64,
) -> Result<PageGeometry> {
    let (width, height) = paper.dimensions_with_orientation(orientation);
    let max_trim_in = points_to_inches(width.min(height)) / 2.0;

    if !trim_in.is_finite() || trim_in < 0.0 || trim_in >= max_trim_in {
        return Err(TargetError::DimensionOutOfRange {
            name: "trim",
            value: trim_in,
            min: 0.0,
            max: max_trim_in,
        });
    }

    let trim = inches_to_points(trim_in);
    let media = Rect::new(0.0, 0.0, width, height);
    let drawable = Rect::new(trim, trim, width - 2.0 * trim, height - 2.0 * trim);

    log::debug!(
        "resolved {} {:?}: media {}x{}pt, drawable {}x{}pt",
        paper,
        orientation,
        width,
        height,
        drawable.width,
        drawable.height
    );

    Ok(PageGeometry {
        paper,
        orientation,
        media,
        drawable,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_helpers() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.top(), 70.0);
        assert_eq!(rect.center_x(), 60.0);
        assert_eq!(rect.center_y(), 45.0);
        assert_eq!(rect.corners(), (10.0, 20.0, 110.0, 70.0));
    }

    #[test]
    fn test_centred_rect() {
        let rect = Rect::centred(306.0, 396.0, 528.0, 792.0);
        assert_eq!(rect.x, 42.0);
        assert_eq!(rect.y, 0.0);
        assert_eq!(rect.right(), 570.0);
    }

    #[test]
    fn test_landscape_swaps_before_trim() {
        let page = resolve_page(PaperSize::Letter, Orientation::Landscape, 0.5).unwrap();
        assert_eq!(page.media, Rect::new(0.0, 0.0, 792.0, 612.0));
        assert_eq!(page.drawable, Rect::new(36.0, 36.0, 720.0, 540.0));
    }

    #[test]
    fn test_zero_trim_keeps_media() {
        let page = resolve_page(PaperSize::Letter, Orientation::Portrait, 0.0).unwrap();
        assert_eq!(page.drawable, page.media);
    }

    #[test]
    fn test_contains_with_tolerance() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(outer.contains(&Rect::new(0.0, 0.0, 100.0, 100.0), 0.0));
        assert!(outer.contains(&Rect::new(-1e-9, 0.0, 100.0, 100.0), 1e-6));
        assert!(!outer.contains(&Rect::new(-1.0, 0.0, 100.0, 100.0), 1e-6));
    }
}
