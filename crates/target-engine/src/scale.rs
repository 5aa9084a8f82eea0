//! Aspect-preserving fit of a canonical design into the drawable rectangle
//!
//! Every family goes through the same law: the largest uniform scale that keeps
//! the design inside the drawable rectangle, centred on the axis with room left.

use crate::constants::OFFSET_EPSILON;
use crate::page::Rect;

/// How the canonical design is scaled onto the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleMode {
    /// Fit the full design
    Fit,
    /// Fit only the inner scoring extent; the outer design runs off the page
    CentreOnly,
    /// A scale fixed by the request (true-size dots, range equivalence)
    Fixed(f64),
}

/// Result of scaling a design of `(tw, th)` points into `(pw, ph)` points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleResult {
    /// Uniform multiplier applied to canonical measurements
    pub image_scale: f64,
    /// Scaled design width in points
    pub scaled_width: f64,
    /// Scaled design height in points
    pub scaled_height: f64,
    /// Horizontal centering offset in points
    pub delta_w: f64,
    /// Vertical centering offset in points
    pub delta_h: f64,
}

impl ScaleResult {
    /// Whether the scaled design leaves room on either axis
    pub fn has_margin(&self) -> bool {
        self.delta_w > OFFSET_EPSILON || self.delta_h > OFFSET_EPSILON
    }

    /// The scaled region inside `drawable`, offset by the centering deltas
    pub fn region(&self, drawable: &Rect) -> Rect {
        Rect::new(
            drawable.x + self.delta_w,
            drawable.y + self.delta_h,
            self.scaled_width,
            self.scaled_height,
        )
    }
}

/// Largest scale at which a `tw` × `th` design fits in a `pw` × `ph` rectangle.
///
/// The design touches the rectangle on at least one axis and keeps its aspect
/// ratio. All four dimensions must be positive.
pub fn fit(pw: f64, ph: f64, tw: f64, th: f64) -> ScaleResult {
    let target_ratio = tw / th;
    let page_ratio = pw / ph;

    let (scaled_width, scaled_height) = if page_ratio > target_ratio {
        // Page relatively wider: height-limited
        (tw * ph / th, ph)
    } else {
        // Width-limited
        (pw, th * pw / tw)
    };

    ScaleResult {
        image_scale: scaled_height / th,
        scaled_width,
        scaled_height,
        delta_w: ((pw - scaled_width) / 2.0).max(0.0),
        delta_h: ((ph - scaled_height) / 2.0).max(0.0),
    }
}

/// Scale a design by a fixed factor, or `None` when it would overflow the rectangle
pub fn fixed(pw: f64, ph: f64, tw: f64, th: f64, image_scale: f64) -> Option<ScaleResult> {
    let scaled_width = tw * image_scale;
    let scaled_height = th * image_scale;

    if scaled_width > pw + OFFSET_EPSILON || scaled_height > ph + OFFSET_EPSILON {
        return None;
    }

    Some(ScaleResult {
        image_scale,
        scaled_width,
        scaled_height,
        delta_w: ((pw - scaled_width) / 2.0).max(0.0),
        delta_h: ((ph - scaled_height) / 2.0).max(0.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_width_limited() {
        // Source is 800x600, target is 400x400
        let result = fit(400.0, 400.0, 800.0, 600.0);
        assert!((result.image_scale - 0.5).abs() < 1e-12);
        assert_eq!(result.scaled_width, 400.0);
        assert_eq!(result.delta_w, 0.0);
        assert!((result.delta_h - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_fit_height_limited() {
        let result = fit(400.0, 400.0, 400.0, 800.0);
        assert!((result.image_scale - 0.5).abs() < 1e-12);
        assert_eq!(result.scaled_height, 400.0);
        assert!((result.delta_w - 100.0).abs() < 1e-9);
        assert_eq!(result.delta_h, 0.0);
    }

    #[test]
    fn test_fixed_rejects_overflow() {
        assert!(fixed(100.0, 100.0, 50.0, 50.0, 2.0).is_some());
        assert!(fixed(100.0, 100.0, 50.0, 50.0, 2.1).is_none());
        assert!(fixed(100.0, 300.0, 60.0, 10.0, 2.0).is_none());
    }

    #[test]
    fn test_region_offsets() {
        let result = fit(612.0, 792.0, 3456.0, 5184.0);
        let region = result.region(&Rect::new(0.0, 0.0, 612.0, 792.0));
        assert!((region.x - 42.0).abs() < 1e-9);
        assert_eq!(region.y, 0.0);
        assert!(result.has_margin());
    }
}
