//! Page composition: one request in, one ordered list of draw items out
//!
//! Pipeline: validate → resolve page → scale → generate geometry →
//! boundary markers → annotations → sort by layer.

use crate::annotate::{annotation_lines, layout_text, title, OversizeWarning};
use crate::catalog::CanonicalTarget;
use crate::constants::{TEXT_FONT_SIZE, WARNING_FONT_SIZE};
use crate::geometry::{self, boundary_markers, DrawItem, Frame, Layer};
use crate::options::TargetRequest;
use crate::page::{resolve_page, Rect};
use crate::scale::{self, ScaleMode, ScaleResult};
use crate::types::{Orientation, PaperSize, Result};
use crate::units::inches_to_points;

/// A fully composed page, ready for the rendering backend
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedPage {
    pub paper: PaperSize,
    pub orientation: Orientation,
    pub media: Rect,
    pub drawable: Rect,
    pub target: &'static CanonicalTarget,
    pub mode: ScaleMode,
    /// `None` when the target did not fit and a warning was composed instead
    pub scale: Option<ScaleResult>,
    /// Full scaled design on the page
    pub region: Option<Rect>,
    /// Draw items in paint order
    pub items: Vec<DrawItem>,
    /// The text lines placed on the page
    pub annotations: Vec<String>,
    pub warning: Option<OversizeWarning>,
}

impl ComposedPage {
    pub fn count(&self, layer: Layer) -> usize {
        self.items.iter().filter(|item| item.layer == layer).count()
    }

    pub fn boundary_lines(&self) -> usize {
        self.items.iter().filter(|item| item.is_boundary_line()).count()
    }
}

/// Compose a request into a page.
///
/// All input checks run before any geometry is produced. A fixed-scale
/// design that overflows the drawable rectangle yields a page carrying an
/// [`OversizeWarning`] instead of the target.
pub fn compose(request: &TargetRequest) -> Result<ComposedPage> {
    request.validate()?;

    let target = request.target()?;
    let page = resolve_page(
        request.effective_paper(),
        request.effective_orientation(),
        request.trim,
    )?;
    let drawable = page.drawable;
    let mode = request.scale_mode(target);
    let (tw, th) = (inches_to_points(target.width), inches_to_points(target.height));

    let fitted = match mode {
        ScaleMode::Fit => Some(scale::fit(drawable.width, drawable.height, tw, th)),
        ScaleMode::CentreOnly => {
            let (iw, ih) = target.inner_extent.unwrap_or((target.width, target.height));
            Some(scale::fit(
                drawable.width,
                drawable.height,
                inches_to_points(iw),
                inches_to_points(ih),
            ))
        }
        ScaleMode::Fixed(image_scale) => {
            scale::fixed(drawable.width, drawable.height, tw, th, image_scale)
        }
    };

    let mut composed = ComposedPage {
        paper: page.paper,
        orientation: page.orientation,
        media: page.media,
        drawable,
        target,
        mode,
        scale: fitted,
        region: None,
        items: Vec::new(),
        annotations: Vec::new(),
        warning: None,
    };

    let Some(result) = fitted else {
        let image_scale = match mode {
            ScaleMode::Fixed(image_scale) => image_scale,
            _ => 1.0,
        };
        let warning = OversizeWarning {
            target: title(target),
            requested: (tw * image_scale, th * image_scale),
            available: (drawable.width, drawable.height),
        };
        log::warn!(
            "{} is {:.1}x{:.1}pt but only {:.1}x{:.1}pt is printable, composing warning page",
            target.name,
            warning.requested.0,
            warning.requested.1,
            drawable.width,
            drawable.height
        );
        composed.annotations = warning.lines();
        composed.items = layout_text(&composed.annotations, &drawable, WARNING_FONT_SIZE);
        composed.warning = Some(warning);
        return Ok(composed);
    };

    let centre_only = mode == ScaleMode::CentreOnly;
    let region = if centre_only {
        Rect::centred(
            drawable.center_x(),
            drawable.center_y(),
            tw * result.image_scale,
            th * result.image_scale,
        )
    } else {
        result.region(&drawable)
    };

    log::debug!(
        "{}: {:?} scale {:.5}, scaled {:.2}x{:.2}pt, offsets ({:.2}, {:.2})",
        target.name,
        mode,
        result.image_scale,
        region.width,
        region.height,
        result.delta_w,
        result.delta_h
    );

    let frame = Frame::new(drawable, region, result.image_scale);
    let mut items = geometry::generate(target, &frame, &request.palette(), request.figure_centred);
    items.extend(boundary_markers(&result, &region, centre_only));

    let annotations = annotation_lines(
        target,
        &request.distances(target),
        result.image_scale,
        &region,
        &request.description_lines(),
    );
    items.extend(layout_text(&annotations, &drawable, TEXT_FONT_SIZE));

    // Stable: keeps generation order within a layer
    items.sort_by_key(|item| item.layer);

    composed.region = Some(region);
    composed.items = items;
    composed.annotations = annotations;
    Ok(composed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Family;

    #[test]
    fn test_layers_are_ordered() {
        let page = compose(&TargetRequest::default()).unwrap();
        assert!(page
            .items
            .windows(2)
            .all(|pair| pair[0].layer <= pair[1].layer));
        assert_eq!(page.items.last().map(|item| item.layer), Some(Layer::Text));
    }

    #[test]
    fn test_centre_only_region_overflows() {
        let request = TargetRequest {
            family: Family::Ring1908,
            class: 1,
            centre: true,
            ..TargetRequest::default()
        };
        let page = compose(&request).unwrap();
        let region = page.region.unwrap();
        assert!(!page.drawable.contains(&region, 1e-6));
        assert_eq!(page.boundary_lines(), 0);
    }

    #[test]
    fn test_invalid_request_composes_nothing() {
        let request = TargetRequest {
            trim: -1.0,
            ..TargetRequest::default()
        };
        assert!(compose(&request).is_err());
    }
}
