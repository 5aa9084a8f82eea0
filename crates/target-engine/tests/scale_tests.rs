use target_engine::page::Rect;
use target_engine::scale::{fit, fixed};

const PAGES: [(f64, f64); 5] = [
    (612.0, 792.0),
    (792.0, 612.0),
    (595.2756, 841.8898),
    (1728.0, 2592.0),
    (300.0, 300.0),
];

const DESIGNS: [(f64, f64); 6] = [
    (3456.0, 5184.0),
    (6912.0, 5184.0),
    (5184.0, 5184.0),
    (72.0, 72.0),
    (2338.6, 467.7),
    (8640.0, 5184.0),
];

#[test]
fn test_letter_height_limited() {
    // 48 x 72 inch design on a Letter page
    let result = fit(612.0, 792.0, 48.0 * 72.0, 72.0 * 72.0);
    assert!((result.scaled_width - 528.0).abs() < 1e-9);
    assert!((result.scaled_height - 792.0).abs() < 1e-9);
    assert!((result.image_scale - 0.152778).abs() < 1e-6);
    assert!((result.delta_w - 42.0).abs() < 1e-9);
    assert_eq!(result.delta_h, 0.0);
}

#[test]
fn test_fit_properties() {
    for &(pw, ph) in &PAGES {
        for &(tw, th) in &DESIGNS {
            let result = fit(pw, ph, tw, th);

            // Aspect preserved
            let aspect = result.scaled_width / result.scaled_height;
            assert!((aspect - tw / th).abs() < 1e-9, "aspect for {tw}x{th} on {pw}x{ph}");

            // Contained
            assert!(result.scaled_width <= pw + 1e-9);
            assert!(result.scaled_height <= ph + 1e-9);

            // Touches at least one axis
            assert!(
                (result.scaled_width - pw).abs() < 1e-9 || (result.scaled_height - ph).abs() < 1e-9
            );

            // Offsets non-negative and centring
            assert!(result.delta_w >= 0.0 && result.delta_h >= 0.0);
            let region = result.region(&Rect::new(0.0, 0.0, pw, ph));
            assert!((region.center_x() - pw / 2.0).abs() < 1e-9);
            assert!((region.center_y() - ph / 2.0).abs() < 1e-9);
        }
    }
}

#[test]
fn test_fit_is_idempotent() {
    for &(pw, ph) in &PAGES {
        for &(tw, th) in &DESIGNS {
            let first = fit(pw, ph, tw, th);
            let again = fit(first.scaled_width, first.scaled_height, tw, th);
            assert!((again.image_scale - first.image_scale).abs() < 1e-12);
            assert!(again.delta_w < 1e-9 && again.delta_h < 1e-9);
        }
    }
}

#[test]
fn test_fitting_the_drawable_onto_itself_is_identity() {
    for &(pw, ph) in &PAGES {
        let result = fit(pw, ph, pw, ph);
        assert!((result.image_scale - 1.0).abs() < 1e-12, "{pw}x{ph}");
        assert!(result.delta_w.abs() < 1e-9);
        assert!(result.delta_h.abs() < 1e-9);
        assert!(!result.has_margin());
    }
}

#[test]
fn test_exact_aspect_has_no_margin() {
    let result = fit(1728.0, 2592.0, 3456.0, 5184.0);
    assert!(!result.has_margin());
}

#[test]
fn test_fixed_scale_centres() {
    let result = fixed(612.0, 792.0, 72.0, 72.0, 2.0).unwrap();
    assert_eq!(result.scaled_width, 144.0);
    assert_eq!(result.delta_w, 234.0);
    assert_eq!(result.delta_h, 324.0);
    assert!(fixed(612.0, 792.0, 72.0, 72.0, 9.0).is_none());
}
