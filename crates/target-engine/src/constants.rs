//! Shared constants for target generation
//!
//! Unit factors, line weights and text metrics used across the engine.
//! These are process-wide read-only values, never re-derived per request.

// =============================================================================
// Unit Conversion
// =============================================================================

/// PostScript points per inch
pub const POINTS_PER_INCH: f64 = 72.0;

/// Millimetres per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Points per millimetre (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f64 = POINTS_PER_INCH / MM_PER_INCH; // ≈ 2.83465

/// Metres per yard (exact by definition)
pub const METRES_PER_YARD: f64 = 0.9144;

// =============================================================================
// Geometry
// =============================================================================

/// Offsets below this many points count as zero when deciding on boundary markers
pub const OFFSET_EPSILON: f64 = 1e-6;

/// Control point factor for approximating circles with Bezier curves.
/// 4 * (sqrt(2) - 1) / 3 ≈ 0.552284749831
pub const BEZIER_CIRCLE_FACTOR: f64 = 0.552284749831;

/// Line width for boundary markers (points)
pub const BOUNDARY_LINE_WIDTH: f64 = 0.5;

/// Line width for the calibration crosshair (points)
pub const CROSSHAIR_LINE_WIDTH: f64 = 0.25;

// =============================================================================
// Parameter Limits
// =============================================================================

/// Largest calibration dot accepted, in millimetres
pub const MAX_DOT_DIAMETER_MM: f64 = 2000.0;

/// Longest range accepted for biathlon equivalence, in metres
pub const MAX_BIATHLON_METRES: f64 = 300.0;

// =============================================================================
// Text
// =============================================================================

/// PDF resource name of the annotation font
pub const TEXT_FONT_NAME: &str = "F1";

/// Base font for annotation text
pub const TEXT_BASE_FONT: &str = "Helvetica";

/// Font size for annotation lines (points)
pub const TEXT_FONT_SIZE: f64 = 10.0;

/// Font size for the oversize warning block (points)
pub const WARNING_FONT_SIZE: f64 = 14.0;

/// Baseline-to-baseline distance as a multiple of the font size
pub const LINE_SPACING: f64 = 1.25;

/// Inset of the first annotation line from the drawable rectangle (points)
pub const TEXT_INSET: f64 = 12.0;

// =============================================================================
// Output
// =============================================================================

/// Media type of every generated document
pub const CONTENT_TYPE: &str = "application/pdf";
