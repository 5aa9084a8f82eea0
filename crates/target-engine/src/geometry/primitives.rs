//! Drawing primitives in page space

use crate::types::Colour;

/// A point in page space (points, origin bottom-left)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One step of a closed path
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    Line(Point),
    /// Curve from the current point; the current point doubles as the first control
    Curve { control: Point, end: Point },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Circle {
        center: Point,
        radius: f64,
    },
    /// `rx` and `ry` are the horizontal and vertical semi-axes
    Ellipse {
        center: Point,
        rx: f64,
        ry: f64,
    },
    Rectangle {
        corner1: Point,
        corner2: Point,
    },
    /// Open run of straight segments
    Polyline {
        points: Vec<Point>,
    },
    /// Closed outline of lines and curves
    Path {
        start: Point,
        segments: Vec<PathSegment>,
    },
    TextRun {
        position: Point,
        font_size: f64,
        text: String,
    },
}

/// How a primitive is painted
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Fill(Colour),
    Stroke { colour: Colour, width: f64 },
}

/// Paint order, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    Background,
    Figures,
    Rings,
    Boundary,
    Text,
}

/// A primitive with its paint and z-order
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub layer: Layer,
    pub paint: Paint,
    pub primitive: Primitive,
}

impl DrawItem {
    pub fn new(layer: Layer, paint: Paint, primitive: Primitive) -> Self {
        Self {
            layer,
            paint,
            primitive,
        }
    }

    pub fn is_boundary_line(&self) -> bool {
        self.layer == Layer::Boundary && matches!(self.primitive, Primitive::Polyline { .. })
    }
}
