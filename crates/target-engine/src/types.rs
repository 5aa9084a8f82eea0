use crate::constants::{METRES_PER_YARD, POINTS_PER_INCH, POINTS_PER_MM};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TargetError {
    #[error("Invalid paper size: {0}")]
    InvalidPaperSize(String),
    #[error("Invalid colour: {0}")]
    InvalidColour(String),
    #[error("No catalog entry for {family} class {class} ({variant:?})")]
    CatalogMiss {
        family: Family,
        class: u8,
        variant: Variant,
    },
    #[error("{name} out of range: {value} (allowed {min} to {max})")]
    DimensionOutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, TargetError>;

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width (default for every paper size)
    #[default]
    Portrait,
    /// Landscape: media axes are exchanged before any other computation
    Landscape,
}

/// Named paper sizes a target can be printed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaperSize {
    A0,
    A1,
    A2,
    A3,
    A4,
    A5,
    #[default]
    Letter,
    Legal,
    Tabloid,
    /// 18 × 24 inch poster
    Poster18x24,
    /// 24 × 36 inch poster
    Poster24x36,
    /// 36 × 48 inch poster
    Poster36x48,
}

impl PaperSize {
    pub const ALL: [PaperSize; 12] = [
        PaperSize::A0,
        PaperSize::A1,
        PaperSize::A2,
        PaperSize::A3,
        PaperSize::A4,
        PaperSize::A5,
        PaperSize::Letter,
        PaperSize::Legal,
        PaperSize::Tabloid,
        PaperSize::Poster18x24,
        PaperSize::Poster24x36,
        PaperSize::Poster36x48,
    ];

    /// Get base dimensions in points (always portrait: width <= height)
    pub fn dimensions_pt(self) -> (f64, f64) {
        match self {
            PaperSize::A0 => (841.0 * POINTS_PER_MM, 1189.0 * POINTS_PER_MM),
            PaperSize::A1 => (594.0 * POINTS_PER_MM, 841.0 * POINTS_PER_MM),
            PaperSize::A2 => (420.0 * POINTS_PER_MM, 594.0 * POINTS_PER_MM),
            PaperSize::A3 => (297.0 * POINTS_PER_MM, 420.0 * POINTS_PER_MM),
            PaperSize::A4 => (210.0 * POINTS_PER_MM, 297.0 * POINTS_PER_MM),
            PaperSize::A5 => (148.0 * POINTS_PER_MM, 210.0 * POINTS_PER_MM),
            PaperSize::Letter => (612.0, 792.0),
            PaperSize::Legal => (612.0, 1008.0),
            PaperSize::Tabloid => (792.0, 1224.0),
            PaperSize::Poster18x24 => (18.0 * POINTS_PER_INCH, 24.0 * POINTS_PER_INCH),
            PaperSize::Poster24x36 => (24.0 * POINTS_PER_INCH, 36.0 * POINTS_PER_INCH),
            PaperSize::Poster36x48 => (36.0 * POINTS_PER_INCH, 48.0 * POINTS_PER_INCH),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f64, f64) {
        let (w, h) = self.dimensions_pt();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PaperSize::A0 => "A0",
            PaperSize::A1 => "A1",
            PaperSize::A2 => "A2",
            PaperSize::A3 => "A3",
            PaperSize::A4 => "A4",
            PaperSize::A5 => "A5",
            PaperSize::Letter => "Letter",
            PaperSize::Legal => "Legal",
            PaperSize::Tabloid => "Tabloid",
            PaperSize::Poster18x24 => "18x24",
            PaperSize::Poster24x36 => "24x36",
            PaperSize::Poster36x48 => "36x48",
        }
    }
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaperSize {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        PaperSize::ALL
            .into_iter()
            .find(|paper| paper.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TargetError::InvalidPaperSize(s.to_string()))
    }
}

/// Named colours accepted for target faces, figures and calibration dots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Colour {
    Black,
    White,
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Khaki,
    Buff,
    Brown,
    Grey,
    Sky,
}

impl Colour {
    pub const ALL: [Colour; 12] = [
        Colour::Black,
        Colour::White,
        Colour::Red,
        Colour::Green,
        Colour::Blue,
        Colour::Yellow,
        Colour::Orange,
        Colour::Khaki,
        Colour::Buff,
        Colour::Brown,
        Colour::Grey,
        Colour::Sky,
    ];

    /// DeviceRGB components in 0..=1
    pub fn rgb(self) -> (f64, f64, f64) {
        match self {
            Colour::Black => (0.0, 0.0, 0.0),
            Colour::White => (1.0, 1.0, 1.0),
            Colour::Red => (0.85, 0.1, 0.1),
            Colour::Green => (0.3, 0.55, 0.25),
            Colour::Blue => (0.1, 0.25, 0.75),
            Colour::Yellow => (1.0, 0.9, 0.1),
            Colour::Orange => (1.0, 0.55, 0.0),
            Colour::Khaki => (0.76, 0.69, 0.5),
            Colour::Buff => (0.94, 0.86, 0.51),
            Colour::Brown => (0.45, 0.3, 0.15),
            Colour::Grey => (0.5, 0.5, 0.5),
            Colour::Sky => (0.6, 0.8, 0.95),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Colour::Black => "black",
            Colour::White => "white",
            Colour::Red => "red",
            Colour::Green => "green",
            Colour::Blue => "blue",
            Colour::Yellow => "yellow",
            Colour::Orange => "orange",
            Colour::Khaki => "khaki",
            Colour::Buff => "buff",
            Colour::Brown => "brown",
            Colour::Grey => "grey",
            Colour::Sky => "sky",
        }
    }
}

impl FromStr for Colour {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Colour::ALL
            .into_iter()
            .find(|colour| colour.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TargetError::InvalidColour(s.to_string()))
    }
}

/// Linear units a calibration diameter can be given in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Units {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "mm"))]
    Millimetres,
    #[cfg_attr(feature = "serde", serde(rename = "in"))]
    Inches,
    #[cfg_attr(feature = "serde", serde(rename = "pt"))]
    Points,
}

impl Units {
    pub fn name(self) -> &'static str {
        match self {
            Units::Millimetres => "mm",
            Units::Inches => "in",
            Units::Points => "pt",
        }
    }

    pub fn to_points(self, value: f64) -> f64 {
        match self {
            Units::Millimetres => value * POINTS_PER_MM,
            Units::Inches => value * POINTS_PER_INCH,
            Units::Points => value,
        }
    }
}

/// Unit a family's shooting distances are quoted in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceUnit {
    Yards,
    Metres,
}

impl DistanceUnit {
    pub fn label(self) -> &'static str {
        match self {
            DistanceUnit::Yards => "Yards",
            DistanceUnit::Metres => "Metres",
        }
    }

    /// The unit on the other side of the yards/metres divide
    pub fn other(self) -> DistanceUnit {
        match self {
            DistanceUnit::Yards => DistanceUnit::Metres,
            DistanceUnit::Metres => DistanceUnit::Yards,
        }
    }

    /// Convert a distance in this unit into [`DistanceUnit::other`]
    pub fn convert(self, value: f64) -> f64 {
        match self {
            DistanceUnit::Yards => value * METRES_PER_YARD,
            DistanceUnit::Metres => value / METRES_PER_YARD,
        }
    }
}

/// Target family, selected by the `Year` request parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Family {
    /// Elliptical ring targets of the early volunteer meetings
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "1862"))]
    Ring1862,
    /// Circular ring targets on the old oblong frames
    #[cfg_attr(feature = "serde", serde(rename = "1883"))]
    Ring1883,
    /// Circular ring targets on square and long-range frames
    #[cfg_attr(feature = "serde", serde(rename = "1908"))]
    Ring1908,
    /// Silhouette figure targets on a two-tone ground
    Figure,
    /// Banded service-rifle targets
    Service,
    /// Calibration dot of a chosen diameter
    Dot,
    /// Row of five biathlon circles
    Biathlon,
}

impl Family {
    pub const ALL: [Family; 7] = [
        Family::Ring1862,
        Family::Ring1883,
        Family::Ring1908,
        Family::Figure,
        Family::Service,
        Family::Dot,
        Family::Biathlon,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Family::Ring1862 => "1862",
            Family::Ring1883 => "1883",
            Family::Ring1908 => "1908",
            Family::Figure => "Figure",
            Family::Service => "Service",
            Family::Dot => "Dot",
            Family::Biathlon => "Biathlon",
        }
    }

    /// Whether the family paints its ground in the request's `Top`/`Bottom` colours
    pub fn is_two_tone(self) -> bool {
        matches!(self, Family::Figure | Family::Service)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Catalog sub-variant beyond the size class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    /// The only variant of every family except biathlon
    #[default]
    Standard,
    /// Biathlon prone: 45 mm hit zone inside each aiming black
    Prone,
    /// Biathlon standing: the whole aiming black is the hit zone
    Standing,
}

/// Named biathlon/rimfire equivalence presets (`CHAS` parameter)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChasPreset {
    /// 10 m air rifle range shooting the 50 m plate
    Air10,
    /// 20 m indoor smallbore range
    Smallbore20,
    /// 25 m indoor smallbore range
    Smallbore25,
}

impl ChasPreset {
    pub fn metres(self) -> f64 {
        match self {
            ChasPreset::Air10 => 10.0,
            ChasPreset::Smallbore20 => 20.0,
            ChasPreset::Smallbore25 => 25.0,
        }
    }

    pub fn equiv(self) -> f64 {
        50.0
    }

    pub fn paper(self) -> PaperSize {
        match self {
            ChasPreset::Air10 => PaperSize::A4,
            ChasPreset::Smallbore20 => PaperSize::A3,
            ChasPreset::Smallbore25 => PaperSize::A3,
        }
    }

    /// The plate is wider than A3 portrait once it passes 20 metres
    pub fn orientation(self) -> Orientation {
        match self {
            ChasPreset::Air10 => Orientation::Portrait,
            ChasPreset::Smallbore20 | ChasPreset::Smallbore25 => Orientation::Landscape,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ChasPreset::Air10 => "Air rifle at 10 metres, scaled from the 50 metre biathlon plate",
            ChasPreset::Smallbore20 => {
                "Smallbore at 20 metres, scaled from the 50 metre biathlon plate"
            }
            ChasPreset::Smallbore25 => {
                "Smallbore at 25 metres, scaled from the 50 metre biathlon plate"
            }
        }
    }
}
