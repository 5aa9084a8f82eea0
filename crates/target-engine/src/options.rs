use crate::catalog::{self, CanonicalTarget};
use crate::constants::{MAX_BIATHLON_METRES, MAX_DOT_DIAMETER_MM, POINTS_PER_INCH, POINTS_PER_MM};
use crate::geometry::Palette;
use crate::page;
use crate::scale::ScaleMode;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A complete request for one target page
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TargetRequest {
    // Catalog selection
    pub family: Family,
    pub class: u8,

    // Page
    pub paper: PaperSize,
    pub orientation: Orientation,
    /// Margin taken off every edge, in inches
    pub trim: f64,

    /// Fit the inner scoring rings instead of the full design
    pub centre: bool,

    // Two-tone ground
    pub top: Colour,
    pub bottom: Colour,
    pub figure_centred: bool,

    pub dot: DotOptions,
    pub biathlon: BiathlonOptions,
}

impl Default for TargetRequest {
    fn default() -> Self {
        Self {
            family: Family::Ring1862,
            class: 3,
            paper: PaperSize::Letter,
            orientation: Orientation::Portrait,
            trim: 0.0,
            centre: false,
            top: Colour::Sky,
            bottom: Colour::Green,
            figure_centred: false,
            dot: DotOptions::default(),
            biathlon: BiathlonOptions::default(),
        }
    }
}

/// Calibration dot parameters
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DotOptions {
    pub diameter: f64,
    pub units: Units,
    pub colour: Colour,
    pub background: Colour,
}

impl Default for DotOptions {
    fn default() -> Self {
        Self {
            diameter: 25.0,
            units: Units::Millimetres,
            colour: Colour::Black,
            background: Colour::White,
        }
    }
}

impl DotOptions {
    /// Diameter in inches, the dot's fixed scale
    pub fn diameter_in(&self) -> f64 {
        self.units.to_points(self.diameter) / POINTS_PER_INCH
    }

    /// Dot and background colours; an indistinguishable pair becomes black on white
    pub fn colours(&self) -> (Colour, Colour) {
        if self.colour == self.background {
            log::warn!(
                "dot colour and background are both {}, using black on white",
                self.colour.name()
            );
            (Colour::Black, Colour::White)
        } else {
            (self.colour, self.background)
        }
    }
}

/// Which biathlon plate to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BiathlonType {
    #[default]
    Prone,
    Standing,
}

impl BiathlonType {
    pub fn variant(self) -> Variant {
        match self {
            BiathlonType::Prone => Variant::Prone,
            BiathlonType::Standing => Variant::Standing,
        }
    }
}

/// Range equivalence for the biathlon plate
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BiathlonOptions {
    /// Distance the printed plate will be shot at
    pub metres: f64,
    /// Distance the full-size plate is shot at
    pub equiv: f64,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: BiathlonType,
    /// Preset overriding metres, equiv and paper
    pub chas: Option<ChasPreset>,
}

impl Default for BiathlonOptions {
    fn default() -> Self {
        Self {
            metres: 10.0,
            equiv: 50.0,
            kind: BiathlonType::Prone,
            chas: None,
        }
    }
}

impl BiathlonOptions {
    /// `(metres, equiv)` after any preset is applied
    pub fn distances(&self) -> (f64, f64) {
        match self.chas {
            Some(preset) => (preset.metres(), preset.equiv()),
            None => (self.metres, self.equiv),
        }
    }
}

impl TargetRequest {
    /// Load a request from a JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let request = serde_json::from_slice(&bytes)
            .map_err(|e| TargetError::Config(format!("Failed to parse request: {}", e)))?;
        Ok(request)
    }

    /// Load a JSON file holding either one request or an array of them
    #[cfg(feature = "serde")]
    pub async fn load_all(path: impl AsRef<std::path::Path>) -> Result<Vec<Self>> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RequestFile {
            Many(Vec<TargetRequest>),
            One(Box<TargetRequest>),
        }

        let bytes = tokio::fs::read(path).await?;
        let file = serde_json::from_slice(&bytes)
            .map_err(|e| TargetError::Config(format!("Failed to parse requests: {}", e)))?;
        Ok(match file {
            RequestFile::Many(requests) => requests,
            RequestFile::One(request) => vec![*request],
        })
    }

    /// Save the request to a JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| TargetError::Config(format!("Failed to serialize request: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Catalog variant the request selects
    pub fn variant(&self) -> Variant {
        match self.family {
            Family::Biathlon => self.biathlon.kind.variant(),
            _ => Variant::Standard,
        }
    }

    /// The canonical design this request draws
    pub fn target(&self) -> Result<&'static CanonicalTarget> {
        catalog::lookup(self.family, self.class, self.variant())
    }

    fn preset(&self) -> Option<ChasPreset> {
        match self.family {
            Family::Biathlon => self.biathlon.chas,
            _ => None,
        }
    }

    /// Paper after any biathlon preset is applied
    pub fn effective_paper(&self) -> PaperSize {
        self.preset().map_or(self.paper, ChasPreset::paper)
    }

    pub fn effective_orientation(&self) -> Orientation {
        self.preset().map_or(self.orientation, ChasPreset::orientation)
    }

    pub fn palette(&self) -> Palette {
        let (dot, dot_ground) = match self.family {
            Family::Dot => self.dot.colours(),
            _ => (self.dot.colour, self.dot.background),
        };
        Palette {
            top: self.top,
            bottom: self.bottom,
            dot,
            dot_ground,
        }
    }

    /// How the target is scaled onto the page
    pub fn scale_mode(&self, target: &CanonicalTarget) -> ScaleMode {
        match self.family {
            Family::Dot => ScaleMode::Fixed(self.dot.diameter_in()),
            Family::Biathlon => {
                let (metres, equiv) = self.biathlon.distances();
                ScaleMode::Fixed(metres / equiv)
            }
            _ if self.centre && target.inner_extent.is_some() => ScaleMode::CentreOnly,
            _ if self.centre => {
                log::warn!(
                    "{} has no scoring rings to centre on, fitting the full design",
                    target.name
                );
                ScaleMode::Fit
            }
            _ => ScaleMode::Fit,
        }
    }

    /// Canonical distances to state equivalences for; the biathlon plate is
    /// quoted at the requested equivalent range
    pub fn distances(&self, target: &CanonicalTarget) -> Vec<f64> {
        match self.family {
            Family::Biathlon => vec![self.biathlon.distances().1],
            _ => target.distances.to_vec(),
        }
    }

    /// Extra annotation lines the request contributes
    pub fn description_lines(&self) -> Vec<String> {
        match self.family {
            Family::Biathlon => self
                .preset()
                .map(|preset| vec![preset.description().to_string()])
                .unwrap_or_default(),
            Family::Dot => vec![format!(
                "Diameter {} {}",
                self.dot.diameter,
                self.dot.units.name()
            )],
            _ => Vec::new(),
        }
    }

    /// Check every input before any drawing work is done
    pub fn validate(&self) -> Result<()> {
        self.target()?;
        page::resolve_page(self.effective_paper(), self.effective_orientation(), self.trim)?;

        match self.family {
            Family::Dot => {
                let per_unit_mm = self.dot.units.to_points(1.0) / POINTS_PER_MM;
                let max = MAX_DOT_DIAMETER_MM / per_unit_mm;
                let diameter = self.dot.diameter;
                if !diameter.is_finite() || diameter <= 0.0 || diameter > max {
                    return Err(TargetError::DimensionOutOfRange {
                        name: "diameter",
                        value: diameter,
                        min: 0.0,
                        max,
                    });
                }
            }
            Family::Biathlon => {
                let (metres, equiv) = self.biathlon.distances();
                check_distance("equiv", equiv, MAX_BIATHLON_METRES)?;
                check_distance("metres", metres, equiv)?;
            }
            _ => {}
        }

        Ok(())
    }
}

fn check_distance(name: &'static str, value: f64, max: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 || value > max {
        return Err(TargetError::DimensionOutOfRange {
            name,
            value,
            min: 0.0,
            max,
        });
    }
    Ok(())
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use serde::{Deserialize, Serialize};

    // Paper sizes travel as their display names ("A4", "24x36")
    impl Serialize for PaperSize {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for PaperSize {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            struct PaperSizeVisitor;

            impl serde::de::Visitor<'_> for PaperSizeVisitor {
                type Value = PaperSize;

                fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                    formatter.write_str("a paper size name such as \"A4\" or \"Letter\"")
                }

                fn visit_str<E>(self, value: &str) -> std::result::Result<PaperSize, E>
                where
                    E: serde::de::Error,
                {
                    value.parse().map_err(E::custom)
                }
            }

            deserializer.deserialize_str(PaperSizeVisitor)
        }
    }
}
