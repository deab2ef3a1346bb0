use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Pixel spacing in millimeters (row, column)
///
/// Physical size of one slide image pixel, used to map annotation
/// coordinates from millimeters into pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PixelSpacing {
    pub row: f64,
    pub col: f64,
}

impl PixelSpacing {
    /// Spacing of the slide scans the exporter was written for
    pub const DEFAULT_MM: f64 = 0.00023;

    /// Creates a new PixelSpacing
    pub fn new(row: f64, col: f64) -> Self {
        Self { row, col }
    }

    /// Creates a PixelSpacing with equal row and column spacing
    pub fn isotropic(spacing: f64) -> Self {
        Self::new(spacing, spacing)
    }

    /// Parses pixel spacing from string
    ///
    /// Accepts formats like:
    /// - "0.00023" (isotropic)
    /// - "0.1\\0.1"
    /// - "0.1 0.1"
    /// - "[0.1, 0.1]"
    /// - Exponential notation: "2.3e-4"
    ///
    /// # Errors
    ///
    /// Returns an error if no number can be parsed or a value is not positive
    pub fn parse(s: &str) -> Result<Self, String> {
        static REGEX: OnceLock<Regex> = OnceLock::new();
        let re = REGEX.get_or_init(|| {
            Regex::new(r"[-+]?\d*\.?\d+(?:[eE][-+]?\d+)?").expect("Failed to compile regex")
        });

        let mut numbers = re.find_iter(s).map(|m| m.as_str());
        let row_str = numbers
            .next()
            .ok_or_else(|| format!("Failed to parse PixelSpacing from '{}'", s))?;
        let col_str = numbers.next().unwrap_or(row_str);

        let row: f64 = row_str
            .parse()
            .map_err(|e| format!("Failed to parse row value: {}", e))?;

        let col: f64 = col_str
            .parse()
            .map_err(|e| format!("Failed to parse col value: {}", e))?;

        PixelSpacing { row, col }.validated()
    }

    fn validated(self) -> Result<Self, String> {
        if self.row > 0.0 && self.col > 0.0 && self.row.is_finite() && self.col.is_finite() {
            Ok(self)
        } else {
            Err(format!("Pixel spacing must be positive, got {}", self))
        }
    }
}

impl Default for PixelSpacing {
    fn default() -> Self {
        Self::isotropic(Self::DEFAULT_MM)
    }
}

impl fmt::Display for PixelSpacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {} mm", self.row, self.col)
    }
}

// Accepts `0.00023` or `[row, col]` in configuration files
impl<'de> Deserialize<'de> for PixelSpacing {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Scalar(f64),
            Pair([f64; 2]),
            Fields { row: f64, col: f64 },
        }

        let spacing = match Repr::deserialize(deserializer)? {
            Repr::Scalar(v) => PixelSpacing::isotropic(v),
            Repr::Pair([row, col]) => PixelSpacing::new(row, col),
            Repr::Fields { row, col } => PixelSpacing::new(row, col),
        };
        spacing.validated().map_err(serde::de::Error::custom)
    }
}
