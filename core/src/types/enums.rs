use std::fmt;

/// Graphic type of a spatial coordinates (SCOORD/SCOORD3D) content item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphicType {
    Point,
    Multipoint,
    Polyline,
    Polygon,
    Circle,
    Ellipse,
    Ellipsoid,
}

impl GraphicType {
    /// Returns the DICOM defined term for this graphic type
    pub fn dicom_term(&self) -> &'static str {
        match self {
            GraphicType::Point => "POINT",
            GraphicType::Multipoint => "MULTIPOINT",
            GraphicType::Polyline => "POLYLINE",
            GraphicType::Polygon => "POLYGON",
            GraphicType::Circle => "CIRCLE",
            GraphicType::Ellipse => "ELLIPSE",
            GraphicType::Ellipsoid => "ELLIPSOID",
        }
    }

    /// Parses a graphic type from its DICOM defined term
    ///
    /// Returns `None` for unrecognized terms.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "POINT" => Some(GraphicType::Point),
            "MULTIPOINT" => Some(GraphicType::Multipoint),
            "POLYLINE" => Some(GraphicType::Polyline),
            "POLYGON" => Some(GraphicType::Polygon),
            "CIRCLE" => Some(GraphicType::Circle),
            "ELLIPSE" => Some(GraphicType::Ellipse),
            "ELLIPSOID" => Some(GraphicType::Ellipsoid),
            _ => None,
        }
    }
}

impl fmt::Display for GraphicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dicom_term())
    }
}

/// What to do with an SR document that carries more than one
/// "Specimen Container Identifier" item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmbiguousContainerPolicy {
    /// The document contributes no measurement groups
    #[default]
    Skip,

    /// Measurement groups are extracted without container filtering
    Include,
}

impl AmbiguousContainerPolicy {
    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            AmbiguousContainerPolicy::Skip => "skip",
            AmbiguousContainerPolicy::Include => "include",
        }
    }
}

impl fmt::Display for AmbiguousContainerPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}
