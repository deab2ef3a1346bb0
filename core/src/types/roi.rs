use super::GraphicType;

/// Coded concept as found in SR code sequences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodedConcept {
    pub value: String,
    pub scheme: String,
    pub meaning: String,
}

impl CodedConcept {
    /// Creates a new CodedConcept
    pub fn new(value: &str, scheme: &str, meaning: &str) -> Self {
        Self {
            value: value.to_string(),
            scheme: scheme.to_string(),
            meaning: meaning.to_string(),
        }
    }

    /// Checks value and coding scheme, ignoring the meaning
    pub fn is(&self, value: &str, scheme: &str) -> bool {
        self.value == value && self.scheme == scheme
    }
}

/// Image region of a planar ROI measurement group
///
/// Coordinates are (x, y) in the frame of reference of the annotated
/// slide, in millimeters. The z component of 3D coordinates is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRegion {
    pub graphic_type: GraphicType,
    pub coordinates: Vec<(f64, f64)>,
}

/// Planar ROI measurement group extracted from an SR document
#[derive(Debug, Clone, PartialEq)]
pub struct PlanarRoiGroup {
    /// Free-text tracking identifier
    pub tracking_identifier: Option<String>,

    /// Tracking unique identifier
    pub tracking_uid: Option<String>,

    /// Finding category of the group
    pub finding: Option<CodedConcept>,

    /// Image region; `None` when the group references a segmentation instead
    pub roi: Option<ImageRegion>,
}
