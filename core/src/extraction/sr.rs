//! Structured report content tree navigation
//!
//! Reads the subset of a TID 1500 "Measurement Report" needed to export
//! planar regions of interest: the specimen container identifier items and
//! the planar ROI measurement groups below "Imaging Measurements".

use crate::types::{CodedConcept, FindingCode, GraphicType, ImageRegion, PlanarRoiGroup};
use dicom_object::InMemDicomObject;
use log::{debug, warn};

use super::tags::{
    get_multi_float_value, get_sequence_items, get_string_value, CODE_MEANING, CODE_VALUE,
    CODING_SCHEME_DESIGNATOR, CONCEPT_CODE_SEQUENCE, CONCEPT_NAME_CODE_SEQUENCE,
    CONTENT_SEQUENCE, GRAPHIC_DATA, GRAPHIC_TYPE, TEXT_VALUE, UID, VALUE_TYPE,
};

/// Concept name meaning of the container identifier item
pub const SPECIMEN_CONTAINER_IDENTIFIER: &str = "Specimen Container Identifier";

// (code value, coding scheme) of the concept names used by TID 1500/1410
pub const IMAGING_MEASUREMENTS: (&str, &str) = ("126010", "DCM");
pub const MEASUREMENT_GROUP: (&str, &str) = ("125007", "DCM");
pub const TRACKING_IDENTIFIER: (&str, &str) = ("112039", "DCM");
pub const TRACKING_UNIQUE_IDENTIFIER: (&str, &str) = ("112040", "DCM");
pub const FINDING: (&str, &str) = ("121071", "DCM");
pub const IMAGE_REGION: (&str, &str) = ("111030", "DCM");

/// Returns the content items directly below a node (or the document root)
pub fn content_items(node: &InMemDicomObject) -> &[InMemDicomObject] {
    get_sequence_items(node, CONTENT_SEQUENCE)
}

/// Reads the first item of a code sequence
fn read_code(item: &InMemDicomObject, sequence: dicom_core::Tag) -> Option<CodedConcept> {
    let code = get_sequence_items(item, sequence).first()?;
    Some(CodedConcept {
        value: get_string_value(code, CODE_VALUE)?,
        scheme: get_string_value(code, CODING_SCHEME_DESIGNATOR).unwrap_or_default(),
        meaning: get_string_value(code, CODE_MEANING).unwrap_or_default(),
    })
}

/// Concept name of a content item
pub fn concept_name(item: &InMemDicomObject) -> Option<CodedConcept> {
    read_code(item, CONCEPT_NAME_CODE_SEQUENCE)
}

/// Coded value of a CODE content item
pub fn concept_code(item: &InMemDicomObject) -> Option<CodedConcept> {
    read_code(item, CONCEPT_CODE_SEQUENCE)
}

fn has_concept_name(item: &InMemDicomObject, (value, scheme): (&str, &str)) -> bool {
    concept_name(item).is_some_and(|name| name.is(value, scheme))
}

/// Text values of the root "Specimen Container Identifier" items
///
/// Items are matched by concept name meaning. Items without a text value
/// are reported as empty strings so callers still see them when counting.
pub fn container_identifiers(document: &InMemDicomObject) -> Vec<String> {
    content_items(document)
        .iter()
        .filter(|item| {
            concept_name(item).is_some_and(|name| name.meaning == SPECIMEN_CONTAINER_IDENTIFIER)
        })
        .map(|item| get_string_value(item, TEXT_VALUE).unwrap_or_default())
        .collect()
}

/// Extracts planar ROI measurement groups from an SR document
///
/// Walks root "Imaging Measurements" containers and their "Measurement Group"
/// children, in document order. A group is returned when its finding equals
/// `finding` (value and coding scheme) and, if `graphic_type` is given, its
/// image region has that graphic type.
pub fn planar_roi_groups(
    document: &InMemDicomObject,
    finding: &FindingCode,
    graphic_type: Option<GraphicType>,
) -> Vec<PlanarRoiGroup> {
    content_items(document)
        .iter()
        .filter(|item| has_concept_name(item, IMAGING_MEASUREMENTS))
        .flat_map(|container| content_items(container).iter())
        .filter(|item| has_concept_name(item, MEASUREMENT_GROUP))
        .map(read_measurement_group)
        .filter(|group| {
            group
                .finding
                .as_ref()
                .is_some_and(|code| finding.matches(&code.value, &code.scheme))
        })
        .filter(|group| match graphic_type {
            Some(wanted) => group
                .roi
                .as_ref()
                .is_some_and(|roi| roi.graphic_type == wanted),
            None => true,
        })
        .collect()
}

/// Reads one "Measurement Group" container
pub fn read_measurement_group(group: &InMemDicomObject) -> PlanarRoiGroup {
    let mut result = PlanarRoiGroup {
        tracking_identifier: None,
        tracking_uid: None,
        finding: None,
        roi: None,
    };

    for item in content_items(group) {
        let Some(name) = concept_name(item) else {
            continue;
        };

        if name.is(TRACKING_IDENTIFIER.0, TRACKING_IDENTIFIER.1) {
            result.tracking_identifier = get_string_value(item, TEXT_VALUE);
        } else if name.is(TRACKING_UNIQUE_IDENTIFIER.0, TRACKING_UNIQUE_IDENTIFIER.1) {
            result.tracking_uid = get_string_value(item, UID);
        } else if name.is(FINDING.0, FINDING.1) {
            result.finding = concept_code(item);
        } else if name.is(IMAGE_REGION.0, IMAGE_REGION.1) {
            result.roi = read_image_region(item);
        }
    }

    result
}

/// Number of values per point in SCOORD3D graphic data
const SCOORD3D_DIMENSIONS: usize = 3;

/// Reads an SCOORD3D "Image Region" item in slide coordinates (mm)
///
/// 2-D SCOORD regions hold image pixel positions, not slide coordinates, and
/// are skipped. Returns `None` (with a warning) when the graphic type is
/// unknown or the graphic data does not hold whole, finite points.
pub fn read_image_region(item: &InMemDicomObject) -> Option<ImageRegion> {
    match get_string_value(item, VALUE_TYPE).as_deref() {
        Some("SCOORD3D") => {}
        Some("SCOORD") => {
            debug!("Skipping image region in image pixel coordinates (SCOORD)");
            return None;
        }
        other => {
            warn!("Ignoring image region with value type {:?}", other);
            return None;
        }
    };

    let graphic_type = match get_string_value(item, GRAPHIC_TYPE) {
        Some(term) => match GraphicType::from_str(&term) {
            Some(graphic_type) => graphic_type,
            None => {
                warn!("Ignoring image region with unknown graphic type '{}'", term);
                return None;
            }
        },
        None => {
            warn!("Ignoring image region without graphic type");
            return None;
        }
    };

    let data = get_multi_float_value(item, GRAPHIC_DATA).unwrap_or_default();
    if data.is_empty() || data.len() % SCOORD3D_DIMENSIONS != 0 {
        warn!(
            "Ignoring image region with {} graphic data values for 3-D coordinates",
            data.len()
        );
        return None;
    }
    if data.iter().any(|value| !value.is_finite()) {
        warn!("Ignoring image region with non-finite graphic data");
        return None;
    }

    let coordinates = data
        .chunks_exact(SCOORD3D_DIMENSIONS)
        .map(|point| (point[0], point[1]))
        .collect();

    Some(ImageRegion {
        graphic_type,
        coordinates,
    })
}
