use dicom_core::Tag;
use dicom_object::InMemDicomObject;

// Instance Identification Tags
pub const SOP_CLASS_UID: Tag = Tag(0x0008, 0x0016);
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
pub const STUDY_INSTANCE_UID: Tag = Tag(0x0020, 0x000D);
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);

// Code Sequence Macro Tags
pub const CODE_VALUE: Tag = Tag(0x0008, 0x0100);
pub const CODING_SCHEME_DESIGNATOR: Tag = Tag(0x0008, 0x0102);
pub const CODE_MEANING: Tag = Tag(0x0008, 0x0104);

// SR Content Item Tags
pub const RELATIONSHIP_TYPE: Tag = Tag(0x0040, 0xA010);
pub const VALUE_TYPE: Tag = Tag(0x0040, 0xA040);
pub const CONCEPT_NAME_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA043);
pub const TEXT_VALUE: Tag = Tag(0x0040, 0xA160);
pub const CONCEPT_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA168);
pub const UID: Tag = Tag(0x0040, 0xA124);
pub const CONTENT_SEQUENCE: Tag = Tag(0x0040, 0xA730);

// Spatial Coordinates Tags
pub const GRAPHIC_DATA: Tag = Tag(0x0070, 0x0022);
pub const GRAPHIC_TYPE: Tag = Tag(0x0070, 0x0023);
pub const REFERENCED_FRAME_OF_REFERENCE_UID: Tag = Tag(0x3006, 0x0024);

/// Helper to get string value from DICOM tag
///
/// Returns `None` if the tag is not present or cannot be converted to string
pub fn get_string_value(dcm: &InMemDicomObject, tag: Tag) -> Option<String> {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.to_str().ok())
        .map(|s| s.trim().to_string())
}

/// Helper to get the items of a sequence tag
///
/// Returns an empty slice if the tag is not present or is not a sequence
pub fn get_sequence_items(dcm: &InMemDicomObject, tag: Tag) -> &[InMemDicomObject] {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.items())
        .unwrap_or(&[])
}

/// Helper to get multi-float value from DICOM tag
///
/// Returns `None` if the tag is not present or cannot be converted to floats.
/// FD values keep full precision; FL values are widened exactly.
pub fn get_multi_float_value(dcm: &InMemDicomObject, tag: Tag) -> Option<Vec<f64>> {
    dcm.element(tag).ok()?.to_multi_float64().ok()
}
