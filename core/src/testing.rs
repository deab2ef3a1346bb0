//! Builders for SR data sets and an in-memory DICOMweb store used by tests

use crate::dicomweb::{DicomWebClient, InstanceRef};
use crate::error::{Result, RoiExportError};
use crate::extraction::sr::{
    IMAGE_REGION, IMAGING_MEASUREMENTS, MEASUREMENT_GROUP, TRACKING_IDENTIFIER,
};
use crate::extraction::tags::*;
use crate::types::FindingCode;
use dicom_core::value::{DataSetSequence, PrimitiveValue};
use dicom_core::{DataElement, Tag, VR};
use dicom_object::InMemDicomObject;
use std::cell::RefCell;

fn code_sequence(
    tag: Tag,
    value: &str,
    scheme: &str,
    meaning: &str,
) -> DataElement<InMemDicomObject> {
    let code = InMemDicomObject::from_element_iter([
        DataElement::new(CODE_VALUE, VR::SH, PrimitiveValue::from(value)),
        DataElement::new(CODING_SCHEME_DESIGNATOR, VR::SH, PrimitiveValue::from(scheme)),
        DataElement::new(CODE_MEANING, VR::LO, PrimitiveValue::from(meaning)),
    ]);
    DataElement::new(tag, VR::SQ, DataSetSequence::from(vec![code]))
}

fn content_item(
    relationship: &str,
    value_type: &str,
    (value, scheme): (&str, &str),
    meaning: &str,
) -> InMemDicomObject {
    InMemDicomObject::from_element_iter([
        DataElement::new(RELATIONSHIP_TYPE, VR::CS, PrimitiveValue::from(relationship)),
        DataElement::new(VALUE_TYPE, VR::CS, PrimitiveValue::from(value_type)),
        code_sequence(CONCEPT_NAME_CODE_SEQUENCE, value, scheme, meaning),
    ])
}

fn with_children(
    mut item: InMemDicomObject,
    children: Vec<InMemDicomObject>,
) -> InMemDicomObject {
    item.put(DataElement::new(
        CONTENT_SEQUENCE,
        VR::SQ,
        DataSetSequence::from(children),
    ));
    item
}

/// CONTAINER item with the given concept name and children
pub fn container_item(
    concept: (&str, &str),
    children: Vec<InMemDicomObject>,
) -> InMemDicomObject {
    with_children(
        content_item("CONTAINS", "CONTAINER", concept, "Container"),
        children,
    )
}

/// Root "Specimen Container Identifier" TEXT item
pub fn container_identifier_item(identifier: &str) -> InMemDicomObject {
    let mut item = content_item(
        "HAS OBS CONTEXT",
        "TEXT",
        ("111700", "DCM"),
        "Specimen Container Identifier",
    );
    item.put(DataElement::new(
        TEXT_VALUE,
        VR::UT,
        PrimitiveValue::from(identifier),
    ));
    item
}

/// CODE item whose value is `finding`
pub fn sr_code_item(
    concept: (&str, &str),
    relationship: &str,
    finding: &FindingCode,
) -> InMemDicomObject {
    let mut item = content_item(relationship, "CODE", concept, "Finding");
    item.put(code_sequence(
        CONCEPT_CODE_SEQUENCE,
        &finding.code,
        &finding.scheme,
        &finding.meaning,
    ));
    item
}

fn scoord_item(value_type: &str, graphic_type: &str, data: Vec<f32>) -> InMemDicomObject {
    let mut item = content_item("CONTAINS", value_type, IMAGE_REGION, "Image Region");
    item.put(DataElement::new(
        GRAPHIC_TYPE,
        VR::CS,
        PrimitiveValue::from(graphic_type),
    ));
    item.put(DataElement::new(
        GRAPHIC_DATA,
        VR::FL,
        PrimitiveValue::F32(data.into()),
    ));
    item
}

/// SCOORD3D "Image Region" item (z = 0)
pub fn image_region_item(graphic_type: &str, ring: &[(f64, f64)]) -> InMemDicomObject {
    let data = ring
        .iter()
        .flat_map(|&(x, y)| [x as f32, y as f32, 0.0])
        .collect();
    let mut item = scoord_item("SCOORD3D", graphic_type, data);
    item.put(DataElement::new(
        REFERENCED_FRAME_OF_REFERENCE_UID,
        VR::UI,
        PrimitiveValue::from("1.2.826.0.1.3680043.10.511.1"),
    ));
    item
}

/// SCOORD "Image Region" item
pub fn image_region_item_2d(graphic_type: &str, ring: &[(f64, f64)]) -> InMemDicomObject {
    let data = ring
        .iter()
        .flat_map(|&(x, y)| [x as f32, y as f32])
        .collect();
    scoord_item("SCOORD", graphic_type, data)
}

/// Planar ROI "Measurement Group" for `finding` outlined by `ring`
pub fn measurement_group(
    finding: &FindingCode,
    graphic_type: &str,
    ring: &[(f64, f64)],
) -> InMemDicomObject {
    let mut tracking = content_item(
        "HAS OBS CONTEXT",
        "TEXT",
        TRACKING_IDENTIFIER,
        "Tracking Identifier",
    );
    tracking.put(DataElement::new(TEXT_VALUE, VR::UT, PrimitiveValue::from("ROI")));

    container_item(
        MEASUREMENT_GROUP,
        vec![
            tracking,
            sr_code_item(crate::extraction::sr::FINDING, "CONTAINS", finding),
            image_region_item(graphic_type, ring),
        ],
    )
}

/// SR document with the given root content items
pub fn sr_document(root_items: Vec<InMemDicomObject>) -> InMemDicomObject {
    let mut doc = InMemDicomObject::from_element_iter([
        DataElement::new(MODALITY, VR::CS, PrimitiveValue::from("SR")),
        DataElement::new(
            SOP_CLASS_UID,
            VR::UI,
            PrimitiveValue::from("1.2.840.10008.5.1.4.1.1.88.34"),
        ),
        DataElement::new(VALUE_TYPE, VR::CS, PrimitiveValue::from("CONTAINER")),
    ]);
    doc.put(DataElement::new(
        CONTENT_SEQUENCE,
        VR::SQ,
        DataSetSequence::from(root_items),
    ));
    doc
}

/// Measurement report with container identifiers and measurement groups
pub fn measurement_report(
    container_ids: &[&str],
    groups: Vec<InMemDicomObject>,
) -> InMemDicomObject {
    let mut root: Vec<InMemDicomObject> = container_ids
        .iter()
        .map(|id| container_identifier_item(id))
        .collect();
    root.push(container_item(IMAGING_MEASUREMENTS, groups));
    sr_document(root)
}

/// In-memory DICOMweb store
///
/// Search returns every stored instance of the study; retrieval looks the
/// instance up by its UIDs. Requests are recorded for assertions.
#[derive(Default)]
pub struct FakeStore {
    instances: Vec<(InstanceRef, InMemDicomObject)>,
    pub searches: RefCell<Vec<(String, Vec<(String, String)>)>>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an SR instance to the store
    pub fn with_instance(
        mut self,
        study: &str,
        series: &str,
        sop: &str,
        document: InMemDicomObject,
    ) -> Self {
        self.instances.push((
            InstanceRef {
                study_instance_uid: study.to_string(),
                series_instance_uid: series.to_string(),
                sop_instance_uid: sop.to_string(),
            },
            document,
        ));
        self
    }
}

impl DicomWebClient for FakeStore {
    fn search_for_instances(
        &self,
        study_instance_uid: &str,
        filters: &[(&str, &str)],
    ) -> Result<Vec<InstanceRef>> {
        self.searches.borrow_mut().push((
            study_instance_uid.to_string(),
            filters
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        ));
        Ok(self
            .instances
            .iter()
            .filter(|(r, _)| r.study_instance_uid == study_instance_uid)
            .map(|(r, _)| r.clone())
            .collect())
    }

    fn retrieve_instance(&self, instance: &InstanceRef) -> Result<InMemDicomObject> {
        self.instances
            .iter()
            .find(|(r, _)| r == instance)
            .map(|(_, doc)| doc.clone())
            .ok_or_else(|| {
                RoiExportError::Retrieval(format!(
                    "instance {} not found",
                    instance.sop_instance_uid
                ))
            })
    }
}
