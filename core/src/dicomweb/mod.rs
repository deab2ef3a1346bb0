//! DICOMweb access to the remote annotation store
//!
//! The pipeline only needs two services: QIDO-RS instance search and WADO-RS
//! instance retrieval. Both sit behind [`DicomWebClient`] so the fetch logic
//! can run against an in-memory store.

mod auth;
mod http;
mod multipart;
mod url;

pub use auth::resolve_access_token;
pub use http::HttpDicomWebClient;
pub use multipart::{parse_boundary, split_multipart};
pub use url::GoogleCloudHealthcareUrl;

use crate::error::{Result, RoiExportError};
use crate::extraction::tags::{SERIES_INSTANCE_UID, SOP_INSTANCE_UID, STUDY_INSTANCE_UID};
use dicom_core::Tag;
use dicom_object::InMemDicomObject;
use serde_json::Value;

/// Identifies one instance in the store
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstanceRef {
    pub study_instance_uid: String,
    pub series_instance_uid: String,
    pub sop_instance_uid: String,
}

/// Minimal DICOMweb client
pub trait DicomWebClient {
    /// Searches instances of a study, e.g. with `[("Modality", "SR")]`
    fn search_for_instances(
        &self,
        study_instance_uid: &str,
        filters: &[(&str, &str)],
    ) -> Result<Vec<InstanceRef>>;

    /// Retrieves and decodes a single instance
    fn retrieve_instance(&self, instance: &InstanceRef) -> Result<InMemDicomObject>;
}

impl<C: DicomWebClient + ?Sized> DicomWebClient for &C {
    fn search_for_instances(
        &self,
        study_instance_uid: &str,
        filters: &[(&str, &str)],
    ) -> Result<Vec<InstanceRef>> {
        (**self).search_for_instances(study_instance_uid, filters)
    }

    fn retrieve_instance(&self, instance: &InstanceRef) -> Result<InMemDicomObject> {
        (**self).retrieve_instance(instance)
    }
}

/// Formats a tag as a DICOM JSON attribute key, e.g. "0020000E"
fn json_key(tag: Tag) -> String {
    format!("{:04X}{:04X}", tag.group(), tag.element())
}

/// Reads the first string value of an attribute in a DICOM JSON data set
fn json_string(dataset: &Value, tag: Tag) -> Option<String> {
    dataset
        .get(json_key(tag))?
        .get("Value")?
        .get(0)?
        .as_str()
        .map(|s| s.trim().to_string())
}

/// Parses a QIDO-RS response body (application/dicom+json)
///
/// An empty body means no matches. The study UID of an entry falls back to
/// `study_instance_uid` when the response omits it.
pub fn parse_search_results(body: &str, study_instance_uid: &str) -> Result<Vec<InstanceRef>> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    let datasets: Vec<Value> = serde_json::from_str(body)?;
    datasets
        .iter()
        .map(|dataset| {
            let series_instance_uid = json_string(dataset, SERIES_INSTANCE_UID).ok_or_else(|| {
                RoiExportError::Retrieval("search result without SeriesInstanceUID".to_string())
            })?;
            let sop_instance_uid = json_string(dataset, SOP_INSTANCE_UID).ok_or_else(|| {
                RoiExportError::Retrieval("search result without SOPInstanceUID".to_string())
            })?;

            Ok(InstanceRef {
                study_instance_uid: json_string(dataset, STUDY_INSTANCE_UID)
                    .unwrap_or_else(|| study_instance_uid.to_string()),
                series_instance_uid,
                sop_instance_uid,
            })
        })
        .collect()
}
