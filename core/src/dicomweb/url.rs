use crate::config::StoreConfig;
use std::fmt;

/// DICOMweb service root of a Google Cloud Healthcare DICOM store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoogleCloudHealthcareUrl {
    pub base_url: String,
    pub project_id: String,
    pub location: String,
    pub dataset_id: String,
    pub dicom_store_id: String,
}

impl GoogleCloudHealthcareUrl {
    /// Creates the service URL for a configured store
    pub fn from_config(store: &StoreConfig) -> Self {
        Self {
            base_url: store.base_url.trim_end_matches('/').to_string(),
            project_id: store.project_id.clone(),
            location: store.location.clone(),
            dataset_id: store.dataset_id.clone(),
            dicom_store_id: store.dicom_store_id.clone(),
        }
    }

    /// QIDO-RS endpoint for the instances of a study
    pub fn study_instances(&self, study_instance_uid: &str) -> String {
        format!("{}/studies/{}/instances", self, study_instance_uid)
    }

    /// WADO-RS endpoint of a single instance
    pub fn instance(&self, study: &str, series: &str, sop: &str) -> String {
        format!(
            "{}/studies/{}/series/{}/instances/{}",
            self, study, series, sop
        )
    }
}

impl fmt::Display for GoogleCloudHealthcareUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/projects/{}/locations/{}/datasets/{}/dicomStores/{}/dicomWeb",
            self.base_url, self.project_id, self.location, self.dataset_id, self.dicom_store_id
        )
    }
}
