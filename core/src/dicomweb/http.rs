use super::multipart::{parse_boundary, split_multipart};
use super::url::GoogleCloudHealthcareUrl;
use super::{parse_search_results, DicomWebClient, InstanceRef};
use crate::error::{Result, RoiExportError};
use dicom_object::InMemDicomObject;
use log::debug;
use std::io::Read;

const ACCEPT_DICOM_JSON: &str = "application/dicom+json";
const ACCEPT_MULTIPART_DICOM: &str =
    "multipart/related; type=\"application/dicom\"; transfer-syntax=*";

/// Blocking DICOMweb client for the Google Cloud Healthcare API
pub struct HttpDicomWebClient {
    agent: ureq::Agent,
    url: GoogleCloudHealthcareUrl,
    authorization: String,
}

impl HttpDicomWebClient {
    /// Creates a client for `url` authenticated with an OAuth bearer token
    pub fn new(url: GoogleCloudHealthcareUrl, access_token: &str) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
            url,
            authorization: format!("Bearer {}", access_token),
        }
    }

    /// Service root the client talks to
    pub fn url(&self) -> &GoogleCloudHealthcareUrl {
        &self.url
    }

    fn get(&self, endpoint: &str, accept: &str) -> ureq::Request {
        self.agent
            .get(endpoint)
            .set("Authorization", &self.authorization)
            .set("Accept", accept)
    }
}

impl DicomWebClient for HttpDicomWebClient {
    fn search_for_instances(
        &self,
        study_instance_uid: &str,
        filters: &[(&str, &str)],
    ) -> Result<Vec<InstanceRef>> {
        let endpoint = self.url.study_instances(study_instance_uid);
        debug!("QIDO-RS {} {:?}", endpoint, filters);

        let mut request = self.get(&endpoint, ACCEPT_DICOM_JSON);
        for (key, value) in filters {
            request = request.query(key, value);
        }

        let response = request.call()?;
        if response.status() == 204 {
            return Ok(Vec::new());
        }
        let body = response.into_string()?;
        parse_search_results(&body, study_instance_uid)
    }

    fn retrieve_instance(&self, instance: &InstanceRef) -> Result<InMemDicomObject> {
        let endpoint = self.url.instance(
            &instance.study_instance_uid,
            &instance.series_instance_uid,
            &instance.sop_instance_uid,
        );
        debug!("WADO-RS {}", endpoint);

        let response = self.get(&endpoint, ACCEPT_MULTIPART_DICOM).call()?;
        let content_type = response.header("Content-Type").unwrap_or_default().to_string();

        let mut body = Vec::new();
        response.into_reader().read_to_end(&mut body)?;
        decode_instance(&content_type, &body)
    }
}

/// Decodes a WADO-RS instance response
///
/// Multipart responses must carry exactly one part; a bare
/// `application/dicom` body is decoded as is.
pub fn decode_instance(content_type: &str, body: &[u8]) -> Result<InMemDicomObject> {
    if content_type.trim_start().to_lowercase().starts_with("multipart/") {
        let boundary = parse_boundary(content_type).ok_or_else(|| {
            RoiExportError::Retrieval(format!("no boundary in content type '{}'", content_type))
        })?;
        let parts = split_multipart(body, &boundary)?;
        match parts.as_slice() {
            [part] => read_part10(part),
            _ => Err(RoiExportError::Retrieval(format!(
                "expected one instance in response, got {}",
                parts.len()
            ))),
        }
    } else {
        read_part10(body)
    }
}

/// Parses DICOM Part 10 bytes, with or without the 128-byte preamble
pub fn read_part10(bytes: &[u8]) -> Result<InMemDicomObject> {
    // 128-byte preamble followed by the "DICM" magic
    let start = if bytes.len() >= 132 && &bytes[128..132] == b"DICM" {
        128
    } else if bytes.starts_with(b"DICM") {
        0
    } else {
        return Err(RoiExportError::DicomError(
            "response is not a DICOM Part 10 stream".to_string(),
        ));
    };

    let file = dicom_object::from_reader(&bytes[start..])?;
    Ok(file.into_inner())
}
