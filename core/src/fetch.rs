use crate::dicomweb::DicomWebClient;
use crate::error::Result;
use crate::extraction::{container_identifiers, planar_roi_groups};
use crate::types::{AmbiguousContainerPolicy, FindingCode, GraphicType, PlanarRoiGroup};
use dicom_object::InMemDicomObject;
use log::{debug, warn};

/// Retrieves planar ROI measurement groups for one slide container
///
/// SR documents are matched to a container through their root
/// "Specimen Container Identifier" item.
pub struct AnnotationFetcher<C> {
    client: C,
    ambiguous_container: AmbiguousContainerPolicy,
}

impl<C: DicomWebClient> AnnotationFetcher<C> {
    /// Creates a fetcher over a DICOMweb client
    pub fn new(client: C, ambiguous_container: AmbiguousContainerPolicy) -> Self {
        Self {
            client,
            ambiguous_container,
        }
    }

    /// Underlying DICOMweb client
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Retrieves every SR document of a study
    ///
    /// Documents are returned in search result order. Retrieval errors
    /// abort the whole call.
    pub fn fetch_documents(&self, study_instance_uid: &str) -> Result<Vec<InMemDicomObject>> {
        let matched = self
            .client
            .search_for_instances(study_instance_uid, &[("Modality", "SR")])?;
        debug!(
            "Found {} SR instance(s) in study {}",
            matched.len(),
            study_instance_uid
        );

        matched
            .iter()
            .map(|instance| self.client.retrieve_instance(instance))
            .collect()
    }

    /// Polygon measurement groups for `finding` in documents of `container_identifier`
    ///
    /// Groups are concatenated in document-then-group order.
    pub fn fetch(
        &self,
        study_instance_uid: &str,
        container_identifier: &str,
        finding: &FindingCode,
    ) -> Result<Vec<PlanarRoiGroup>> {
        let documents = self.fetch_documents(study_instance_uid)?;
        Ok(self.select_groups(&documents, container_identifier, finding))
    }

    /// Applies container matching and group extraction to retrieved documents
    pub fn select_groups(
        &self,
        documents: &[InMemDicomObject],
        container_identifier: &str,
        finding: &FindingCode,
    ) -> Vec<PlanarRoiGroup> {
        let mut groups = Vec::new();

        for document in documents {
            let identifiers = container_identifiers(document);
            let matches = match identifiers.as_slice() {
                [] => false,
                [identifier] if identifier == container_identifier => true,
                [identifier] => {
                    debug!(
                        "Omitting SR document matching for different container identifier '{}'",
                        identifier
                    );
                    false
                }
                _ => {
                    warn!(
                        "Found more than one container identifier in SR document: {:?} ({})",
                        identifiers, self.ambiguous_container
                    );
                    self.ambiguous_container == AmbiguousContainerPolicy::Include
                }
            };

            if matches {
                groups.extend(planar_roi_groups(
                    document,
                    finding,
                    Some(GraphicType::Polygon),
                ));
            }
        }

        groups
    }
}
