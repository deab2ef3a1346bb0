//! Run configuration
//!
//! Every key is optional in the TOML file; missing keys fall back to the
//! values the exporter has always used.
//!
//! ```toml
//! pixel_spacing = 0.00023
//! max_study_dir_suffix = 1
//! ambiguous_container = "skip"
//!
//! [store]
//! project_id = "my-project"
//! location = "us-east4"
//! dataset_id = "lunaphore"
//! dicom_store_id = "images"
//!
//! [[findings]]
//! code = "108369006"
//! meaning = "Tumor"
//! ```

use crate::error::{Result, RoiExportError};
use crate::types::{default_findings, AmbiguousContainerPolicy, FindingCode, PixelSpacing};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Coordinates of the Google Cloud Healthcare DICOM store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub base_url: String,
    pub project_id: String,
    pub location: String,
    pub dataset_id: String,
    pub dicom_store_id: String,

    /// Environment variable holding the OAuth access token
    pub access_token_env: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: "https://healthcare.googleapis.com/v1".to_string(),
            project_id: "mgh-comet-1639084656".to_string(),
            location: "us-east4".to_string(),
            dataset_id: "lunaphore".to_string(),
            dicom_store_id: "images".to_string(),
            access_token_env: None,
        }
    }
}

/// Configuration for one export run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Millimeters per pixel of the target slide images
    pub pixel_spacing: PixelSpacing,

    /// Highest numeric suffix tried when a study directory already exists
    pub max_study_dir_suffix: u32,

    /// Handling of SR documents with several container identifiers
    pub ambiguous_container: AmbiguousContainerPolicy,

    /// Remote DICOM store
    pub store: StoreConfig,

    /// Finding categories, one output file each
    pub findings: Vec<FindingCode>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pixel_spacing: PixelSpacing::default(),
            max_study_dir_suffix: 1,
            ambiguous_container: AmbiguousContainerPolicy::default(),
            store: StoreConfig::default(),
            findings: default_findings(),
        }
    }
}

impl Config {
    /// Loads a configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            RoiExportError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Parses and validates a TOML configuration
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks invariants serde cannot express
    pub fn validate(&self) -> Result<()> {
        if self.findings.is_empty() {
            return Err(RoiExportError::Config(
                "at least one finding category is required".to_string(),
            ));
        }

        let mut slugs: Vec<String> = self.findings.iter().map(FindingCode::slug).collect();
        slugs.sort();
        if let Some(pair) = slugs.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(RoiExportError::Config(format!(
                "finding categories share the output name '{}'",
                pair[0]
            )));
        }

        Ok(())
    }

    /// Builder: Override the pixel spacing
    pub fn with_pixel_spacing(mut self, spacing: PixelSpacing) -> Self {
        self.pixel_spacing = spacing;
        self
    }

    /// Builder: Replace the finding categories
    pub fn with_findings(mut self, findings: Vec<FindingCode>) -> Self {
        self.findings = findings;
        self
    }

    /// Builder: Set the ambiguous container policy
    pub fn with_ambiguous_container(mut self, policy: AmbiguousContainerPolicy) -> Self {
        self.ambiguous_container = policy;
        self
    }

    /// Builder: Set the highest study directory suffix
    pub fn with_max_study_dir_suffix(mut self, max: u32) -> Self {
        self.max_study_dir_suffix = max;
        self
    }
}
