use crate::error::{Result, RoiExportError};
use crate::export::FeatureCollection;
use crate::input::InputRow;
use crate::types::FindingCode;
use log::{debug, info};
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Name of the directory created below the output path
pub const ANNOTATIONS_DIR: &str = "annotations";

/// Writes GeoJSON files below `<output>/annotations`
#[derive(Debug, Clone)]
pub struct OutputWriter {
    annotations_root: PathBuf,
    max_suffix: u32,
}

impl OutputWriter {
    /// Creates `<output>/annotations` if absent
    ///
    /// `max_suffix` bounds the `_1`, `_2`, … names tried when a study
    /// directory already exists.
    pub fn create<P: AsRef<Path>>(output: P, max_suffix: u32) -> Result<Self> {
        let annotations_root = output.as_ref().join(ANNOTATIONS_DIR);
        fs::create_dir_all(&annotations_root)?;
        info!("Writing annotations to {}", annotations_root.display());
        Ok(Self {
            annotations_root,
            max_suffix,
        })
    }

    /// Root directory holding the per-study directories
    pub fn annotations_root(&self) -> &Path {
        &self.annotations_root
    }

    /// Creates the directory for one input row
    ///
    /// Uses `<study_id>`, or the first free `<study_id>_<n>` for
    /// n = 1..=max_suffix when a study has several containers.
    ///
    /// # Errors
    ///
    /// `DirectoryCollision` when every candidate already exists.
    pub fn create_study_dir(&self, local_study_id: &str) -> Result<PathBuf> {
        let candidates = std::iter::once(local_study_id.to_string()).chain(
            (1..=self.max_suffix).map(|n| format!("{}_{}", local_study_id, n)),
        );

        let mut last = None;
        for name in candidates {
            let path = self.annotations_root.join(&name);
            match fs::create_dir(&path) {
                Ok(()) => {
                    debug!("Created {}", path.display());
                    return Ok(path);
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    debug!("{} already exists", path.display());
                    last = Some(path);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(RoiExportError::DirectoryCollision(
            last.unwrap_or_else(|| self.annotations_root.join(local_study_id)),
        ))
    }

    /// File name of the artifact for a row and finding
    pub fn artifact_name(row: &InputRow, finding: &FindingCode) -> String {
        format!(
            "{}_{}_{}_{}.geojson",
            row.local_study_id,
            row.study_instance_uid,
            row.container_identifier,
            finding.slug()
        )
    }

    /// Serializes a collection into `study_dir`
    pub fn write_collection(
        &self,
        study_dir: &Path,
        file_name: &str,
        collection: &FeatureCollection,
    ) -> Result<PathBuf> {
        let path = study_dir.join(file_name);
        let mut writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer(&mut writer, collection)?;
        writer.flush()?;
        debug!("Wrote {} feature(s) to {}", collection.len(), path.display());
        Ok(path)
    }
}
