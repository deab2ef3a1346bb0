use crate::config::Config;
use crate::convert::convert;
use crate::dicomweb::DicomWebClient;
use crate::error::Result;
use crate::export::{to_pixel_features, PixelTransform};
use crate::fetch::AnnotationFetcher;
use crate::input::InputRow;
use crate::output::OutputWriter;
use crate::types::FindingCode;
use log::{debug, info};
use std::path::PathBuf;

/// Outcome of one (row, finding) pair
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOutcome {
    pub local_study_id: String,
    pub container_identifier: String,
    pub finding: FindingCode,
    /// Number of features written, 0 when no file was produced
    pub features: usize,
    pub path: Option<PathBuf>,
}

/// Totals for a finished run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub rows: usize,
    pub files_written: usize,
    pub features_written: usize,
    pub outcomes: Vec<ExportOutcome>,
}

impl RunSummary {
    fn record(&mut self, outcome: ExportOutcome) {
        if outcome.path.is_some() {
            self.files_written += 1;
            self.features_written += outcome.features;
        }
        self.outcomes.push(outcome);
    }
}

/// Sequential export of every input row and finding category
///
/// The first error aborts the run. Files written before it stay on disk.
pub struct Pipeline<C> {
    config: Config,
    fetcher: AnnotationFetcher<C>,
    writer: OutputWriter,
}

impl<C: DicomWebClient> Pipeline<C> {
    /// Creates a pipeline writing below `writer`'s annotations directory
    pub fn new(config: Config, client: C, writer: OutputWriter) -> Self {
        let fetcher = AnnotationFetcher::new(client, config.ambiguous_container);
        Self {
            config,
            fetcher,
            writer,
        }
    }

    /// Runs every row without progress reporting
    pub fn run(&self, rows: &[InputRow]) -> Result<RunSummary> {
        self.run_with_progress(rows, |_| {})
    }

    /// Runs every row, calling `progress` after each (row, finding) pair
    pub fn run_with_progress<F>(&self, rows: &[InputRow], mut progress: F) -> Result<RunSummary>
    where
        F: FnMut(&ExportOutcome),
    {
        let mut summary = RunSummary::default();

        for row in rows {
            info!(
                "Processing study {} ({}), container {}",
                row.local_study_id, row.study_instance_uid, row.container_identifier
            );
            let study_dir = self.writer.create_study_dir(&row.local_study_id)?;
            let transform = PixelTransform::new(row.x_min, row.y_min, self.config.pixel_spacing);

            for finding in &self.config.findings {
                let outcome = self.export_finding(row, finding, &study_dir, &transform)?;
                progress(&outcome);
                summary.record(outcome);
            }
            summary.rows += 1;
        }

        Ok(summary)
    }

    fn export_finding(
        &self,
        row: &InputRow,
        finding: &FindingCode,
        study_dir: &std::path::Path,
        transform: &PixelTransform,
    ) -> Result<ExportOutcome> {
        let groups = self.fetcher.fetch(
            &row.study_instance_uid,
            &row.container_identifier,
            finding,
        )?;
        let polygons = convert(&groups);
        debug!(
            "{} group(s), {} polygon(s) for '{}'",
            groups.len(),
            polygons.len(),
            finding.meaning
        );

        let mut outcome = ExportOutcome {
            local_study_id: row.local_study_id.clone(),
            container_identifier: row.container_identifier.clone(),
            finding: finding.clone(),
            features: 0,
            path: None,
        };

        if let Some(collection) = to_pixel_features(&polygons, finding, transform) {
            let name = OutputWriter::artifact_name(row, finding);
            outcome.features = collection.len();
            outcome.path = Some(self.writer.write_collection(study_dir, &name, &collection)?);
        }

        Ok(outcome)
    }
}
