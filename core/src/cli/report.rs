use crate::pipeline::{ExportOutcome, RunSummary};
use std::fmt;

/// Progress line printed after each (row, finding) pair
pub struct ProgressLine<'a> {
    outcome: &'a ExportOutcome,
}

impl<'a> ProgressLine<'a> {
    /// Creates a new progress line
    pub fn new(outcome: &'a ExportOutcome) -> Self {
        Self { outcome }
    }
}

impl<'a> fmt::Display for ProgressLine<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} GeoJSON for container {} complete",
            self.outcome.local_study_id,
            self.outcome.finding.meaning,
            self.outcome.container_identifier
        )
    }
}

/// Text report for a finished run
pub struct SummaryReport<'a> {
    summary: &'a RunSummary,
}

impl<'a> SummaryReport<'a> {
    /// Creates a new summary report
    pub fn new(summary: &'a RunSummary) -> Self {
        Self { summary }
    }
}

impl<'a> fmt::Display for SummaryReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Export Summary")?;
        writeln!(f, "==============")?;
        writeln!(f, "Rows:           {}", self.summary.rows)?;
        writeln!(f, "Files written:  {}", self.summary.files_written)?;
        writeln!(f, "Features:       {}", self.summary.features_written)?;

        let written: Vec<_> = self
            .summary
            .outcomes
            .iter()
            .filter_map(|o| o.path.as_ref().map(|p| (o, p)))
            .collect();
        if !written.is_empty() {
            writeln!(f)?;
            for (outcome, path) in written {
                writeln!(f, "  {} ({} feature(s))", path.display(), outcome.features)?;
            }
        }

        Ok(())
    }
}
