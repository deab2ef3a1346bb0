use crate::error::{Result, RoiExportError};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Columns every input table must provide
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "StudyID",
    "x_min",
    "y_min",
    "StudyInstanceUID",
    "ContainerIdentifier",
];

/// One row of the input table: a slide container to export
///
/// `x_min`/`y_min` are the slide origin in millimeters. Identifiers are kept
/// as text even when they look numeric.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InputRow {
    #[serde(rename = "StudyID")]
    pub local_study_id: String,

    pub x_min: f64,

    pub y_min: f64,

    #[serde(rename = "StudyInstanceUID")]
    pub study_instance_uid: String,

    #[serde(rename = "ContainerIdentifier")]
    pub container_identifier: String,
}

/// Loads all rows of a CSV file, preserving order
pub fn load_rows<P: AsRef<Path>>(path: P) -> Result<Vec<InputRow>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        RoiExportError::Input(format!("cannot open {}: {}", path.display(), e))
    })?;
    read_rows(file)
}

/// Reads rows from CSV data with a header line
///
/// # Errors
///
/// `Input` if a required column is missing or a field cannot be parsed.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<InputRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = normalize_headers(reader.headers()?);
    reader.set_headers(headers.clone());

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|column| !has_column(&headers, column))
        .collect();
    if !missing.is_empty() {
        return Err(RoiExportError::Input(format!(
            "missing required column(s): {}",
            missing.join(", ")
        )));
    }

    reader
        .deserialize::<InputRow>()
        .enumerate()
        .map(|(index, row)| {
            row.map_err(|e| {
                // header is line 1
                RoiExportError::Input(format!("row {}: {}", index + 2, e))
            })
        })
        .collect()
}

/// Older tables name the study UID column `StudyInstanceID`
const LEGACY_STUDY_UID_COLUMN: &str = "StudyInstanceID";

/// Maps the legacy study UID header onto `StudyInstanceUID`
///
/// Only applies when the table has no `StudyInstanceUID` column; otherwise
/// the legacy column is left as an ignored extra.
fn normalize_headers(headers: &csv::StringRecord) -> csv::StringRecord {
    if has_column(headers, "StudyInstanceUID") {
        return headers.clone();
    }
    headers
        .iter()
        .map(|header| {
            if header == LEGACY_STUDY_UID_COLUMN {
                "StudyInstanceUID"
            } else {
                header
            }
        })
        .collect()
}

fn has_column(headers: &csv::StringRecord, column: &str) -> bool {
    headers.iter().any(|header| header == column)
}
