use std::path::PathBuf;
use thiserror::Error;

/// Result type for roiexport operations
pub type Result<T> = std::result::Result<T, RoiExportError>;

/// Error types for roiexport operations
#[derive(Error, Debug)]
pub enum RoiExportError {
    /// Malformed or incomplete input table
    #[error("Input error: {0}")]
    Input(String),

    /// CSV reading error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Failure talking to the remote DICOMweb store
    #[error("Retrieval error: {0}")]
    Retrieval(String),

    /// DICOM decoding error
    #[error("DICOM error: {0}")]
    DicomError(String),

    /// Invalid tag value
    #[error("Invalid tag value: {0}")]
    InvalidValue(String),

    /// Every candidate study directory name is already taken
    #[error("Study directory collision: {} already exists", .0.display())]
    DirectoryCollision(PathBuf),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<ureq::Error> for RoiExportError {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::Status(code, response) => RoiExportError::Retrieval(format!(
                "{} returned HTTP {}",
                response.get_url(),
                code
            )),
            ureq::Error::Transport(transport) => RoiExportError::Retrieval(transport.to_string()),
        }
    }
}

impl From<toml::de::Error> for RoiExportError {
    fn from(e: toml::de::Error) -> Self {
        RoiExportError::Config(format!("{}", e))
    }
}

// Convert dicom-object errors
impl From<dicom_object::ReadError> for RoiExportError {
    fn from(e: dicom_object::ReadError) -> Self {
        RoiExportError::DicomError(format!("{}", e))
    }
}

impl From<dicom_core::value::ConvertValueError> for RoiExportError {
    fn from(e: dicom_core::value::ConvertValueError) -> Self {
        RoiExportError::InvalidValue(format!("{}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_collision_message() {
        let err = RoiExportError::DirectoryCollision(PathBuf::from("/tmp/annotations/S1_1"));
        assert_eq!(
            err.to_string(),
            "Study directory collision: /tmp/annotations/S1_1 already exists"
        );
    }

    #[test]
    fn test_toml_error_is_config_error() {
        let err: RoiExportError = toml::from_str::<toml::Value>("= nope")
            .unwrap_err()
            .into();
        assert!(matches!(err, RoiExportError::Config(_)));
    }
}
