pub mod cli;
pub mod config;
pub mod convert;
pub mod dicomweb;
pub mod error;
pub mod export;
pub mod extraction;
pub mod fetch;
pub mod input;
pub mod output;
pub mod pipeline;
pub mod types;

#[cfg(test)]
mod testing;

pub use cli::report::{ProgressLine, SummaryReport};
pub use config::{Config, StoreConfig};
pub use convert::convert;
pub use dicomweb::{DicomWebClient, HttpDicomWebClient, InstanceRef};
pub use error::{Result, RoiExportError};
pub use export::{to_pixel_features, FeatureCollection, PixelTransform};
pub use fetch::AnnotationFetcher;
pub use input::{load_rows, InputRow};
pub use output::OutputWriter;
pub use pipeline::{ExportOutcome, Pipeline, RunSummary};
pub use types::*;
