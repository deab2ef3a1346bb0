pub mod report;

use crate::types::PixelSpacing;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for roiexport
#[derive(Parser, Debug)]
#[command(name = "roiexport")]
#[command(about = "Export SR planar ROI annotations as QuPath GeoJSON")]
#[command(version)]
pub struct Cli {
    /// CSV with StudyID, x_min, y_min, StudyInstanceUID, ContainerIdentifier
    #[arg(short, long, value_name = "CSV")]
    pub spreadsheet: PathBuf,

    /// Output directory, annotations are written below <OUTPUT>/annotations
    #[arg(short, long, value_name = "DIR")]
    pub output: PathBuf,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Pixel spacing in mm, "row" or "row,col" (overrides the config file)
    #[arg(long, value_name = "MM", value_parser = PixelSpacing::parse)]
    pub pixel_spacing: Option<PixelSpacing>,

    /// OAuth access token for the DICOM store
    ///
    /// Falls back to the configured environment variable, then gcloud.
    #[arg(long, value_name = "TOKEN")]
    pub access_token: Option<String>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
