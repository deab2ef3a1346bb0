//! Core type definitions for ROI export
//!
//! This module provides the fundamental types used throughout the roiexport library:
//! - [`FindingCode`]: Coded finding category exported as one GeoJSON file per study
//! - [`GraphicType`]: Graphic type of SR spatial coordinates
//! - [`AmbiguousContainerPolicy`]: Handling of SR documents with several container identifiers
//! - [`PlanarRoiGroup`]: Planar ROI measurement group extracted from an SR document
//! - [`RoiPolygon`]: Polygon ring in physical (millimeter) space
//! - [`PixelSpacing`]: Millimeters per pixel used to rescale coordinates

mod enums;
mod finding;
mod pixel_spacing;
mod polygon;
mod roi;

pub use enums::{AmbiguousContainerPolicy, GraphicType};
pub use finding::{default_findings, FindingCode};
pub use pixel_spacing::PixelSpacing;
pub use polygon::RoiPolygon;
pub use roi::{CodedConcept, ImageRegion, PlanarRoiGroup};
