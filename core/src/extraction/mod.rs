pub mod sr;
pub mod tags;

pub use sr::{container_identifiers, planar_roi_groups, read_measurement_group};
pub use tags::*;
