//! Physical-to-pixel rescaling and QuPath GeoJSON structures

mod feature;
mod rescale;

pub use feature::{
    AnnotationProperties, FeatureCollection, PixelFeature, PixelPosition, PolygonGeometry,
};
pub use rescale::{to_pixel_features, PixelTransform};
