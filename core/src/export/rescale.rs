use super::feature::{FeatureCollection, PixelFeature, PixelPosition};
use crate::types::{FindingCode, PixelSpacing, RoiPolygon};
use geo_types::Coord;

/// Maps slide coordinates (mm) to image pixels
///
/// Rows come from y and columns from x. Values are truncated toward zero,
/// not rounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelTransform {
    pub x_min: f64,
    pub y_min: f64,
    pub spacing: PixelSpacing,
}

impl PixelTransform {
    /// Creates a transform for a slide whose origin is (`x_min`, `y_min`) mm
    pub fn new(x_min: f64, y_min: f64, spacing: PixelSpacing) -> Self {
        Self {
            x_min,
            y_min,
            spacing,
        }
    }

    /// Converts one physical coordinate to `[row, col]`
    pub fn to_pixel(&self, coord: &Coord<f64>) -> PixelPosition {
        let row = ((coord.y - self.y_min) / self.spacing.row) as i64;
        let col = ((coord.x - self.x_min) / self.spacing.col) as i64;
        [row, col]
    }

    /// Converts a polygon ring, keeping point order
    pub fn ring_to_pixels(&self, polygon: &RoiPolygon) -> Vec<PixelPosition> {
        polygon.coords().map(|c| self.to_pixel(c)).collect()
    }
}

/// Builds the feature collection for one finding category
///
/// Returns `None` when there are no polygons, in which case no file should
/// be written.
pub fn to_pixel_features(
    polygons: &[RoiPolygon],
    finding: &FindingCode,
    transform: &PixelTransform,
) -> Option<FeatureCollection> {
    if polygons.is_empty() {
        return None;
    }

    let category = finding.slug();
    let features = polygons
        .iter()
        .enumerate()
        .map(|(index, polygon)| {
            PixelFeature::new(transform.ring_to_pixels(polygon), &category, index)
        })
        .collect();

    Some(FeatureCollection { features })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform(x_min: f64, y_min: f64) -> PixelTransform {
        PixelTransform::new(x_min, y_min, PixelSpacing::default())
    }

    #[test]
    fn test_axes_are_swapped() {
        let t = transform(0.0, 0.0);
        assert_eq!(t.to_pixel(&Coord { x: 0.0023, y: 0.00023 }), [1, 10]);
    }

    #[test]
    fn test_origin_offset() {
        // (5.046 - 5.0) / 0.00023 is just above 200, (10.023 - 10.0) / 0.00023
        // is just below 100 in f64
        let t = transform(10.0, 5.0);
        assert_eq!(t.to_pixel(&Coord { x: 10.023, y: 5.046 }), [200, 99]);
    }

    #[test]
    fn test_truncates_toward_zero() {
        let t = PixelTransform::new(0.0, 0.0, PixelSpacing::isotropic(1.0));
        assert_eq!(t.to_pixel(&Coord { x: 2.9, y: 7.99 }), [7, 2]);
        assert_eq!(t.to_pixel(&Coord { x: -2.9, y: -0.5 }), [0, -2]);
    }

    #[test]
    fn test_anisotropic_spacing() {
        let t = PixelTransform::new(0.0, 0.0, PixelSpacing::new(0.5, 0.25));
        assert_eq!(t.to_pixel(&Coord { x: 1.0, y: 1.0 }), [2, 4]);
    }

    #[test]
    fn test_features_named_by_category_and_index() {
        let polygons = vec![
            RoiPolygon::from_coordinates(&[
                (0.00023, 0.00023),
                (0.0023, 0.00023),
                (0.0023, 0.0023),
            ]),
            RoiPolygon::from_coordinates(&[(0.0, 0.0), (0.0023, 0.0), (0.0, 0.0023)]),
        ];
        let finding = FindingCode::sct("39577004", "Tumor cells of uncertain behavior");

        let collection = to_pixel_features(&polygons, &finding, &transform(0.0, 0.0)).unwrap();
        assert_eq!(collection.len(), 2);
        assert_eq!(
            collection.features[0].properties.name,
            "tumor-cells-of-uncertain-behavior_0"
        );
        assert_eq!(
            collection.features[1].properties.name,
            "tumor-cells-of-uncertain-behavior_1"
        );
        assert_eq!(
            collection.features[0].geometry.coordinates,
            vec![vec![[1, 1], [1, 10], [10, 10]]]
        );
        assert!(collection.features.iter().all(|f| f.properties.is_locked));
    }

    #[test]
    fn test_no_polygons_no_collection() {
        let finding = FindingCode::sct("108369006", "Tumor");
        assert!(to_pixel_features(&[], &finding, &transform(0.0, 0.0)).is_none());
    }
}
