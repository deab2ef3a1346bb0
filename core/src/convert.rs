use crate::types::{PlanarRoiGroup, RoiPolygon};
use log::warn;

/// Converts measurement groups to physical-space polygons
///
/// Groups without an image region are skipped. A polygon identical to one
/// already accepted (same coordinates, same order) is dropped with a
/// warning. Output keeps the order of first occurrence.
pub fn convert(groups: &[PlanarRoiGroup]) -> Vec<RoiPolygon> {
    let mut polygons: Vec<RoiPolygon> = Vec::new();

    for group in groups {
        let Some(roi) = &group.roi else {
            continue;
        };

        let polygon = RoiPolygon::from_coordinates(&roi.coordinates);
        if polygons.contains(&polygon) {
            warn!(
                "Omitting duplicate ROI{}",
                group
                    .tracking_identifier
                    .as_deref()
                    .map(|id| format!(" '{}'", id))
                    .unwrap_or_default()
            );
        } else {
            polygons.push(polygon);
        }
    }

    polygons
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GraphicType, ImageRegion};

    fn group(coordinates: &[(f64, f64)]) -> PlanarRoiGroup {
        PlanarRoiGroup {
            tracking_identifier: Some("ROI".to_string()),
            tracking_uid: None,
            finding: None,
            roi: Some(ImageRegion {
                graphic_type: GraphicType::Polygon,
                coordinates: coordinates.to_vec(),
            }),
        }
    }

    const SQUARE: [(f64, f64); 5] = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)];

    #[test]
    fn test_exact_duplicates_dropped() {
        let triangle = [(2.0, 2.0), (3.0, 2.0), (3.0, 3.0), (2.0, 2.0)];
        let polygons = convert(&[group(&SQUARE), group(&triangle), group(&SQUARE)]);

        assert_eq!(polygons.len(), 2);
        assert_eq!(polygons[0], RoiPolygon::from_coordinates(&SQUARE));
        assert_eq!(polygons[1], RoiPolygon::from_coordinates(&triangle));
    }

    #[test]
    fn test_reversed_ring_is_kept() {
        let mut reversed = SQUARE;
        reversed.reverse();

        let polygons = convert(&[group(&SQUARE), group(&reversed)]);
        assert_eq!(polygons.len(), 2);
    }

    #[test]
    fn test_near_duplicates_are_kept() {
        let mut shifted = SQUARE;
        shifted[2].0 += 1e-9;

        let polygons = convert(&[group(&SQUARE), group(&shifted)]);
        assert_eq!(polygons.len(), 2);
    }

    #[test]
    fn test_groups_without_roi_skipped() {
        let mut no_roi = group(&SQUARE);
        no_roi.roi = None;

        let polygons = convert(&[no_roi, group(&SQUARE)]);
        assert_eq!(polygons.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(convert(&[]).is_empty());
    }
}
