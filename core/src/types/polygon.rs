use geo_types::{Coord, LineString};

/// Polygon ring in physical (millimeter) space
///
/// Equality is literal: same coordinates in the same order. A ring and its
/// reversal, or a rotated copy, are different polygons.
#[derive(Debug, Clone, PartialEq)]
pub struct RoiPolygon {
    pub exterior: LineString<f64>,
}

impl RoiPolygon {
    /// Creates a polygon from (x, y) pairs, keeping the ring exactly as given
    pub fn from_coordinates(coordinates: &[(f64, f64)]) -> Self {
        let coords: Vec<Coord<f64>> = coordinates
            .iter()
            .map(|&(x, y)| Coord { x, y })
            .collect();
        Self {
            exterior: LineString::new(coords),
        }
    }

    /// Iterates the ring's coordinates in order
    pub fn coords(&self) -> impl Iterator<Item = &Coord<f64>> {
        self.exterior.coords()
    }

    /// Number of ring coordinates
    pub fn len(&self) -> usize {
        self.exterior.0.len()
    }

    /// Whether the ring has no coordinates
    pub fn is_empty(&self) -> bool {
        self.exterior.0.is_empty()
    }
}
