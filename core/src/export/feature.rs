use serde::{Deserialize, Serialize};

/// Pixel position written as `[row, col]`
pub type PixelPosition = [i64; 2];

/// QuPath feature collection for one (study, finding) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection {
    pub features: Vec<PixelFeature>,
}

impl FeatureCollection {
    /// Get the number of features
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Check if the collection is empty
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// One annotation polygon in pixel space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct PixelFeature {
    pub geometry: PolygonGeometry,
    pub properties: AnnotationProperties,
}

impl PixelFeature {
    /// Creates a locked annotation named `<category>_<index>`
    pub fn new(ring: Vec<PixelPosition>, category: &str, index: usize) -> Self {
        Self {
            geometry: PolygonGeometry {
                coordinates: vec![ring],
            },
            properties: AnnotationProperties {
                object_type: "annotation".to_string(),
                name: format!("{}_{}", category, index),
                is_locked: true,
            },
        }
    }
}

/// GeoJSON polygon geometry with integer coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Polygon")]
pub struct PolygonGeometry {
    pub coordinates: Vec<Vec<PixelPosition>>,
}

/// QuPath object properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationProperties {
    pub object_type: String,
    pub name: String,
    pub is_locked: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialized_layout() {
        let collection = FeatureCollection {
            features: vec![PixelFeature::new(vec![[1, 1], [1, 10], [10, 10]], "tumor", 0)],
        };

        let value = serde_json::to_value(&collection).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[1, 1], [1, 10], [10, 10]]]
                    },
                    "properties": {
                        "objectType": "annotation",
                        "name": "tumor_0",
                        "isLocked": true
                    }
                }]
            })
        );
    }

    #[test]
    fn test_coordinates_are_integers() {
        let feature = PixelFeature::new(vec![[3, -4]], "artifact", 2);
        let text = serde_json::to_string(&feature).unwrap();
        assert!(text.contains("[[[3,-4]]]"));
        assert!(text.starts_with("{\"type\":\"Feature\""));
    }

    #[test]
    fn test_parse_back() {
        let text = r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"Polygon","coordinates":[[[0,0],[0,5],[5,5]]]},"properties":{"objectType":"annotation","name":"artifact_3","isLocked":true}}]}"#;
        let collection: FeatureCollection = serde_json::from_str(text).unwrap();
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.features[0].properties.name, "artifact_3");
    }
}
