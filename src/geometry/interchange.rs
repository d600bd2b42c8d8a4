use serde::{Deserialize, Serialize};

/// A single coordinate pair, longitude then latitude.
pub type Position = [f64; 2];

/// GeoJSON-shaped geometry exchanged over the service boundary.
///
/// The enumeration is closed: exactly six kinds, matching what the store
/// accepts. The serde tag doubles as payload validation, since an unknown
/// `type` or a coordinate array of the wrong nesting depth fails to
/// deserialize and never reaches the codec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: Position },
    LineString { coordinates: Vec<Position> },
    Polygon { coordinates: Vec<Vec<Position>> },
    MultiPoint { coordinates: Vec<Position> },
    MultiLineString { coordinates: Vec<Vec<Position>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Position>>> },
}

impl Geometry {
    /// GeoJSON kind tag for this value.
    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::Point { .. } => "Point",
            Geometry::LineString { .. } => "LineString",
            Geometry::Polygon { .. } => "Polygon",
            Geometry::MultiPoint { .. } => "MultiPoint",
            Geometry::MultiLineString { .. } => "MultiLineString",
            Geometry::MultiPolygon { .. } => "MultiPolygon",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_each_supported_kind() {
        let cases = vec![
            json!({"type": "Point", "coordinates": [100.0, 0.0]}),
            json!({"type": "LineString", "coordinates": [[100.0, 0.0], [101.0, 1.0]]}),
            json!({"type": "Polygon", "coordinates": [[[100.0, 0.0], [101.0, 0.0], [101.0, 1.0], [100.0, 0.0]]]}),
            json!({"type": "MultiPoint", "coordinates": [[100.0, 0.0], [101.0, 1.0]]}),
            json!({"type": "MultiLineString", "coordinates": [[[100.0, 0.0], [101.0, 1.0]]]}),
            json!({"type": "MultiPolygon", "coordinates": [[[[100.0, 0.0], [101.0, 0.0], [101.0, 1.0], [100.0, 0.0]]]]}),
        ];

        for case in cases {
            let expected = case["type"].as_str().unwrap().to_string();
            let geometry: Geometry = serde_json::from_value(case).expect("should deserialize");
            assert_eq!(geometry.kind(), expected);
        }
    }

    #[test]
    fn rejects_unknown_kind_tag() {
        let value = json!({"type": "GeometryCollection", "geometries": []});
        assert!(serde_json::from_value::<Geometry>(value).is_err());
    }

    #[test]
    fn rejects_wrong_nesting_depth() {
        // A Point whose coordinates are nested like a LineString
        let value = json!({"type": "Point", "coordinates": [[100.0, 0.0]]});
        assert!(serde_json::from_value::<Geometry>(value).is_err());

        // A LineString with bare Point coordinates
        let value = json!({"type": "LineString", "coordinates": [100.0, 0.0]});
        assert!(serde_json::from_value::<Geometry>(value).is_err());
    }

    #[test]
    fn rejects_position_with_extra_ordinates() {
        let value = json!({"type": "Point", "coordinates": [100.0, 0.0, 5.0]});
        assert!(serde_json::from_value::<Geometry>(value).is_err());
    }

    #[test]
    fn serializes_with_geojson_tag() {
        let geometry = Geometry::Point { coordinates: [100.0, 0.0] };
        let value = serde_json::to_value(&geometry).unwrap();
        assert_eq!(value, json!({"type": "Point", "coordinates": [100.0, 0.0]}));
    }

    #[test]
    fn integer_coordinates_coerce_to_float() {
        let value = json!({"type": "Point", "coordinates": [100, 0]});
        let geometry: Geometry = serde_json::from_value(value).unwrap();
        assert_eq!(geometry, Geometry::Point { coordinates: [100.0, 0.0] });
    }
}
