//! Recorded OpenRouteService geocoding and directions responses, trimmed to
//! the fields the adapter reads.

/// GeoJSON feature collection: 1200 miles, 20 hours.
pub const FEATURE_COLLECTION_LONG_HAUL: &str = r#"{
  "type": "FeatureCollection",
  "bbox": [-104.99, 38.62, -87.62, 41.88],
  "features": [
    {
      "bbox": [-104.99, 38.62, -87.62, 41.88],
      "type": "Feature",
      "properties": {
        "segments": [],
        "summary": { "distance": 1931208.0, "duration": 72000.0 },
        "way_points": [0, 3]
      },
      "geometry": {
        "type": "LineString",
        "coordinates": [
          [-87.6298, 41.8781],
          [-90.1994, 38.6270],
          [-97.3375, 37.6872],
          [-104.9903, 39.7392]
        ]
      }
    }
  ],
  "metadata": { "service": "routing" }
}"#;

/// Routes array with an encoded polyline: 300 miles, 5 hours.
pub const ROUTES_ENCODED_SHORT_HAUL: &str = r#"{
  "routes": [
    {
      "summary": { "distance": 482802.0, "duration": 18000.0 },
      "geometry": "_p~iF~ps|U_ulLnnqC_mqNvxq`@",
      "way_points": [0, 2]
    }
  ]
}"#;

/// Routes array with inline GeoJSON geometry.
pub const ROUTES_INLINE_GEOMETRY: &str = r#"{
  "routes": [
    {
      "summary": { "distance": 160934.0, "duration": 7200.0 },
      "geometry": {
        "type": "LineString",
        "coordinates": [[-96.797, 32.7767], [-97.7431, 30.2672]]
      }
    }
  ]
}"#;

/// Routes array without any geometry.
pub const ROUTES_MISSING_GEOMETRY: &str = r#"{
  "routes": [
    { "summary": { "distance": 160934.0, "duration": 7200.0 } }
  ]
}"#;

/// Routes array whose polyline is cut off mid-coordinate.
pub const ROUTES_TRUNCATED_POLYLINE: &str = r#"{
  "routes": [
    {
      "summary": { "distance": 160934.0, "duration": 7200.0 },
      "geometry": "_p~iF~ps|U_ulL"
    }
  ]
}"#;

/// Error body returned when no route exists between the points.
pub const ROUTE_NOT_FOUND: &str = r#"{
  "error": { "code": 2010, "message": "Could not find routable point within a radius of 350.0 meters" },
  "info": { "engine": { "version": "7.1.0" } }
}"#;

/// Geocoding search hit for Chicago, IL.
pub const GEOCODE_CHICAGO: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "geometry": { "type": "Point", "coordinates": [-87.6298, 41.8781] },
      "properties": { "label": "Chicago, IL, USA", "confidence": 1 }
    }
  ]
}"#;

/// Geocoding search with no hits.
pub const GEOCODE_NO_MATCH: &str = r#"{
  "type": "FeatureCollection",
  "features": []
}"#;

/// Error body returned for a rejected API key.
pub const ACCESS_DENIED: &str = r#"{
  "error": "Access to this API has been disallowed"
}"#;
