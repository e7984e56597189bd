use crate::core::distance::{haversine_km, round_to};
use crate::models::{Coordinate, OverpassElement, PitchRecord, Provider};

/// Name given to pitches without a `name` tag
pub const UNNAMED_PITCH: &str = "Unnamed pitch";

/// Build the pitch catalog from raw Overpass elements
///
/// Elements without a usable coordinate are dropped. The result is sorted by
/// distance from `origin` (stable, so equal distances keep input order).
pub fn build_catalog(elements: &[OverpassElement], origin: Coordinate) -> Vec<PitchRecord> {
    let mut records: Vec<PitchRecord> = elements
        .iter()
        .filter_map(|element| {
            let Some(coord) = element.coordinate() else {
                tracing::debug!("Dropping {:?} {} without coordinate", element.kind, element.id);
                return None;
            };

            let name = element
                .tags
                .get("name")
                .cloned()
                .unwrap_or_else(|| UNNAMED_PITCH.to_string());

            let distance_km = round_to(
                haversine_km(origin.latitude, origin.longitude, coord.latitude, coord.longitude),
                2,
            );

            Some(PitchRecord {
                id: pitch_id(coord.latitude, coord.longitude),
                provider: detect_provider(&name),
                name,
                lat: coord.latitude,
                lon: coord.longitude,
                distance_km,
                surface: element.tag_lower("surface"),
                access: element.tag_lower("access"),
                fee: element.tag_lower("fee"),
                indoor: element.tag_lower("indoor"),
                eta_minutes: 0,
                score_raw: 0.0,
                stars: 0,
            })
        })
        .collect();

    records.sort_by(|a, b| {
        a.distance_km
            .partial_cmp(&b.distance_km)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    records
}

/// Stable identifier of a pitch, unique per location
pub fn pitch_id(lat: f64, lon: f64) -> String {
    format!("{:.6},{:.6}", lat, lon)
}

/// Classify the operator from the facility name (first match wins)
pub fn detect_provider(name: &str) -> Provider {
    let n = name.to_lowercase();
    if n.contains("urbansoccer") || n.contains("urban soccer") {
        Provider::UrbanSoccer
    } else if n.contains("le five") || n.contains("lefive") {
        Provider::LeFive
    } else if n.contains("five") {
        Provider::FiveGeneric
    } else {
        Provider::PublicOther
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ElementCenter, ElementKind};
    use std::collections::HashMap;

    const ORIGIN: Coordinate = Coordinate { latitude: 44.8378, longitude: -0.5792 };

    fn node(lat: f64, lon: f64, tags: &[(&str, &str)]) -> OverpassElement {
        OverpassElement {
            kind: ElementKind::Node,
            id: 1,
            lat: Some(lat),
            lon: Some(lon),
            center: None,
            tags: tags.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
        }
    }

    #[test]
    fn test_provider_precedence() {
        assert_eq!(detect_provider("UrbanSoccer Bordeaux"), Provider::UrbanSoccer);
        assert_eq!(detect_provider("Urban Soccer Five"), Provider::UrbanSoccer);
        assert_eq!(detect_provider("LE FIVE Mérignac"), Provider::LeFive);
        assert_eq!(detect_provider("LeFive Bègles"), Provider::LeFive);
        assert_eq!(detect_provider("Five Arena"), Provider::FiveGeneric);
        assert_eq!(detect_provider("Stade municipal"), Provider::PublicOther);
        assert_eq!(detect_provider(""), Provider::PublicOther);
    }

    #[test]
    fn test_pitch_id_format() {
        assert_eq!(pitch_id(44.8378, -0.5792), "44.837800,-0.579200");
    }

    #[test]
    fn test_way_uses_center_and_missing_coordinates_dropped() {
        let way = OverpassElement {
            kind: ElementKind::Way,
            id: 2,
            lat: None,
            lon: None,
            center: Some(ElementCenter { lat: Some(44.84), lon: Some(-0.58) }),
            tags: HashMap::new(),
        };
        let broken = OverpassElement {
            kind: ElementKind::Relation,
            id: 3,
            lat: None,
            lon: None,
            center: None,
            tags: HashMap::new(),
        };

        let catalog = build_catalog(&[way, broken], ORIGIN);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].id, "44.840000,-0.580000");
        assert_eq!(catalog[0].name, UNNAMED_PITCH);
        assert_eq!(catalog[0].provider, Provider::PublicOther);
    }

    #[test]
    fn test_tags_lowercased_and_sorted_by_distance() {
        let far = node(44.86, -0.5792, &[("name", "Far"), ("surface", "Grass")]);
        let near = node(44.84, -0.5792, &[("name", "Near"), ("fee", "YES")]);

        let catalog = build_catalog(&[far, near], ORIGIN);

        assert_eq!(catalog[0].name, "Near");
        assert_eq!(catalog[0].fee, "yes");
        assert_eq!(catalog[0].surface, "");
        assert_eq!(catalog[1].surface, "grass");
        assert!(catalog[0].distance_km <= catalog[1].distance_km);
    }

    #[test]
    fn test_empty_catalog() {
        assert!(build_catalog(&[], ORIGIN).is_empty());
    }
}
