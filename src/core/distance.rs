/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers. Non-finite inputs give a non-finite result.
#[inline]
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Round to `decimals` places, ties to even
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_distance() {
        // London to Paris is approximately 344 km
        let distance = haversine_km(51.5074, -0.1278, 48.8566, 2.3522);
        assert!((distance - 344.0).abs() < 10.0, "Distance should be ~344km, got {}", distance);
    }

    #[test]
    fn test_haversine_symmetry() {
        let a = haversine_km(44.8378, -0.5792, 44.8500, -0.5600);
        let b = haversine_km(44.8500, -0.5600, 44.8378, -0.5792);
        assert!((a - b).abs() < 1e-12);
    }

    #[test]
    fn test_haversine_identity() {
        assert_eq!(haversine_km(44.8378, -0.5792, 44.8378, -0.5792), 0.0);
    }

    #[test]
    fn test_non_finite_propagates() {
        assert!(!haversine_km(f64::NAN, 0.0, 1.0, 1.0).is_finite());
    }

    #[test]
    fn test_round_to_ties_even() {
        assert_eq!(round_to(4.5, 0), 4.0);
        assert_eq!(round_to(3.5, 0), 4.0);
        assert_eq!(round_to(1.234, 2), 1.23);
        assert_eq!(round_to(89.96, 1), 90.0);
    }
}
