use geo::{GeodesicDistance, point};

/// Geodesic (WGS-84) distance in meters between two latitude/longitude pairs.
pub fn distance_meters(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let a = point!(x: lon1, y: lat1);
    let b = point!(x: lon2, y: lat2);
    a.geodesic_distance(&b)
}

/// Rounds a distance to two decimals for response payloads.
pub fn round_meters(distance: f64) -> f64 {
    (distance * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const OFFICE_LAT: f64 = 34.052235;
    const OFFICE_LON: f64 = -118.243683;

    #[test]
    fn identical_points_have_zero_distance() {
        let d = distance_meters(OFFICE_LAT, OFFICE_LON, OFFICE_LAT, OFFICE_LON);
        assert!(d.abs() < 1e-9, "expected zero distance, got {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let ab = distance_meters(OFFICE_LAT, OFFICE_LON, 40.712776, -74.005974);
        let ba = distance_meters(40.712776, -74.005974, OFFICE_LAT, OFFICE_LON);
        assert!((ab - ba).abs() < 1e-6);
    }

    #[test]
    fn near_office_point_is_a_few_meters_away() {
        let d = distance_meters(OFFICE_LAT, OFFICE_LON, 34.052300, -118.243700);
        assert!(d > 7.0 && d < 8.0, "expected ~7.3m, got {d}");
    }

    #[test]
    fn distant_point_is_well_outside_threshold() {
        let d = distance_meters(OFFICE_LAT, OFFICE_LON, 34.060000, -118.250000);
        assert!(d > 100.0, "expected out-of-zone distance, got {d}");
    }

    #[test]
    fn antipodal_points_do_not_blow_up() {
        let d = distance_meters(0.0, 0.0, 0.0, 180.0);
        assert!(d.is_finite() && d > 19_000_000.0);
    }

    #[test]
    fn rounding_keeps_two_decimals() {
        assert_eq!(round_meters(7.3456), 7.35);
        assert_eq!(round_meters(0.0), 0.0);
    }
}
