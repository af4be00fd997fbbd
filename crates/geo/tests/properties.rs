//! Property tests over the whole valid coordinate range.

use proptest::prelude::*;
use trantech_geo::{
    calculate_bearing, calculate_distance, find_midpoint, format_coordinates, is_within_bounds,
    Coordinate, CoordinateFormat, GeoError, KM_TO_MILES,
};

fn valid_coordinate() -> impl Strategy<Value = Coordinate> {
    (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lng)| Coordinate::new(lat, lng))
}

fn invalid_coordinate() -> impl Strategy<Value = Coordinate> {
    prop_oneof![
        (90.0001f64..1000.0, -180.0f64..=180.0).prop_map(|(lat, lng)| Coordinate::new(lat, lng)),
        (-1000.0f64..-90.0001, -180.0f64..=180.0).prop_map(|(lat, lng)| Coordinate::new(lat, lng)),
        (-90.0f64..=90.0, 180.0001f64..1000.0).prop_map(|(lat, lng)| Coordinate::new(lat, lng)),
        (-90.0f64..=90.0, -1000.0f64..-180.0001).prop_map(|(lat, lng)| Coordinate::new(lat, lng)),
        (-180.0f64..=180.0).prop_map(|lng| Coordinate::new(f64::NAN, lng)),
        (-90.0f64..=90.0).prop_map(|lat| Coordinate::new(lat, f64::NAN)),
    ]
}

proptest! {
    #[test]
    fn distance_to_self_is_zero(c in valid_coordinate()) {
        let d = calculate_distance(&c, &c).unwrap();
        prop_assert_eq!(d.kilometers, 0.0);
        prop_assert_eq!(d.miles, 0.0);
        prop_assert_eq!(d.meters, 0);
    }

    #[test]
    fn distance_units_agree(a in valid_coordinate(), b in valid_coordinate()) {
        let d = calculate_distance(&a, &b).unwrap();
        prop_assert!(d.kilometers >= 0.0);
        prop_assert!(d.kilometers.is_finite());
        // Half a great circle is the farthest two points can be
        prop_assert!(d.kilometers <= 20015.087);
        prop_assert!((d.meters as f64 - d.kilometers * 1000.0).abs() <= 1.0);
        prop_assert!((d.miles - d.kilometers * KM_TO_MILES).abs() <= 0.002);
    }

    #[test]
    fn distance_is_symmetric(a in valid_coordinate(), b in valid_coordinate()) {
        let ab = calculate_distance(&a, &b).unwrap();
        let ba = calculate_distance(&b, &a).unwrap();
        prop_assert!((ab.kilometers - ba.kilometers).abs() <= 0.002);
    }

    #[test]
    fn bearing_is_in_range(a in valid_coordinate(), b in valid_coordinate()) {
        let bearing = calculate_bearing(&a, &b).unwrap();
        prop_assert!((0.0..360.0).contains(&bearing), "bearing {}", bearing);
    }

    #[test]
    fn midpoint_of_self_is_self(c in valid_coordinate()) {
        let mid = find_midpoint(&c, &c).unwrap();
        prop_assert!((mid.latitude - c.latitude).abs() < 1e-4, "{:?} vs {:?}", mid, c);
        prop_assert!((mid.longitude - c.longitude).abs() < 1e-4, "{:?} vs {:?}", mid, c);
    }

    #[test]
    fn midpoint_is_a_valid_coordinate(a in valid_coordinate(), b in valid_coordinate()) {
        let mid = find_midpoint(&a, &b).unwrap();
        prop_assert!(mid.is_valid(), "{:?}", mid);
    }

    #[test]
    fn decimal_format_reads_back(c in valid_coordinate()) {
        let text = format_coordinates(&c, CoordinateFormat::Decimal).unwrap();
        let parsed: Coordinate = text.parse().unwrap();
        prop_assert!((parsed.latitude - c.latitude).abs() <= 1e-6);
        prop_assert!((parsed.longitude - c.longitude).abs() <= 1e-6);
    }

    #[test]
    fn dms_format_has_hemispheres(c in valid_coordinate()) {
        let text = format_coordinates(&c, CoordinateFormat::Dms).unwrap();
        let lat_dir = if c.latitude >= 0.0 { "\"N " } else { "\"S " };
        let lon_dir = if c.longitude >= 0.0 { "\"E" } else { "\"W" };
        prop_assert!(text.contains(lat_dir), "{}", text);
        prop_assert!(text.ends_with(lon_dir), "{}", text);
    }

    #[test]
    fn point_inside_generated_box_is_within(
        c in valid_coordinate(),
        up in 0.0f64..20.0,
        down in 0.0f64..20.0,
        east in 0.0f64..20.0,
        west in 0.0f64..20.0,
    ) {
        let ne = Coordinate::new((c.latitude + up).min(90.0), (c.longitude + east).min(180.0));
        let sw = Coordinate::new((c.latitude - down).max(-90.0), (c.longitude - west).max(-180.0));
        prop_assert!(is_within_bounds(&c, &ne, &sw).unwrap());
    }

    #[test]
    fn point_past_any_edge_is_outside(
        lat in -80.0f64..80.0,
        lng in -170.0f64..170.0,
        excess in 0.001f64..10.0,
        edge in 0usize..4,
    ) {
        let ne = Coordinate::new(lat, lng);
        let sw = Coordinate::new(lat - 5.0, lng - 5.0);
        let probe = match edge {
            0 => Coordinate::new(ne.latitude + excess, lng - 2.5),
            1 => Coordinate::new(sw.latitude - excess, lng - 2.5),
            2 => Coordinate::new(lat - 2.5, ne.longitude + excess),
            _ => Coordinate::new(lat - 2.5, sw.longitude - excess),
        };
        prop_assume!(probe.is_valid());
        prop_assert!(!is_within_bounds(&probe, &ne, &sw).unwrap());
    }

    #[test]
    fn every_operation_rejects_invalid_input(bad in invalid_coordinate(), good in valid_coordinate()) {
        prop_assert!(!bad.is_valid());
        prop_assert!(matches!(calculate_distance(&bad, &good), Err(GeoError::InvalidInput(_))));
        prop_assert!(matches!(calculate_distance(&good, &bad), Err(GeoError::InvalidInput(_))));
        prop_assert!(calculate_bearing(&bad, &good).is_err());
        prop_assert!(find_midpoint(&good, &bad).is_err());
        prop_assert!(format_coordinates(&bad, CoordinateFormat::Dms).is_err());
        prop_assert!(is_within_bounds(&good, &bad, &good).is_err());
    }
}

#[test]
fn cardinal_bearings() {
    let origin = Coordinate::new(0.0, 0.0);
    let cases = [
        (origin, Coordinate::new(10.0, 0.0), 0.0),
        (Coordinate::new(10.0, 0.0), origin, 180.0),
        (origin, Coordinate::new(0.0, 10.0), 90.0),
        (origin, Coordinate::new(0.0, -10.0), 270.0),
    ];

    for (from, to, expected) in cases {
        let bearing = calculate_bearing(&from, &to).unwrap();
        assert!((bearing - expected).abs() < 0.1, "{:?} -> {:?}: {}", from, to, bearing);
    }
}

#[test]
fn reference_city_distances() {
    let new_york = Coordinate::new(40.7128, -74.0060);
    let los_angeles = Coordinate::new(34.0522, -118.2437);
    let london = Coordinate::new(51.5074, -0.1278);
    let paris = Coordinate::new(48.8566, 2.3522);

    let km = calculate_distance(&new_york, &los_angeles).unwrap().kilometers;
    assert!(km > 3900.0 && km < 4000.0, "{}", km);

    let km = calculate_distance(&london, &paris).unwrap().kilometers;
    assert!(km > 340.0 && km < 350.0, "{}", km);
}
