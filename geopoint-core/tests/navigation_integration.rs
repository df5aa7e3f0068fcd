use approx::assert_abs_diff_eq;
use geopoint_core::{Axis, ErrorKind, Geopoint, GeopointError, EARTH_RADIUS_KM, KM_IN_MILES};

const LATITUDES: [f64; 9] = [-90.0, -67.25, -33.86, -0.5, 0.0, 12.125, 48.8566, 78.9, 90.0];
const LONGITUDES: [f64; 9] = [-180.0, -151.2, -70.0, -0.001, 0.0, 2.3522, 10.0576, 139.69, 180.0];

fn point(lat: f64, lon: f64) -> Geopoint {
    Geopoint::from_degrees(lat, lon).unwrap()
}

// --- Construction ---

#[test]
fn valid_pairs_round_trip_through_accessors() {
    for lat in LATITUDES {
        for lon in LONGITUDES {
            let p = Geopoint::from_degrees(lat, lon).unwrap();
            assert_eq!(p.latitude(), lat);
            assert_eq!(p.longitude(), lon);
        }
    }
}

#[test]
fn out_of_range_pairs_are_malformed() {
    let cases = [
        (90.000_001, 0.0, Axis::Latitude),
        (-91.0, 0.0, Axis::Latitude),
        (0.0, 180.000_001, Axis::Longitude),
        (0.0, -360.0, Axis::Longitude),
        (45.0, f64::INFINITY, Axis::Longitude),
    ];
    for (lat, lon, axis) in cases {
        match Geopoint::from_degrees(lat, lon) {
            Err(GeopointError::MalformedCoordinate { axis: got, .. }) => assert_eq!(got, axis),
            other => panic!("Expected MalformedCoordinate for ({}, {}), got {:?}", lat, lon, other),
        }
    }
}

#[test]
fn microdegrees_round_trip() {
    for lat in LATITUDES {
        for lon in LONGITUDES {
            let lat_e6 = (lat * 1e6).round() as i32;
            let lon_e6 = (lon * 1e6).round() as i32;
            let p = Geopoint::from_microdegrees(lat_e6, lon_e6).unwrap();
            assert_abs_diff_eq!(p.latitude(), lat, epsilon = 1e-6);
            assert_abs_diff_eq!(p.longitude(), lon, epsilon = 1e-6);
        }
    }
}

// --- Distance ---

#[test]
fn distance_is_symmetric() {
    let points: Vec<Geopoint> = LATITUDES
        .iter()
        .zip(LONGITUDES.iter().rev())
        .map(|(&lat, &lon)| point(lat, lon))
        .collect();

    for a in &points {
        for b in &points {
            if a == b {
                continue;
            }
            match (a.distance_to(b), b.distance_to(a)) {
                (Ok(ab), Ok(ba)) => assert_abs_diff_eq!(ab, ba, epsilon = 1e-9),
                (Err(_), Err(_)) => {}
                (ab, ba) => panic!("asymmetric result {:?} vs {:?} for {:?} {:?}", ab, ba, a, b),
            }
        }
    }
}

#[test]
fn one_degree_of_longitude_on_the_equator() {
    let origin = point(0.0, 0.0);
    let east = point(0.0, 1.0);
    let d = origin.distance_to(&east).unwrap();
    assert_abs_diff_eq!(d, 111.19, epsilon = 0.01);
    assert_abs_diff_eq!(d * KM_IN_MILES, 69.09, epsilon = 0.01);
    assert_eq!(origin.bearing_to(&east), 90.0);
}

#[test]
fn bearing_due_north_and_south() {
    let origin = point(0.0, 0.0);
    assert_eq!(origin.bearing_to(&point(1.0, 0.0)), 0.0);
    assert_eq!(origin.bearing_to(&point(-1.0, 0.0)), 180.0);
}

#[test]
fn coincident_points_fail_distance() {
    for lat in LATITUDES {
        for lon in LONGITUDES {
            let p = point(lat, lon);
            let err = p.distance_to(&p).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Computation);
            assert!(err.is_geopoint_failure());
        }
    }
}

// --- Projection ---

#[test]
fn projection_recovers_bearing_and_distance() {
    let starts = [point(52.0, 10.0), point(-33.86, 151.2), point(10.0, -70.0)];
    let bearings = [30.0, 45.0, 120.0, 135.0, 210.0, 225.0, 300.0, 315.0];
    let distances = [10.0, 100.0, 1000.0];

    for start in starts {
        for bearing in bearings {
            for distance in distances {
                let target = start.project(bearing, distance).unwrap();
                assert_abs_diff_eq!(start.bearing_to(&target), bearing, epsilon = 1e-6);
                assert_abs_diff_eq!(start.distance_to(&target).unwrap(), distance, epsilon = 1e-6);
            }
        }
    }
}

#[test]
fn projection_along_axes() {
    let start = point(0.0, 0.0);
    let one_degree = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;

    let east = start.project(90.0, one_degree).unwrap();
    assert_abs_diff_eq!(east.latitude(), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(east.longitude(), 1.0, epsilon = 1e-9);

    let south = start.project(180.0, one_degree).unwrap();
    assert_abs_diff_eq!(south.latitude(), -1.0, epsilon = 1e-9);
}

#[test]
fn projection_past_the_antimeridian_is_malformed() {
    let start = point(10.0, 179.9);
    match start.project(80.0, 500.0) {
        Err(GeopointError::MalformedCoordinate { axis, value }) => {
            assert_eq!(axis, Axis::Longitude);
            assert!(value > 180.0);
        }
        other => panic!("Expected MalformedCoordinate, got {:?}", other),
    }
}

// --- Equality ---

#[test]
fn tolerant_equality_follows_distance() {
    let a = point(48.8566, 2.3522);
    let b = point(48.8606, 2.3376);
    let d = a.distance_to(&b).unwrap();

    assert!(a.is_equal_to_within(&b, d).unwrap());
    assert!(a.is_equal_to_within(&b, d + 0.001).unwrap());
    assert!(!a.is_equal_to_within(&b, d - 0.001).unwrap());
    assert!(!a.is_equal_to_within(&b, 0.0).unwrap());
}

#[test]
fn tolerant_equality_fails_for_coincident_points() {
    for lat in [0.0, 10.0, -33.86, 48.8566, -89.98] {
        let a = point(lat, 2.3522);
        let err = a.is_equal_to_within(&a, 10.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Computation);
    }
}

#[test]
fn exact_equality() {
    let a = point(48.8566, 2.3522);
    let b = a;
    assert!(a.is_equal_to(&b));
    assert!(!a.is_equal_to(&point(48.8566, 2.3523)));

    let missing: Option<Geopoint> = None;
    assert_ne!(missing, Some(a));
}

#[test]
fn derived_points_share_nothing() {
    let shared = point(1.0, 2.0);
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || shared.with_latitude(i as f64 * 10.0).unwrap())
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let derived = handle.join().unwrap();
        assert_eq!(derived.latitude(), i as f64 * 10.0);
        assert_eq!(derived.longitude(), 2.0);
    }
    assert_eq!(shared, point(1.0, 2.0));
}
