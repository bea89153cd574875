/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use std::collections::HashSet;
use approx::{assert_abs_diff_eq, assert_relative_eq};
use nalgebra::Matrix3;
use odin_geodetic::{GeodeticPoint, OdinGeodeticError, Vec3, PI, TWO_PI, HALF_PI, rad};
use odin_geodetic::angle::normalize_two_pi;
use odin_geodetic::ellipsoid::{EARTH, MARS};

// run with "cargo test --test test_point -- --nocapture"

fn pos (lat: f64, lon: f64, alt: f64) -> GeodeticPoint {
    GeodeticPoint::new( lat, lon, alt).unwrap()
}

/// signed difference of two angles in [-π..π)
fn angle_diff (a: f64, b: f64) -> f64 {
    (a - b + PI).rem_euclid(TWO_PI) - PI
}

fn assert_vec_eq (v: &Vec3, x: f64, y: f64, z: f64) {
    assert_abs_diff_eq!( v.x, x, epsilon = 1e-12);
    assert_abs_diff_eq!( v.y, y, epsilon = 1e-12);
    assert_abs_diff_eq!( v.z, z, epsilon = 1e-12);
}

#[test]
fn test_construction () {
    let p = pos( 53.5, 8.125, 1000.0);
    assert_eq!( p.latitude(), 53.5);
    assert_eq!( p.longitude(), 8.125);
    assert_eq!( p.altitude(), 1000.0);
    assert_eq!( p.ellipsoid(), &EARTH);
    assert_eq!( p.latitude_rad(), rad(53.5));
    assert_eq!( p.local_radius(), EARTH.radius_of_curvature_at( rad(53.5)));

    let q = GeodeticPoint::with_ellipsoid( 53.5, 8.125, 1000.0, &MARS).unwrap();
    assert_eq!( q.ellipsoid(), &MARS);
    assert_eq!( q.local_radius(), MARS.a());

    for (lat,lon,alt) in [(f64::NAN, 0.0, 0.0), (0.0, f64::INFINITY, 0.0), (0.0, 0.0, f64::NEG_INFINITY)] {
        assert!( matches!( GeodeticPoint::new(lat, lon, alt), Err(OdinGeodeticError::InvalidArgument(_))));
    }
}

#[test]
fn test_equality () {
    // the ellipsoid does not take part in equality
    let p = pos( 53.5, 8.125, 1000.0);
    let q = GeodeticPoint::with_ellipsoid( 53.5, 8.125, 1000.0, &MARS).unwrap();
    assert_eq!( p, q);
    assert_ne!( p, pos( 53.5, 8.125, 1000.1));

    // exact bit patterns
    assert_ne!( pos( 0.0, 0.0, 0.0), pos( -0.0, 0.0, 0.0));

    let set: HashSet<GeodeticPoint> = [p, q, pos( 0.0, 0.0, 0.0)].into_iter().collect();
    assert_eq!( set.len(), 2);
}

#[test]
fn test_parse_and_display () {
    let p: GeodeticPoint = "53.5;8.125;1000.0".parse().unwrap();
    assert_eq!( p.latitude(), 53.5);
    assert_eq!( p.longitude(), 8.125);
    assert_eq!( p.altitude(), 1000.0);
    assert_eq!( p.ellipsoid(), &EARTH);

    let s = p.to_string();
    println!("display: {s}");
    assert_eq!( s, "53.5;8.125;1000");
    assert_eq!( s.parse::<GeodeticPoint>().unwrap(), p);

    let p = pos( -33.8675, 151.20732, 58.3);
    assert_eq!( p.to_string().parse::<GeodeticPoint>().unwrap(), p);

    for input in ["53.5;8.125", "53.5;8.125;1000.0;1", "53.5;x;1000.0", "", "nan;0;0"] {
        match input.parse::<GeodeticPoint>() {
            Err(OdinGeodeticError::InvalidArgument(msg)) => println!("rejected '{input}': {msg}"),
            other => panic!("expected InvalidArgument for '{input}', got {:?}", other)
        }
    }
}

#[test]
fn test_distance () {
    let p1 = pos( 54.0, 8.125, 0.0);
    let p2 = pos( 53.0, 8.125, 0.0);

    let d = p1.distance_to(&p2);
    println!("distance {p1} -> {p2}: {d}m");
    assert_abs_diff_eq!( d, 60.0 * 1852.216, epsilon = 1000.0);

    // local radius of the calling point is used, hence not exactly symmetric
    let d_back = p2.distance_to(&p1);
    assert!( d_back != d);
    assert_relative_eq!( d_back, d, max_relative = 1e-3);

    // altitude does not enter
    assert_eq!( p1.distance_to( &pos( 53.0, 8.125, 5000.0)), d);
    assert_eq!( p1.distance_to( &pos( 54.0, 8.125, 5000.0)), 0.0);
    assert!( p1.distance_to( &pos( 54.0, 8.126, 0.0)) > 0.0);
}

#[test]
fn test_missing_input () {
    let p = pos( 54.0, 8.125, 0.0);
    let q = pos( 53.0, 8.125, 0.0);

    assert!( matches!( p.try_distance_to( None), Err(OdinGeodeticError::MissingInput(_))));
    assert!( matches!( p.try_azimuth_to( None), Err(OdinGeodeticError::MissingInput(_))));
    assert_eq!( p.try_distance_to( Some(&q)).unwrap(), p.distance_to(&q));
    assert_eq!( p.try_azimuth_to( Some(&q)).unwrap(), p.azimuth_to(&q));
}

#[test]
fn test_azimuth () {
    // north
    assert_abs_diff_eq!( pos( 53.0, 8.125, 0.0).azimuth_to( &pos( 54.0, 8.125, 0.0)), 0.0, epsilon = 1e-6);
    // east
    assert_abs_diff_eq!( pos( 54.0, 8.125, 0.0).azimuth_to( &pos( 54.0, 9.125, 0.0)), HALF_PI, epsilon = 0.1);
    // south
    assert_abs_diff_eq!( pos( 54.0, 8.125, 0.0).azimuth_to( &pos( 53.0, 8.125, 0.0)), PI, epsilon = 1e-6);
    // west
    assert_abs_diff_eq!( pos( 54.0, 8.125, 0.0).azimuth_to( &pos( 54.0, 7.125, 0.0)), 1.5 * PI, epsilon = 0.1);

    // on the equator the cardinal directions are exact
    let o = pos( 0.0, 0.0, 0.0);
    assert_abs_diff_eq!( o.azimuth_to( &pos( 0.0, 1.0, 0.0)).to_degrees(), 90.0, epsilon = 1e-9);
    assert_abs_diff_eq!( o.azimuth_to( &pos( -1.0, 0.0, 0.0)).to_degrees(), 180.0, epsilon = 1e-9);
    assert_abs_diff_eq!( o.azimuth_to( &pos( 0.0, -1.0, 0.0)).to_degrees(), 270.0, epsilon = 1e-9);
    assert_eq!( o.azimuth_to(&o), 0.0);

    for (lat,lon) in [(10.0, 10.0), (-10.0, 10.0), (-10.0, -10.0), (10.0, -10.0)] {
        let az = o.azimuth_to( &pos( lat, lon, 0.0));
        assert!( az >= 0.0 && az < TWO_PI);
    }
}

#[test]
fn test_extrapolate () {
    let p = pos( 53.0, 8.0, 0.0);
    let q = p.extrapolate( 111000.0, 0.0).unwrap();
    println!("{p} + 111km north -> {q}");
    assert_eq!( q.latitude().round(), 54.0);
    assert_abs_diff_eq!( q.longitude(), 8.0, epsilon = 1e-9);
    assert_eq!( q.altitude(), 0.0);

    let p = pos( 0.0, 0.0, 250.0);
    let q = p.extrapolate( 111000.0, HALF_PI).unwrap();
    assert_abs_diff_eq!( q.latitude(), 0.0, epsilon = 1e-9);
    assert_eq!( q.longitude().round(), 1.0);
    assert_eq!( q.altitude(), 250.0);

    let q = GeodeticPoint::with_ellipsoid( 10.0, 20.0, 0.0, &MARS).unwrap().extrapolate( 1000.0, 1.0).unwrap();
    assert_eq!( q.ellipsoid(), &MARS);
}

#[test]
fn test_extrapolate_zero_distance () {
    let p = pos( 53.5, 8.125, 1000.0);
    let q = p.extrapolate( 0.0, 1.234).unwrap();
    assert_eq!( q, p);
    assert_eq!( q.altitude(), 1000.0);
}

#[test]
fn test_extrapolate_invalid () {
    let p = pos( 53.5, 8.125, 1000.0);
    for (d,az) in [(-1.0, 0.0), (f64::NAN, 0.0), (f64::INFINITY, 0.0), (10.0, f64::NAN)] {
        assert!( matches!( p.extrapolate(d, az), Err(OdinGeodeticError::InvalidArgument(_))));
    }
}

#[test]
fn test_extrapolate_and_back () {
    let d = 10000.0;

    for lat in [-60.0, -20.0, 0.0, 45.0, 70.0] {
        for az_deg in [0.0, 30.0, 90.0, 135.0, 200.0, 315.0] {
            let θ = rad(az_deg);
            let p = pos( lat, 8.125, 100.0);
            let q = p.extrapolate( d, θ).unwrap();

            // same radius, so the forward distance is recovered exactly up to rounding
            assert_abs_diff_eq!( p.distance_to(&q), d, epsilon = 1e-4);
            assert!( angle_diff( p.azimuth_to(&q), θ).abs() < 1e-6);

            // back direction uses the radius of q
            assert_abs_diff_eq!( q.distance_to(&p), d, epsilon = 1.0);
            let back = q.azimuth_to(&p);
            let expected = normalize_two_pi( θ + PI);
            assert!( angle_diff( back, expected).abs() < 0.01, "lat={lat} az={az_deg}: back azimuth {back} != {expected}");
        }
    }
}

#[test]
fn test_extrapolate_to_pole () {
    // paths that end exactly on a pole must not produce NaN latitudes
    for i in 1..900 {
        let lat = i as f64 * 0.1;
        for az in [0.0, 1e-17, -1e-17] {
            let p = pos( lat, 8.125, 0.0);
            let d = p.local_radius() * (HALF_PI - rad(lat));
            match p.extrapolate( d, az) {
                Ok(q) => assert_abs_diff_eq!( q.latitude(), 90.0, epsilon = 1e-5),
                Err(e) => panic!("lat={lat} d={d} az={az}: {e}")
            }

            let p = pos( -lat, 8.125, 0.0);
            let q = p.extrapolate( d, PI + az).unwrap();
            assert_abs_diff_eq!( q.latitude(), -90.0, epsilon = 1e-5);
        }
    }
}

#[test]
fn test_center_with () {
    let p1 = pos( 53.0, 8.0, 0.0);
    let p2 = pos( 54.0, 9.0, 0.0);

    let c = p1.center_with( &p2, 10.0).unwrap();
    assert_eq!( c, pos( 53.5, 8.5, 10.0));
}

#[test]
fn test_extrapolate_vector () {
    let p = pos( 53.0, 8.0, 0.0);
    let q = p.extrapolate_vector( 0.0, 111000.0, 10.0).unwrap();
    assert_eq!( q.latitude().round(), 54.0);
    assert_eq!( q.longitude(), 8.0);
    assert_eq!( q.altitude(), 10.0);

    let p = pos( 0.0, 0.0, 0.0);
    let q = p.extrapolate_vector( 111000.0, 111000.0, 10.0).unwrap();
    assert_eq!( q.latitude().round(), 1.0);
    assert_eq!( q.longitude().round(), 1.0);
    assert_eq!( q.altitude(), 10.0);
}

#[test]
fn test_extrapolate_vector_at_pole () {
    for lat in [90.0, -90.0] {
        let p = pos( lat, 0.0, 0.0);
        match p.extrapolate_vector( 10.0, 0.0, 0.0) {
            Err(OdinGeodeticError::InvalidArgument(msg)) => println!("rejected: {msg}"),
            other => panic!("expected InvalidArgument at {p}, got {:?}", other)
        }
    }

    // close to but not on the pole is still fine
    assert!( pos( 89.9, 0.0, 0.0).extrapolate_vector( 10.0, 0.0, 0.0).is_ok());
}

#[test]
fn test_tangent_frame () {
    let p = pos( 0.0, 0.0, 0.0);

    let m = p.global_to_local_transform();
    let expected = Matrix3::new(
        0.0, 1.0, 0.0,
        0.0, 0.0, 1.0,
        1.0, 0.0, 0.0
    );
    assert_eq!( m, expected);
    assert_eq!( p.local_to_global_transform(), expected.transpose());

    // geocentric x-axis is "up" at lat=0,lon=0
    assert_vec_eq( &p.to_local( &Vec3::UNIT_X), 0.0, 0.0, 1.0);
    assert_vec_eq( &p.to_global( &Vec3::UNIT_Z), 1.0, 0.0, 0.0);

    // orthonormal for arbitrary positions
    let p = pos( 37.4, -122.1, 30.0);
    let m = p.global_to_local_transform();
    assert!( (m * p.local_to_global_transform()).is_identity(1e-12));

    // local up points along the ellipsoid normal, which for geocentric positions is close to the radius
    let up = p.to_global( &Vec3::UNIT_Z);
    let r = p.to_geocentric();
    let cos_angle = up.dot(&r) / (up.length() * r.length());
    assert!( cos_angle > 0.99999);

    let v = Vec3::new( 12.0, -7.5, 3.25);
    let w = p.to_global( &p.to_local(&v));
    assert_vec_eq( &w, v.x, v.y, v.z);
}

#[test]
fn test_serde () {
    let p = pos( 53.5, 8.125, 1000.0);
    let s = serde_json::to_string(&p).unwrap();
    println!("serialized GeodeticPoint: {s}");
    assert_eq!( s, r#"{"lat":53.5,"lon":8.125,"alt":1000.0}"#);
    assert_eq!( serde_json::from_str::<GeodeticPoint>(&s).unwrap(), p);

    let q: GeodeticPoint = serde_json::from_str( r#"{ "latitude": 53.5, "longitude": 8.125, "altitude": 1000.0 }"#).unwrap();
    assert_eq!( q, p);

    let m = GeodeticPoint::with_ellipsoid( 1.0, 2.0, 3.0, &MARS).unwrap();
    let s = serde_json::to_string(&m).unwrap();
    let m1: GeodeticPoint = serde_json::from_str(&s).unwrap();
    assert_eq!( m1.ellipsoid(), &MARS);
}
