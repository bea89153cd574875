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
#![allow(non_snake_case)]

//! stateless conversion between geodetic (latitude, longitude, altitude) and geocentric cartesian
//! coordinates for arbitrary reference ellipsoids.
//!
//! The geodetic -> geocentric direction is closed form. The inverse is a Bowring style fixed point
//! iteration that alternates between latitude and altitude updates until both stop changing. Its
//! error per iteration shrinks roughly by a factor of e², i.e. it typically converges in 3-5 steps

use crate::errors::{OdinGeodeticError, Result, invalid_argument};
use crate::{abs, atan, atan2, cos, deg, rad, sin, trace, debug, warn};
use crate::config::SolverConfig;
use crate::ellipsoid::Ellipsoid;
use crate::point::GeodeticPoint;
use crate::vec3::Vec3;

/// distance from the polar axis (meters) below which we treat a geocentric position as being on it
pub const POLAR_AXIS_DISTANCE: f64 = 1.0e-12;

/// convert geodetic degrees and altitude (meters) into geocentric cartesian coordinates (meters)
pub fn geodetic_to_geocentric (lat_deg: f64, lon_deg: f64, alt: f64, ellipsoid: &Ellipsoid) -> Vec3 {
    let φ = rad(lat_deg);
    let λ = rad(lon_deg);
    geodetic_rad_to_geocentric( sin(φ), cos(φ), sin(λ), cos(λ), alt, ellipsoid)
}

/// the closed form conversion for pre-computed latitude/longitude sines and cosines
pub(crate) fn geodetic_rad_to_geocentric (sin_φ: f64, cos_φ: f64, sin_λ: f64, cos_λ: f64, alt: f64, ellipsoid: &Ellipsoid) -> Vec3 {
    let e2 = ellipsoid.e2();
    let V = ellipsoid.a() / (1.0 - e2 * sin_φ * sin_φ).sqrt();
    let c = (V + alt) * cos_φ;

    Vec3::new(
        c * cos_λ,
        c * sin_λ,
        ((1.0 - e2) * V + alt) * sin_φ
    )
}

/// convert geocentric cartesian coordinates (meters) into a geodetic point on the given ellipsoid,
/// using the default solver configuration
pub fn geocentric_to_geodetic (p: &Vec3, ellipsoid: &Ellipsoid) -> Result<GeodeticPoint> {
    geocentric_to_geodetic_with( p, ellipsoid, &SolverConfig::default())
}

/// convert geocentric cartesian coordinates (meters) into a geodetic point on the given ellipsoid
///
/// Points on the polar axis map to latitude ±90°, longitude 0 and altitude |z| - b.
/// Fails with `InvalidArgument` for non-finite vectors and the ellipsoid center, and with
/// `NonConvergence` if the solver does not meet the configured tolerances within `max_iterations`
pub fn geocentric_to_geodetic_with (p: &Vec3, ellipsoid: &Ellipsoid, config: &SolverConfig) -> Result<GeodeticPoint> {
    let (φ, λ, h) = solve_geodetic( p, ellipsoid, config)?;
    GeodeticPoint::with_ellipsoid( deg(φ), deg(λ), h, ellipsoid)
}

/// the iterative solver. Returns (latitude, longitude) in radians and altitude in meters
pub fn solve_geodetic (p: &Vec3, ellipsoid: &Ellipsoid, config: &SolverConfig) -> Result<(f64,f64,f64)> {
    if !p.is_finite() {
        return Err( invalid_argument!("geocentric position not finite: {}", p))
    }

    let z = p.z;
    let xy = p.xy_length();

    if xy < POLAR_AXIS_DISTANCE {
        if z == 0.0 {
            return Err( invalid_argument!("geocentric position is at ellipsoid center: {}", p))
        }
        let φ = rad(90.0).copysign(z);
        return Ok( (φ, 0.0, abs(z) - ellipsoid.b()) )
    }

    let e2 = ellipsoid.e2();
    let λ = atan2( p.y, p.x);
    let xy_1_e2 = xy * (1.0 - e2);

    let mut φ = 0.0;
    let mut sin_φ = 0.0;
    let mut h = 0.0;
    let mut dφ = f64::NAN;
    let mut dh = f64::NAN;

    for i in 1..=config.max_iterations {
        let V = ellipsoid.prime_vertical_radius_at(φ);
        let φ_next = atan( (z - h * e2 * sin_φ) / xy_1_e2);
        sin_φ = sin(φ_next);
        let h_next = xy / cos(φ_next) - V;

        dφ = abs(φ_next - φ);
        dh = abs(h_next - h);
        φ = φ_next;
        h = h_next;
        trace!("solver iteration {}: lat={} rad, alt={} m, dlat={}, dalt={}", i, φ, h, dφ, dh);

        // NaN deltas never count as converged
        if dφ <= config.lat_tolerance && dh <= config.alt_tolerance {
            debug!("solver converged after {} iterations for {}", i, p);
            return Ok( (φ, λ, h) )
        }
    }

    warn!("solver did not converge after {} iterations for {}", config.max_iterations, p);
    Err( OdinGeodeticError::NonConvergence { iterations: config.max_iterations, lat_delta: dφ, alt_delta: dh } )
}
