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
#![allow(uncommon_codepoints)]

//! geodetic coordinate math on reference ellipsoids: geodetic <-> geocentric conversion plus
//! spherical-approximation distance, azimuth and dead-reckoning between [`GeodeticPoint`]s.
//! All types are immutable values, i.e. they can be freely shared between threads

use std::f64::consts::{PI as STD_PI};

pub mod errors;
pub mod angle;
pub mod ellipsoid;
pub mod vec3;
pub mod config;
pub mod converter;
pub mod point;

pub use errors::{OdinGeodeticError, Result};
pub use ellipsoid::Ellipsoid;
pub use vec3::Vec3;
pub use config::SolverConfig;
pub use point::GeodeticPoint;

// syntactic sugar - this is just more readable in formulas
#[inline(always)] pub fn sin(x:f64) -> f64 { x.sin() }
#[inline(always)] pub fn sin2(x:f64) -> f64 { let sin_x = x.sin(); sin_x*sin_x }
#[inline(always)] pub fn cos(x:f64) -> f64 { x.cos() }
#[inline(always)] pub fn asin(x:f64) -> f64 {x.asin() }
#[inline(always)] pub fn atan(x:f64) -> f64 { x.atan() }
#[inline(always)] pub fn atan2(y:f64,x:f64) -> f64 { y.atan2(x) }
#[inline(always)] pub fn sqrt(x:f64) -> f64 { x.sqrt() }
#[inline(always)] pub fn abs(x:f64) -> f64 { x.abs() }
#[inline(always)] pub fn deg(x:f64)->f64 { x.to_degrees() }
#[inline(always)] pub fn rad(x:f64)->f64 { x.to_radians() }

pub const PI: f64 = STD_PI;
pub const HALF_PI: f64 = PI / 2.0;
pub const TWO_PI: f64 = PI * 2.0;

/*
 * we intercept logging/tracing macros here to have a central place where we can remove/replace them
 */

#[macro_export]
macro_rules! trace {
    ( $( $id:ident = $e:expr ),* ) => { tracing::trace!( $( $id = $e ),* ) };
    ( $( $e: expr ),* ) => { tracing::trace!( $( $e ),* ) }
}

#[macro_export]
macro_rules! debug {
    ( $( $id:ident = $e:expr ),* ) => { tracing::debug!( $( $id = $e ),* ) };
    ( $( $e: expr ),* ) => { tracing::debug!( $( $e ),* ) }
}

#[macro_export]
macro_rules! warn {
    ( $( $id:ident = $e:expr ),* ) => { tracing::warn!( $( $id = $e ),* ) };
    ( $( $e: expr ),* ) => { tracing::warn!( $( $e ),* ) }
}
