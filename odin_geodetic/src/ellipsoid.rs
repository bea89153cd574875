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

//! reference ellipsoids of celestial bodies.
//! Derived values are computed once at construction, which is a `const fn` so that the predefined
//! bodies can be process wide statics

use std::fmt;
use std::hash::{Hash, Hasher};
use serde::{Serialize,Deserialize};

use crate::errors::{Result, invalid_argument};
use crate::{sin2, sqrt, TWO_PI};

#[derive(Debug,Clone,Copy,Serialize,Deserialize)]
#[serde(try_from = "EllipsoidAxes", into = "EllipsoidAxes")]
pub struct Ellipsoid {
    a: f64,  // semi major axis in meters
    b: f64,  // semi minor axis in meters
    a2: f64,
    b2: f64,
    e2: f64  // first eccentricity squared
}

/// semi major axis in meters
pub const EQATORIAL_EARTH_RADIUS: f64 = 6378137.0;

/// semi minor axis in meters
pub const POLAR_EARTH_RADIUS: f64 = 6356752.3142;

pub static EARTH: Ellipsoid = Ellipsoid::from_axes_unchecked( EQATORIAL_EARTH_RADIUS, POLAR_EARTH_RADIUS);
pub static SUN: Ellipsoid = Ellipsoid::from_axes_unchecked( 1392500000.0, 1392500000.0);
pub static MERCURY: Ellipsoid = Ellipsoid::from_axes_unchecked( 2439640.0, 2439640.0);
pub static VENUS: Ellipsoid = Ellipsoid::from_axes_unchecked( 6051590.0, 6051590.0);
pub static MOON: Ellipsoid = Ellipsoid::from_axes_unchecked( 3476000.0, 3476000.3142);
pub static MARS: Ellipsoid = Ellipsoid::from_axes_unchecked( 3399200.0, 3399200.0);
pub static JUPITER: Ellipsoid = Ellipsoid::from_axes_unchecked( 71492680.0, 71492680.0);
pub static SATURN: Ellipsoid = Ellipsoid::from_axes_unchecked( 60267140.0, 60267140.0);
pub static URANUS: Ellipsoid = Ellipsoid::from_axes_unchecked( 25557250.0, 25557250.0);
pub static NEPTUNE: Ellipsoid = Ellipsoid::from_axes_unchecked( 24766360.0, 24766360.0);
pub static PLUTO: Ellipsoid = Ellipsoid::from_axes_unchecked( 1148070.0, 1148070.0);

impl Ellipsoid {
    /// checked constructor - both axes have to be positive, finite numbers
    pub fn from_axes (a: f64, b: f64) -> Result<Ellipsoid> {
        if !(a.is_finite() && a > 0.0) {
            return Err( invalid_argument!("semi major axis has to be positive, but is {}", a))
        }
        if !(b.is_finite() && b > 0.0) {
            return Err( invalid_argument!("semi minor axis has to be positive, but is {}", b))
        }
        Ok( Self::from_axes_unchecked(a, b) )
    }

    const fn from_axes_unchecked (a: f64, b: f64) -> Ellipsoid {
        let a2 = a * a;
        let b2 = b * b;
        let e2 = (a2 - b2) / a2;
        Ellipsoid { a, b, a2, b2, e2 }
    }

    #[inline] pub fn a (&self) -> f64 { self.a }
    #[inline] pub fn b (&self) -> f64 { self.b }
    #[inline] pub fn a2 (&self) -> f64 { self.a2 }
    #[inline] pub fn b2 (&self) -> f64 { self.b2 }
    #[inline] pub fn e2 (&self) -> f64 { self.e2 }

    /// (a - b) / a
    pub fn flattening (&self) -> f64 { (self.a - self.b) / self.a }

    pub fn circumference_a (&self) -> f64 { TWO_PI * self.a }
    pub fn circumference_b (&self) -> f64 { TWO_PI * self.b }

    /// meridional radius of curvature at given geodetic latitude, which is what we use as the
    /// local sphere radius for navigation. Note this is a·(1-e²) at the equator, not a
    pub fn radius_of_curvature_at (&self, lat_rad: f64) -> f64 {
        self.a * (1.0 - self.e2) / (1.0 - self.e2 * sin2(lat_rad)).powf(1.5)
    }

    /// radius of curvature in the prime vertical (normal section), which is exactly `a` at the equator
    pub fn prime_vertical_radius_at (&self, lat_rad: f64) -> f64 {
        self.a / sqrt(1.0 - self.e2 * sin2(lat_rad))
    }

    pub fn is_sphere (&self) -> bool { self.a == self.b }
}

// equality (and hence hash) only depends on the axes, bit by bit
impl PartialEq for Ellipsoid {
    fn eq (&self, other: &Self) -> bool {
        self.a.to_bits() == other.a.to_bits() && self.b.to_bits() == other.b.to_bits()
    }
}

impl Eq for Ellipsoid {}

impl Hash for Ellipsoid {
    fn hash<H: Hasher> (&self, state: &mut H) {
        self.a.to_bits().hash(state);
        self.b.to_bits().hash(state);
    }
}

impl fmt::Display for Ellipsoid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ a: {}, b: {} }}", self.a, self.b)
    }
}

/// serialized form - derived values are not stored
#[derive(Serialize,Deserialize)]
struct EllipsoidAxes {
    a: f64,
    b: f64
}

impl TryFrom<EllipsoidAxes> for Ellipsoid {
    type Error = crate::errors::OdinGeodeticError;
    fn try_from (axes: EllipsoidAxes) -> Result<Self> {
        Ellipsoid::from_axes( axes.a, axes.b)
    }
}

impl From<Ellipsoid> for EllipsoidAxes {
    fn from (e: Ellipsoid) -> Self {
        EllipsoidAxes { a: e.a, b: e.b }
    }
}
