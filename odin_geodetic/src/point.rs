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

//! geodetic positions on a reference ellipsoid and the navigation functions between them.
//!
//! Distance, azimuth and extrapolation use a spherical approximation whose radius is the meridional
//! radius of curvature at the latitude of the point the function is called on. All values the formulas
//! need are computed once at construction, i.e. these functions never go back to the ellipsoid.
//! Note this makes `a.distance_to(&b)` and `b.distance_to(&a)` differ slightly if the latitudes do not match

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use nalgebra::Matrix3;
use serde::{Serialize,Deserialize};

use crate::errors::{OdinGeodeticError, Result, invalid_argument, missing_input};
use crate::{asin, atan2, cos, deg, rad, sin, sin2, sqrt, abs};
use crate::angle::normalize_two_pi;
use crate::converter;
use crate::ellipsoid::{Ellipsoid, EARTH};
use crate::vec3::{Vec3, parse_triple};

/// cos(lat) below which a position is considered to be on a pole
const POLE_COS_LAT: f64 = 1.0e-12;

/// immutable latitude/longitude (degrees) and altitude (meters above ellipsoid) position.
/// Equality and hash only consider the bit patterns of latitude, longitude and altitude, not the ellipsoid
#[derive(Debug,Clone,Copy,Serialize,Deserialize)]
#[serde(try_from = "GeodeticPointFields", into = "GeodeticPointFields")]
pub struct GeodeticPoint {
    lat: f64,
    lon: f64,
    alt: f64,
    ellipsoid: Ellipsoid,

    // cached on construction
    rad_lat: f64,
    rad_lon: f64,
    sin_lat: f64,
    cos_lat: f64,
    sin_lon: f64,
    cos_lon: f64,
    radius: f64, // local radius of curvature
}

impl GeodeticPoint {
    /// position on the default (earth) ellipsoid
    pub fn new (lat: f64, lon: f64, alt: f64) -> Result<GeodeticPoint> {
        Self::with_ellipsoid( lat, lon, alt, &EARTH)
    }

    pub fn with_ellipsoid (lat: f64, lon: f64, alt: f64, ellipsoid: &Ellipsoid) -> Result<GeodeticPoint> {
        if !(lat.is_finite() && lon.is_finite() && alt.is_finite()) {
            return Err( invalid_argument!("non-finite geodetic position {};{};{}", lat, lon, alt))
        }

        let rad_lat = rad(lat);
        let rad_lon = rad(lon);

        Ok( GeodeticPoint {
            lat, lon, alt,
            ellipsoid: *ellipsoid,
            rad_lat,
            rad_lon,
            sin_lat: sin(rad_lat),
            cos_lat: cos(rad_lat),
            sin_lon: sin(rad_lon),
            cos_lon: cos(rad_lon),
            radius: ellipsoid.radius_of_curvature_at(rad_lat)
        })
    }

    /// see [`converter::geocentric_to_geodetic`]
    pub fn from_geocentric (p: &Vec3, ellipsoid: &Ellipsoid) -> Result<GeodeticPoint> {
        converter::geocentric_to_geodetic( p, ellipsoid)
    }

    pub fn to_geocentric (&self) -> Vec3 {
        converter::geodetic_rad_to_geocentric( self.sin_lat, self.cos_lat, self.sin_lon, self.cos_lon, self.alt, &self.ellipsoid)
    }

    #[inline] pub fn latitude (&self) -> f64 { self.lat }
    #[inline] pub fn longitude (&self) -> f64 { self.lon }
    #[inline] pub fn altitude (&self) -> f64 { self.alt }
    #[inline] pub fn ellipsoid (&self) -> &Ellipsoid { &self.ellipsoid }

    #[inline] pub fn latitude_rad (&self) -> f64 { self.rad_lat }
    #[inline] pub fn longitude_rad (&self) -> f64 { self.rad_lon }

    /// the radius of the sphere our navigation functions use
    #[inline] pub fn local_radius (&self) -> f64 { self.radius }

    /// haversine surface distance in meters, ignoring altitude
    pub fn distance_to (&self, to: &GeodeticPoint) -> f64 {
        let dlat = abs(self.rad_lat - to.rad_lat);
        let dlon = abs(self.rad_lon - to.rad_lon);

        let a = (sin2(dlat / 2.0) + self.cos_lat * to.cos_lat * sin2(dlon / 2.0)).min(1.0);
        let c = 2.0 * atan2( sqrt(a), sqrt(1.0 - a));
        self.radius * c
    }

    pub fn try_distance_to (&self, to: Option<&GeodeticPoint>) -> Result<f64> {
        to.map( |p| self.distance_to(p)).ok_or_else( || missing_input!("no distance target point"))
    }

    /// initial great circle bearing in radians [0..2π), clockwise from north
    pub fn azimuth_to (&self, to: &GeodeticPoint) -> f64 {
        let dlon = to.rad_lon - self.rad_lon;
        let az = atan2( to.cos_lat * sin(dlon), self.cos_lat * to.sin_lat - self.sin_lat * to.cos_lat * cos(dlon));
        normalize_two_pi(az)
    }

    pub fn try_azimuth_to (&self, to: Option<&GeodeticPoint>) -> Result<f64> {
        to.map( |p| self.azimuth_to(p)).ok_or_else( || missing_input!("no azimuth target point"))
    }

    /// dead reckoning position for given distance (meters) along given azimuth (radians, clockwise from north).
    /// Altitude and ellipsoid are kept. A zero distance returns a copy of self
    pub fn extrapolate (&self, distance: f64, azimuth: f64) -> Result<GeodeticPoint> {
        if !(distance.is_finite() && distance >= 0.0) {
            return Err( invalid_argument!("distance should be >= 0.0, but is {}", distance))
        }
        if !azimuth.is_finite() {
            return Err( invalid_argument!("azimuth not finite: {}", azimuth))
        }
        if distance == 0.0 {
            return Ok(*self)
        }

        let arc = distance / self.radius;
        let sin_arc = sin(arc);
        let cos_arc = cos(arc);
        let sin_az = sin(azimuth);
        let cos_az = cos(azimuth);

        // rounding can push this past ±1 for paths ending at a pole
        let sin_lat = (self.sin_lat * cos_arc + self.cos_lat * sin_arc * cos_az).clamp(-1.0, 1.0);
        let lat = asin(sin_lat);
        let lon = atan2( sin_arc * sin_az, self.cos_lat * cos_arc - self.sin_lat * sin_arc * cos_az) + self.rad_lon;

        Self::with_ellipsoid( deg(lat), deg(lon), self.alt, &self.ellipsoid)
    }

    /// flat offset by east/north/up meters. This is only meaningful for short distances away from the poles,
    /// positions on a pole are rejected
    pub fn extrapolate_vector (&self, east: f64, north: f64, up: f64) -> Result<GeodeticPoint> {
        if abs(self.cos_lat) < POLE_COS_LAT {
            return Err( invalid_argument!("no east/north offset defined at pole {}", self))
        }

        let dlat = north / self.ellipsoid.a();
        let dlon = east / (self.cos_lat * self.ellipsoid.b());

        Self::with_ellipsoid( self.lat + deg(dlat), self.lon + deg(dlon), self.alt + up, &self.ellipsoid)
    }

    /// arithmetic mean of latitudes and longitudes at the given altitude
    pub fn center_with (&self, other: &GeodeticPoint, altitude: f64) -> Result<GeodeticPoint> {
        Self::with_ellipsoid( (self.lat + other.lat) / 2.0, (self.lon + other.lon) / 2.0, altitude, &self.ellipsoid)
    }

    /// rotation from the geocentric frame into the local east/north/up tangent frame at this position
    pub fn global_to_local_transform (&self) -> Matrix3<f64> {
        Matrix3::new(
            -self.sin_lon,                 self.cos_lon,                 0.0,
            -self.sin_lat * self.cos_lon, -self.sin_lat * self.sin_lon, self.cos_lat,
             self.cos_lat * self.cos_lon,  self.cos_lat * self.sin_lon, self.sin_lat
        )
    }

    /// rotation from the local east/north/up tangent frame into the geocentric frame.
    /// This is the transpose (= inverse) of `global_to_local_transform`
    pub fn local_to_global_transform (&self) -> Matrix3<f64> {
        self.global_to_local_transform().transpose()
    }

    /// express a geocentric direction in east/north/up components
    pub fn to_local (&self, v: &Vec3) -> Vec3 {
        (self.global_to_local_transform() * nalgebra::Vector3::from(v)).into()
    }

    /// express east/north/up components as geocentric direction
    pub fn to_global (&self, v: &Vec3) -> Vec3 {
        (self.local_to_global_transform() * nalgebra::Vector3::from(v)).into()
    }
}

impl PartialEq for GeodeticPoint {
    fn eq (&self, other: &Self) -> bool {
        self.lat.to_bits() == other.lat.to_bits()
            && self.lon.to_bits() == other.lon.to_bits()
            && self.alt.to_bits() == other.alt.to_bits()
    }
}

impl Eq for GeodeticPoint {}

impl Hash for GeodeticPoint {
    fn hash<H: Hasher> (&self, state: &mut H) {
        self.lat.to_bits().hash(state);
        self.lon.to_bits().hash(state);
        self.alt.to_bits().hash(state);
    }
}

/// "lat;lon;alt"
impl fmt::Display for GeodeticPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{};{}", self.lat, self.lon, self.alt)
    }
}

/// parse "lat;lon;alt" into a position on the default ellipsoid
impl FromStr for GeodeticPoint {
    type Err = OdinGeodeticError;

    fn from_str (s: &str) -> Result<GeodeticPoint> {
        let [lat,lon,alt] = parse_triple(s)?;
        GeodeticPoint::new( lat, lon, alt)
    }
}

//--- serde support

/// the serialized form. We accept the long field names as aliases and only store non-default ellipsoids
#[derive(Serialize,Deserialize)]
struct GeodeticPointFields {
    #[serde(alias = "latitude")]
    lat: f64,

    #[serde(alias = "longitude")]
    lon: f64,

    #[serde(alias = "altitude", default)]
    alt: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    ellipsoid: Option<Ellipsoid>
}

impl TryFrom<GeodeticPointFields> for GeodeticPoint {
    type Error = OdinGeodeticError;

    fn try_from (f: GeodeticPointFields) -> Result<Self> {
        GeodeticPoint::with_ellipsoid( f.lat, f.lon, f.alt, f.ellipsoid.as_ref().unwrap_or(&EARTH))
    }
}

impl From<GeodeticPoint> for GeodeticPointFields {
    fn from (p: GeodeticPoint) -> Self {
        GeodeticPointFields {
            lat: p.lat,
            lon: p.lon,
            alt: p.alt,
            ellipsoid: if p.ellipsoid == EARTH { None } else { Some(p.ellipsoid) }
        }
    }
}
