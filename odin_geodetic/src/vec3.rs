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

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;
use nalgebra::Vector3;
use serde::{Serialize,Deserialize};

use crate::errors::{OdinGeodeticError, Result, invalid_argument};

/// immutable cartesian 3-vector. Units depend on context - as a geocentric position these are meters.
/// Equality and hash are based on the exact bit patterns of the components

#[derive(Debug,Clone,Copy,Serialize,Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64
}

impl Vec3 {
    pub const UNIT_X: Vec3 = Vec3 { x: 1.0, y: 0.0, z: 0.0 };
    pub const UNIT_Y: Vec3 = Vec3 { x: 0.0, y: 1.0, z: 0.0 };
    pub const UNIT_Z: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 1.0 };
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new (x: f64, y: f64, z: f64) -> Vec3 {
        Vec3{x,y,z}
    }

    pub fn from_array (a: &[f64;3]) -> Vec3 {
        Vec3 { x: a[0], y: a[1], z: a[2] }
    }

    /// vector of given length with pitch (positive is down) and yaw (counter clockwise from x-axis) in radians
    pub fn from_polar (pitch: f64, yaw: f64, distance: f64) -> Vec3 {
        let cos_pitch_dist = distance * pitch.cos();
        let sin_pitch_dist = -distance * pitch.sin();

        Vec3 {
            x: cos_pitch_dist * yaw.cos(),
            y: cos_pitch_dist * yaw.sin(),
            z: sin_pitch_dist
        }
    }

    pub fn to_array (&self) -> [f64;3] { [self.x, self.y, self.z] }

    pub fn is_finite (&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    pub fn dot (&self, p: &Vec3) -> f64 {
        (self.x * p.x) + (self.y * p.y) + (self.z * p.z)
    }

    pub fn cross (&self, p: &Vec3) -> Vec3 {
        Vec3 {
            x: (self.y * p.z) - (self.z * p.y),
            y: (self.z * p.x) - (self.x * p.z),
            z: (self.x * p.y) - (self.y * p.x)
        }
    }

    pub fn length (&self) -> f64 {
        self.length_squared().sqrt()
    }

    pub fn length_squared (&self) -> f64 {
        (self.x * self.x) + (self.y * self.y) + (self.z * self.z)
    }

    /// distance from the z-axis
    pub fn xy_length (&self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl PartialEq for Vec3 {
    fn eq (&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits()
            && self.y.to_bits() == other.y.to_bits()
            && self.z.to_bits() == other.z.to_bits()
    }
}

impl Eq for Vec3 {}

impl Hash for Vec3 {
    fn hash<H: Hasher> (&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
        self.z.to_bits().hash(state);
    }
}

/// "x;y;z" - the counterpart of `FromStr`
impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{};{}", self.x, self.y, self.z)
    }
}

impl FromStr for Vec3 {
    type Err = OdinGeodeticError;

    fn from_str (s: &str) -> Result<Vec3> {
        let [x,y,z] = parse_triple(s)?;
        Ok( Vec3::new(x, y, z) )
    }
}

/// parse exactly three ';' separated f64 values
pub(crate) fn parse_triple (s: &str) -> Result<[f64;3]> {
    let parts: Vec<&str> = s.split(';').collect();
    if parts.len() != 3 {
        return Err( invalid_argument!("expected 3 ';' separated values, got '{}'", s))
    }

    let mut vs = [0.0; 3];
    for (v,p) in vs.iter_mut().zip(parts.iter()) {
        *v = p.trim().parse::<f64>().map_err(|e| invalid_argument!("invalid number '{}' in '{}': {}", p, s, e))?;
    }
    Ok(vs)
}

impl Add for Vec3 {
    type Output = Self;

    fn add (self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z
        }
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub (self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z
        }
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul (self, rhs: f64) -> Self {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs
        }
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg (self) -> Self {
        Self { x: -self.x, y: -self.y, z: -self.z }
    }
}

// nalgebra interop, used for the tangent frame rotations

impl From<Vector3<f64>> for Vec3 {
    fn from (v: Vector3<f64>) -> Self {
        Vec3::new( v[0], v[1], v[2])
    }
}

impl From<&Vec3> for Vector3<f64> {
    fn from (v: &Vec3) -> Self {
        Vector3::new( v.x, v.y, v.z)
    }
}
