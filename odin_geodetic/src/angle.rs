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

//! angle normalization and sexagesimal formatting

use std::fmt;
use crate::TWO_PI;

/// map radians into [0..2π)
#[inline]
pub fn normalize_two_pi (r: f64) -> f64 {
    let x = r.rem_euclid(TWO_PI);
    if x >= TWO_PI { 0.0 } else { x } // rem_euclid can round up for tiny negative inputs
}

/// unsigned degree/minute/second decomposition of an angle given in degrees. Seconds are rounded
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub struct Dms {
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: u32
}

impl Dms {
    pub fn from_degrees (d: f64) -> Self {
        let total = (d.abs() * 3600.0).round() as u64;
        Dms {
            degrees: (total / 3600) as u32,
            minutes: ((total % 3600) / 60) as u32,
            seconds: (total % 60) as u32
        }
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = f.width().unwrap_or(2);
        write!(f, "{:0width$}° {:02}' {:02}''", self.degrees, self.minutes, self.seconds, width = width)
    }
}

/// `53.5` -> `53° 30' 00'' N`
pub fn format_latitude_dms (lat: f64) -> String {
    let hemisphere = if lat < 0.0 { 'S' } else { 'N' };
    format!("{:2} {}", Dms::from_degrees(lat), hemisphere)
}

/// `8.125` -> `008° 07' 30'' E`
pub fn format_longitude_dms (lon: f64) -> String {
    let hemisphere = if lon < 0.0 { 'W' } else { 'E' };
    format!("{:3} {}", Dms::from_degrees(lon), hemisphere)
}
