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

use std::path::Path;
use serde::{Serialize,Deserialize};

use crate::errors::{Result, invalid_argument};

/// legacy convergence threshold, applied to both radians and meters
pub const DEFAULT_TOLERANCE: f64 = 0.001;

pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// parameters of the iterative geocentric -> geodetic solver. Can be read from RON such as
/// ```ron
/// SolverConfig( lat_tolerance: 1e-9, alt_tolerance: 0.0001, max_iterations: 50 )
/// ```
/// Missing fields get their default values
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// latitude change between iterations (radians) below which the latitude is converged
    pub lat_tolerance: f64,

    /// altitude change between iterations (meters) below which the altitude is converged
    pub alt_tolerance: f64,

    pub max_iterations: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            lat_tolerance: DEFAULT_TOLERANCE,
            alt_tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS
        }
    }
}

impl SolverConfig {
    pub fn from_ron_str (s: &str) -> Result<SolverConfig> {
        let config: SolverConfig = ron::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_path<P: AsRef<Path>> (path: P) -> Result<SolverConfig> {
        let s = std::fs::read_to_string( path.as_ref())?;
        Self::from_ron_str(&s)
    }

    pub fn validate (&self) -> Result<()> {
        if !(self.lat_tolerance.is_finite() && self.lat_tolerance > 0.0) {
            return Err( invalid_argument!("lat_tolerance has to be positive, but is {}", self.lat_tolerance))
        }
        if !(self.alt_tolerance.is_finite() && self.alt_tolerance > 0.0) {
            return Err( invalid_argument!("alt_tolerance has to be positive, but is {}", self.alt_tolerance))
        }
        if self.max_iterations == 0 {
            return Err( invalid_argument!("max_iterations has to be > 0"))
        }
        Ok(())
    }
}
