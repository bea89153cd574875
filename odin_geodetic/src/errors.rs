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

use thiserror::Error;

pub type Result<T> = std::result::Result<T, OdinGeodeticError>;

/// all failures are local and synchronous - nothing in here is worth retrying
#[derive(Error,Debug)]
pub enum OdinGeodeticError {

    #[error("invalid argument: {0}")]
    InvalidArgument( String ),

    #[error("missing input: {0}")]
    MissingInput( String ),

    #[error("geodetic solver did not converge after {iterations} iterations (dlat={lat_delta} rad, dalt={alt_delta} m)")]
    NonConvergence { iterations: usize, lat_delta: f64, alt_delta: f64 },

    #[error("config error {0}")]
    ConfigError( #[from] ron::error::SpannedError ),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),
}

macro_rules! invalid_argument {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::OdinGeodeticError::InvalidArgument( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use invalid_argument;

macro_rules! missing_input {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::OdinGeodeticError::MissingInput( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use missing_input;
