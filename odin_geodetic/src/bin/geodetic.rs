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

//! command line front end for odin_geodetic. Positions are given as "lat;lon;alt" (degrees, degrees, meters),
//! geocentric vectors as "x;y;z" (meters). Set RUST_LOG=odin_geodetic=trace to see solver iterations, e.g.
//!
//!     geodetic distance "54.0;8.125;0" "53.0;8.125;0"
//!     geodetic extrapolate "53.0;8.0;0" --distance 111000 --azimuth 0
//!     geodetic from-ecef "6378137;0;0" --config solver.ron

use std::path::PathBuf;
use clap::{Parser, Subcommand};
use lazy_static::lazy_static;
use tracing_subscriber::EnvFilter;
use anyhow::Result;

use odin_geodetic::{GeodeticPoint, SolverConfig, Vec3, deg, rad};
use odin_geodetic::angle::{format_latitude_dms, format_longitude_dms};
use odin_geodetic::converter::geocentric_to_geodetic_with;
use odin_geodetic::ellipsoid::EARTH;

#[derive(Parser,Debug)]
#[command(about="geodetic distance, azimuth, extrapolation and geocentric conversion")]
struct CliOpts {
    /// optional RON file with SolverConfig for geocentric -> geodetic conversion
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command
}

#[derive(Subcommand,Debug)]
enum Command {
    /// surface distance in meters from one position to another
    Distance { #[arg(allow_hyphen_values=true)] from: GeodeticPoint, #[arg(allow_hyphen_values=true)] to: GeodeticPoint },

    /// initial azimuth in degrees from one position to another
    Azimuth { #[arg(allow_hyphen_values=true)] from: GeodeticPoint, #[arg(allow_hyphen_values=true)] to: GeodeticPoint },

    /// dead reckoning position
    Extrapolate {
        #[arg(allow_hyphen_values=true)]
        from: GeodeticPoint,
        /// distance in meters
        #[arg(long, short)]
        distance: f64,
        /// azimuth in degrees clockwise from north
        #[arg(long, short, allow_hyphen_values=true)]
        azimuth: f64
    },

    /// geocentric coordinates of a geodetic position
    ToEcef { #[arg(allow_hyphen_values=true)] pos: GeodeticPoint },

    /// geodetic position of a geocentric vector
    FromEcef { #[arg(allow_hyphen_values=true)] vec: Vec3 }
}

lazy_static! {
    static ref ARGS: CliOpts = CliOpts::parse();
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter( EnvFilter::from_default_env()).init();

    match &ARGS.cmd {
        Command::Distance { from, to } => {
            println!("{:.3} m", from.distance_to(to));
        }
        Command::Azimuth { from, to } => {
            println!("{:.6}°", deg( from.azimuth_to(to)));
        }
        Command::Extrapolate { from, distance, azimuth } => {
            let p = from.extrapolate( *distance, rad(*azimuth))?;
            print_position(&p);
        }
        Command::ToEcef { pos } => {
            println!("{}", pos.to_geocentric());
        }
        Command::FromEcef { vec } => {
            let config = match &ARGS.config {
                Some(path) => SolverConfig::load_path(path)?,
                None => SolverConfig::default()
            };
            let p = geocentric_to_geodetic_with( vec, &EARTH, &config)?;
            print_position(&p);
        }
    }

    Ok(())
}

fn print_position (p: &GeodeticPoint) {
    println!("{}  ({}, {}, {:.3} m)", p, format_latitude_dms(p.latitude()), format_longitude_dms(p.longitude()), p.altitude());
}
