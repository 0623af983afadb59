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

//! conversion of a single GML burnt area element into a [`BurntAreaFeature`]

use std::fmt;
use tracing::debug;
use odin_common::datetime::parse_date_prefix;

use crate::{BurntAreaFeature, GmlNamespaces, gml::XmlElement};

const MIN_BOUNDARY_POINTS: usize = 3;

/// why a burnt area element did not produce a feature
#[derive(Debug,Clone,PartialEq)]
pub enum SkipReason {
    NoGeometry,
    InvalidCoordinate(String),
    TooFewPoints(usize),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoGeometry => write!(f, "no posList coordinates"),
            SkipReason::InvalidCoordinate(s) => write!(f, "invalid coordinate value '{s}'"),
            SkipReason::TooFewPoints(n) => write!(f, "only {n} boundary points"),
        }
    }
}

/// build a feature from a `ba:burnt_area_<year>` element. Only the first `gml:posList` (the exterior ring of
/// the first polygon) is used as boundary
pub fn extract_feature (elem: &XmlElement, year: i32, ns: &GmlNamespaces)->Result<BurntAreaFeature,SkipReason> {
    let id = elem.attr( &ns.gml, "id").unwrap_or("").to_string();

    let pos_list = elem.descendant_text( &ns.gml, "posList").ok_or( SkipReason::NoGeometry)?;
    let boundary_points = boundary_points_from_pos_list( pos_list)?;

    let area_hectares = area_hectares( elem.descendant_text( &ns.ba, "area_ha"));
    let fire_date = fire_date( elem.descendant_text( &ns.ba, "firedate"));
    let centroid = centroid( &boundary_points);

    Ok( BurntAreaFeature { id, centroid, boundary_points, area_hectares, fire_date, season_year: year } )
}

/// turn a whitespace separated `lat lon lat lon ..` posList into `[lon,lat]` points.
/// A trailing unpaired value is ignored
pub fn boundary_points_from_pos_list (pos_list: &str)->Result<Vec<[f64;2]>,SkipReason> {
    let values = pos_list.split_whitespace()
        .map( |s| s.parse::<f64>().ok().filter( |v| v.is_finite()).ok_or_else( || SkipReason::InvalidCoordinate(s.to_string())))
        .collect::<Result<Vec<f64>,SkipReason>>()?;

    if values.is_empty() { return Err(SkipReason::NoGeometry) }

    let points: Vec<[f64;2]> = values.chunks_exact(2).map( |c| [c[1], c[0]]).collect();
    if points.len() < MIN_BOUNDARY_POINTS {
        Err( SkipReason::TooFewPoints( points.len()))
    } else {
        Ok(points)
    }
}

/// unweighted mean of all vertices. This is not the area centroid of the polygon
pub fn centroid (points: &[[f64;2]])->[f64;2] {
    let n = points.len() as f64;
    let (sum_lon, sum_lat) = points.iter().fold( (0.0,0.0), |(x,y), p| (x + p[0], y + p[1]));
    [sum_lon / n, sum_lat / n]
}

/// area in hectares, 0.0 if missing or not a valid non-negative number
pub fn area_hectares (opt_text: Option<&str>)->f64 {
    match opt_text.map(str::trim) {
        None | Some("") => 0.0,
        Some(s) => match s.parse::<f64>() {
            Ok(v) if v.is_finite() => v.max(0.0),
            _ => {
                debug!("invalid area_ha value '{s}'");
                0.0
            }
        }
    }
}

/// normalized "YYYY-MM-DD" fire date, parsed from the first 10 chars of the value. If that is not a valid date we
/// keep the raw 10 char prefix, invalid values shorter than that (or missing values) yield None
pub fn fire_date (opt_text: Option<&str>)->Option<String> {
    let s = opt_text.map(str::trim).filter( |s| !s.is_empty())?;

    if let Some(date) = parse_date_prefix(s) {
        Some( date.format("%Y-%m-%d").to_string())
    } else if s.chars().count() >= 10 {
        Some( s.chars().take(10).collect())
    } else {
        None
    }
}
