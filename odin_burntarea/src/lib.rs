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
#![allow(unused)]

//! import of EFFIS burnt area polygons (WFS/GML 3.2) into compact per-year JSON bundles

use std::{path::PathBuf, time::Duration};
use serde::{Serialize,Deserialize};
use odin_common::{BoundingBox, datetime::{deserialize_duration, serialize_duration}};

pub mod errors;
pub use errors::{OdinBurntAreaError, Result};

pub mod gml;
pub mod feature;
pub mod wfs;
pub mod bundle;
pub mod update;

/// XML namespace URIs of the WFS response
#[derive(Deserialize,Serialize,Debug,Clone,PartialEq)]
pub struct GmlNamespaces {
    pub wfs: String,
    pub gml: String,
    pub ba: String,
}

impl Default for GmlNamespaces {
    fn default()->Self {
        GmlNamespaces {
            wfs: "http://www.opengis.net/wfs/2.0".into(),
            gml: "http://www.opengis.net/gml/3.2".into(),
            ba: "http://effis.jrc.ec.europa.eu/burnt_area".into(),
        }
    }
}

/// where and how to retrieve burnt areas, and where to store the bundles.
/// All fields have defaults so that config files only need to specify what differs
#[derive(Deserialize,Serialize,Debug,Clone)]
#[serde(default)]
pub struct BurntAreaConfig {
    pub wfs_url: String,
    pub type_prefix: String, // namespace prefix used in the typeName query parameter
    pub type_base_name: String, // feature type is "<base_name>_<year>"
    pub bbox: BoundingBox<f64>, // west,south,east,north in degrees
    pub crs: String,

    pub user_agent: String, // EFFIS rejects requests without one

    #[serde(deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub timeout: Duration,

    pub region: String,
    pub region_suffix: String, // used in bundle filenames
    pub output_dir: PathBuf,

    pub ci_output_var: String, // env var that names the CI output file (if set)

    pub namespaces: GmlNamespaces,
}

impl Default for BurntAreaConfig {
    fn default()->Self {
        BurntAreaConfig {
            wfs_url: "https://maps.effis.emergency.copernicus.eu/effis".into(),
            type_prefix: "ba".into(),
            type_base_name: "burnt_area".into(),
            bbox: BoundingBox::new( -12.0, 49.0, 3.0, 62.0), // UK + Ireland
            crs: "EPSG:4326".into(),
            user_agent: "WildFire/0.1 (prototype; burnt-area-bundle-update)".into(),
            timeout: Duration::from_secs(120),
            region: "UK".into(),
            region_suffix: "uk".into(),
            output_dir: PathBuf::from("assets/cache"),
            ci_output_var: "GITHUB_OUTPUT".into(),
            namespaces: GmlNamespaces::default(),
        }
    }
}

impl BurntAreaConfig {
    /// local name of the year specific feature element (e.g. "burnt_area_2024")
    pub fn feature_element_name (&self, year: i32)->String {
        format!("{}_{}", self.type_base_name, year)
    }

    /// qualified type name for WFS queries (e.g. "ba:burnt_area_2024")
    pub fn type_name (&self, year: i32)->String {
        format!("{}:{}", self.type_prefix, self.feature_element_name(year))
    }
}

/// a single burnt area polygon as we publish it. Positions are [lon,lat] in degrees
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
#[serde(rename_all="camelCase")]
pub struct BurntAreaFeature {
    pub id: String,
    pub centroid: [f64;2],
    pub boundary_points: Vec<[f64;2]>, // at least 3
    pub area_hectares: f64,
    pub fire_date: Option<String>, // "YYYY-MM-DD" (or the raw 10 char prefix if that did not parse)
    pub season_year: i32,
}
