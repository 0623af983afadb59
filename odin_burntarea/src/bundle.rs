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

//! the per-year JSON bundle artifact

use std::path::{Path,PathBuf};
use chrono::{DateTime,Utc};
use serde::{Serialize,Deserialize};
use tracing::info;
use odin_common::{datetime::ser_iso_utc_micros, fs::{ensure_writable_dir, file_length, set_filepath_contents}};

use crate::{BurntAreaFeature, errors::Result};

/// all burnt areas of a season year for one region.
/// The feature count is derived from the features on construction, hence fields are read-only
#[derive(Serialize,Deserialize,Debug,Clone)]
#[serde(rename_all="camelCase")]
pub struct Bundle {
    year: i32,
    region: String,
    #[serde(serialize_with="ser_iso_utc_micros")]
    generated_at: DateTime<Utc>,
    feature_count: usize,
    features: Vec<BurntAreaFeature>,
}

impl Bundle {
    pub fn new (features: Vec<BurntAreaFeature>, year: i32, region: impl ToString, generated_at: DateTime<Utc>)->Self {
        Bundle { year, region: region.to_string(), generated_at, feature_count: features.len(), features }
    }

    pub fn year (&self)->i32 { self.year }
    pub fn region (&self)->&str { self.region.as_str() }
    pub fn generated_at (&self)->DateTime<Utc> { self.generated_at }
    pub fn feature_count (&self)->usize { self.feature_count }
    pub fn features (&self)->&[BurntAreaFeature] { self.features.as_slice() }

    /// for deserialized bundles - constructed ones are always consistent
    pub fn is_consistent (&self)->bool { self.feature_count == self.features.len() }

    /// compact JSON without any whitespace between tokens
    pub fn to_json (&self)->Result<Vec<u8>> {
        Ok( serde_json::to_vec( self)? )
    }
}

pub fn bundle_filename (year: i32, region_suffix: &str)->String {
    format!("burnt_areas_{year}_{region_suffix}.json")
}

/// write bundle as `burnt_areas_<year>_<region_suffix>.json` into dir (which is created if it does not exist yet).
/// An already existing bundle file of the same year is replaced
pub fn write_bundle (bundle: &Bundle, dir: impl AsRef<Path>, region_suffix: &str)->Result<PathBuf> {
    let dir = dir.as_ref();
    ensure_writable_dir( dir)?;

    let filename = bundle_filename( bundle.year, region_suffix);
    let path = set_filepath_contents( dir, &filename, &bundle.to_json()?)?;

    let kb = file_length( &path).unwrap_or(0) as f64 / 1024.0;
    info!("saved {filename} ({} features, {kb:.1} KB)", bundle.feature_count);

    Ok(path)
}
