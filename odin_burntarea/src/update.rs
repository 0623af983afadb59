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

//! the update run: fetch and store bundles for a list of years, then report to CI

use std::{fmt, path::{Path,PathBuf}};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, warn, error};
use odin_common::{datetime::{utc_now, iso_utc_micros_string}, fs::append_lines_to_file};

use crate::{
    BurntAreaConfig, BurntAreaFeature,
    bundle::{Bundle, write_bundle},
    wfs::fetch_burnt_areas,
    errors::Result
};

/// where we get the features of a season year from
#[async_trait]
pub trait FeatureSource {
    async fn fetch_features (&self, year: i32)->Result<Vec<BurntAreaFeature>>;
}

/// the live EFFIS WFS source
pub struct WfsFeatureSource<'a> {
    client: Client,
    config: &'a BurntAreaConfig,
}

impl<'a> WfsFeatureSource<'a> {
    pub fn new (client: Client, config: &'a BurntAreaConfig)->Self {
        WfsFeatureSource { client, config }
    }
}

#[async_trait]
impl<'a> FeatureSource for WfsFeatureSource<'a> {
    async fn fetch_features (&self, year: i32)->Result<Vec<BurntAreaFeature>> {
        fetch_burnt_areas( &self.client, self.config, year).await
    }
}

#[derive(Debug,Clone,PartialEq)]
pub enum YearOutcome {
    Written { path: PathBuf, feature_count: usize },
    NoData, // not an error - the year might not have published data yet
    Failed(String), // transport, HTTP status or XML error
}

impl fmt::Display for YearOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearOutcome::Written{path,feature_count} => write!(f, "{feature_count} features written to {path:?}"),
            YearOutcome::NoData => write!(f, "no data"),
            YearOutcome::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}

#[derive(Debug)]
pub struct UpdateSummary {
    pub current_year: i32,
    pub previous_year: i32,
    pub outcomes: Vec<(i32,YearOutcome)>,
}

impl UpdateSummary {
    pub fn n_written (&self)->usize {
        self.outcomes.iter().filter( |(_,o)| matches!(o, YearOutcome::Written{..})).count()
    }

    pub fn n_failed (&self)->usize {
        self.outcomes.iter().filter( |(_,o)| matches!(o, YearOutcome::Failed(_))).count()
    }

    /// missing data is never a failure. Without `strict` only a complete outage (every year failed) is,
    /// with `strict` any failed year is
    pub fn is_success (&self, strict: bool)->bool {
        let n_failed = self.n_failed();
        if strict {
            n_failed == 0
        } else {
            self.outcomes.is_empty() || n_failed < self.outcomes.len()
        }
    }
}

/// the default years to process: previous and current
pub fn default_years (current_year: i32)->Vec<i32> {
    vec![current_year - 1, current_year]
}

/// fetch the features of a single year and write its bundle if there are any.
/// Fetch errors are logged and reported as `Failed`, errors writing the bundle are returned
pub async fn update_year<S: FeatureSource + Sync> (source: &S, config: &BurntAreaConfig, output_dir: &Path, year: i32)->Result<YearOutcome> {
    match source.fetch_features( year).await {
        Ok(features) if features.is_empty() => {
            warn!("no features fetched for {year}");
            Ok( YearOutcome::NoData )
        }
        Ok(features) => {
            let bundle = Bundle::new( features, year, &config.region, utc_now());
            let path = write_bundle( &bundle, output_dir, &config.region_suffix)?;
            Ok( YearOutcome::Written { path, feature_count: bundle.feature_count() } )
        }
        Err(e) => {
            error!("failed to fetch data for {year}: {e}");
            Ok( YearOutcome::Failed( e.to_string()) )
        }
    }
}

/// process all years in the given order. Each year is independent of the others
pub async fn update_bundles<S: FeatureSource + Sync> (source: &S, config: &BurntAreaConfig, output_dir: &Path, current_year: i32, years: &[i32])->Result<UpdateSummary> {
    info!("updating burnt area bundles for {:?}, generated at: {}", years, iso_utc_micros_string( &utc_now()));

    let mut outcomes = Vec::with_capacity( years.len());
    for year in years {
        let outcome = update_year( source, config, output_dir, *year).await?;
        outcomes.push( (*year, outcome) );
    }

    Ok( UpdateSummary { current_year, previous_year: current_year - 1, outcomes } )
}

pub fn ci_output_lines (current_year: i32, previous_year: i32)->[String;2] {
    [ format!("current_year={current_year}"), format!("previous_year={previous_year}") ]
}

/// append the `current_year` and `previous_year` key/value lines to a CI output file
pub fn write_ci_outputs (path: impl AsRef<Path>, current_year: i32, previous_year: i32)->Result<()> {
    append_lines_to_file( path.as_ref(), &ci_output_lines( current_year, previous_year))?;
    info!("CI outputs written to {:?}", path.as_ref());
    Ok(())
}

/// the CI output file as named by the configured env var, if set and not empty
pub fn ci_output_path (config: &BurntAreaConfig)->Option<PathBuf> {
    std::env::var_os( &config.ci_output_var)
        .filter( |v| !v.is_empty())
        .map( PathBuf::from)
}

/// the complete run: all bundles followed by the CI outputs (if we have a CI output file)
pub async fn run_update<S: FeatureSource + Sync> (source: &S, config: &BurntAreaConfig, output_dir: &Path, 
                                                  current_year: i32, years: &[i32], ci_output: Option<&Path>)->Result<UpdateSummary> {
    let summary = update_bundles( source, config, output_dir, current_year, years).await?;

    if let Some(path) = ci_output {
        write_ci_outputs( path, summary.current_year, summary.previous_year)?;
    }

    for (year,outcome) in &summary.outcomes {
        info!("{year}: {outcome}");
    }
    Ok(summary)
}
