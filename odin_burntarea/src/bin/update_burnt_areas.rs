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

use std::{path::PathBuf, process::ExitCode};
use tokio;
use anyhow::Result;
use reqwest::Client;
use clap::Parser;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;
use odin_common::{config::load_config_or_default, datetime::current_year};
use odin_burntarea::{
    BurntAreaConfig,
    update::{WfsFeatureSource, ci_output_path, default_years, run_update}
};

/// periodic (CI) job to regenerate the burnt area bundles of the previous and current year
#[derive(Parser, Debug)]
#[command(version, about, long_about = "update EFFIS burnt area JSON bundles for the previous and current year")]
pub struct Args {
    /// RON config file (built-in EFFIS/UK defaults if not set)
    #[arg(short,long)]
    pub config: Option<PathBuf>,

    /// directory to store bundles in (overrides config)
    #[arg(short,long)]
    pub output_dir: Option<PathBuf>,

    /// fail if any year could not be retrieved
    #[arg(long)]
    pub strict: bool,

    /// season years to process instead of previous and current year
    #[arg(num_args=0..)]
    pub years: Vec<i32>
}

#[tokio::main]
async fn main()->Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::try_from_default_env().unwrap_or_else( |_| EnvFilter::new("info")))  // use RUST_LOG to override
        .init();

    let args = Args::parse();

    let config: BurntAreaConfig = load_config_or_default( args.config.as_ref())?;
    let output_dir = args.output_dir.clone().unwrap_or_else( || config.output_dir.clone());

    let current_year = current_year();
    let years = if args.years.is_empty() { default_years( current_year) } else { args.years.clone() };

    let source = WfsFeatureSource::new( Client::new(), &config);
    let ci_output = ci_output_path( &config);

    let summary = run_update( &source, &config, &output_dir, current_year, &years, ci_output.as_deref()).await?;

    if summary.is_success( args.strict) {
        info!("bundle update complete ({} of {} years written)", summary.n_written(), summary.outcomes.len());
        Ok( ExitCode::SUCCESS )
    } else {
        error!("bundle update failed ({} of {} years could not be retrieved)", summary.n_failed(), summary.outcomes.len());
        Ok( ExitCode::FAILURE )
    }
}
