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

//! retrieval of burnt area features from the EFFIS Web Feature Service

use reqwest::{Client, header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT}};
use tracing::info;
use odin_common::net::get_text;

use crate::{BurntAreaConfig, BurntAreaFeature, gml::parse_burnt_areas, errors::Result};

pub const GML_MIME_TYPE: &str = "application/gml+xml";

/// query parameters for a WFS 2.0 GetFeature request of all burnt areas within the configured bounding box
pub fn wfs_query (config: &BurntAreaConfig, year: i32)->Vec<(&'static str,String)> {
    vec![
        ("service", "WFS".to_string()),
        ("version", "2.0.0".to_string()),
        ("request", "GetFeature".to_string()),
        ("typeName", config.type_name(year)),
        ("outputFormat", format!("{GML_MIME_TYPE}; version=3.2")),
        ("srsName", config.crs.clone()),
        ("bbox", format!("{},{}", config.bbox, config.crs)),
    ]
}

pub fn wfs_headers (config: &BurntAreaConfig)->Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert( USER_AGENT, HeaderValue::from_str( &config.user_agent)?);
    headers.insert( ACCEPT, HeaderValue::from_static( GML_MIME_TYPE));
    Ok(headers)
}

/// get the raw GML response text for the given year. Transport errors and non-success status codes are errors
pub async fn get_gml (client: &Client, config: &BurntAreaConfig, year: i32)->Result<String> {
    let query = wfs_query( config, year);
    let headers = wfs_headers( config)?;
    Ok( get_text( client, &config.wfs_url, &query, headers, config.timeout).await? )
}

/// get and parse all burnt areas of a given year
pub async fn fetch_burnt_areas (client: &Client, config: &BurntAreaConfig, year: i32)->Result<Vec<BurntAreaFeature>> {
    info!("fetching burnt areas for {year} from {}", config.wfs_url);

    let gml = get_gml( client, config, year).await?;
    let features = parse_burnt_areas( &gml, year, &config.feature_element_name(year), &config.namespaces)?;

    info!("fetched {} burnt areas for {year}", features.len());
    Ok(features)
}
