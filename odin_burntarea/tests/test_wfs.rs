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

use std::time::Duration;
use reqwest::header::{ACCEPT, USER_AGENT};
use odin_burntarea::{BurntAreaConfig, wfs::{wfs_headers, wfs_query}};

#[test]
fn test_wfs_query() {
    let config = BurntAreaConfig::default();
    let query = wfs_query( &config, 2024);

    let expected = vec![
        ("service", "WFS"),
        ("version", "2.0.0"),
        ("request", "GetFeature"),
        ("typeName", "ba:burnt_area_2024"),
        ("outputFormat", "application/gml+xml; version=3.2"),
        ("srsName", "EPSG:4326"),
        ("bbox", "-12,49,3,62,EPSG:4326"),
    ];
    let actual: Vec<(&str,&str)> = query.iter().map( |(k,v)| (*k, v.as_str())).collect();
    assert_eq!( actual, expected);
}

#[test]
fn test_wfs_headers() {
    let config = BurntAreaConfig::default();
    let headers = wfs_headers( &config).unwrap();

    assert_eq!( headers.get(USER_AGENT).unwrap(), "WildFire/0.1 (prototype; burnt-area-bundle-update)");
    assert_eq!( headers.get(ACCEPT).unwrap(), "application/gml+xml");

    let mut config = BurntAreaConfig::default();
    config.user_agent = "bad\nagent".into();
    assert!( wfs_headers( &config).is_err());
}

#[test]
fn test_config_file() {
    let config: BurntAreaConfig = odin_common::config::load_config_path( "configs/burnt_area.ron").unwrap();
    assert_eq!( config.timeout, Duration::from_secs(120));
    assert_eq!( config.type_name(2025), "ba:burnt_area_2025");
    assert_eq!( config.bbox.to_string(), "-12,49,3,62");
    assert_eq!( config.namespaces, odin_burntarea::GmlNamespaces::default());
}

#[test]
fn test_partial_config_file() {
    let config: BurntAreaConfig = ron::from_str( r#"BurntAreaConfig( region: "IE", region_suffix: "ie" )"#).unwrap();
    assert_eq!( config.region_suffix, "ie");
    assert_eq!( config.wfs_url, BurntAreaConfig::default().wfs_url);
}
