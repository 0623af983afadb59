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

use std::{io::Write, time::Duration};
use serde::{Serialize,Deserialize};
use odin_common::{BoundingBox, config::{load_config_path, load_config_or_default}, datetime::deserialize_duration};

#[derive(Deserialize,Debug,PartialEq)]
struct TestConfig {
    url: String,
    bbox: BoundingBox<f64>,
    #[serde(deserialize_with="deserialize_duration")]
    timeout: Duration,
}

impl Default for TestConfig {
    fn default()->Self {
        TestConfig { url: "http://localhost".into(), bbox: BoundingBox::new(0.0, 0.0, 1.0, 1.0), timeout: Duration::from_secs(1) }
    }
}

#[test]
fn test_load_ron_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!( file, r#"TestConfig(
        url: "https://example.com/wfs",
        bbox: ( west: -12.0, south: 49.0, east: 3.0, north: 62.0 ),
        timeout: "2m",
    )"#).unwrap();

    let config: TestConfig = load_config_path( file.path()).unwrap();
    assert_eq!( config.url, "https://example.com/wfs");
    assert_eq!( config.bbox, BoundingBox::new( -12.0, 49.0, 3.0, 62.0));
    assert_eq!( config.timeout, Duration::from_secs(120));
}

#[test]
fn test_missing_config() {
    let res: odin_common::config::Result<TestConfig> = load_config_path( "no/such/config.ron");
    assert!( res.is_err());

    let config: TestConfig = load_config_or_default::<TestConfig,&str>( None).unwrap();
    assert_eq!( config, TestConfig::default());
}

#[test]
fn test_bbox_display() {
    let bbox = BoundingBox::new( -12.0, 49.0, 3.0, 62.0);
    assert_eq!( bbox.to_string(), "-12,49,3,62");
}
