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

use std::fs;
use chrono::{TimeZone, Utc};
use odin_burntarea::{BurntAreaFeature, bundle::{Bundle, bundle_filename, write_bundle}};

fn feature (id: &str, fire_date: Option<&str>)->BurntAreaFeature {
    BurntAreaFeature {
        id: id.to_string(),
        centroid: [-5.1, 49.2],
        boundary_points: vec![[-5.2,49.1],[-5.0,49.3],[-5.1,49.2]],
        area_hectares: 57.0,
        fire_date: fire_date.map( |s| s.to_string()),
        season_year: 2024
    }
}

#[test]
fn test_bundle_envelope() {
    let generated_at = Utc.with_ymd_and_hms( 2024, 10, 2, 8, 15, 22).unwrap();
    let bundle = Bundle::new( vec![ feature("a", Some("2024-04-12")), feature("b", None)], 2024, "UK", generated_at);

    assert_eq!( bundle.feature_count(), 2);
    assert!( bundle.is_consistent());

    let json = String::from_utf8( bundle.to_json().unwrap()).unwrap();
    println!("{json}");

    assert!( json.starts_with( r#"{"year":2024,"region":"UK","generatedAt":"2024-10-02T08:15:22.000000Z","featureCount":2,"features":["#));
    assert!( json.contains( r#""boundaryPoints":[[-5.2,49.1],[-5.0,49.3],[-5.1,49.2]]"#));
    assert!( json.contains( r#""areaHectares":57.0"#));
    assert!( json.contains( r#""fireDate":null"#));
    assert!( json.contains( r#""seasonYear":2024"#));
    assert!( !json.contains(' ') && !json.contains('\n'));
}

#[test]
fn test_write_bundle() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("assets").join("cache"); // does not exist yet

    let bundle = Bundle::new( vec![ feature("a", Some("2024-04-12"))], 2024, "UK", Utc::now());
    let path = write_bundle( &bundle, &dir, "uk").unwrap();

    assert_eq!( path, dir.join("burnt_areas_2024_uk.json"));
    assert_eq!( bundle_filename( 2024, "uk"), "burnt_areas_2024_uk.json");

    let restored: Bundle = serde_json::from_slice( &fs::read(&path).unwrap()).unwrap();
    assert!( restored.is_consistent());
    assert_eq!( restored.year(), 2024);
    assert_eq!( restored.region(), "UK");
    assert_eq!( restored.features(), bundle.features());
    assert_eq!( restored.generated_at().timestamp_micros(), bundle.generated_at().timestamp_micros());

    // a new run replaces the previous bundle
    let bundle = Bundle::new( vec![ feature("a", None), feature("b", None), feature("c", None)], 2024, "UK", Utc::now());
    write_bundle( &bundle, &dir, "uk").unwrap();
    let restored: Bundle = serde_json::from_slice( &fs::read(&path).unwrap()).unwrap();
    assert_eq!( restored.feature_count(), 3);
}

#[test]
fn test_write_bundle_into_file_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let not_a_dir = tmp.path().join("cache");
    fs::write( &not_a_dir, b"x").unwrap();

    let bundle = Bundle::new( vec![ feature("a", None)], 2024, "UK", Utc::now());
    assert!( write_bundle( &bundle, &not_a_dir, "uk").is_err());
}
