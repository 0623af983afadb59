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
use odin_common::fs::{append_lines_to_file, ensure_writable_dir, file_length, set_filepath_contents};

// run with "cargo test test_xx -- --nocapture"

#[test]
fn test_ensure_writable_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("a").join("b");

    assert!( !dir.exists());
    ensure_writable_dir( &dir).unwrap();
    assert!( dir.is_dir());
    ensure_writable_dir( &dir).unwrap(); // idempotent
}

#[test]
fn test_ensure_writable_dir_on_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = set_filepath_contents( tmp.path(), "not_a_dir", b"x").unwrap();
    assert!( ensure_writable_dir( &path).is_err());
}

#[test]
fn test_set_contents() {
    let tmp = tempfile::tempdir().unwrap();
    let path = set_filepath_contents( tmp.path(), "data.json", b"{\"a\":1}").unwrap();
    assert_eq!( file_length(&path), Some(7));

    // overwrite truncates
    set_filepath_contents( tmp.path(), "data.json", b"{}").unwrap();
    assert_eq!( fs::read_to_string(&path).unwrap(), "{}");
}

#[test]
fn test_append_lines() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("output");

    append_lines_to_file( &path, &["a=1", "b=2"]).unwrap();
    append_lines_to_file( &path, &[String::from("c=3")]).unwrap();

    assert_eq!( fs::read_to_string(&path).unwrap(), "a=1\nb=2\nc=3\n");
}
