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

use chrono::{DateTime, Datelike, NaiveDate, SecondsFormat, Utc};
use serde::{Serialize,Deserialize,Serializer,Deserializer};
use std::time::Duration;
use parse_duration::parse;

/// this should be used wherever we might have to use sim clock instead of wall clock
#[inline]
pub fn utc_now()->DateTime<Utc> {
    Utc::now()
}

/// the calendar year of the current wall clock time (UTC)
pub fn current_year()->i32 {
    utc_now().year()
}

/// ISO-8601 with microsecond resolution and a 'Z' suffix (e.g. "2025-07-01T12:03:44.123456Z")
pub fn iso_utc_micros_string (dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts( SecondsFormat::Micros, true)
}

/// strict parse of a "YYYY-MM-DD" date from the first 10 chars of the input (e.g. "2024-07-03T00:00:00Z").
/// Shorter inputs are parsed as a whole, which accepts unpadded dates such as "2024-7-3"
pub fn parse_date_prefix (s: &str)->Option<NaiveDate> {
    let end = s.char_indices().nth(10).map( |(i,_)| i).unwrap_or( s.len());
    NaiveDate::parse_from_str( &s[..end], "%Y-%m-%d").ok()
}

//--- support for serde

pub fn ser_iso_utc_micros<S: Serializer> (dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>  {
    s.serialize_str( &iso_utc_micros_string(dt))
}

pub fn deserialize_duration <'a,D>(deserializer: D) -> Result<Duration,D::Error>
    where D: Deserializer<'a>
{
    String::deserialize(deserializer).and_then( |string| {
        parse(string.as_str())
            .map_err( |e| serde::de::Error::custom(format!("{:?}",e)))
    })
}

pub fn serialize_duration<S: Serializer> (dur: &Duration, s: S) -> Result<S::Ok, S::Error>  {
    let dfm = format!("{:?}", dur);
    s.serialize_str(&dfm)
}
