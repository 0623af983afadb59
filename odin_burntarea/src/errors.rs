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

use thiserror::Error;
use odin_common::net::OdinNetError;

pub type Result<T> = std::result::Result<T,OdinBurntAreaError>;

#[derive(Error,Debug)]
pub enum OdinBurntAreaError {
    #[error("parse error {0}")]
    ParseError(String),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("net error {0}")]
    NetError( #[from] OdinNetError),

    #[error("invalid header value {0}")]
    HeaderError( #[from] reqwest::header::InvalidHeaderValue),

    #[error("XML error {0}")]
    XmlError( #[from] quick_xml::Error),

    #[error("serde error {0}")]
    SerdeError( #[from] serde_json::Error)
}

macro_rules! parse_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        crate::errors::OdinBurntAreaError::ParseError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use parse_error;
