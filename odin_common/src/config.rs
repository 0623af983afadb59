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

//! loading of RON config files

use std::{fs, path::Path};
use serde::de::DeserializeOwned;

use crate::define_error;

define_error!{ pub OdinConfigError = 
    IOError(#[from] std::io::Error) : "config IO error: {0}",
    RonSerdeError(#[from] ron::error::SpannedError) : "config RON error: {0}"
}

pub type Result<T> = std::result::Result<T, OdinConfigError>;

/// load a config struct from an explicit RON file path
pub fn load_config_path<C,P> (path: P) -> Result<C> where C: DeserializeOwned, P: AsRef<Path> {
    let data = fs::read( path.as_ref())?;
    Ok( ron::de::from_bytes( data.as_slice())? )
}

/// load config from path if it is set, use the default value of the config type otherwise
pub fn load_config_or_default<C,P> (opt_path: Option<P>) -> Result<C> where C: DeserializeOwned + Default, P: AsRef<Path> {
    match opt_path {
        Some(path) => load_config_path( path),
        None => Ok( C::default() )
    }
}
