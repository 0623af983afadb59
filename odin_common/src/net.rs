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

//! common utility functions for network operations

use std::time::Duration;
use reqwest::{header::HeaderMap, Client, StatusCode};

use crate::define_error;

define_error!{ pub OdinNetError = 
    IOError(#[from] std::io::Error) : "IO error: {0}",
    NotFoundError(String) : "not found {0}",
    HttpError(#[from] reqwest::Error) : "http error: {0}",
    OpFailed(String) : "operation failed: {0}"
}

pub type Result<T> = std::result::Result<T, OdinNetError>;

/// retrieve the response body of a HTTP GET request as text.
/// Query parameters are URL-encoded by reqwest. Note this does not retry - any transport error or
/// non-success status is reported as error
pub async fn get_text<Q> (client: &Client, url: &str, query: &Q, headers: HeaderMap, timeout: Duration) -> Result<String> 
    where Q: serde::Serialize + ?Sized
{
    let response = client.get(url)
        .query( query)
        .headers( headers)
        .timeout( timeout)
        .send()
        .await?;

    match response.status() {
        status if status.is_success() => {
            Ok( response.text().await? )
        }
        StatusCode::NOT_FOUND => {
            Err( OdinNetError::NotFoundError(format!("{url}")))
        }
        other => {
            Err( OdinNetError::OpFailed(format!("response status {other:?}")))
        }
    }
}
