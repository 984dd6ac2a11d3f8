// Trainlog
// Copyright 2025 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! API to register a new user.

use crate::driver::Driver;
use crate::model::Username;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::{http, Json};
use serde::Deserialize;
use trainlog_core::rest::RestError;

/// Message sent to the server to register a user.
///
/// The username is kept as a raw optional string so that this layer can report
/// absent and malformed values itself instead of leaving that to the JSON
/// deserializer.
#[derive(Deserialize)]
#[cfg_attr(test, derive(serde::Serialize))]
pub(crate) struct CreateUserRequest {
    /// Desired username.
    pub(crate) username: Option<String>,
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(http::StatusCode, impl IntoResponse), RestError> {
    let username = match request.username {
        Some(username) => Username::new(username)?,
        None => return Err(RestError::InvalidRequest("Username must be filled".to_owned())),
    };

    let user = driver.register_user(username).await?;
    Ok((http::StatusCode::CREATED, Json(user)))
}
