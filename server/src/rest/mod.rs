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

//! Entry point to the REST server.

use crate::driver::Driver;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

mod exercises_post;
mod index_get;
mod logs_get;
#[cfg(test)]
mod testutils;
mod users_get;
mod users_post;

/// Creates the router for the application.
pub(crate) fn app(driver: Driver) -> Router {
    Router::new()
        .route("/", get(index_get::handler))
        .route("/api/users", get(users_get::handler).post(users_post::handler))
        .route("/api/users/:id/exercises", post(exercises_post::handler))
        .route("/api/users/:id/logs", get(logs_get::handler))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .with_state(driver)
}
