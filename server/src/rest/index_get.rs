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

//! Landing page of the service.

use axum::response::Html;

/// Static contents served at the root of the service.
const LANDING_PAGE: &str = include_str!("index.html");

/// API handler.
pub(crate) async fn handler() -> Html<&'static str> {
    Html(LANDING_PAGE)
}
