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

//! API to retrieve the exercise log of a user.

use crate::driver::Driver;
use crate::model::{
    Description, ExerciseDate, ExerciseDuration, LogFilter, LogLimit, UserId, Username,
};
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use trainlog_core::rest::{EmptyBody, RestError};

/// Query parameters accepted by this API.
///
/// The values are kept as raw optional strings so that this layer can report
/// malformed values itself with the same error shape as every other failure.
#[derive(Deserialize)]
pub(crate) struct GetLogQuery {
    /// Inclusive lower bound on entry dates as `YYYY-MM-DD`.
    from: Option<String>,

    /// Inclusive upper bound on entry dates as `YYYY-MM-DD`.
    to: Option<String>,

    /// Cap on the number of entries to return, applied after sorting.
    limit: Option<String>,
}

/// A single entry of the log returned to the caller.
#[derive(Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
pub(crate) struct LogEntry {
    /// Description of the entry as persisted.
    pub(crate) description: Description,

    /// Duration of the entry in minutes as persisted.
    pub(crate) duration: ExerciseDuration,

    /// Human-readable date of the entry, e.g. `Fri Jan 05 2024`.
    pub(crate) date: String,
}

/// Message sent back to the caller with the filtered log.
#[derive(Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
pub(crate) struct GetLogResponse {
    /// Name of the user owning the log.
    pub(crate) username: Username,

    /// Identifier of the user owning the log.
    pub(crate) id: UserId,

    /// Number of entries in `log` after filtering and limiting.
    pub(crate) count: usize,

    /// The filtered log entries, sorted by ascending date.
    pub(crate) log: Vec<LogEntry>,
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<String>,
    Query(query): Query<GetLogQuery>,
    _: EmptyBody,
) -> Result<impl IntoResponse, RestError> {
    let user_id = UserId::new(id)?;
    let from = query.from.map(ExerciseDate::parse).transpose()?;
    let to = query.to.map(ExerciseDate::parse).transpose()?;
    let limit = query.limit.map(LogLimit::parse).transpose()?;

    let (user, exercises) =
        driver.get_log(&user_id, LogFilter::new(from, to, limit)).await?;

    let log = exercises
        .into_iter()
        .map(|exercise| LogEntry {
            description: exercise.description().clone(),
            duration: *exercise.duration(),
            date: exercise.date().to_human(),
        })
        .collect::<Vec<LogEntry>>();
    Ok(Json(GetLogResponse {
        username: user.username().clone(),
        id: user.id().clone(),
        count: log.len(),
        log,
    }))
}
