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

//! API to append an entry to a user's exercise log.

use crate::driver::Driver;
use crate::model::{
    Description, ExerciseDate, ExerciseDuration, NewExercise, UserId, Username,
};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use trainlog_core::rest::RestError;

/// Message sent to the server to log an exercise.
///
/// The fields are kept as raw optional values so that this layer can report
/// absent and malformed values itself, in a fixed order, instead of leaving
/// that to the JSON deserializer.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Serialize))]
pub(crate) struct LogExerciseRequest {
    /// What the exercise consisted of.
    pub(crate) description: Option<String>,

    /// Length of the exercise in minutes, as a number or a numeric string.
    pub(crate) duration: Option<serde_json::Value>,

    /// Calendar date of the exercise as `YYYY-MM-DD`.  Today when omitted.
    pub(crate) date: Option<String>,
}

/// Message sent back to the caller after logging an exercise.
///
/// `id` carries the identifier of the owning user, not of the new log entry.
#[derive(Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
pub(crate) struct LogExerciseResponse {
    /// Name of the user the entry was logged for.
    pub(crate) username: Username,

    /// Description of the entry as persisted.
    pub(crate) description: Description,

    /// Duration of the entry in minutes as persisted.
    pub(crate) duration: ExerciseDuration,

    /// Human-readable date of the entry, e.g. `Fri Jan 05 2024`.
    pub(crate) date: String,

    /// Identifier of the owning user.
    pub(crate) id: UserId,
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<String>,
    Json(request): Json<LogExerciseRequest>,
) -> Result<impl IntoResponse, RestError> {
    let user_id = UserId::new(id)?;

    let description = match request.description {
        Some(description) => Description::new(description)?,
        None => return Err(RestError::InvalidRequest("Description must be filled".to_owned())),
    };
    let duration = match request.duration {
        Some(duration) => ExerciseDuration::from_request_value(&duration)?,
        None => return Err(RestError::InvalidRequest("Duration must be filled".to_owned())),
    };
    let date = match request.date {
        Some(date) => Some(ExerciseDate::parse(date)?),
        None => None,
    };

    let (user, exercise) =
        driver.log_exercise(&user_id, NewExercise::new(description, duration, date)).await?;

    Ok(Json(LogExerciseResponse {
        username: user.username().clone(),
        description: exercise.description().clone(),
        duration: *exercise.duration(),
        date: exercise.date().to_human(),
        id: user.id().clone(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::testutils::*;
    use axum::http;
    use time::macros::datetime;
    use trainlog_core::{rest::testutils::*, test_payload_must_be_json};

    fn route(id: &str) -> (http::Method, String) {
        (http::Method::POST, format!("/api/users/{}/exercises", id))
    }

    /// Convenience constructor for a request with all fields set from JSON values.
    fn request(
        description: Option<&str>,
        duration: Option<serde_json::Value>,
        date: Option<&str>,
    ) -> LogExerciseRequest {
        LogExerciseRequest {
            description: description.map(str::to_owned),
            duration,
            date: date.map(str::to_owned),
        }
    }

    #[tokio::test]
    async fn test_ok_with_explicit_date() {
        let context = TestContext::setup().await;

        let user = context.create_user("alice").await;
        let response = OneShotBuilder::new(
            context.app(),
            route(user.id().as_str()),
        )
        .send_json(request(Some("run"), Some(serde_json::json!(30)), Some("2024-01-05")))
        .await
        .expect_json::<LogExerciseResponse>()
        .await;

        let exp_response = LogExerciseResponse {
            username: user.username().clone(),
            description: Description::new("run").unwrap(),
            duration: ExerciseDuration::from_minutes(30).unwrap(),
            date: "Fri Jan 05 2024".to_owned(),
            id: user.id().clone(),
        };
        assert_eq!(exp_response, response);

        let stored = context.get_exercises(user.id()).await;
        assert_eq!(1, stored.len());
        assert_eq!("2024-01-05", stored[0].date().to_iso8601());
    }

    #[tokio::test]
    async fn test_ok_with_duration_as_string() {
        let context = TestContext::setup().await;

        let user = context.create_user("alice").await;
        let response = OneShotBuilder::new(context.app(), route(user.id().as_str()))
            .send_json(request(Some("run"), Some(serde_json::json!("30")), Some("2024-01-05")))
            .await
            .expect_json::<LogExerciseResponse>()
            .await;
        assert_eq!(ExerciseDuration::from_minutes(30).unwrap(), response.duration);
    }

    #[tokio::test]
    async fn test_date_omitted_defaults_to_today() {
        let context = TestContext::setup().await;
        context.clock().set(datetime!(2024-07-04 12:00:00 UTC));

        let user = context.create_user("alice").await;
        let response = OneShotBuilder::new(context.app(), route(user.id().as_str()))
            .send_json(request(Some("run"), Some(serde_json::json!(30)), None))
            .await
            .expect_json::<LogExerciseResponse>()
            .await;
        assert_eq!("Thu Jul 04 2024", response.date);
    }

    #[tokio::test]
    async fn test_invalid_user_id() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.into_app(), route("not-a-uuid"))
            .send_json(request(Some("run"), Some(serde_json::json!(30)), None))
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .expect_error("Invalid user id")
            .await;
    }

    #[tokio::test]
    async fn test_invalid_user_id_beats_field_validation() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.into_app(), route("not-a-uuid"))
            .send_json(request(None, None, None))
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .expect_error("Invalid user id")
            .await;
    }

    #[tokio::test]
    async fn test_missing_description() {
        let context = TestContext::setup().await;

        let user = context.create_user("alice").await;
        OneShotBuilder::new(context.into_app(), route(user.id().as_str()))
            .send_json(request(None, Some(serde_json::json!(30)), None))
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .expect_error("Description must be filled")
            .await;
    }

    #[tokio::test]
    async fn test_missing_duration() {
        let context = TestContext::setup().await;

        let user = context.create_user("alice").await;
        OneShotBuilder::new(context.into_app(), route(user.id().as_str()))
            .send_json(request(Some("run"), None, None))
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .expect_error("Duration must be filled")
            .await;
    }

    #[tokio::test]
    async fn test_invalid_duration() {
        let context = TestContext::setup().await;

        let user = context.create_user("alice").await;
        for duration in
            [serde_json::json!(0), serde_json::json!(-5), serde_json::json!("a while")]
        {
            OneShotBuilder::new(context.app(), route(user.id().as_str()))
                .send_json(request(Some("run"), Some(duration), None))
                .await
                .expect_status(http::StatusCode::BAD_REQUEST)
                .expect_error("duration|Duration")
                .await;
        }
    }

    #[tokio::test]
    async fn test_invalid_date() {
        let context = TestContext::setup().await;

        let user = context.create_user("alice").await;
        OneShotBuilder::new(context.into_app(), route(user.id().as_str()))
            .send_json(request(Some("run"), Some(serde_json::json!(30)), Some("Jan 5 2024")))
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .expect_error("Invalid date")
            .await;
    }

    #[tokio::test]
    async fn test_user_not_found() {
        let context = TestContext::setup().await;

        context.create_user("alice").await;
        OneShotBuilder::new(context.into_app(), route(UserId::random().as_str()))
            .send_json(request(Some("run"), Some(serde_json::json!(30)), None))
            .await
            .expect_status(http::StatusCode::NOT_FOUND)
            .expect_error("not found")
            .await;
    }

    test_payload_must_be_json!(
        TestContext::setup().await.into_app(),
        route("8c49bb65-2e88-4b90-9d14-7f0fbf09c107")
    );
}
