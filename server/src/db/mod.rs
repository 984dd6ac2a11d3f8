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

//! Database abstraction in terms of the operations needed by the server.

use crate::model::{
    Description, Exercise, ExerciseDate, ExerciseDuration, LogFilter, User, UserId, Username,
};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use trainlog_core::db::sqlite::{map_sqlx_error, run_schema};
use trainlog_core::db::{DbError, DbResult, Executor};
use uuid::Uuid;


/// Schema to use to initialize the database.
const SCHEMA: &str = include_str!("sqlite.sql");

/// Initializes the database schema.
pub async fn init_schema(ex: &mut Executor) -> DbResult<()> {
    run_schema(ex, SCHEMA).await
}

impl TryFrom<SqliteRow> for User {
    type Error = DbError;

    fn try_from(row: SqliteRow) -> DbResult<Self> {
        let id: String = row.try_get("id").map_err(map_sqlx_error)?;
        let username: String = row.try_get("username").map_err(map_sqlx_error)?;

        Ok(User::new(UserId::new(id)?, Username::new(username)?))
    }
}

impl TryFrom<SqliteRow> for Exercise {
    type Error = DbError;

    fn try_from(row: SqliteRow) -> DbResult<Self> {
        let description: String = row.try_get("description").map_err(map_sqlx_error)?;
        let duration: i64 = row.try_get("duration").map_err(map_sqlx_error)?;
        let date: String = row.try_get("date").map_err(map_sqlx_error)?;

        Ok(Exercise::new(
            Description::new(description)?,
            ExerciseDuration::from_i64(duration)?,
            ExerciseDate::parse(date)?,
        ))
    }
}

/// Creates a new user named `username` with a store-assigned id.
pub(crate) async fn create_user(ex: &mut Executor, username: Username) -> DbResult<User> {
    let id = UserId::random();

    let query_str = "INSERT INTO users (id, username) VALUES (?, ?)";
    let done = sqlx::query(query_str)
        .bind(id.as_str())
        .bind(username.as_str())
        .execute(ex.conn())
        .await
        .map_err(map_sqlx_error)?;
    if done.rows_affected() != 1 {
        return Err(DbError::BackendError("Insertion affected more than one row".to_owned()));
    }
    Ok(User::new(id, username))
}

/// Gets information about the existing user with identifier `id`.
pub(crate) async fn get_user(ex: &mut Executor, id: &UserId) -> DbResult<User> {
    let query_str = "SELECT id, username FROM users WHERE id = ?";
    let row = sqlx::query(query_str)
        .bind(id.as_str())
        .fetch_one(ex.conn())
        .await
        .map_err(map_sqlx_error)?;
    User::try_from(row)
}

/// Gets all existing users in store order.
pub(crate) async fn list_users(ex: &mut Executor) -> DbResult<Vec<User>> {
    let query_str = "SELECT id, username FROM users";
    let rows = sqlx::query(query_str).fetch_all(ex.conn()).await.map_err(map_sqlx_error)?;
    rows.into_iter().map(User::try_from).collect()
}

/// Persists a new log entry for the user `user_id`, which must exist.
pub(crate) async fn create_exercise(
    ex: &mut Executor,
    user_id: &UserId,
    exercise: &Exercise,
) -> DbResult<()> {
    let id = Uuid::new_v4().as_hyphenated().to_string();

    let query_str = "
        INSERT INTO exercises (id, user_id, description, duration, date)
        VALUES (?, ?, ?, ?, ?)
    ";
    let done = sqlx::query(query_str)
        .bind(id)
        .bind(user_id.as_str())
        .bind(exercise.description().as_str())
        .bind(exercise.duration().as_i64())
        .bind(exercise.date().to_iso8601())
        .execute(ex.conn())
        .await
        .map_err(map_sqlx_error)?;
    if done.rows_affected() != 1 {
        return Err(DbError::BackendError("Insertion affected more than one row".to_owned()));
    }
    Ok(())
}

/// Gets the log entries of the user `user_id` restricted by `filter`, sorted by ascending
/// date.  The date bounds are inclusive and the limit applies after sorting.
pub(crate) async fn list_exercises(
    ex: &mut Executor,
    user_id: &UserId,
    filter: &LogFilter,
) -> DbResult<Vec<Exercise>> {
    let mut query_str =
        "SELECT description, duration, date FROM exercises WHERE user_id = ?".to_owned();
    if filter.from().is_some() {
        query_str.push_str(" AND date >= ?");
    }
    if filter.to().is_some() {
        query_str.push_str(" AND date <= ?");
    }
    query_str.push_str(" ORDER BY date ASC");
    if filter.limit().is_some() {
        query_str.push_str(" LIMIT ?");
    }

    let mut query = sqlx::query(&query_str).bind(user_id.as_str());
    if let Some(from) = filter.from() {
        query = query.bind(from.to_iso8601());
    }
    if let Some(to) = filter.to() {
        query = query.bind(to.to_iso8601());
    }
    if let Some(limit) = filter.limit() {
        query = query.bind(limit.as_i64());
    }

    let rows = query.fetch_all(ex.conn()).await.map_err(map_sqlx_error)?;
    rows.into_iter().map(Exercise::try_from).collect()
}
