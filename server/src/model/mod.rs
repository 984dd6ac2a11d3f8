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

//! High-level data types.

use derive_getters::Getters;
use derive_more::Constructor;
use serde::{de::Visitor, Deserialize, Serialize};
use trainlog_core::model::{ModelError, ModelResult};

mod date;
mod duration;
mod user_id;
mod username;

pub(crate) use date::ExerciseDate;
pub(crate) use duration::ExerciseDuration;
pub(crate) use user_id::UserId;
pub(crate) use username::Username;

/// Free-form text describing what an exercise consisted of.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub(crate) struct Description(String);

impl Description {
    /// Creates a new description from an untrusted string `s`, making sure it is valid.
    pub(crate) fn new<S: Into<String>>(s: S) -> ModelResult<Self> {
        let s = s.into();
        if s.is_empty() {
            return Err(ModelError("Description cannot be empty".to_owned()));
        }
        Ok(Self(s))
    }

    /// Returns a string view of the description.
    pub(crate) fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// A deserialization visitor for a `Description`.
struct DescriptionVisitor;

impl Visitor<'_> for DescriptionVisitor {
    type Value = Description;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a non-empty string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Description::new(v).map_err(|e| E::custom(e.to_string()))
    }
}

impl<'de> Deserialize<'de> for Description {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_string(DescriptionVisitor)
    }
}

/// Cap on the number of log entries returned by a query.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct LogLimit(u32);

impl LogLimit {
    /// Creates a limit of `count` entries, which must be positive.
    pub(crate) fn new(count: u32) -> ModelResult<Self> {
        if count == 0 {
            return Err(ModelError("Limit must be a positive integer".to_owned()));
        }
        Ok(Self(count))
    }

    /// Parses an untrusted string `s` as a limit.
    pub(crate) fn parse<S: AsRef<str>>(s: S) -> ModelResult<Self> {
        match s.as_ref().parse::<u32>() {
            Ok(count) => LogLimit::new(count),
            Err(_) => Err(ModelError(format!("Invalid limit '{}'", s.as_ref()))),
        }
    }

    /// Returns the limit as an `i64` for use in database queries.
    pub(crate) fn as_i64(&self) -> i64 {
        i64::from(self.0)
    }
}

/// An existing user account.
#[derive(Clone, Constructor, Getters, Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
pub(crate) struct User {
    /// Identifier assigned by the store at creation time.
    id: UserId,

    /// Name the user registered under.
    username: Username,
}

/// A single entry in a user's exercise log as persisted in the store.
#[derive(Clone, Constructor, Getters)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub(crate) struct Exercise {
    /// What the exercise consisted of.
    description: Description,

    /// Length of the exercise in minutes.
    duration: ExerciseDuration,

    /// Calendar date the exercise happened on.
    date: ExerciseDate,
}

/// A validated request to append an entry to a user's log.
#[derive(Constructor, Getters)]
pub(crate) struct NewExercise {
    /// What the exercise consisted of.
    description: Description,

    /// Length of the exercise in minutes.
    duration: ExerciseDuration,

    /// Calendar date the exercise happened on, or none to use the current date.
    date: Option<ExerciseDate>,
}

/// Restrictions applied when fetching a user's log.
#[derive(Constructor, Default, Getters)]
pub(crate) struct LogFilter {
    /// Inclusive lower bound on entry dates.
    from: Option<ExerciseDate>,

    /// Inclusive upper bound on entry dates.
    to: Option<ExerciseDate>,

    /// Cap on the number of entries returned, applied after sorting.
    limit: Option<LogLimit>,
}
