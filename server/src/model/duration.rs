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

//! The `ExerciseDuration` data type.

use serde::{de::Visitor, Deserialize, Serialize};
use trainlog_core::model::{ModelError, ModelResult};

/// Length of an exercise in whole minutes.  We store this as a u32 but guarantee that it
/// is usable in an i64 context because that is what the database column holds.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub(crate) struct ExerciseDuration(u32);

impl ExerciseDuration {
    /// Creates a duration of `minutes`, which must be positive.
    pub(crate) fn from_minutes(minutes: u32) -> ModelResult<Self> {
        if minutes == 0 {
            return Err(ModelError("Duration must be a positive number of minutes".to_owned()));
        }
        Ok(Self(minutes))
    }

    /// Coerces the raw request `value` into a duration.  Callers may supply either a JSON
    /// number or a string holding one; anything else is rejected.
    pub(crate) fn from_request_value(value: &serde_json::Value) -> ModelResult<Self> {
        match value {
            serde_json::Value::Number(n) => match n.as_u64().and_then(|n| u32::try_from(n).ok()) {
                Some(minutes) => ExerciseDuration::from_minutes(minutes),
                None => Err(ModelError(format!("Invalid duration '{}'", n))),
            },
            serde_json::Value::String(s) => match s.trim().parse::<u32>() {
                Ok(minutes) => ExerciseDuration::from_minutes(minutes),
                Err(_) => Err(ModelError(format!("Invalid duration '{}'", s))),
            },
            v => Err(ModelError(format!("Invalid duration '{}'", v))),
        }
    }

    /// Creates a duration from an `i64` with range validation.
    pub(crate) fn from_i64(minutes: i64) -> ModelResult<Self> {
        match u32::try_from(minutes) {
            Ok(minutes) => ExerciseDuration::from_minutes(minutes),
            Err(e) => Err(ModelError(format!("Duration cannot be represented: {}", e))),
        }
    }

    /// Returns the duration as an `i64`.
    pub(crate) fn as_i64(&self) -> i64 {
        i64::from(self.0)
    }
}

/// A deserialization visitor for an `ExerciseDuration`.
struct ExerciseDurationVisitor;

impl Visitor<'_> for ExerciseDurationVisitor {
    type Value = ExerciseDuration;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a positive number of minutes")
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        match u32::try_from(v) {
            Ok(v) => ExerciseDuration::from_minutes(v).map_err(|e| E::custom(e.to_string())),
            Err(e) => Err(E::custom(e.to_string())),
        }
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        ExerciseDuration::from_i64(v).map_err(|e| E::custom(e.to_string()))
    }
}

impl<'de> Deserialize<'de> for ExerciseDuration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_u64(ExerciseDurationVisitor)
    }
}
