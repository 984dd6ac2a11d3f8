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

//! The `UserId` data type.

use serde::{de::Visitor, Deserialize, Serialize};
use trainlog_core::model::{ModelError, ModelResult};
use uuid::Uuid;

/// Represents a well-formed (but maybe non-existent) user identifier.
///
/// Identifiers are UUIDs assigned by the store at creation time and are kept in
/// their canonical hyphenated lowercase form, which is also how the store
/// persists them.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub(crate) struct UserId(String);

impl UserId {
    /// Creates a new identifier from an untrusted string `s`, making sure it is valid.
    pub(crate) fn new<S: AsRef<str>>(s: S) -> ModelResult<Self> {
        match Uuid::parse_str(s.as_ref()) {
            Ok(uuid) => Ok(Self(uuid.as_hyphenated().to_string())),
            Err(_) => Err(ModelError(format!("Invalid user id '{}'", s.as_ref()))),
        }
    }

    /// Returns a new randomly-generated identifier.
    pub(crate) fn random() -> Self {
        Self(Uuid::new_v4().as_hyphenated().to_string())
    }

    /// Returns a string view of the identifier.
    pub(crate) fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// A deserialization visitor for a `UserId`.
struct UserIdVisitor;

impl Visitor<'_> for UserIdVisitor {
    type Value = UserId;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a UUID string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        UserId::new(v).map_err(|e| E::custom(e.to_string()))
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_string(UserIdVisitor)
    }
}
