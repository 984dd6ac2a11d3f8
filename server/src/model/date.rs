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

//! The `ExerciseDate` data type.

use time::format_description::FormatItem;
use time::macros::format_description;
use time::Date;
use trainlog_core::model::{ModelError, ModelResult};

/// Format of the dates accepted in requests and stored in the database.  Plain ISO 8601
/// calendar dates sort chronologically when compared as text, which the database relies on.
const ISO_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Format of the dates rendered in responses, e.g. `Fri Jan 05 2024`.
const HUMAN_FORMAT: &[FormatItem<'static>] =
    format_description!("[weekday repr:short] [month repr:short] [day] [year]");

/// A calendar date attached to a log entry.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub(crate) struct ExerciseDate(Date);

impl ExerciseDate {
    /// Parses an untrusted string `s` as a `YYYY-MM-DD` calendar date.
    pub(crate) fn parse<S: AsRef<str>>(s: S) -> ModelResult<Self> {
        match Date::parse(s.as_ref(), ISO_FORMAT) {
            Ok(date) => Ok(Self(date)),
            Err(_) => Err(ModelError(format!("Invalid date '{}'", s.as_ref()))),
        }
    }

    /// Renders the date in the `YYYY-MM-DD` format used on the wire and in the database.
    pub(crate) fn to_iso8601(self) -> String {
        self.0.format(ISO_FORMAT).expect("Formatting a valid date cannot fail")
    }

    /// Renders the date in the human-readable format used in responses.
    pub(crate) fn to_human(self) -> String {
        self.0.format(HUMAN_FORMAT).expect("Formatting a valid date cannot fail")
    }
}

impl From<Date> for ExerciseDate {
    fn from(date: Date) -> Self {
        Self(date)
    }
}
