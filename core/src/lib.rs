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

//! Core abstractions for the Trainlog web service.
//!
//! The service adheres to the following layered architecture and structures its
//! code to have these modules:
//!
//! 1.  `model`: This is the base layer, providing high-level data types that
//!     represent concepts in the domain of the application.  There should be no
//!     logic in here other than input validation.  Extensive use of the newtype
//!     pattern is strongly encouraged.
//!
//! 1.  `db`: This is the persistence layer.  The service expresses its
//!     operations as free functions that act on a database `Executor`.
//!
//! 1.  `driver`: This is the business logic layer.  The service provides its own
//!     `Driver` type to encapsulate the injected components (database handle,
//!     clock) and to coordinate access to the database.
//!
//! 1.  `rest`: This is the HTTP layer, offering the REST APIs.  The service
//!     provides its own `axum::Router` and backs every API with a `Driver`.
//!
//! 1.  `main`: This is the app launcher.  Its sole purpose is to gather
//!     configuration data from environment variables and start the application.
//!
//! There are result and error types in every layer, such as `DbResult` and
//! `DbError`.  Errors transparently float to the top of the app using the `?`
//! operator and are translated to HTTP status codes once, when they leave the
//! REST layer.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

pub mod clocks;
pub mod db;
pub mod driver;
pub mod env;
pub mod model;
pub mod rest;
