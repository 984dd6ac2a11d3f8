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

//! Test utilities for the REST API.

use crate::db;
use crate::driver::Driver;
use crate::model::{
    Description, Exercise, ExerciseDate, ExerciseDuration, LogFilter, User, UserId, Username,
};
use crate::rest::app;
use axum::Router;
use std::sync::Arc;
use time::macros::datetime;
use trainlog_core::clocks::testutils::SettableClock;
use trainlog_core::db::Db;

pub(crate) struct TestContext {
    db: Arc<dyn Db + Send + Sync>,
    clock: Arc<SettableClock>,
    app: Router,
}

impl TestContext {
    pub(crate) async fn setup() -> Self {
        let db: Arc<dyn Db + Send + Sync> =
            Arc::from(trainlog_core::db::sqlite::testutils::setup().await);
        db::init_schema(&mut db.ex().await.unwrap()).await.unwrap();
        let clock = Arc::new(SettableClock::new(datetime!(2024-06-01 08:00:00 UTC)));
        let driver = Driver::new(db.clone(), clock.clone());
        let app = app(driver);
        Self { db, clock, app }
    }

    pub(crate) fn app(&self) -> Router {
        self.app.clone()
    }

    pub(crate) fn into_app(self) -> Router {
        self.app
    }

    pub(crate) fn clock(&self) -> &SettableClock {
        &self.clock
    }

    pub(crate) async fn create_user(&self, username: &str) -> User {
        db::create_user(&mut self.db.ex().await.unwrap(), Username::new(username).unwrap())
            .await
            .unwrap()
    }

    pub(crate) async fn get_user(&self, id: &UserId) -> User {
        db::get_user(&mut self.db.ex().await.unwrap(), id).await.unwrap()
    }

    pub(crate) async fn create_exercise(
        &self,
        user: &User,
        description: &str,
        minutes: u32,
        date: &str,
    ) {
        let exercise = Exercise::new(
            Description::new(description).unwrap(),
            ExerciseDuration::from_minutes(minutes).unwrap(),
            ExerciseDate::parse(date).unwrap(),
        );
        db::create_exercise(&mut self.db.ex().await.unwrap(), user.id(), &exercise)
            .await
            .unwrap();
    }

    pub(crate) async fn get_exercises(&self, id: &UserId) -> Vec<Exercise> {
        db::list_exercises(&mut self.db.ex().await.unwrap(), id, &LogFilter::default())
            .await
            .unwrap()
    }
}
