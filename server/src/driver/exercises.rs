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

//! Operations on the exercise logs of a user.

use crate::db;
use crate::driver::Driver;
use crate::model::{Exercise, ExerciseDate, LogFilter, NewExercise, User, UserId};
use trainlog_core::driver::DriverResult;

impl Driver {
    /// Appends `new` to the log of the user `user_id`, which must exist.  When the request
    /// does not carry a date, the entry is dated with the clock's current UTC date.
    ///
    /// The user lookup and the insertion happen in the same transaction.  Returns the owning
    /// user and the entry as persisted.
    pub(crate) async fn log_exercise(
        self,
        user_id: &UserId,
        new: NewExercise,
    ) -> DriverResult<(User, Exercise)> {
        let date = match new.date() {
            Some(date) => *date,
            None => ExerciseDate::from(self.clock.now_utc().date()),
        };
        let exercise = Exercise::new(new.description().clone(), *new.duration(), date);

        let mut tx = self.db.begin().await?;
        let user = db::get_user(tx.ex(), user_id).await?;
        db::create_exercise(tx.ex(), user_id, &exercise).await?;
        tx.commit().await?;

        Ok((user, exercise))
    }

    /// Gets the log of the user `user_id`, which must exist, restricted by `filter`.
    /// Returns the owning user and the matching entries sorted by ascending date.
    pub(crate) async fn get_log(
        self,
        user_id: &UserId,
        filter: LogFilter,
    ) -> DriverResult<(User, Vec<Exercise>)> {
        let mut ex = self.db.ex().await?;
        let user = db::get_user(&mut ex, user_id).await?;
        let exercises = db::list_exercises(&mut ex, user_id, &filter).await?;
        Ok((user, exercises))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::testutils::*;
    use crate::model::{Description, ExerciseDuration, LogLimit};
    use time::macros::datetime;
    use trainlog_core::driver::DriverError;

    /// Convenience constructor for a `NewExercise` from raw values.
    fn new_exercise(description: &str, minutes: u32, date: Option<&str>) -> NewExercise {
        NewExercise::new(
            Description::new(description).unwrap(),
            ExerciseDuration::from_minutes(minutes).unwrap(),
            date.map(|date| ExerciseDate::parse(date).unwrap()),
        )
    }

    #[tokio::test]
    async fn test_log_exercise_with_explicit_date() {
        let context = TestContext::setup().await;

        let user = context.create_user("alice").await;
        let (owner, exercise) = context
            .driver()
            .log_exercise(user.id(), new_exercise("run", 30, Some("2024-01-05")))
            .await
            .unwrap();

        assert_eq!(user, owner);
        assert_eq!("run", exercise.description().as_str());
        assert_eq!(30, exercise.duration().as_i64());
        assert_eq!(ExerciseDate::parse("2024-01-05").unwrap(), *exercise.date());

        let stored =
            db::list_exercises(&mut context.ex().await, user.id(), &LogFilter::default())
                .await
                .unwrap();
        assert_eq!(vec![exercise], stored);
    }

    #[tokio::test]
    async fn test_log_exercise_defaults_to_current_date() {
        let context = TestContext::setup().await;
        context.clock().set(datetime!(2024-06-01 23:59:00 UTC));

        let user = context.create_user("alice").await;
        let (_owner, exercise) =
            context.driver().log_exercise(user.id(), new_exercise("run", 30, None)).await.unwrap();

        assert_eq!(ExerciseDate::parse("2024-06-01").unwrap(), *exercise.date());
    }

    #[tokio::test]
    async fn test_log_exercise_user_not_found() {
        let context = TestContext::setup().await;

        assert_eq!(
            DriverError::NotFound("Entity not found".to_owned()),
            context
                .driver()
                .log_exercise(&UserId::random(), new_exercise("run", 30, None))
                .await
                .unwrap_err()
        );
    }

    #[tokio::test]
    async fn test_get_log_empty() {
        let context = TestContext::setup().await;

        let user = context.create_user("alice").await;
        let (owner, exercises) =
            context.driver().get_log(user.id(), LogFilter::default()).await.unwrap();
        assert_eq!(user, owner);
        assert!(exercises.is_empty());
    }

    #[tokio::test]
    async fn test_get_log_applies_filter() {
        let context = TestContext::setup().await;

        let user = context.create_user("alice").await;
        for (description, date) in
            [("one", "2024-01-01"), ("two", "2024-02-01"), ("three", "2024-03-01")]
        {
            context
                .driver()
                .log_exercise(user.id(), new_exercise(description, 10, Some(date)))
                .await
                .unwrap();
        }

        let filter = LogFilter::new(
            Some(ExerciseDate::parse("2024-02-01").unwrap()),
            None,
            Some(LogLimit::new(1).unwrap()),
        );
        let (_owner, exercises) = context.driver().get_log(user.id(), filter).await.unwrap();
        assert_eq!(1, exercises.len());
        assert_eq!("two", exercises[0].description().as_str());
    }

    #[tokio::test]
    async fn test_get_log_user_not_found() {
        let context = TestContext::setup().await;

        context.create_user("alice").await;
        assert_eq!(
            DriverError::NotFound("Entity not found".to_owned()),
            context.driver().get_log(&UserId::random(), LogFilter::default()).await.unwrap_err()
        );
    }
}
