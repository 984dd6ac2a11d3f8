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

//! Operations on the collection of users.

use crate::db;
use crate::driver::Driver;
use crate::model::{User, Username};
use trainlog_core::driver::DriverResult;

impl Driver {
    /// Registers a new user named `username` and returns the created record.
    pub(crate) async fn register_user(self, username: Username) -> DriverResult<User> {
        let user = db::create_user(&mut self.db.ex().await?, username).await?;
        Ok(user)
    }

    /// Gets all registered users.
    pub(crate) async fn list_users(self) -> DriverResult<Vec<User>> {
        let users = db::list_users(&mut self.db.ex().await?).await?;
        Ok(users)
    }
}
