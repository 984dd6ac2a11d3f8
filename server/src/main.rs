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

//! Entry point to the service.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use trainlog_core::db::{sqlite, Db};
use trainlog_core::env::{get_optional_var, get_required_var};
use trainlog_server::db::init_schema;
use trainlog_server::serve;

#[tokio::main]
async fn main() {
    env_logger::init();

    let port: u16 = get_optional_var("TRAINLOG", "PORT")
        .expect("Invalid port in environment")
        .unwrap_or(3000);
    let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, port));

    let conn_str: String = get_required_var("TRAINLOG", "DB").unwrap();
    let db: Arc<dyn Db + Send + Sync> = Arc::from(sqlite::connect(&conn_str).await.unwrap());
    init_schema(&mut db.ex().await.unwrap()).await.unwrap();

    serve(addr, db).await.unwrap()
}
