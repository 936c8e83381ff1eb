// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Alexa Top Sites client with AWS SigV4 signing.
//!
//! ```no_run
//! use ats_core::{Context, OsEnv};
//! use ats_top_sites::{Config, Credential, TopSitesClient, TopSitesQuery};
//!
//! # async fn example() -> ats_core::Result<()> {
//! let ctx = Context::new().with_env(OsEnv);
//! let config = Config::default().from_env(&ctx)?;
//! let client = TopSitesClient::new(
//!     ctx,
//!     config.into(),
//!     Credential::new("access_key_id", "secret_access_key"),
//! );
//!
//! let body = client.top_sites(&TopSitesQuery::new("US", "1", "10")).await?;
//! println!("{body}");
//! # Ok(())
//! # }
//! ```

mod constants;
pub use constants::{
    ATS_SERVICE_ENDPOINT, ATS_SERVICE_HOST, ATS_SERVICE_NAME, ATS_SERVICE_REGION, ATS_URI,
    EMPTY_STRING_SHA256,
};

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod query;
pub use query::TopSitesQuery;

mod sign_request;
pub use sign_request::{
    canonical_request_string, generate_signing_key, RequestSigner, SignedRequest,
};

mod client;
pub use client::TopSitesClient;
