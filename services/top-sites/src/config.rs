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

use crate::constants::*;
use ats_core::{Context, Error, Result};
use log::debug;
use std::time::Duration;

/// Config for the top sites service.
#[derive(Clone, Debug)]
pub struct Config {
    /// `service_host` is the host requests are sent to.
    ///
    /// - env value: `ATS_SERVICE_HOST`
    /// - default to: [`ATS_SERVICE_HOST`]
    pub service_host: String,
    /// `service_endpoint` is the host covered by the signature.
    ///
    /// - env value: `ATS_SERVICE_ENDPOINT`
    /// - default to: [`ATS_SERVICE_ENDPOINT`]
    pub service_endpoint: String,
    /// `uri` is the path of the api.
    ///
    /// - default to: [`ATS_URI`]
    pub uri: String,
    /// `region` is the region of the signing scope.
    ///
    /// - env value: `ATS_REGION`
    /// - default to: [`ATS_SERVICE_REGION`]
    pub region: String,
    /// `service_name` is the service of the signing scope.
    ///
    /// - default to: [`ATS_SERVICE_NAME`]
    pub service_name: String,
    /// `timeout` bounds the whole request, from connecting to reading the body.
    ///
    /// - env value: `ATS_TIMEOUT` in whole seconds
    /// - default to: 10s
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_host: ATS_SERVICE_HOST.to_string(),
            service_endpoint: ATS_SERVICE_ENDPOINT.to_string(),
            uri: ATS_URI.to_string(),
            region: ATS_SERVICE_REGION.to_string(),
            service_name: ATS_SERVICE_NAME.to_string(),
            timeout: ATS_DEFAULT_TIMEOUT,
        }
    }
}

impl Config {
    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Result<Self> {
        if let Some(v) = ctx.env_var(ATS_SERVICE_HOST_ENV) {
            self.service_host = v;
        }
        if let Some(v) = ctx.env_var(ATS_SERVICE_ENDPOINT_ENV) {
            self.service_endpoint = v;
        }
        if let Some(v) = ctx.env_var(ATS_REGION_ENV) {
            self.region = v;
        }
        if let Some(v) = ctx.env_var(ATS_TIMEOUT_ENV) {
            let secs: u64 = v.trim().parse().map_err(|e| {
                Error::config_invalid(format!(
                    "{ATS_TIMEOUT_ENV} must be whole seconds, got {v:?}"
                ))
                .with_source(e)
            })?;
            self.timeout = Duration::from_secs(secs);
        }

        debug!("loaded config: {self:?}");
        Ok(self)
    }

    /// The url requests are sent to, without query.
    pub fn api_url(&self) -> String {
        format!("https://{}{}", self.service_host, self.uri)
    }
}
