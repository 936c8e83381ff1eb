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

use crate::constants::X_AMZ_DATE;
use crate::{Config, Credential, RequestSigner, TopSitesQuery};
use ats_core::{Context, Result};
use bytes::Bytes;
use http::header;
use http::HeaderValue;
use log::{debug, warn};
use std::sync::Arc;

/// TopSitesClient signs and sends `TopSites` requests.
#[derive(Debug, Clone)]
pub struct TopSitesClient {
    ctx: Context,
    config: Arc<Config>,
    signer: RequestSigner,
    credential: Credential,
}

impl TopSitesClient {
    /// Create a new client.
    pub fn new(ctx: Context, config: Arc<Config>, credential: Credential) -> Self {
        let signer = RequestSigner::from(config.as_ref());

        Self {
            ctx,
            config,
            signer,
            credential,
        }
    }

    /// Replace the signer built from config.
    #[cfg(test)]
    fn with_signer(mut self, signer: RequestSigner) -> Self {
        self.signer = signer;
        self
    }

    /// Build the signed request without sending it.
    ///
    /// The query string in the url is the exact one covered by the signature.
    pub fn build_request(&self, query: &TopSitesQuery) -> Result<http::Request<Bytes>> {
        let signed = self.signer.sign(&self.credential, query);
        debug!("signed request: {signed:?}");

        let mut authorization = HeaderValue::from_str(&signed.authorization)?;
        authorization.set_sensitive(true);

        let req = http::Request::get(format!("{}?{}", self.config.api_url(), signed.query))
            .header(header::ACCEPT, "application/xml")
            .header(header::CONTENT_TYPE, "application/xml")
            .header(X_AMZ_DATE, HeaderValue::from_str(&signed.date_tz)?)
            .header(header::AUTHORIZATION, authorization)
            .body(Bytes::new())?;

        Ok(req)
    }

    /// Fetch the top sites and return the response body as is.
    ///
    /// The status code is not interpreted: an api level rejection is still
    /// returned as the body.
    pub async fn top_sites(&self, query: &TopSitesQuery) -> Result<String> {
        let req = self.build_request(query)?;
        let resp = self.ctx.http_send_as_string(req).await?;

        if !resp.status().is_success() {
            warn!("top sites responded with status {}", resp.status());
        }

        Ok(resp.into_body())
    }
}
