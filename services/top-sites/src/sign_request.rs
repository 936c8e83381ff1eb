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

use crate::constants::{
    ALGORITHM, ATS_SERVICE_ENDPOINT, ATS_URI, SIGNED_HEADERS, X_AMZ_DATE,
};
use crate::{Config, Credential, TopSitesQuery};
use ats_core::hash::{hex_hmac_sha256, hex_sha256, hmac_sha256};
use ats_core::time::{format_date, format_iso8601, now, DateTime};
use ats_core::utils::Redact;
use log::{debug, warn};
use std::fmt::{Debug, Formatter};

/// SignedRequest carries the values a http client needs to send an
/// authenticated `TopSites` request.
#[derive(Clone, PartialEq, Eq)]
pub struct SignedRequest {
    /// Value of the `X-Amz-Date` header: `20150830T123600Z`.
    pub date_tz: String,
    /// Query string, used verbatim in the request url.
    pub query: String,
    /// Value of the `Authorization` header.
    pub authorization: String,
}

impl Debug for SignedRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignedRequest")
            .field("date_tz", &self.date_tz)
            .field("query", &self.query)
            .field("authorization", &Redact::from(&self.authorization))
            .finish()
    }
}

/// RequestSigner that implement AWS SigV4 for `GET` requests without body.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
#[derive(Debug, Clone)]
pub struct RequestSigner {
    service: String,
    region: String,
    endpoint: String,
    uri: String,

    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new signer for the given service and region.
    ///
    /// Endpoint and uri default to the Alexa Top Sites ones.
    pub fn new(service: &str, region: &str) -> Self {
        Self {
            service: service.into(),
            region: region.into(),
            endpoint: ATS_SERVICE_ENDPOINT.into(),
            uri: ATS_URI.into(),

            time: None,
        }
    }

    /// Specify the host covered by the signature.
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Specify the uri path covered by the signature.
    pub fn with_uri(mut self, uri: &str) -> Self {
        self.uri = uri.into();
        self
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Sign a `TopSites` request.
    ///
    /// The current time is captured once, both the `X-Amz-Date` value and the
    /// signing scope are derived from it.
    ///
    /// Signing never fails. Keys are used as given, the service rejects bad
    /// ones in the response body.
    pub fn sign(&self, cred: &Credential, query: &TopSitesQuery) -> SignedRequest {
        if !cred.is_valid() {
            warn!("signing with an empty access key id or secret access key");
        }

        let now = self.time.unwrap_or_else(now);
        let date = format_date(now);
        let date_tz = format_iso8601(now);
        let query = query.to_query_string();

        // build canonical request and string to sign.
        let creq = canonical_request_string(&self.uri, &query, &self.endpoint, &date_tz);
        debug!("calculated canonical request: {creq}");
        let encoded_req = hex_sha256(creq.as_bytes());

        // Scope: "20150830/us-west-1/AlexaTopSites/aws4_request"
        let scope = format!("{date}/{}/{}/aws4_request", self.region, self.service);
        debug!("calculated scope: {scope}");

        // StringToSign:
        //
        // AWS4-HMAC-SHA256
        // 20150830T123600Z
        // 20150830/us-west-1/AlexaTopSites/aws4_request
        // <hashed_canonical_request>
        let string_to_sign = format!("{ALGORITHM}\n{date_tz}\n{scope}\n{encoded_req}");
        debug!("calculated string to sign: {string_to_sign}");

        let signing_key =
            generate_signing_key(&cred.secret_access_key, &date, &self.region, &self.service);
        let signature = hex_hmac_sha256(&signing_key, string_to_sign.as_bytes());

        let authorization = format!(
            "{ALGORITHM} Credential={}/{scope}, SignedHeaders={SIGNED_HEADERS}, Signature={signature}",
            cred.access_key_id
        );

        SignedRequest {
            date_tz,
            query,
            authorization,
        }
    }
}

impl From<&Config> for RequestSigner {
    fn from(cfg: &Config) -> Self {
        RequestSigner::new(&cfg.service_name, &cfg.region)
            .with_endpoint(&cfg.service_endpoint)
            .with_uri(&cfg.uri)
    }
}

/// Build the canonical request of a `GET` without body.
///
/// ```text
/// GET
/// /api
/// Action=TopSites&Count=10&CountryCode=US&ResponseGroup=Country&Start=1
/// host:ats.us-west-1.amazonaws.com
/// x-amz-date:20150830T123600Z
///
/// host;x-amz-date
/// e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855
/// ```
pub fn canonical_request_string(uri: &str, query: &str, endpoint: &str, date_tz: &str) -> String {
    // 256 is specially chosen to avoid reallocation for most requests.
    let mut f = String::with_capacity(256);

    f.push_str("GET\n");
    f.push_str(uri);
    f.push('\n');
    f.push_str(query);
    f.push('\n');
    // Canonical headers, sorted by name and each terminated by a newline.
    f.push_str("host:");
    f.push_str(endpoint);
    f.push('\n');
    f.push_str(X_AMZ_DATE);
    f.push(':');
    f.push_str(date_tz);
    f.push('\n');
    f.push('\n');
    f.push_str(SIGNED_HEADERS);
    f.push('\n');
    // No body is ever sent, the payload is the empty string.
    f.push_str(&hex_sha256(b""));

    f
}

/// Derive the SigV4 signing key scoped to date, region and service.
///
/// The returned key is raw bytes, it's used as the HMAC key of the final
/// signature directly.
pub fn generate_signing_key(secret: &str, date: &str, region: &str, service: &str) -> Vec<u8> {
    // Sign secret
    let secret = format!("AWS4{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), date.as_bytes());
    // Sign region
    let sign_region = hmac_sha256(sign_date.as_slice(), region.as_bytes());
    // Sign service
    let sign_service = hmac_sha256(sign_region.as_slice(), service.as_bytes());
    // Sign request
    hmac_sha256(sign_service.as_slice(), "aws4_request".as_bytes())
}
