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

use std::time::Duration;

// Endpoints of the Alexa Top Sites service.
pub const ATS_SERVICE_HOST: &str = "ats.amazonaws.com";
pub const ATS_SERVICE_ENDPOINT: &str = "ats.us-west-1.amazonaws.com";
pub const ATS_URI: &str = "/api";

// Signing scope of the Alexa Top Sites service.
pub const ATS_SERVICE_NAME: &str = "AlexaTopSites";
pub const ATS_SERVICE_REGION: &str = "us-west-1";

// Fixed query values of the TopSites action.
pub const ATS_ACTION: &str = "TopSites";
pub const ATS_RESPONSE_GROUP: &str = "Country";

pub const ATS_DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// Headers used in signing.
pub const X_AMZ_DATE: &str = "x-amz-date";
pub const SIGNED_HEADERS: &str = "host;x-amz-date";

pub const ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// SHA256 of the empty string, the payload hash of every request we sign.
pub const EMPTY_STRING_SHA256: &str =
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

// Env values used to override the config.
pub const ATS_SERVICE_HOST_ENV: &str = "ATS_SERVICE_HOST";
pub const ATS_SERVICE_ENDPOINT_ENV: &str = "ATS_SERVICE_ENDPOINT";
pub const ATS_REGION_ENV: &str = "ATS_REGION";
pub const ATS_TIMEOUT_ENV: &str = "ATS_TIMEOUT";
