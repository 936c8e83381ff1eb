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

use crate::constants::{ATS_ACTION, ATS_RESPONSE_GROUP};

/// TopSitesQuery holds the caller supplied parameters of a `TopSites` call.
///
/// Values are opaque: they are neither validated nor percent-encoded, so
/// whatever is passed in is exactly what gets signed and sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopSitesQuery {
    /// Country code, e.g. `US`.
    pub country: String,
    /// 1-based index of the first site.
    pub start: String,
    /// Number of sites to return.
    pub count: String,
}

impl TopSitesQuery {
    /// Create a new query.
    pub fn new(country: &str, start: &str, count: &str) -> Self {
        Self {
            country: country.to_string(),
            start: start.to_string(),
            count: count.to_string(),
        }
    }

    /// Build the query string.
    ///
    /// Parameters are emitted in the sorted order SigV4 expects for the
    /// canonical query: `Action`, `Count`, `CountryCode`, `ResponseGroup`,
    /// `Start`. The same string is used for the url and for signing.
    pub fn to_query_string(&self) -> String {
        format!(
            "Action={ATS_ACTION}&Count={}&CountryCode={}&ResponseGroup={ATS_RESPONSE_GROUP}&Start={}",
            self.count, self.country, self.start
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_to_query_string() {
        let query = TopSitesQuery::new("US", "1", "10");

        assert_eq!(
            query.to_query_string(),
            "Action=TopSites&Count=10&CountryCode=US&ResponseGroup=Country&Start=1"
        );
    }

    #[test]
    fn test_to_query_string_keeps_values_verbatim() {
        let query = TopSitesQuery::new("", "a b", "1&x=2");

        assert_eq!(
            query.to_query_string(),
            "Action=TopSites&Count=1&x=2&CountryCode=&ResponseGroup=Country&Start=a b"
        );
    }

    #[test]
    fn test_query_keys_are_sorted() {
        let s = TopSitesQuery::new("US", "1", "10").to_query_string();
        let keys = s
            .split('&')
            .map(|kv| kv.split('=').next().unwrap())
            .collect::<Vec<_>>();

        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
    }
}
