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

//! [`HttpSend`] implementation backed by [`reqwest`].

use async_trait::async_trait;
use ats_core::{Error, HttpSend, Result};
use bytes::Bytes;
use http_body_util::BodyExt;
use log::debug;
use reqwest::{Client, Request};

/// ReqwestHttpSend sends requests through a [`reqwest::Client`].
///
/// Timeouts, TLS and proxies are whatever the wrapped client is built with.
#[derive(Debug, Default)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let req = Request::try_from(req)
            .map_err(|e| Error::request_invalid("failed to convert request").with_source(e))?;
        debug!("sending request: {} {}", req.method(), req.url());

        let resp: http::Response<_> = self
            .client
            .execute(req)
            .await
            .map_err(from_reqwest_error)?
            .into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(from_reqwest_error)?;
        debug!("received response: {} ({} bytes)", parts.status, bs.len());

        Ok(http::Response::from_parts(parts, bs))
    }
}

fn from_reqwest_error(err: reqwest::Error) -> Error {
    let message = if err.is_timeout() {
        "request timed out"
    } else if err.is_connect() {
        "failed to connect"
    } else if err.is_body() || err.is_decode() {
        "failed to read response body"
    } else {
        "failed to send request"
    };

    Error::unexpected(message).with_source(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ats_core::ErrorKind;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve a single connection, replying with `response` after `delay`.
    async fn serve_once(response: &'static str, delay: Duration) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = [0; 4096];
            let _ = stream.read(&mut buf).await;
            tokio::time::sleep(delay).await;
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        });

        format!("http://{addr}/api?Action=TopSites")
    }

    #[tokio::test]
    async fn test_http_send() -> anyhow::Result<()> {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\ncontent-length: 19\r\nconnection: close\r\n\r\n<TopSitesResponse/>",
            Duration::ZERO,
        )
        .await;

        let req = http::Request::get(url).body(Bytes::new())?;
        let resp = ReqwestHttpSend::default().http_send(req).await?;

        assert_eq!(resp.status(), http::StatusCode::OK);
        assert_eq!(resp.body().as_ref(), b"<TopSitesResponse/>");
        Ok(())
    }

    #[tokio::test]
    async fn test_http_send_timeout() -> anyhow::Result<()> {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\ncontent-length: 0\r\n\r\n",
            Duration::from_secs(5),
        )
        .await;

        let client = Client::builder()
            .timeout(Duration::from_millis(100))
            .build()?;
        let req = http::Request::get(url).body(Bytes::new())?;
        let err = ReqwestHttpSend::new(client)
            .http_send(req)
            .await
            .expect_err("request must time out");

        assert_eq!(err.kind(), ErrorKind::Unexpected);
        assert_eq!(err.to_string(), "request timed out");
        Ok(())
    }
}
