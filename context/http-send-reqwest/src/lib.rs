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

//! Reqwest-based HTTP transport for panda.
//!
//! `ReqwestHttpSend` implements [`HttpSend`] on top of a `reqwest::Client`.
//! It performs exactly one exchange per call: no retry, no redirect policy
//! of its own, no status code interpretation.
//!
//! ## Example
//!
//! ```no_run
//! use panda_core::Context;
//! use panda_http_send_reqwest::{ProxyConfig, ReqwestHttpSend};
//!
//! # fn example() -> panda_core::Result<()> {
//! let http = ReqwestHttpSend::with_proxy(ProxyConfig {
//!     host: "proxy.internal".to_string(),
//!     port: 3128,
//!     username: "user".to_string(),
//!     password: "pass".to_string(),
//! })?;
//! let ctx = Context::new().with_http_send(http);
//! # Ok(())
//! # }
//! ```

use std::fmt::{Debug, Formatter};

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::BodyExt;
use log::debug;
use panda_core::utils::Redact;
use panda_core::{Error, HttpSend, Result};
use reqwest::{Client, Proxy, Request};

/// Network proxy and the credentials used to authenticate against it.
#[derive(Clone)]
pub struct ProxyConfig {
    /// Proxy host name.
    pub host: String,
    /// Proxy port.
    pub port: u16,
    /// User name for proxy basic auth.
    pub username: String,
    /// Password for proxy basic auth.
    pub password: String,
}

impl ProxyConfig {
    fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl Debug for ProxyConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProxyConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &Redact::secret(&self.password))
            .finish()
    }
}

/// HttpSend implementation backed by `reqwest`.
#[derive(Debug, Default, Clone)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a new ReqwestHttpSend that routes every request through the
    /// given proxy.
    pub fn with_proxy(proxy: ProxyConfig) -> Result<Self> {
        debug!("building http client with proxy: {proxy:?}");

        let p = Proxy::all(proxy.url())
            .map_err(|e| Error::config_invalid("invalid proxy address").with_source(e))?
            .basic_auth(&proxy.username, &proxy.password);
        let client = Client::builder()
            .proxy(p)
            .build()
            .map_err(|e| Error::config_invalid("failed to build http client").with_source(e))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let req = Request::try_from(req)
            .map_err(|e| Error::request_invalid("request is not sendable").with_source(e))?;
        let resp: http::Response<_> = self
            .client
            .execute(req)
            .await
            .map_err(|e| Error::transport(e.to_string()).with_source(e))?
            .into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| Error::transport(e.to_string()).with_source(e))?;
        Ok(http::Response::from_parts(parts, bs))
    }
}
