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

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use http::StatusCode;
use panda_core::{Context, Error, HttpSend, Observe, Result};
use panda_video::{Credential, Endpoint, RequestSigner, ServiceProxy};

/// A request seen by [`MockHttpSend`].
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: http::Method,
    pub uri: String,
    pub content_type: Option<String>,
    pub body: Bytes,
}

/// HttpSend that records every request and answers with a canned response.
#[derive(Debug, Clone)]
pub struct MockHttpSend {
    status: StatusCode,
    body: Bytes,
    refuse: bool,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockHttpSend {
    pub fn new(status: StatusCode, body: &'static str) -> Self {
        Self {
            status,
            body: Bytes::from_static(body.as_bytes()),
            refuse: false,
            requests: Arc::default(),
        }
    }

    /// Fail every exchange like a refused connection.
    pub fn refused() -> Self {
        Self {
            refuse: true,
            ..Self::new(StatusCode::OK, "")
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpSend for MockHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        self.requests.lock().unwrap().push(Recorded {
            method: req.method().clone(),
            uri: req.uri().to_string(),
            content_type: req
                .headers()
                .get(http::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(|v| v.to_string()),
            body: req.body().clone(),
        });
        if self.refuse {
            return Err(Error::transport("connection refused"));
        }

        Ok(http::Response::builder()
            .status(self.status)
            .body(self.body.clone())?)
    }
}

/// Observer that keeps every notification it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordObserver {
    debugs: Arc<Mutex<Vec<(String, String)>>>,
    errors: Arc<Mutex<Vec<String>>>,
}

impl RecordObserver {
    pub fn debug_titles(&self) -> Vec<String> {
        self.debugs
            .lock()
            .unwrap()
            .iter()
            .map(|(t, _)| t.clone())
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl Observe for RecordObserver {
    fn on_debug(&self, title: &str, message: &str) {
        self.debugs
            .lock()
            .unwrap()
            .push((title.to_string(), message.to_string()));
    }

    fn on_transport_error(&self, err: &Error) {
        self.errors.lock().unwrap().push(err.to_string());
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Proxy against api.pandastream.com sending through the given mock.
pub fn proxy_with(http: MockHttpSend, observer: RecordObserver) -> ServiceProxy {
    init_logger();

    let ctx = Context::new()
        .with_http_send(http)
        .with_observer(observer);
    ServiceProxy::new(
        ctx,
        Credential::new("some_cloud_id", "some_access_key", "some_secret_key"),
        Endpoint::new("api.pandastream.com"),
    )
}

pub fn fixed_signer() -> RequestSigner {
    use chrono::TimeZone;

    RequestSigner::new().with_time(chrono::Utc.with_ymd_and_hms(2011, 1, 6, 16, 59, 44).unwrap())
}
