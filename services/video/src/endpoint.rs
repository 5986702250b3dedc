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

use crate::constants::{DEFAULT_API_PORT, DEFAULT_API_VERSION};

/// Where the panda api lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Api host, also the host used in the string to sign.
    pub host: String,
    /// Api port, `80` is not rendered.
    pub port: u16,
    /// Api version, rendered as `/v{N}`.
    pub api_version: u32,
}

impl Endpoint {
    /// Create an endpoint on the default port and version.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_API_PORT,
            api_version: DEFAULT_API_VERSION,
        }
    }

    /// Set port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set api version.
    pub fn with_api_version(mut self, api_version: u32) -> Self {
        self.api_version = api_version;
        self
    }

    /// `host` or `host:port` when port isn't 80.
    pub fn host_and_port(&self) -> String {
        if self.port == DEFAULT_API_PORT {
            self.host.clone()
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    /// `/v{api_version}`
    pub fn base_path(&self) -> String {
        format!("/v{}", self.api_version)
    }

    /// Full api url: `http://{host[:port]}/v{api_version}`.
    pub fn api_url(&self) -> String {
        format!("http://{}{}", self.host_and_port(), self.base_path())
    }
}
