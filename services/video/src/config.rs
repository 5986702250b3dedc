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

use std::fmt::{Debug, Formatter};
use std::str::FromStr;

use panda_core::{utils::Redact, Context, Error, Result};

use crate::constants::*;
use crate::{Credential, Endpoint};

/// Config carries all the configuration for a panda client.
#[derive(Clone, Default)]
pub struct Config {
    /// `cloud_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `PANDA_CLOUD_ID`
    pub cloud_id: Option<String>,
    /// `access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `PANDA_ACCESS_KEY`
    pub access_key: Option<String>,
    /// `secret_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `PANDA_SECRET_KEY`
    pub secret_key: Option<String>,
    /// `api_host` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `PANDA_API_HOST`
    pub api_host: Option<String>,
    /// `api_port` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `PANDA_API_PORT`
    /// - default to `80`
    pub api_port: Option<u16>,
    /// `api_version` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `PANDA_API_VERSION`
    /// - default to `2`
    pub api_version: Option<u32>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set cloud_id
    pub fn with_cloud_id(mut self, cloud_id: impl Into<String>) -> Self {
        self.cloud_id = Some(cloud_id.into());
        self
    }

    /// Set access_key
    pub fn with_access_key(mut self, access_key: impl Into<String>) -> Self {
        self.access_key = Some(access_key.into());
        self
    }

    /// Set secret_key
    pub fn with_secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key = Some(secret_key.into());
        self
    }

    /// Set api_host
    pub fn with_api_host(mut self, api_host: impl Into<String>) -> Self {
        self.api_host = Some(api_host.into());
        self
    }

    /// Set api_port
    pub fn with_api_port(mut self, api_port: u16) -> Self {
        self.api_port = Some(api_port);
        self
    }

    /// Set api_version
    pub fn with_api_version(mut self, api_version: u32) -> Self {
        self.api_version = Some(api_version);
        self
    }

    /// Load config from env.
    ///
    /// Fields that are already set win over env values.
    pub fn from_env(mut self, ctx: &Context) -> Result<Self> {
        if let Some(v) = ctx.env_var(PANDA_CLOUD_ID) {
            self.cloud_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(PANDA_ACCESS_KEY) {
            self.access_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(PANDA_SECRET_KEY) {
            self.secret_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(PANDA_API_HOST) {
            self.api_host.get_or_insert(v);
        }
        if self.api_port.is_none() {
            self.api_port = parse_env(ctx, PANDA_API_PORT)?;
        }
        if self.api_version.is_none() {
            self.api_version = parse_env(ctx, PANDA_API_VERSION)?;
        }

        Ok(self)
    }

    /// Build the credential, failing if any part is missing.
    pub fn credential(&self) -> Result<Credential> {
        Ok(Credential::new(
            required(&self.cloud_id, "cloud_id")?,
            required(&self.access_key, "access_key")?,
            required(&self.secret_key, "secret_key")?,
        ))
    }

    /// Build the endpoint, failing if the host is missing.
    pub fn endpoint(&self) -> Result<Endpoint> {
        Ok(Endpoint::new(required(&self.api_host, "api_host")?)
            .with_port(self.api_port.unwrap_or(DEFAULT_API_PORT))
            .with_api_version(self.api_version.unwrap_or(DEFAULT_API_VERSION)))
    }
}

fn required(value: &Option<String>, name: &str) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v.clone()),
        _ => Err(Error::config_invalid(format!("{name} is required"))),
    }
}

fn parse_env<T: FromStr>(ctx: &Context, key: &str) -> Result<Option<T>>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    ctx.env_var(key)
        .map(|v| {
            v.trim().parse::<T>().map_err(|e| {
                Error::config_invalid(format!("env {key} is not a valid number: {v}")).with_source(e)
            })
        })
        .transpose()
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("cloud_id", &Redact::from(&self.cloud_id))
            .field("access_key", &Redact::from(&self.access_key))
            .field("secret_key", &Redact::secret(&self.secret_key))
            .field("api_host", &self.api_host)
            .field("api_port", &self.api_port)
            .field("api_version", &self.api_version)
            .finish()
    }
}
