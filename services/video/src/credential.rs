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

use panda_core::utils::Redact;

/// Credential for panda.
#[derive(Clone)]
pub struct Credential {
    /// Id of the cloud requests are issued against.
    pub cloud_id: String,
    /// Access key sent with every request.
    pub access_key: String,
    /// Secret key used to sign requests. Never sent.
    pub secret_key: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(
        cloud_id: impl Into<String>,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self {
            cloud_id: cloud_id.into(),
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("cloud_id", &Redact::from(&self.cloud_id))
            .field("access_key", &Redact::from(&self.access_key))
            .field("secret_key", &Redact::secret(&self.secret_key))
            .finish()
    }
}
