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

use std::fmt::Debug;

use log::debug;
use panda_core::hash::base64_hmac_sha256;
use panda_core::time::{now, DateTime};
use panda_core::Result;

use crate::constants::PARAM_FILE;
use crate::query::encode_to_query;
use crate::Parameters;

/// SignRequest provides the two primitives panda signing depends on: the
/// signing time and the keyed hash.
///
/// [`ServiceProxy`](crate::ServiceProxy) takes it as a trait object so the
/// time or the hash can be pinned in tests.
pub trait SignRequest: Debug + Send + Sync + 'static {
    /// Time used for the `timestamp` parameter of the next request.
    fn time(&self) -> DateTime;

    /// Sign the string with given secret key.
    fn sign(&self, string_to_sign: &str, secret_key: &str) -> Result<String>;
}

/// RequestSigner that implements panda HMAC-SHA256 signing.
#[derive(Debug, Default)]
pub struct RequestSigner {
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a signer that uses current time.
    pub fn new() -> Self {
        Self::default()
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
}

impl SignRequest for RequestSigner {
    fn time(&self) -> DateTime {
        self.time.unwrap_or_else(now)
    }

    fn sign(&self, string_to_sign: &str, secret_key: &str) -> Result<String> {
        base64_hmac_sha256(secret_key.as_bytes(), string_to_sign.as_bytes())
    }
}

/// Construct string to sign
///
/// ## Format
///
/// ```text
/// VERB + "\n" +
/// lowercase(host) + "\n" +
/// path + "\n" +
/// EncodedQuery
/// ```
///
/// `EncodedQuery` holds every parameter except `file`, sorted by key.
/// `path` is used as given.
pub fn string_to_sign(verb: &str, path: &str, host: &str, params: &Parameters) -> String {
    let mut sorted: Vec<(&str, &str)> = params.iter().filter(|(k, _)| *k != PARAM_FILE).collect();
    sorted.sort_unstable_by(|a, b| a.0.cmp(b.0));

    let s = format!(
        "{}\n{}\n{}\n{}",
        verb.to_uppercase(),
        host.to_lowercase(),
        path,
        encode_to_query(sorted)
    );

    debug!("string to sign: {}", &s);
    s
}
