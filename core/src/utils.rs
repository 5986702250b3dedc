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

//! Utility functions and types.

use std::fmt::Debug;

/// Redacts a secret so it can be printed in `Debug` output and logs.
///
/// - Empty input is printed as `EMPTY`.
/// - Input shorter than 12 characters is printed as `***`.
/// - Otherwise only the first three and the last three characters are kept.
///
/// Cloud ids and access keys go through this before they reach any
/// formatter. Secret keys use [`Redact::secret`] and never show a character.
pub struct Redact<'a> {
    value: &'a str,
    secret: bool,
}

impl<'a> Redact<'a> {
    /// Mask every character: non-empty input is always printed as `***`.
    pub fn secret(value: impl Into<Redact<'a>>) -> Self {
        Redact {
            secret: true,
            ..value.into()
        }
    }
}

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact {
            value,
            secret: false,
        }
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact::from(value.as_str())
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        Redact::from(value.as_deref().unwrap_or_default())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let length = self.value.chars().count();
        if length == 0 {
            f.write_str("EMPTY")
        } else if self.secret || length < 12 {
            f.write_str("***")
        } else {
            let head: String = self.value.chars().take(3).collect();
            let tail: String = self.value.chars().skip(length - 3).collect();
            f.write_str(&head)?;
            f.write_str("***")?;
            f.write_str(&tail)
        }
    }
}
