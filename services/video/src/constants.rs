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

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Env values used by the panda client.
pub const PANDA_CLOUD_ID: &str = "PANDA_CLOUD_ID";
pub const PANDA_ACCESS_KEY: &str = "PANDA_ACCESS_KEY";
pub const PANDA_SECRET_KEY: &str = "PANDA_SECRET_KEY";
pub const PANDA_API_HOST: &str = "PANDA_API_HOST";
pub const PANDA_API_PORT: &str = "PANDA_API_PORT";
pub const PANDA_API_VERSION: &str = "PANDA_API_VERSION";

pub const DEFAULT_API_PORT: u16 = 80;
pub const DEFAULT_API_VERSION: u32 = 2;

// Parameter names with special handling.
pub const PARAM_ACCESS_KEY: &str = "access_key";
pub const PARAM_CLOUD_ID: &str = "cloud_id";
pub const PARAM_FILE: &str = "file";
pub const PARAM_SIGNATURE: &str = "signature";
pub const PARAM_TIMESTAMP: &str = "timestamp";

pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
pub const OCTET_STREAM: &str = "application/octet-stream";

/// AsciiSet for panda form encoding.
///
/// - Encode every byte except ASCII alphanumerics and `-`, `_`, `.`, `!`, `*`, `(`, `)`.
/// - Space is kept here and turned into `+` by the encoder.
pub static PANDA_FORM_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'*')
    .remove(b'(')
    .remove(b')')
    .remove(b' ');
