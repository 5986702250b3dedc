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

//! `multipart/form-data` body used to upload a file with the signed
//! parameters.
//!
//! ```text
//! \r\n--{boundary}\r\n
//! Content-Disposition: form-data; name="{key}"\r\n\r\n{value}
//! ...one block per field...
//! \r\n--{boundary}\r\n
//! Content-Disposition: form-data; name="file"; filename="{name}"\r\n
//! Content-Type: application/octet-stream\r\n\r\n{bytes}
//! \r\n--{boundary}--\r\n
//! ```

use bytes::{BufMut, Bytes, BytesMut};
use panda_core::time::{now, ticks, DateTime};

use crate::constants::OCTET_STREAM;

const BOUNDARY_PREFIX: &str = "---------------------------";

/// Boundary derived from the given time: 27 dashes and the hex tick count.
pub fn boundary_at(time: &DateTime) -> String {
    format!("{BOUNDARY_PREFIX}{:x}", ticks(time))
}

/// Builder of a `multipart/form-data` body.
#[derive(Debug)]
pub struct FormData {
    boundary: String,
    body: BytesMut,
}

impl Default for FormData {
    fn default() -> Self {
        Self::new()
    }
}

impl FormData {
    /// Create a form with a boundary taken from current time.
    pub fn new() -> Self {
        Self::with_boundary(boundary_at(&now()))
    }

    /// Create a form with given boundary.
    pub fn with_boundary(boundary: impl Into<String>) -> Self {
        Self {
            boundary: boundary.into(),
            body: BytesMut::new(),
        }
    }

    /// Boundary of this form.
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Value of the `Content-Type` header for this form.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    fn delimiter(&mut self) {
        self.body.put_slice(b"\r\n--");
        self.body.put_slice(self.boundary.as_bytes());
        self.body.put_slice(b"\r\n");
    }

    /// Append a text field.
    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.delimiter();
        self.body.put_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}").as_bytes(),
        );
        self
    }

    /// Append a binary file part.
    pub fn file(mut self, name: &str, file_name: &str, content: &[u8]) -> Self {
        self.delimiter();
        self.body.put_slice(
            format!(
                "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: {OCTET_STREAM}\r\n\r\n"
            )
            .as_bytes(),
        );
        self.body.put_slice(content);
        self
    }

    /// Write the closing boundary and return the body.
    pub fn finish(mut self) -> Bytes {
        self.body.put_slice(b"\r\n--");
        self.body.put_slice(self.boundary.as_bytes());
        self.body.put_slice(b"--\r\n");
        self.body.freeze()
    }
}
