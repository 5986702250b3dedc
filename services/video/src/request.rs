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

use std::fmt::{Debug, Display, Formatter};

use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::Method;
use log::debug;
use panda_core::{Context, Error, Result};

use crate::constants::*;
use crate::multipart::FormData;
use crate::query::decode_query;

const BASE_URL_REQUIRED: &str = "A BaseUrl is required to submit a panda service request.";
const VERB_REQUIRED: &str = "A Verb is required to submit a panda service request.";
const SIGNED_PARAMETERS_REQUIRED: &str =
    "SignedParameters are required to submit a panda service request.";
const FILE_AND_NAME_REQUIRED: &str =
    "Both File and FileName are required to submit a file to a panda service request.";

/// Rules a [`ServiceRequest`] broke, in the order they were checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrokenRules(Vec<&'static str>);

impl BrokenRules {
    /// Every broken rule message.
    pub fn messages(&self) -> &[&'static str] {
        &self.0
    }

    /// Check if no rule is broken.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for BrokenRules {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

/// A request to the panda service: where it goes, with which verb and the
/// signed query produced by [`ServiceProxy::build_request`](crate::ServiceProxy::build_request).
///
/// Fields stay public so a request can be adjusted (for example a file
/// attached) between building and sending.
#[derive(Clone, Default)]
pub struct ServiceRequest {
    /// Url without query: `http://{host[:port]}/v{N}/{path}`.
    pub base_url: String,
    /// Upper-cased HTTP verb.
    pub verb: String,
    /// Encoded and signed query.
    pub signed_parameters: String,
    /// Content of the file to upload.
    pub file: Option<Bytes>,
    /// Name of the file to upload.
    pub file_name: Option<String>,
}

impl Debug for ServiceRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceRequest")
            .field("base_url", &self.base_url)
            .field("verb", &self.verb)
            .field("signed_parameters", &self.signed_parameters)
            .field("file", &self.file.as_ref().map(|v| v.len()))
            .field("file_name", &self.file_name)
            .finish()
    }
}

impl ServiceRequest {
    fn has_file_name(&self) -> bool {
        self.file_name.as_deref().is_some_and(|v| !v.is_empty())
    }

    /// Check if a file will be posted: content is set and file name is not empty.
    pub fn is_file_posted(&self) -> bool {
        self.file.is_some() && self.has_file_name()
    }

    /// Check if the request carries its parameters in the body (POST or PUT).
    pub fn has_data_to_send(&self) -> bool {
        self.verb == "POST" || self.verb == "PUT"
    }

    /// Full url: the base url for requests with a body, otherwise the base
    /// url followed by `?` and the signed parameters.
    pub fn url(&self) -> String {
        if self.has_data_to_send() {
            self.base_url.clone()
        } else {
            format!("{}?{}", self.base_url, self.signed_parameters)
        }
    }

    /// Check every rule required to submit this request.
    pub fn is_valid_for_submission(&self) -> std::result::Result<(), BrokenRules> {
        let mut rules = BrokenRules::default();

        if self.base_url.is_empty() {
            rules.0.push(BASE_URL_REQUIRED);
        }
        if self.verb.is_empty() {
            rules.0.push(VERB_REQUIRED);
        }
        if self.signed_parameters.is_empty() {
            rules.0.push(SIGNED_PARAMETERS_REQUIRED);
        }
        // Any file related data requires all of it.
        if (self.file.is_some() || self.has_file_name()) && !self.is_file_posted() {
            rules.0.push(FILE_AND_NAME_REQUIRED);
        }

        if rules.is_empty() {
            Ok(())
        } else {
            Err(rules)
        }
    }

    /// Build the wire request.
    ///
    /// - GET, DELETE and other verbs: signed parameters in the query, no body.
    /// - POST or PUT: signed parameters as a form encoded body.
    /// - POST or PUT with a file: multipart body holding every signed
    ///   parameter and the file.
    pub fn build_http_request(&self) -> Result<http::Request<Bytes>> {
        self.is_valid_for_submission()
            .map_err(|rules| Error::request_invalid(rules.to_string()))?;

        let method = Method::from_bytes(self.verb.as_bytes()).map_err(|e| {
            Error::request_invalid(format!("invalid verb: {}", self.verb)).with_source(e)
        })?;
        let req = http::Request::builder().method(method).uri(self.url());

        let req = if !self.has_data_to_send() {
            req.body(Bytes::new())?
        } else if let (true, Some(file), Some(file_name)) =
            (self.is_file_posted(), &self.file, &self.file_name)
        {
            let mut form = FormData::new();
            for (k, v) in decode_query(&self.signed_parameters) {
                form = form.text(&k, &v);
            }
            let form = form.file(PARAM_FILE, file_name, file);

            req.header(CONTENT_TYPE, form.content_type())
                .body(form.finish())?
        } else {
            req.header(CONTENT_TYPE, FORM_URLENCODED)
                .body(Bytes::from(self.signed_parameters.clone()))?
        };

        Ok(req)
    }

    /// Validate, build and send this request, returning the raw response.
    ///
    /// Status codes are not interpreted and nothing is retried. Transport
    /// failures are returned to the caller as is.
    pub async fn send(&self, ctx: &Context) -> Result<http::Response<Bytes>> {
        let req = self.build_http_request()?;
        debug!("sending panda request: {} {}", req.method(), req.uri());

        ctx.http_send(req).await
    }
}
