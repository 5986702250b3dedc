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

use std::sync::Arc;

use bytes::Bytes;
use log::{debug, warn};
use panda_core::time::format_timestamp;
use panda_core::{Context, Error, Result};

use crate::constants::*;
use crate::query::encode_to_query;
use crate::sign::{string_to_sign, RequestSigner, SignRequest};
use crate::{Config, Credential, Endpoint, Parameters, ServiceRequest};

/// ServiceProxy builds signed requests for the panda api and sends them.
///
/// It is read-only after construction and can be shared between tasks;
/// every call builds its own [`ServiceRequest`].
#[derive(Debug, Clone)]
pub struct ServiceProxy {
    ctx: Context,
    credential: Credential,
    endpoint: Endpoint,
    signer: Arc<dyn SignRequest>,
}

impl ServiceProxy {
    /// Create a proxy signing with current time.
    pub fn new(ctx: Context, credential: Credential, endpoint: Endpoint) -> Self {
        Self {
            ctx,
            credential,
            endpoint,
            signer: Arc::new(RequestSigner::new()),
        }
    }

    /// Create a proxy from config.
    pub fn from_config(ctx: Context, config: &Config) -> Result<Self> {
        let credential = config.credential()?;
        let endpoint = config.endpoint()?;
        Ok(Self::new(ctx, credential, endpoint))
    }

    /// Replace the signer.
    pub fn with_signer(mut self, signer: impl SignRequest) -> Self {
        self.signer = Arc::new(signer);
        self
    }

    /// Context used to send requests.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Full api url including protocol, host, port and base path.
    pub fn api_url(&self) -> String {
        self.endpoint.api_url()
    }

    /// Build the string to sign, see [`string_to_sign`].
    pub fn string_to_sign(
        &self,
        verb: &str,
        path: &str,
        host: &str,
        params: &Parameters,
    ) -> String {
        let s = string_to_sign(verb, path, host, params);
        self.ctx.debug("StringToSign", &s);
        s
    }

    /// Sign the request described by verb, path, host and parameters with
    /// the given secret key.
    pub fn signature_generator(
        &self,
        verb: &str,
        path: &str,
        host: &str,
        secret_key: &str,
        params: &Parameters,
    ) -> Result<String> {
        let s = self.string_to_sign(verb, path, host, params);
        self.signer.sign(&s, secret_key)
    }

    /// Build a signed request.
    ///
    /// The verb is upper-cased and the path is trimmed and prefixed with
    /// `/`. One timestamp is taken and used both for signing and in the
    /// signed parameters.
    pub fn build_request(
        &self,
        verb: &str,
        path: &str,
        params: &Parameters,
    ) -> Result<ServiceRequest> {
        let verb = verb.to_uppercase();
        let path = canonical_path(path);
        let signed = self.signed_query(&verb, &path, params)?;

        Ok(ServiceRequest {
            base_url: format!("{}{}", self.api_url(), path),
            verb,
            signed_parameters: signed,
            file: None,
            file_name: None,
        })
    }

    fn signed_query(&self, verb: &str, path: &str, params: &Parameters) -> Result<String> {
        let mut signed = params.clone();
        signed.insert(PARAM_ACCESS_KEY, self.credential.access_key.as_str());
        signed.insert(PARAM_CLOUD_ID, self.credential.cloud_id.as_str());
        let timestamp = format_timestamp(&self.signer.time());
        self.ctx.debug("timestamp", &timestamp);
        signed.insert(PARAM_TIMESTAMP, timestamp);

        let signature = self.signature_generator(
            verb,
            path,
            &self.endpoint.host,
            &self.credential.secret_key,
            &signed,
        )?;
        self.ctx.debug("Signature", &signature);
        signed.insert(PARAM_SIGNATURE, signature);

        let query = encode_to_query(signed.iter());
        debug!("signed query: {query}");
        self.ctx.debug("signedQuery", &query);
        Ok(query)
    }

    /// Build, attach the file if any, and send a request.
    pub async fn send_request(
        &self,
        verb: &str,
        path: &str,
        params: &Parameters,
        file: Option<(Bytes, String)>,
    ) -> Result<http::Response<Bytes>> {
        let mut req = self.build_request(verb, path, params)?;
        if let Some((content, name)) = file {
            req.file = Some(content);
            req.file_name = Some(name);
        }

        req.send(&self.ctx).await
    }

    /// Send a GET request.
    pub async fn get(&self, path: &str, params: &Parameters) -> Result<http::Response<Bytes>> {
        self.send_request("GET", path, params, None).await
    }

    /// Send a POST request.
    pub async fn post(&self, path: &str, params: &Parameters) -> Result<http::Response<Bytes>> {
        self.send_request("POST", path, params, None).await
    }

    /// Send a POST request uploading a file.
    pub async fn post_file(
        &self,
        path: &str,
        params: &Parameters,
        file: Bytes,
        file_name: &str,
    ) -> Result<http::Response<Bytes>> {
        self.send_request("POST", path, params, Some((file, file_name.to_string())))
            .await
    }

    /// Send a PUT request.
    pub async fn put(&self, path: &str, params: &Parameters) -> Result<http::Response<Bytes>> {
        self.send_request("PUT", path, params, None).await
    }

    /// Send a DELETE request.
    pub async fn delete(&self, path: &str, params: &Parameters) -> Result<http::Response<Bytes>> {
        self.send_request("DELETE", path, params, None).await
    }

    /// Send a GET request and return the body.
    ///
    /// Transport failures and non-2xx responses are reported to observers
    /// and turned into an empty string.
    pub async fn get_json(&self, path: &str, params: &Parameters) -> Result<String> {
        self.json(self.get(path, params).await)
    }

    /// Send a POST request and return the body, see [`ServiceProxy::get_json`].
    pub async fn post_json(&self, path: &str, params: &Parameters) -> Result<String> {
        self.json(self.post(path, params).await)
    }

    /// Upload a file and return the body, see [`ServiceProxy::get_json`].
    pub async fn post_file_json(
        &self,
        path: &str,
        params: &Parameters,
        file: Bytes,
        file_name: &str,
    ) -> Result<String> {
        self.json(self.post_file(path, params, file, file_name).await)
    }

    /// Send a PUT request and return the body, see [`ServiceProxy::get_json`].
    pub async fn put_json(&self, path: &str, params: &Parameters) -> Result<String> {
        self.json(self.put(path, params).await)
    }

    /// Send a DELETE request and return the body, see [`ServiceProxy::get_json`].
    pub async fn delete_json(&self, path: &str, params: &Parameters) -> Result<String> {
        self.json(self.delete(path, params).await)
    }

    fn json(&self, resp: Result<http::Response<Bytes>>) -> Result<String> {
        let err = match resp {
            Ok(resp) if resp.status().is_success() => {
                return String::from_utf8(resp.into_body().to_vec()).map_err(|e| {
                    Error::unexpected("response body is not valid utf-8").with_source(e)
                });
            }
            Ok(resp) => Error::transport(format!(
                "panda service responded with status {}",
                resp.status()
            )),
            Err(err) if err.is_transport_error() => err,
            Err(err) => return Err(err),
        };

        warn!("panda request failed, returning empty result: {err}");
        self.ctx.debug("Web Exception", &err.to_string());
        self.ctx.transport_error(&err);
        Ok(String::new())
    }
}

/// Trim space, tab, CR, LF and NUL, then prefix with `/`.
fn canonical_path(path: &str) -> String {
    format!("/{}", path.trim_matches(&[' ', '\t', '\r', '\n', '\0'][..]))
}
