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

//! Panda video service client.
//!
//! This crate signs requests for the panda video encoding api, sends them
//! through the [`HttpSend`](panda_core::HttpSend) registered on the
//! [`Context`](panda_core::Context) and parses the webhook notifications
//! panda posts back.
//!
//! ## Quick Start
//!
//! ```no_run
//! use panda_core::{Context, OsEnv, Result};
//! use panda_video::{Config, Parameters, ServiceProxy};
//!
//! # async fn example(ctx: Context) -> Result<()> {
//! let ctx = ctx.with_env(OsEnv);
//! let config = Config::new()
//!     .with_api_host("api.pandastream.com")
//!     .from_env(&ctx)?;
//!
//! let proxy = ServiceProxy::from_config(ctx, &config)?;
//! let videos = proxy.get_json("videos.json", &Parameters::new()).await?;
//! println!("{videos}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Signing
//!
//! Every request carries `access_key`, `cloud_id`, `timestamp` and a
//! `signature` computed as
//!
//! ```text
//! base64(hmac_sha256(secret_key,
//!     VERB + "\n" + lowercase(host) + "\n" + path + "\n" + sorted_query))
//! ```
//!
//! `GET` and `DELETE` carry the signed parameters in the query string,
//! `POST` and `PUT` in a form body, or in a `multipart/form-data` body when
//! a file is uploaded.
//!
//! ## Notifications
//!
//! ```
//! use panda_video::{dispatch, HandleNotification};
//!
//! struct Printer;
//!
//! impl HandleNotification for Printer {
//!     fn video_created(&self, video_id: &str, encoding_ids: &[String]) {
//!         println!("{video_id} created with {encoding_ids:?}");
//!     }
//!     fn video_encoded(&self, video_id: &str, _: &[String]) {
//!         println!("{video_id} encoded");
//!     }
//!     fn encoding_progress(&self, encoding_id: &str, progress: &str) {
//!         println!("{encoding_id} at {progress}%");
//!     }
//!     fn encoding_completed(&self, encoding_id: &str) {
//!         println!("{encoding_id} completed");
//!     }
//! }
//!
//! dispatch(b"event=encoding-progress&encoding_id=E1&progress=50", &Printer);
//! ```

#![warn(missing_docs)]

mod constants;
pub mod multipart;
pub mod query;

mod config;
pub use config::Config;
mod credential;
pub use credential::Credential;
#[allow(missing_docs)]
mod domain;
pub use domain::{Cloud, Video, VideoEncoding};
mod endpoint;
pub use endpoint::Endpoint;
mod notification;
pub use notification::{
    dispatch, dispatch_request, parse_notification, HandleNotification, NotificationEvent,
};
mod parameters;
pub use parameters::Parameters;
mod proxy;
pub use proxy::ServiceProxy;
mod request;
pub use request::{BrokenRules, ServiceRequest};
mod service;
pub use service::VideoService;
mod sign;
pub use sign::{string_to_sign, RequestSigner, SignRequest};
