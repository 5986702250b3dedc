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

use crate::Error;
use log::{debug, warn};
use std::fmt::Debug;

/// Observe receives diagnostics emitted while requests are built and sent.
///
/// Observers are registered on the [`Context`](crate::Context) when it is
/// built and are called synchronously, in registration order. Both methods
/// default to doing nothing so implementors only pick what they need.
pub trait Observe: Debug + Send + Sync + 'static {
    /// Called with intermediate values such as the string to sign or the
    /// signed query. Never called with secret key material.
    fn on_debug(&self, _title: &str, _message: &str) {}

    /// Called when a transport failure was converted into an empty result
    /// by one of the JSON convenience operations.
    fn on_transport_error(&self, _err: &Error) {}
}

/// LogObserver forwards every notification to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl Observe for LogObserver {
    fn on_debug(&self, title: &str, message: &str) {
        debug!("{title}: {message}");
    }

    fn on_transport_error(&self, err: &Error) {
        warn!("panda request failed: {err:?}");
    }
}
