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

//! Panda video api with convenience constructors.

pub use panda_video::*;

#[cfg(feature = "default-context")]
use crate::{default_context, Result};

/// Create a video service on the default context.
///
/// Config is read from the `PANDA_*` env values, see [`Config::from_env`].
///
/// # Example
///
/// ```no_run
/// # async fn example() -> panda::Result<()> {
/// let service = panda::video::default_service()?;
/// let deleted = service.delete_video("some_video_id").await?;
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "default-context")]
pub fn default_service() -> Result<VideoService> {
    service_with_config(Config::new())
}

/// Create a video service on the default context, env values fill the
/// fields left unset in `config`.
///
/// ```no_run
/// # fn example() -> panda::Result<()> {
/// use panda::video::{service_with_config, Config};
///
/// let service = service_with_config(
///     Config::new()
///         .with_api_host("api.pandastream.com")
///         .with_api_port(443),
/// )?;
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "default-context")]
pub fn service_with_config(config: Config) -> Result<VideoService> {
    let ctx = default_context();
    let config = config.from_env(&ctx)?;
    VideoService::from_config(ctx, &config)
}
