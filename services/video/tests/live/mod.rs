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

use std::env;

use log::warn;
use panda_core::{Context, LogObserver, OsEnv, Result};
use panda_http_send_reqwest::ReqwestHttpSend;
use panda_video::{Config, VideoService};

/// Build a service against a real panda cloud.
///
/// Only runs when `PANDA_TEST=on`, credentials come from the `PANDA_*`
/// env values read by [`Config::from_env`].
fn init_service() -> Result<Option<VideoService>> {
    crate::mock::init_logger();

    if env::var("PANDA_TEST").ok().as_deref() != Some("on") {
        return Ok(None);
    }

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv)
        .with_observer(LogObserver);
    let config = Config::new().from_env(&ctx)?;

    Ok(Some(VideoService::from_config(ctx, &config)?))
}

#[tokio::test]
async fn test_live_get_videos() -> Result<()> {
    let Some(svc) = init_service()? else {
        warn!("PANDA_TEST is not set, skipped");
        return Ok(());
    };

    let videos = svc.get_videos().await?;
    for video in videos {
        assert!(!video.id.is_empty());
    }
    Ok(())
}
