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

use bytes::Bytes;
use http::StatusCode;
use panda_core::{Context, Error, Result};
use serde::de::DeserializeOwned;

use crate::{Cloud, Config, Parameters, ServiceProxy, Video, VideoEncoding};

/// VideoService exposes the panda video api as typed calls.
///
/// Calls that fail on the wire return `None` or an empty list, the
/// failure itself goes to the observers registered on the [`Context`].
#[derive(Debug, Clone)]
pub struct VideoService {
    proxy: ServiceProxy,
}

impl VideoService {
    /// Create a service on top of a proxy.
    pub fn new(proxy: ServiceProxy) -> Self {
        Self { proxy }
    }

    /// Create a service from config.
    pub fn from_config(ctx: Context, config: &Config) -> Result<Self> {
        Ok(Self::new(ServiceProxy::from_config(ctx, config)?))
    }

    /// The proxy used to send requests.
    pub fn service_proxy(&self) -> &ServiceProxy {
        &self.proxy
    }

    /// List videos of the cloud.
    pub async fn get_videos(&self) -> Result<Vec<Video>> {
        let body = self.proxy.get_json("videos.json", &Parameters::new()).await?;
        Ok(deserialize(&body)?.unwrap_or_default())
    }

    /// Get a video by id.
    pub async fn get_video(&self, video_id: &str) -> Result<Option<Video>> {
        let path = format!("videos/{video_id}.json");
        let body = self.proxy.get_json(&path, &Parameters::new()).await?;
        deserialize(&body)
    }

    /// List encodings of a video.
    pub async fn get_video_encodings(&self, video_id: &str) -> Result<Vec<VideoEncoding>> {
        let path = format!("videos/{video_id}/encodings.json");
        let body = self.proxy.get_json(&path, &Parameters::new()).await?;
        Ok(deserialize(&body)?.unwrap_or_default())
    }

    /// Ask panda to fetch and encode the video at `video_url`.
    pub async fn upload_video_from_url(&self, video_url: &str) -> Result<Option<Video>> {
        let params = Parameters::new().with("source_url", video_url);
        let body = self.proxy.post_json("videos.json", &params).await?;
        deserialize(&body)
    }

    /// Upload the video content.
    pub async fn upload_video(&self, file: Bytes, file_name: &str) -> Result<Option<Video>> {
        let body = self
            .proxy
            .post_file_json("videos.json", &Parameters::new(), file, file_name)
            .await?;
        deserialize(&body)
    }

    /// Delete a video, returns `true` if panda answered `200 OK`.
    pub async fn delete_video(&self, video_id: &str) -> Result<bool> {
        let path = format!("videos/{video_id}.json");
        match self.proxy.delete(&path, &Parameters::new()).await {
            Ok(resp) => Ok(resp.status() == StatusCode::OK),
            Err(err) if err.is_transport_error() => {
                self.proxy.context().transport_error(&err);
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    /// Get a cloud by id.
    pub async fn get_cloud(&self, cloud_id: &str) -> Result<Option<Cloud>> {
        let path = format!("clouds/{cloud_id}.json");
        let body = self.proxy.get_json(&path, &Parameters::new()).await?;
        deserialize(&body)
    }
}

/// Empty body means the call failed and has been reported already.
fn deserialize<T: DeserializeOwned>(body: &str) -> Result<Option<T>> {
    if body.trim().is_empty() {
        return Ok(None);
    }

    serde_json::from_str(body)
        .map(Some)
        .map_err(|e| Error::unexpected("failed to parse panda response").with_source(e))
}
