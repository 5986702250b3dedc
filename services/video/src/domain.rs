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

//! Records returned by the panda api.
//!
//! Timestamps are kept as sent by panda.

use serde::{Deserialize, Serialize};

/// A video stored in a panda cloud.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Video {
    pub id: String,
    pub source_url: Option<String>,
    pub status: Option<String>,
    pub original_filename: Option<String>,
    pub extname: Option<String>,
    pub video_codec: Option<String>,
    pub audio_codec: Option<String>,
    pub path: Option<String>,
    pub thumbnail_position: Option<i64>,
    pub height: Option<i64>,
    pub width: Option<i64>,
    pub fps: Option<i64>,
    pub duration: Option<i64>,
    pub file_size: Option<i64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// One encoding of a video for a given profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoEncoding {
    pub id: String,
    pub video_id: Option<String>,
    pub profile_id: Option<String>,
    pub status: Option<String>,
    pub extname: Option<String>,
    pub path: Option<String>,
    pub encoding_progress: Option<i64>,
    pub height: Option<i64>,
    pub width: Option<i64>,
    pub file_size: Option<i64>,
    pub started_encoding_at: Option<String>,
    pub encoding_time: Option<i64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// A panda cloud.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cloud {
    pub id: String,
    pub name: Option<String>,
    pub s3_videos_bucket: Option<String>,
    pub s3_private_access: Option<bool>,
    pub url: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}
