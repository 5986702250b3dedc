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

//! Webhook notifications sent back by panda.
//!
//! Panda posts a form encoded body whose `event` field tells what happened:
//!
//! | event                | fields                      |
//! |----------------------|-----------------------------|
//! | `video-created`      | `video_id`, `encoding_ids`  |
//! | `video-encoded`      | `video_id`, `encoding_ids`  |
//! | `encoding-progress`  | `encoding_id`, `progress`   |
//! | `encoding-completed` | `encoding_id`               |

use bytes::Bytes;
use log::debug;

const EVENT: &str = "event";
const VIDEO_ID: &str = "video_id";
const ENCODING_ID: &str = "encoding_id";
const ENCODING_IDS: &str = "encoding_ids";
const PROGRESS: &str = "progress";

/// A decoded webhook notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationEvent {
    /// `video-created`
    VideoCreated {
        /// Id of the video.
        video_id: String,
        /// Ids of the encodings created for the video.
        encoding_ids: Vec<String>,
    },
    /// `video-encoded`
    VideoEncoded {
        /// Id of the video.
        video_id: String,
        /// Ids of the encodings of the video.
        encoding_ids: Vec<String>,
    },
    /// `encoding-progress`
    EncodingProgress {
        /// Id of the encoding.
        encoding_id: String,
        /// Progress as sent by panda, usually a percentage.
        progress: String,
    },
    /// `encoding-completed`
    EncodingCompleted {
        /// Id of the encoding.
        encoding_id: String,
    },
}

/// Parse a form encoded webhook body.
///
/// Returns `None` when `event` is missing or unknown. Missing fields are
/// read as empty strings. Every key containing `encoding_ids` contributes
/// its value to the id list, in body order.
pub fn parse_notification(body: &[u8]) -> Option<NotificationEvent> {
    let pairs: Vec<(String, String)> = form_urlencoded::parse(body).into_owned().collect();

    let field = |name: &str| -> String {
        pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
            .unwrap_or_default()
    };
    let encoding_ids = || -> Vec<String> {
        pairs
            .iter()
            .filter(|(k, _)| k.contains(ENCODING_IDS))
            .map(|(_, v)| v.clone())
            .collect()
    };

    let event = pairs.iter().find(|(k, _)| k == EVENT).map(|(_, v)| v.as_str());
    match event {
        Some("video-created") => Some(NotificationEvent::VideoCreated {
            video_id: field(VIDEO_ID),
            encoding_ids: encoding_ids(),
        }),
        Some("video-encoded") => Some(NotificationEvent::VideoEncoded {
            video_id: field(VIDEO_ID),
            encoding_ids: encoding_ids(),
        }),
        Some("encoding-progress") => Some(NotificationEvent::EncodingProgress {
            encoding_id: field(ENCODING_ID),
            progress: field(PROGRESS),
        }),
        Some("encoding-completed") => Some(NotificationEvent::EncodingCompleted {
            encoding_id: field(ENCODING_ID),
        }),
        other => {
            debug!("ignore notification with event {other:?}");
            None
        }
    }
}

/// HandleNotification receives decoded webhook notifications.
///
/// Implement it in the application and pass it to [`dispatch`].
pub trait HandleNotification {
    /// A video has been created.
    fn video_created(&self, video_id: &str, encoding_ids: &[String]);
    /// All encodings of a video are done.
    fn video_encoded(&self, video_id: &str, encoding_ids: &[String]);
    /// An encoding made progress.
    fn encoding_progress(&self, encoding_id: &str, progress: &str);
    /// An encoding is done.
    fn encoding_completed(&self, encoding_id: &str);
}

impl NotificationEvent {
    /// Call the handler method matching this event.
    pub fn dispatch_to(&self, handler: &(impl HandleNotification + ?Sized)) {
        match self {
            NotificationEvent::VideoCreated {
                video_id,
                encoding_ids,
            } => handler.video_created(video_id, encoding_ids),
            NotificationEvent::VideoEncoded {
                video_id,
                encoding_ids,
            } => handler.video_encoded(video_id, encoding_ids),
            NotificationEvent::EncodingProgress {
                encoding_id,
                progress,
            } => handler.encoding_progress(encoding_id, progress),
            NotificationEvent::EncodingCompleted { encoding_id } => {
                handler.encoding_completed(encoding_id)
            }
        }
    }
}

/// Parse the body and route it to the handler.
///
/// Unknown events are ignored. Returns the event that was dispatched.
pub fn dispatch(
    body: &[u8],
    handler: &(impl HandleNotification + ?Sized),
) -> Option<NotificationEvent> {
    let event = parse_notification(body)?;
    debug!("dispatch notification: {event:?}");
    event.dispatch_to(handler);
    Some(event)
}

/// Dispatch the body of an inbound webhook request, see [`dispatch`].
pub fn dispatch_request(
    req: &http::Request<Bytes>,
    handler: &(impl HandleNotification + ?Sized),
) -> Option<NotificationEvent> {
    dispatch(req.body(), handler)
}
