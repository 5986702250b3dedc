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
use http::{Method, StatusCode};
use panda_core::{ErrorKind, Result};
use panda_video::VideoService;
use pretty_assertions::assert_eq;

use crate::mock::{proxy_with, MockHttpSend, RecordObserver};

fn service(http: &MockHttpSend) -> VideoService {
    VideoService::new(proxy_with(http.clone(), RecordObserver::default()))
}

#[tokio::test]
async fn test_get_videos() -> Result<()> {
    let http = MockHttpSend::new(
        StatusCode::OK,
        r#"[{"id":"v1","status":"success","width":640},{"id":"v2","status":"processing"}]"#,
    );

    let videos = service(&http).get_videos().await?;

    assert_eq!(videos.len(), 2);
    assert_eq!(videos[0].id, "v1");
    assert_eq!(videos[0].width, Some(640));
    assert_eq!(videos[1].status.as_deref(), Some("processing"));
    assert!(http.requests()[0]
        .uri
        .starts_with("http://api.pandastream.com/v2/videos.json?access_key="));
    Ok(())
}

#[tokio::test]
async fn test_get_video_and_encodings_paths() -> Result<()> {
    let http = MockHttpSend::new(StatusCode::OK, r#"{"id":"v1"}"#);
    let svc = service(&http);

    let video = svc.get_video("v1").await?;
    assert_eq!(video.map(|v| v.id), Some("v1".to_string()));

    let http = MockHttpSend::new(StatusCode::OK, r#"[{"id":"e1","video_id":"v1"}]"#);
    let svc = service(&http);
    let encodings = svc.get_video_encodings("v1").await?;
    assert_eq!(encodings[0].video_id.as_deref(), Some("v1"));
    assert!(http.requests()[0]
        .uri
        .starts_with("http://api.pandastream.com/v2/videos/v1/encodings.json?"));
    Ok(())
}

#[tokio::test]
async fn test_get_cloud() -> Result<()> {
    let http = MockHttpSend::new(StatusCode::OK, r#"{"id":"c1","name":"main"}"#);

    let cloud = service(&http).get_cloud("c1").await?;

    assert_eq!(cloud.and_then(|c| c.name), Some("main".to_string()));
    assert!(http.requests()[0]
        .uri
        .starts_with("http://api.pandastream.com/v2/clouds/c1.json?"));
    Ok(())
}

#[tokio::test]
async fn test_upload_video_from_url() -> Result<()> {
    let http = MockHttpSend::new(StatusCode::CREATED, r#"{"id":"v9"}"#);

    let video = service(&http)
        .upload_video_from_url("http://example.com/clip.mp4")
        .await?;

    assert_eq!(video.map(|v| v.id), Some("v9".to_string()));
    let req = &http.requests()[0];
    assert_eq!(req.method, Method::POST);
    assert!(String::from_utf8_lossy(&req.body)
        .starts_with("source_url=http%3A%2F%2Fexample.com%2Fclip.mp4&"));
    Ok(())
}

#[tokio::test]
async fn test_upload_video_content() -> Result<()> {
    let http = MockHttpSend::new(StatusCode::CREATED, r#"{"id":"v10"}"#);

    let video = service(&http)
        .upload_video(Bytes::from_static(b"content"), "clip.mp4")
        .await?;

    assert_eq!(video.map(|v| v.id), Some("v10".to_string()));
    let req = &http.requests()[0];
    assert!(req
        .content_type
        .as_deref()
        .is_some_and(|v| v.starts_with("multipart/form-data; boundary=")));
    Ok(())
}

#[tokio::test]
async fn test_delete_video() -> Result<()> {
    let ok = MockHttpSend::new(StatusCode::OK, "");
    assert!(service(&ok).delete_video("v1").await?);
    assert_eq!(ok.requests()[0].method, Method::DELETE);

    let not_found = MockHttpSend::new(StatusCode::NOT_FOUND, "");
    assert!(!service(&not_found).delete_video("v1").await?);

    assert!(!service(&MockHttpSend::refused()).delete_video("v1").await?);
    Ok(())
}

#[tokio::test]
async fn test_failed_calls_return_nothing() -> Result<()> {
    let http = MockHttpSend::new(StatusCode::INTERNAL_SERVER_ERROR, "oops");
    let svc = service(&http);

    assert_eq!(svc.get_video("v1").await?, None);
    assert!(svc.get_videos().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_malformed_body_is_an_error() {
    let http = MockHttpSend::new(StatusCode::OK, "<html>");

    let err = service(&http).get_video("v1").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Unexpected);
}
