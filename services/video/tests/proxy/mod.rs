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
use panda_video::Parameters;
use pretty_assertions::assert_eq;

use crate::mock::{fixed_signer, proxy_with, MockHttpSend, RecordObserver};

fn params() -> Parameters {
    Parameters::from([
        ("some_parameter", "some_value"),
        ("another_parameter", "another_value"),
    ])
}

#[test]
fn test_build_request_get_url() -> Result<()> {
    let proxy = proxy_with(MockHttpSend::new(StatusCode::OK, ""), RecordObserver::default());

    let req = proxy.build_request("GET", "videos.json", &params())?;
    let url = req.url();

    assert!(url.starts_with(
        "http://api.pandastream.com/v2/videos.json?some_parameter=some_value&another_parameter=another_value&access_key=some_access_key&cloud_id=some_cloud_id&timestamp="
    ));
    assert!(url.contains("&signature="));
    Ok(())
}

#[test]
fn test_build_request_body_verbs_have_no_query() -> Result<()> {
    let proxy = proxy_with(MockHttpSend::new(StatusCode::OK, ""), RecordObserver::default());

    for verb in ["post", "PUT"] {
        let req = proxy.build_request(verb, "videos.json", &params())?;
        assert_eq!(req.url(), "http://api.pandastream.com/v2/videos.json");
        assert_eq!(req.verb, verb.to_uppercase());
    }
    Ok(())
}

#[test]
fn test_build_request_with_fixed_time_is_deterministic() -> Result<()> {
    let proxy = proxy_with(MockHttpSend::new(StatusCode::OK, ""), RecordObserver::default())
        .with_signer(fixed_signer());

    let a = proxy.build_request("GET", "videos.json", &params())?;
    let b = proxy.build_request("GET", " videos.json\n", &params())?;

    assert_eq!(a.signed_parameters, b.signed_parameters);
    assert!(a
        .signed_parameters
        .contains("&timestamp=2011-01-06T16%3A59%3A44%2B00%3A00&signature="));
    Ok(())
}

#[test]
fn test_build_request_notifies_observers() -> Result<()> {
    let observer = RecordObserver::default();
    let proxy = proxy_with(MockHttpSend::new(StatusCode::OK, ""), observer.clone());

    proxy.build_request("GET", "videos.json", &Parameters::new())?;

    assert_eq!(
        observer.debug_titles(),
        vec!["timestamp", "StringToSign", "Signature", "signedQuery"]
    );
    Ok(())
}

#[tokio::test]
async fn test_get_sends_query() -> Result<()> {
    let http = MockHttpSend::new(StatusCode::OK, "[]");
    let proxy = proxy_with(http.clone(), RecordObserver::default());

    let resp = proxy.get("videos.json", &params()).await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let reqs = http.requests();
    assert_eq!(reqs.len(), 1);
    assert_eq!(reqs[0].method, Method::GET);
    assert!(reqs[0]
        .uri
        .starts_with("http://api.pandastream.com/v2/videos.json?some_parameter=some_value&"));
    assert!(reqs[0].body.is_empty());
    assert_eq!(reqs[0].content_type, None);
    Ok(())
}

#[tokio::test]
async fn test_post_sends_form_body() -> Result<()> {
    let http = MockHttpSend::new(StatusCode::OK, "{}");
    let proxy = proxy_with(http.clone(), RecordObserver::default());

    proxy
        .post("videos.json", &Parameters::new().with("source_url", "http://x.com/a b.mp4"))
        .await?;

    let reqs = http.requests();
    assert_eq!(reqs[0].method, Method::POST);
    assert_eq!(reqs[0].uri, "http://api.pandastream.com/v2/videos.json");
    assert_eq!(
        reqs[0].content_type.as_deref(),
        Some("application/x-www-form-urlencoded")
    );
    let body = String::from_utf8(reqs[0].body.to_vec()).unwrap();
    assert!(body.starts_with("source_url=http%3A%2F%2Fx.com%2Fa+b.mp4&access_key=some_access_key&"));
    assert!(body.contains("&signature="));
    Ok(())
}

#[tokio::test]
async fn test_post_file_sends_multipart() -> Result<()> {
    let http = MockHttpSend::new(StatusCode::OK, "{}");
    let proxy = proxy_with(http.clone(), RecordObserver::default());

    proxy
        .post_file(
            "videos.json",
            &Parameters::new(),
            Bytes::from_static(b"\x00video\xff"),
            "clip.mp4",
        )
        .await?;

    let reqs = http.requests();
    let content_type = reqs[0].content_type.clone().unwrap();
    let boundary = content_type
        .strip_prefix("multipart/form-data; boundary=")
        .unwrap()
        .to_string();
    assert!(boundary.starts_with("---------------------------"));

    let body = reqs[0].body.to_vec();
    let text = String::from_utf8_lossy(&body);
    assert!(text.starts_with(&format!(
        "\r\n--{boundary}\r\nContent-Disposition: form-data; name=\"access_key\"\r\n\r\nsome_access_key"
    )));
    // Values are decoded before they are written into parts.
    assert!(text.contains("name=\"timestamp\"\r\n\r\n20"));
    assert!(text.contains("name=\"signature\"\r\n\r\n"));
    assert!(text.contains(
        "name=\"file\"; filename=\"clip.mp4\"\r\nContent-Type: application/octet-stream\r\n\r\n"
    ));
    assert!(body
        .windows(b"\x00video\xff".len())
        .any(|w| w == b"\x00video\xff"));
    assert!(text.ends_with(&format!("\r\n--{boundary}--\r\n")));
    Ok(())
}

#[tokio::test]
async fn test_file_on_get_is_not_sent() -> Result<()> {
    let http = MockHttpSend::new(StatusCode::OK, "{}");
    let proxy = proxy_with(http.clone(), RecordObserver::default());

    proxy
        .send_request(
            "get",
            "videos.json",
            &Parameters::new(),
            Some((Bytes::from_static(b"abc"), "a.mp4".to_string())),
        )
        .await?;

    let reqs = http.requests();
    assert_eq!(reqs[0].method, Method::GET);
    assert!(reqs[0].body.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_file_without_name_is_rejected_before_sending() {
    let http = MockHttpSend::new(StatusCode::OK, "{}");
    let proxy = proxy_with(http.clone(), RecordObserver::default());

    let err = proxy
        .send_request(
            "POST",
            "videos.json",
            &Parameters::new(),
            Some((Bytes::from_static(b"abc"), String::new())),
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    assert_eq!(
        err.to_string(),
        "Both File and FileName are required to submit a file to a panda service request."
    );
    assert!(http.requests().is_empty());
}

#[tokio::test]
async fn test_get_json_returns_body() -> Result<()> {
    let proxy = proxy_with(
        MockHttpSend::new(StatusCode::OK, r#"[{"id":"v1"}]"#),
        RecordObserver::default(),
    );

    let body = proxy.get_json("videos.json", &Parameters::new()).await?;

    assert_eq!(body, r#"[{"id":"v1"}]"#);
    Ok(())
}

#[tokio::test]
async fn test_get_json_swallows_error_status() -> Result<()> {
    let observer = RecordObserver::default();
    let proxy = proxy_with(
        MockHttpSend::new(StatusCode::NOT_FOUND, "not found"),
        observer.clone(),
    );

    let body = proxy.get_json("videos/missing.json", &Parameters::new()).await?;

    assert_eq!(body, "");
    assert_eq!(observer.errors().len(), 1);
    assert!(observer.errors()[0].contains("404"));
    assert!(observer.debug_titles().contains(&"Web Exception".to_string()));
    Ok(())
}

#[tokio::test]
async fn test_json_swallows_transport_failure() -> Result<()> {
    let observer = RecordObserver::default();
    let proxy = proxy_with(MockHttpSend::refused(), observer.clone());

    assert_eq!(proxy.get_json("videos.json", &Parameters::new()).await?, "");
    assert_eq!(proxy.post_json("videos.json", &Parameters::new()).await?, "");
    assert_eq!(proxy.put_json("videos/v1.json", &Parameters::new()).await?, "");
    assert_eq!(proxy.delete_json("videos/v1.json", &Parameters::new()).await?, "");
    assert_eq!(observer.errors(), vec!["connection refused"; 4]);
    Ok(())
}

#[tokio::test]
async fn test_raw_verbs_propagate_transport_failure() {
    let proxy = proxy_with(MockHttpSend::refused(), RecordObserver::default());

    let err = proxy
        .get("videos.json", &Parameters::new())
        .await
        .unwrap_err();

    assert!(err.is_transport_error());
}

#[tokio::test]
async fn test_request_resend_and_mutation_after_build() -> Result<()> {
    let http = MockHttpSend::new(StatusCode::OK, "{}");
    let proxy = proxy_with(http.clone(), RecordObserver::default()).with_signer(fixed_signer());

    let mut req = proxy.build_request("GET", "videos.json", &params())?;
    req.send(proxy.context()).await?;
    req.send(proxy.context()).await?;

    let reqs = http.requests();
    assert_eq!(reqs.len(), 2);
    assert_eq!(reqs[0].uri, reqs[1].uri);
    assert_eq!(reqs[0].uri, req.url());
    assert!(reqs[0].uri.ends_with(&req.signed_parameters));

    // Fields stay public and are read again on every send.
    req.verb = "POST".to_string();
    req.file = Some(Bytes::from_static(b"VIDEO"));
    req.file_name = Some("clip.mp4".to_string());
    req.send(proxy.context()).await?;

    let reqs = http.requests();
    assert_eq!(reqs.len(), 3);
    assert_eq!(reqs[2].method, Method::POST);
    assert_eq!(reqs[2].uri, "http://api.pandastream.com/v2/videos.json");
    assert!(reqs[2]
        .content_type
        .as_deref()
        .unwrap()
        .starts_with("multipart/form-data; boundary="));
    let text = String::from_utf8_lossy(&reqs[2].body);
    assert!(text.contains("name=\"file\"; filename=\"clip.mp4\""));
    assert!(text.contains("name=\"some_parameter\"\r\n\r\nsome_value"));
    Ok(())
}
