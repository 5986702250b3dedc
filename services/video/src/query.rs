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

//! Query encoding used for signing and for the signed query.
//!
//! The signature is computed over the encoded query, so every byte here
//! matters. Three rules apply depending on the key:
//!
//! - `timestamp`: form encode, then upper case the whole encoded value.
//! - `file`: the value is written as is.
//! - anything else: form encode, then upper case the two hex digits of
//!   every `%XX` escape and nothing else.

use percent_encoding::utf8_percent_encode;

use crate::constants::*;

/// Form encode a value: space becomes `+`, every byte outside
/// `PANDA_FORM_ENCODE_SET` becomes `%XX`.
pub fn url_encode(s: &str) -> String {
    utf8_percent_encode(s, &PANDA_FORM_ENCODE_SET)
        .to_string()
        .replace(' ', "+")
}

/// Form encode a value and upper case the hex digits of every escape.
pub fn upper_case_url_encode(s: &str) -> String {
    upper_case_escapes(&url_encode(s))
}

/// Upper case the two characters following every `%`.
fn upper_case_escapes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending = 0;

    for c in s.chars() {
        if pending > 0 {
            out.push(c.to_ascii_uppercase());
            pending -= 1;
        } else {
            if c == '%' {
                pending = 2;
            }
            out.push(c);
        }
    }

    out
}

/// Encode a single value following the rule of its key.
pub fn encode_value(key: &str, value: &str) -> String {
    match key {
        PARAM_TIMESTAMP => url_encode(value).to_uppercase(),
        PARAM_FILE => value.to_string(),
        _ => upper_case_url_encode(value),
    }
}

/// Join parameters into `k1=v1&k2=v2` in the order they are given.
///
/// Keys are written unescaped. The encoder never sorts; callers that need
/// a canonical order sort before calling.
pub fn encode_to_query<'a>(params: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let mut s = String::with_capacity(64);

    for (idx, (k, v)) in params.into_iter().enumerate() {
        if idx != 0 {
            s.push('&');
        }

        s.push_str(k);
        s.push('=');
        s.push_str(&encode_value(k, v));
    }

    s
}

/// Decode a form encoded query back into pairs, in order.
pub fn decode_query(query: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(query.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}
