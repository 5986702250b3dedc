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

//! Time related utils.

use chrono::TimeZone;
use chrono::Utc;

/// DateTime is the alias for chrono::DateTime<Utc>.
pub type DateTime = chrono::DateTime<Utc>;

/// Time format used by panda signing: "2011-01-06T16:59:44+00:00"
///
/// The offset is a literal, the time is always rendered in UTC.
pub const PANDA_TIMESTAMP: &str = "%Y-%m-%dT%H:%M:%S+00:00";

/// Seconds between 0001-01-01T00:00:00 and the unix epoch.
const EPOCH_OFFSET_SECONDS: i64 = 62_135_596_800;

/// Create a new DateTime with current time.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time in any timezone into the panda timestamp.
pub fn format_timestamp<Tz: TimeZone>(time: &chrono::DateTime<Tz>) -> String {
    time.with_timezone(&Utc).format(PANDA_TIMESTAMP).to_string()
}

/// Format current time into the panda timestamp.
pub fn timestamp_now() -> String {
    format_timestamp(&now())
}

/// Count of 100-nanosecond intervals since 0001-01-01T00:00:00 UTC.
pub fn ticks(time: &DateTime) -> i64 {
    (time.timestamp() + EPOCH_OFFSET_SECONDS) * 10_000_000
        + i64::from(time.timestamp_subsec_nanos() / 100)
}
