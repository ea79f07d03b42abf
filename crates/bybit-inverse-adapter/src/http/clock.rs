/*
[INPUT]:  Server time and local timestamps around the request
[OUTPUT]: Estimated clock offset in milliseconds
[POS]:    HTTP layer - clock skew estimation shared by facade and wrapper
[UPDATE]: When changing how local time is sampled
*/

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::http::{InverseError, Result};

/// Local wall clock in epoch milliseconds
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Offset to add to local time to match server time.
///
/// Assumes symmetric network delay: the server stamped `server_ms` half a
/// round trip before `end_ms` was sampled locally.
///
/// `ceil(server_ms - end_ms + (end_ms - start_ms) / 2)`
pub fn estimate_time_offset(server_ms: Decimal, start_ms: i64, end_ms: i64) -> Result<i64> {
    let end = Decimal::from(end_ms);
    let half_round_trip = Decimal::from(end_ms - start_ms) / Decimal::TWO;
    let offset = (server_ms - end + half_round_trip).ceil();
    offset
        .to_i64()
        .ok_or_else(|| InverseError::InvalidResponse(format!("time offset {offset} out of range")))
}
