/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since the Unix epoch, from `std::time::SystemTime`.
pub fn now_ms() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as f64
}

/// Current calendar year (UTC), used for the footer copyright line.
pub fn current_year() -> i32 {
    let days = (now_ms() / 86_400_000.0).floor() as i64;
    civil_year_from_days(days)
}

// Howard Hinnant's days-to-civil conversion, year component only.
fn civil_year_from_days(days: i64) -> i32 {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400;
    (if month <= 2 { year + 1 } else { year }) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_ms_returns_reasonable_value() {
        let ms = now_ms();
        assert!(ms > 1_577_836_800_000.0, "now_ms() returned {ms}");
        assert!(ms < 4_102_444_800_000.0, "now_ms() returned {ms}");
    }

    #[test]
    fn test_civil_year_boundaries() {
        assert_eq!(civil_year_from_days(0), 1970);
        // 2024-12-31 and 2025-01-01
        assert_eq!(civil_year_from_days(20_088), 2024);
        assert_eq!(civil_year_from_days(20_089), 2025);
        assert!(current_year() >= 2025);
    }
}
