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

/// Milliseconds since the Unix epoch, from `js_sys::Date::now()`.
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Current calendar year in the browser's local time zone.
pub fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}
