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

//! Configuration helpers shared by widgets that read `data-*` attributes from
//! their host element.

use std::collections::{BTreeMap, HashMap};

/// Read access to a host element's `data-*` attributes.
///
/// Keys are the attribute names without the `data-` prefix, in kebab case
/// (`pause-on-hover`, `auto-open`).
pub trait DataAttributes {
    fn data(&self, key: &str) -> Option<String>;

    /// Enabled unless the attribute is literally `"false"`.
    fn flag_default_on(&self, key: &str) -> bool {
        self.data(key).map_or(true, |v| v.trim() != "false")
    }

    /// Disabled unless the attribute is literally `"true"`.
    fn flag_default_off(&self, key: &str) -> bool {
        self.data(key).is_some_and(|v| v.trim() == "true")
    }

    fn parse_or<T: std::str::FromStr>(&self, key: &str, default: T) -> T {
        self.data(key)
            .and_then(|v| v.trim().parse::<T>().ok())
            .unwrap_or(default)
    }
}

impl DataAttributes for HashMap<String, String> {
    fn data(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl DataAttributes for BTreeMap<String, String> {
    fn data(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<F> DataAttributes for F
where
    F: Fn(&str) -> Option<String>,
{
    fn data(&self, key: &str) -> Option<String> {
        self(key)
    }
}

/// `true` for `"true"` and `"1"` (any case), `false` for anything else or unset.
pub fn truthy(s: Option<&str>) -> bool {
    s.is_some_and(|s| matches!(s.trim().to_lowercase().as_str(), "true" | "1"))
}
