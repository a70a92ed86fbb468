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

//! Settings for the embedded location map, read from the host element.

use serde::Serialize;

use crate::config::DataAttributes;

pub const MAP_ELEMENT_ID: &str = "google-map";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    pub center: LatLng,
    pub zoom: u8,
    pub title: String,
    pub address: String,
    /// Open the marker's info window right away.
    pub auto_open: bool,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: LatLng {
                lat: 40.7128,
                lng: -74.0060,
            },
            zoom: 15,
            title: "Our Location".to_string(),
            address: "123 Business St, City, State 12345".to_string(),
            auto_open: false,
        }
    }
}

impl MapConfig {
    /// Reads `data-lat`, `data-lng`, `data-zoom`, `data-title`,
    /// `data-address` and `data-auto-open`, keeping defaults for anything
    /// missing or unparsable.
    pub fn from_attributes<A: DataAttributes + ?Sized>(attrs: &A) -> Self {
        let defaults = Self::default();
        Self {
            center: LatLng {
                lat: attrs.parse_or("lat", defaults.center.lat),
                lng: attrs.parse_or("lng", defaults.center.lng),
            },
            zoom: attrs.parse_or("zoom", defaults.zoom),
            title: attrs
                .data("title")
                .filter(|t| !t.trim().is_empty())
                .unwrap_or(defaults.title),
            address: attrs
                .data("address")
                .filter(|a| !a.trim().is_empty())
                .unwrap_or(defaults.address),
            auto_open: attrs.flag_default_off("auto-open"),
        }
    }

    /// Markup for the marker's info window. Title and address are escaped.
    pub fn info_window_html(&self) -> String {
        format!(
            "<div class=\"map-info\"><h3>{}</h3><p>{}</p></div>",
            escape_html(&self.title),
            escape_html(&self.address)
        )
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn attributes_override_defaults() {
        let attrs: HashMap<String, String> = [
            ("lat", "43.6532"),
            ("lng", "-79.3832"),
            ("zoom", "12"),
            ("title", "RaphaMed"),
            ("auto-open", "true"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        let config = MapConfig::from_attributes(&attrs);
        assert_eq!(config.center, LatLng { lat: 43.6532, lng: -79.3832 });
        assert_eq!(config.zoom, 12);
        assert_eq!(config.title, "RaphaMed");
        assert_eq!(config.address, MapConfig::default().address);
        assert!(config.auto_open);
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        let attrs = |key: &str| match key {
            "lat" => Some("north".to_string()),
            "zoom" => Some("300".to_string()),
            "title" => Some("  ".to_string()),
            _ => None,
        };
        assert_eq!(MapConfig::from_attributes(&attrs), MapConfig::default());
    }

    #[test]
    fn info_window_escapes_markup() {
        let config = MapConfig {
            title: "<b>RaphaMed</b>".to_string(),
            address: "1 King & Bay".to_string(),
            ..MapConfig::default()
        };
        let html = config.info_window_html();
        assert!(html.contains("&lt;b&gt;RaphaMed&lt;/b&gt;"));
        assert!(html.contains("1 King &amp; Bay"));
    }
}
