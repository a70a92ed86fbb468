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

//! Build-time site configuration.

use log::Level;
use once_cell::sync::Lazy;
use raphamed_interactions::carousel::DEFAULT_AUTOPLAY_DELAY_MS;

/// Where contact requests are POSTed. Unset builds use the simulated
/// submitter.
pub const CONTACT_FORM_ENDPOINT: Option<&str> = std::option_env!("CONTACT_FORM_ENDPOINT");

/// Key for the maps script. Unset builds render the address without a map.
pub const GOOGLE_MAPS_API_KEY: Option<&str> = std::option_env!("GOOGLE_MAPS_API_KEY");

pub const MAPS_SCRIPT_URL: &str = "https://maps.googleapis.com/maps/api/js";

pub static LOG_LEVEL: Lazy<Level> = Lazy::new(|| {
    std::option_env!("LOG_LEVEL")
        .and_then(|level| level.parse().ok())
        .unwrap_or(Level::Info)
});

pub static CAROUSEL_AUTOPLAY_MS: Lazy<u32> = Lazy::new(|| {
    std::option_env!("CAROUSEL_AUTOPLAY_MS")
        .and_then(|ms| ms.trim().parse().ok())
        .unwrap_or(DEFAULT_AUTOPLAY_DELAY_MS)
});

/// Whether the simulated submitter should fail, for exercising the error
/// banner without a backend.
pub static SIMULATE_SUBMIT_FAILURE: Lazy<bool> =
    Lazy::new(|| raphamed_interactions::truthy(std::option_env!("SIMULATE_SUBMIT_FAILURE")));

pub fn maps_script_src(key: &str) -> String {
    format!("{MAPS_SCRIPT_URL}?key={key}&callback=initMap")
}
