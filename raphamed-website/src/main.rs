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

use leptos::mount::mount_to_body;
use raphamed_website::app::App;

fn main() {
    raphamed_website::init_logging();
    log::info!(
        "starting site, contact endpoint: {}",
        raphamed_website::constants::CONTACT_FORM_ENDPOINT.unwrap_or("simulated")
    );
    mount_to_body(App);
}
