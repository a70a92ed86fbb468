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

#![allow(non_snake_case)]

pub mod app;
pub mod components;
pub mod constants;
pub mod deadline;
pub mod dom;
pub mod listeners;
pub mod map;
pub mod pages;
pub mod submitter;

/// Installs the panic hook and the console logger. Safe to call more than
/// once.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(*constants::LOG_LEVEL).is_err() {
        log::debug!("console logger already installed");
    }
}
