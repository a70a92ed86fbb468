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

pub mod BackToTop;
pub mod Carousel;
pub mod ContactForm;
pub mod Footer;
pub mod Header;
pub mod LanguageSwitch;
pub mod Page;
pub mod Reveal;

// Section components
pub mod sections {
    pub mod About;
    pub mod Contact;
    pub mod Hero;
    pub mod Products;
    pub mod Testimonials;
}

pub use BackToTop::*;
pub use Carousel::*;
pub use ContactForm::*;
pub use Footer::*;
pub use Header::*;
pub use LanguageSwitch::*;
pub use Page::*;
pub use Reveal::*;
