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

//! Static EN/FR string swap for the hero and header.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Fr];

    /// Value for the document's `lang` attribute.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }

    /// Locale for a document `lang` value such as `fr-CA`. Only the primary
    /// subtag is considered.
    pub fn from_lang_tag(tag: &str) -> Option<Locale> {
        tag.split(['-', '_']).next()?.parse().ok()
    }

    pub fn strings(&self) -> &'static Strings {
        match self {
            Locale::En => &EN,
            Locale::Fr => &FR,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code().to_uppercase())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "fr" => Ok(Locale::Fr),
            other => Err(format!("unsupported language `{other}`")),
        }
    }
}

/// The fixed set of swappable display strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta: &'static str,
    pub secondary_cta: &'static str,
    pub quote: &'static str,
}

static EN: Strings = Strings {
    title: "Professional Health & Wellness Solutions You Can Trust",
    subtitle: "Delivering dependable, ethical, and high-quality wellness solutions designed to protect and support communities.",
    cta: "Explore Products",
    secondary_cta: "Contact Us",
    quote: "Request a Quote",
};

static FR: Strings = Strings {
    title: "Des solutions professionnelles de santé et de bien-être dignes de confiance",
    subtitle: "Des solutions de bien-être fiables, éthiques et de grande qualité, conçues pour protéger et soutenir les communautés.",
    cta: "Découvrir nos produits",
    secondary_cta: "Nous joindre",
    quote: "Demander un devis",
};
