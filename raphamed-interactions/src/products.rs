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

//! Product catalog shown on the landing page and its category filter.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Gloves,
    Injection,
    WoundCare,
    Masks,
}

impl Category {
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Gloves => "gloves",
            Category::Injection => "injection",
            Category::WoundCare => "wound-care",
            Category::Masks => "masks",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Gloves => "Gloves",
            Category::Injection => "Injection",
            Category::WoundCare => "Wound Care",
            Category::Masks => "Masks",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub name: &'static str,
    pub short_name: &'static str,
    pub category: Category,
    pub price_cents: u32,
}

impl Product {
    pub fn price(&self) -> String {
        format!("${}.{:02}", self.price_cents / 100, self.price_cents % 100)
    }
}

pub const CATALOG: &[Product] = &[
    Product {
        name: "Medical Nitrile Gloves – ASTM Level 3",
        short_name: "Nitrile Gloves",
        category: Category::Gloves,
        price_cents: 1499,
    },
    Product {
        name: "Sterile Syringes",
        short_name: "Syringes",
        category: Category::Injection,
        price_cents: 1999,
    },
    Product {
        name: "Sterile Gauze Pads",
        short_name: "Gauze",
        category: Category::WoundCare,
        price_cents: 999,
    },
    Product {
        name: "ASTM Level 3 Medical Masks",
        short_name: "Masks",
        category: Category::Masks,
        price_cents: 2499,
    },
];

/// Selected filter button. `None` shows everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductFilter {
    active: Option<Category>,
}

impl ProductFilter {
    pub fn active(&self) -> Option<Category> {
        self.active
    }

    pub fn select(&mut self, category: Option<Category>) {
        log::debug!(
            "filtered to: {}",
            category.map_or("all", |c| c.slug())
        );
        self.active = category;
    }

    pub fn shows(&self, category: Category) -> bool {
        self.active.map_or(true, |active| active == category)
    }

    pub fn visible<'a>(&self, products: &'a [Product]) -> impl Iterator<Item = &'a Product> + 'a {
        let filter = *self;
        products.iter().filter(move |p| filter.shows(p.category))
    }
}

/// Categories in catalog order, without duplicates.
pub fn categories(products: &[Product]) -> Vec<Category> {
    let mut seen = Vec::new();
    for p in products {
        if !seen.contains(&p.category) {
            seen.push(p.category);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_filter_shows_everything() {
        let filter = ProductFilter::default();
        assert_eq!(filter.visible(CATALOG).count(), CATALOG.len());
    }

    #[test]
    fn category_filter_narrows_catalog() {
        let mut filter = ProductFilter::default();
        filter.select(Some(Category::Masks));
        let names: Vec<_> = filter.visible(CATALOG).map(|p| p.short_name).collect();
        assert_eq!(names, vec!["Masks"]);
        filter.select(None);
        assert!(filter.shows(Category::Gloves));
    }

    #[test]
    fn prices_format_with_cents() {
        assert_eq!(CATALOG[2].price(), "$9.99");
        assert_eq!(
            Product {
                price_cents: 2000,
                ..CATALOG[0]
            }
            .price(),
            "$20.00"
        );
    }

    #[test]
    fn categories_keep_catalog_order() {
        assert_eq!(
            categories(CATALOG),
            vec![
                Category::Gloves,
                Category::Injection,
                Category::WoundCare,
                Category::Masks
            ]
        );
    }
}
