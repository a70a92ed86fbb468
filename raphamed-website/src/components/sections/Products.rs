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

use crate::components::{use_locale, Reveal};
use leptos::prelude::*;
use raphamed_interactions::products::{categories, Category, Product, CATALOG};
use raphamed_interactions::{ProductFilter, Section};

#[component]
pub fn ProductsSection() -> impl IntoView {
    let filter = RwSignal::new(ProductFilter::default());
    let selected = move |category: Option<Category>| filter.with(|f| f.active() == category);

    view! {
        <section id=Section::PRODUCTS.id() class="products">
            <div class="container">
                <div class="section-header">
                    <h2>"Our Products"</h2>
                    <p>"Certified essentials for every point of care."</p>
                </div>

                <div class="product-filters" role="toolbar" aria-label="Filter products">
                    <button
                        type="button"
                        class="filter-btn"
                        class:active=move || selected(None)
                        data-filter="all"
                        on:click=move |_| filter.update(|f| f.select(None))
                    >
                        "All"
                    </button>
                    {categories(CATALOG)
                        .into_iter()
                        .map(|category| {
                            view! {
                                <button
                                    type="button"
                                    class="filter-btn"
                                    class:active=move || selected(Some(category))
                                    data-filter=category.slug()
                                    on:click=move |_| filter.update(|f| f.select(Some(category)))
                                >
                                    {category.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="product-grid">
                    {CATALOG
                        .iter()
                        .map(|product| view! { <ProductCard product=*product filter=filter/> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProductCard(product: Product, filter: RwSignal<ProductFilter>) -> impl IntoView {
    let hidden = move || !filter.with(|f| f.shows(product.category));
    let locale = use_locale();

    view! {
        <div class="product-card-wrapper" class:hidden=hidden data-category=product.category.slug()>
            <Reveal class="product-card">
                <span class="product-category">{product.category.label()}</span>
                <h3>{product.name}</h3>
                <p class="product-price">{product.price()}</p>
                <a href=Section::CONTACT.href() class="btn btn-outline">
                    {move || locale.get().strings().quote}
                </a>
            </Reveal>
        </div>
    }
}
