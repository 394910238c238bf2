//! Smart Search Component
//!
//! Text search, multi-select filters, and sort order over the product
//! catalog. The visible list is a `Memo` over (query, filters, sort) so every
//! input change recomputes it from the immutable catalog.

use leptos::prelude::*;

use crate::catalog::{self, ProductFilters, SortKey};
use crate::data;
use crate::models::{CharityIssue, Product, ProductStyle, ProductType};

#[component]
pub fn SmartSearchFeature() -> impl IntoView {
    let products = StoredValue::new(data::products());

    let (query, set_query) = signal(String::new());
    let (filters, set_filters) = signal(ProductFilters::default());
    let (sort, set_sort) = signal(SortKey::default());

    let visible = Memo::new(move |_| {
        products.with_value(|all| {
            catalog::filter_and_sort(all, &query.get(), &filters.get(), sort.get())
        })
    });

    view! {
        <div class="smart-search">
            <div class="feature-intro">
                <h2>"智慧搜尋與篩選"</h2>
                <p>"輕鬆找到最符合您心意的公益商品。"</p>
            </div>

            <div class="search-box">
                <input
                    type="text"
                    placeholder="輸入商品、風格或議題…"
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
            </div>

            <div class="search-layout">
                <aside class="filter-panel">
                    <h2>"篩選條件"</h2>
                    <FilterSection title="產品種類">
                        {ProductType::ALL.iter().map(|value| {
                            let value = *value;
                            view! {
                                <FilterCheckbox
                                    label=value.label()
                                    checked=Signal::derive(move || {
                                        filters.with(|f| f.types.contains(&value))
                                    })
                                    on_toggle=Callback::new(move |_| {
                                        set_filters.update(|f| f.toggle_type(value))
                                    })
                                />
                            }
                        }).collect_view()}
                    </FilterSection>
                    <FilterSection title="產品風格">
                        {ProductStyle::ALL.iter().map(|value| {
                            let value = *value;
                            view! {
                                <FilterCheckbox
                                    label=value.label()
                                    checked=Signal::derive(move || {
                                        filters.with(|f| f.styles.contains(&value))
                                    })
                                    on_toggle=Callback::new(move |_| {
                                        set_filters.update(|f| f.toggle_style(value))
                                    })
                                />
                            }
                        }).collect_view()}
                    </FilterSection>
                    <FilterSection title="公益議題">
                        {CharityIssue::ALL.iter().map(|value| {
                            let value = *value;
                            view! {
                                <FilterCheckbox
                                    label=value.label()
                                    checked=Signal::derive(move || {
                                        filters.with(|f| f.issues.contains(&value))
                                    })
                                    on_toggle=Callback::new(move |_| {
                                        set_filters.update(|f| f.toggle_issue(value))
                                    })
                                />
                            }
                        }).collect_view()}
                    </FilterSection>
                </aside>

                <main class="search-results">
                    <div class="results-toolbar">
                        <p>"找到 "{move || visible.get().len()}" 件商品"</p>
                        <select on:change=move |ev| {
                            set_sort.set(SortKey::from_str(&event_target_value(&ev)))
                        }>
                            {SortKey::ALL.iter().map(|key| {
                                let key = *key;
                                view! {
                                    <option
                                        value=key.as_str()
                                        selected=move || sort.get() == key
                                    >
                                        {key.label()}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </div>

                    <Show
                        when=move || !visible.get().is_empty()
                        fallback=|| view! {
                            <div class="no-results">
                                <p class="no-results-title">"找不到符合條件的商品"</p>
                                <p>"請試著調整您的搜尋關鍵字或篩選條件。"</p>
                            </div>
                        }
                    >
                        <div class="product-grid">
                            <For
                                each=move || visible.get()
                                key=|product| product.id.clone()
                                children=move |product| view! { <ProductCard product=product /> }
                            />
                        </div>
                    </Show>
                </main>
            </div>
        </div>
    }
}

#[component]
fn FilterSection(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="filter-section">
            <h3>{title}</h3>
            <div class="filter-options">{children()}</div>
        </div>
    }
}

#[component]
fn FilterCheckbox(
    label: &'static str,
    checked: Signal<bool>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <label class="filter-checkbox">
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |_| on_toggle.run(())
            />
            <span>{label}</span>
        </label>
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    view! {
        <div class="product-card">
            <img src=product.image.clone() alt=product.name.clone() />
            <div class="product-body">
                <span class="product-issue">{product.issue.label()}</span>
                <h3>{product.name.clone()}</h3>
                <p class="product-org">{product.organization.clone()}</p>
                <p class="product-price">"$"{product.price}</p>
            </div>
        </div>
    }
}
