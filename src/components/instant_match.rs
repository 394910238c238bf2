//! Instant Match Component
//!
//! Catering request form feeding the scoring engine in [`crate::matching`].
//! Unusable numeric input degrades to a randomized recommendation set, never
//! an error message.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::data;
use crate::matching;
use crate::models::CateringProvider;

/// Event type options for the request form
const EVENT_TYPES: &[(&str, &str)] = &[
    ("company", "企業活動"),
    ("school", "學校聚會"),
    ("personal", "私人派對"),
    ("wedding", "婚禮宴客"),
    ("holiday", "節慶贈禮"),
    ("other", "其他"),
];

#[component]
pub fn InstantMatchFeature() -> impl IntoView {
    let providers = StoredValue::new(data::catering_providers());

    let (people, set_people) = signal(String::new());
    let (budget, set_budget) = signal(String::new());
    let (event_type, set_event_type) = signal(String::from("company"));
    let (details, set_details) = signal(String::new());
    let (results, set_results) = signal(Vec::<CateringProvider>::new());
    let (submitted, set_submitted) = signal(false);
    let (selected_provider, set_selected_provider) = signal::<Option<CateringProvider>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let people_text = people.get();
        let budget_text = budget.get();
        web_sys::console::log_1(
            &format!(
                "[MATCH] request people={:?} budget={:?} event={}",
                people_text,
                budget_text,
                event_type.get(),
            )
            .into(),
        );
        // event type and details are collected but never scored
        let matched = providers.with_value(|all| {
            matching::recommend(all, &people_text, &budget_text, js_sys::Math::random)
        });
        set_results.set(matched);
        set_submitted.set(true);
    };

    view! {
        <div class="instant-match">
            <div class="feature-intro">
                <h2>"即時媒合外燴需求"</h2>
                <p>"告訴我們您的需求，讓我們為您快速找到最合適的公益外燴方案。"</p>
            </div>

            <form class="match-form" on:submit=on_submit>
                <div class="form-field">
                    <label for="people">"人數"</label>
                    <input
                        type="text"
                        id="people"
                        inputmode="numeric"
                        pattern="[0-9]*"
                        placeholder="例如：30"
                        required
                        prop:value=move || people.get()
                        on:input=move |ev| set_people.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-field">
                    <label for="budget">"每人預算 (TWD)"</label>
                    <input
                        type="text"
                        id="budget"
                        inputmode="numeric"
                        pattern="[0-9]*"
                        placeholder="例如：200"
                        required
                        prop:value=move || budget.get()
                        on:input=move |ev| set_budget.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-field wide">
                    <label for="event-type">"活動類型"</label>
                    <select
                        id="event-type"
                        on:change=move |ev| set_event_type.set(event_target_value(&ev))
                    >
                        {EVENT_TYPES.iter().map(|(value, label)| view! {
                            <option value=*value selected=move || event_type.get() == *value>
                                {*label}
                            </option>
                        }).collect_view()}
                    </select>
                </div>
                <div class="form-field wide">
                    <label for="details">"其他需求說明"</label>
                    <textarea
                        id="details"
                        rows=3
                        placeholder="例如：需要無麩質選項、希望有客製化包裝等..."
                        prop:value=move || details.get()
                        on:input=move |ev| {
                            if let Some(target) = ev.target() {
                                if let Some(area) = target.dyn_ref::<web_sys::HtmlTextAreaElement>() {
                                    set_details.set(area.value());
                                }
                            }
                        }
                    ></textarea>
                </div>
                <button type="submit" class="match-submit">"開始媒合"</button>
            </form>

            <Show when=move || submitted.get()>
                <div class="match-results">
                    <h3>"「為您推薦以下 3 個方案」"</h3>
                    <div class="result-grid">
                        <For
                            each=move || results.get()
                            key=|provider| provider.id.clone()
                            children=move |provider| {
                                let for_modal = provider.clone();
                                view! {
                                    <MatchResultCard
                                        provider=provider
                                        on_select=Callback::new(move |_| {
                                            set_selected_provider.set(Some(for_modal.clone()))
                                        })
                                    />
                                }
                            }
                        />
                    </div>
                </div>
            </Show>

            {move || selected_provider.get().map(|provider| view! {
                <ProviderDetailsModal
                    provider=provider
                    on_close=Callback::new(move |_| set_selected_provider.set(None))
                />
            })}
        </div>
    }
}

#[component]
fn MatchResultCard(provider: CateringProvider, on_select: Callback<()>) -> impl IntoView {
    view! {
        <div class="result-card">
            <h3>{provider.name.clone()}</h3>
            <p class="provider-issue">{provider.issue.clone()}</p>
            <div class="provider-facts">
                <p><span>"特色餐點："</span>{provider.specialties.join("、")}</p>
                <p><span>"建議人數："</span>{provider.min_people}" - "{provider.max_people}" 人"</p>
                <p><span>"預估單價："</span>"$"{provider.price_per_person}" / 人"</p>
                <p><span>"預估出貨："</span>{provider.delivery_time.clone()}</p>
            </div>
            <button class="select-btn" on:click=move |_| on_select.run(())>
                "選擇此方案"
            </button>
        </div>
    }
}

/// Provider detail view; the order button is terminal display-only behavior
#[component]
fn ProviderDetailsModal(provider: CateringProvider, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal provider-modal" on:click=|ev| ev.stop_propagation()>
                <button class="modal-close" on:click=move |_| on_close.run(())>
                    "✕"
                </button>
                <div class="provider-modal-grid">
                    <img src=provider.image.clone() alt=provider.name.clone() />
                    <div class="provider-modal-body">
                        <h3>{provider.name.clone()}</h3>
                        <p class="provider-issue">{provider.issue.clone()}</p>
                        <p class="provider-desc">{provider.description.clone()}</p>
                        <div class="provider-facts">
                            <p><span>"特色餐點："</span>{provider.specialties.join("、")}</p>
                            <p><span>"建議人數："</span>{provider.min_people}" - "{provider.max_people}" 人"</p>
                            <p><span>"預估單價："</span>"$"{provider.price_per_person}" / 人"</p>
                            <p><span>"預估出貨："</span>{provider.delivery_time.clone()}</p>
                        </div>
                        <button class="confirm-btn">"確認訂購此方案"</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
