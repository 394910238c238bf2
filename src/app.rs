//! GoodBite Frontend App
//!
//! Shell component: tab-based switcher over the four features, with a top
//! nav (desktop) and a bottom nav (mobile). Each feature owns its own state
//! and drops it when the tab changes.

use leptos::prelude::*;

use crate::components::{
    CrowdChallengeFeature, InstantMatchFeature, SmartSearchFeature, StoryDeckFeature,
};

/// Active feature tab
#[derive(Clone, Copy, PartialEq, Eq)]
enum Feature {
    Story,
    Challenge,
    Match,
    Search,
}

const NAV_ITEMS: &[(Feature, &str)] = &[
    (Feature::Story, "故事卡片"),
    (Feature::Challenge, "群體挑戰"),
    (Feature::Match, "即時媒合"),
    (Feature::Search, "智慧搜尋"),
];

#[component]
pub fn App() -> impl IntoView {
    let (active_feature, set_active_feature) = signal(Feature::Story);

    view! {
        <div class="app-shell">
            <header class="app-header">
                <div class="header-inner">
                    <div class="brand">
                        <span class="brand-icon">"🏪"</span>
                        <h1 class="brand-title">"GoodBite"</h1>
                    </div>
                    <nav class="top-nav">
                        {NAV_ITEMS.iter().map(|(feature, label)| {
                            let feature = *feature;
                            let is_active = move || active_feature.get() == feature;
                            view! {
                                <button
                                    class=move || if is_active() { "nav-btn active" } else { "nav-btn" }
                                    on:click=move |_| set_active_feature.set(feature)
                                >
                                    {*label}
                                </button>
                            }
                        }).collect_view()}
                    </nav>
                </div>
            </header>

            <main class="app-main">
                {move || match active_feature.get() {
                    Feature::Story => view! { <StoryDeckFeature /> }.into_any(),
                    Feature::Challenge => view! { <CrowdChallengeFeature /> }.into_any(),
                    Feature::Match => view! { <InstantMatchFeature /> }.into_any(),
                    Feature::Search => view! { <SmartSearchFeature /> }.into_any(),
                }}
            </main>

            <div class="bottom-nav">
                {NAV_ITEMS.iter().map(|(feature, label)| {
                    let feature = *feature;
                    let is_active = move || active_feature.get() == feature;
                    view! {
                        <button
                            class=move || if is_active() { "bottom-nav-btn active" } else { "bottom-nav-btn" }
                            on:click=move |_| set_active_feature.set(feature)
                        >
                            <span class="bottom-nav-label">{*label}</span>
                        </button>
                    }
                }).collect_view()}
            </div>

            <footer class="app-footer">
                <p>"GoodBite 公益外燴平台 © 2025. All rights reserved."</p>
            </footer>
        </div>
    }
}
