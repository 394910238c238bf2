//! Progress Bar Component
//!
//! Clamped funding-progress bar for challenge cards.

use leptos::prelude::*;

use crate::progress;

/// Horizontal bar filled to `current / goal`, clamped at 100%
#[component]
pub fn ProgressBar(current: u32, goal: u32) -> impl IntoView {
    let width = format!("width: {}%", progress::percent(current, goal));

    view! {
        <div class="progress-track">
            <div class="progress-fill" style=width></div>
        </div>
    }
}
