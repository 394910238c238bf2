//! Crowd Challenge Component
//!
//! Challenge cards with funding progress, deadline countdown, and a
//! support-package modal. Choosing a package is display-only; there is no
//! order submission.

use chrono::Utc;
use leptos::prelude::*;

use crate::data;
use crate::models::Challenge;
use crate::progress;

use super::ProgressBar;

#[component]
pub fn CrowdChallengeFeature() -> impl IntoView {
    let challenges = data::challenges();
    let (selected_challenge, set_selected_challenge) = signal::<Option<Challenge>>(None);

    view! {
        <div class="crowd-challenge">
            <div class="feature-intro">
                <h2>"群體支持挑戰"</h2>
                <p>"集眾人之力，完成有意義的目標。每一次支持，都在創造改變。"</p>
            </div>

            <div class="challenge-grid">
                {challenges.into_iter().map(|challenge| {
                    let for_modal = challenge.clone();
                    view! {
                        <ChallengeCard
                            challenge=challenge
                            on_support=Callback::new(move |_| {
                                set_selected_challenge.set(Some(for_modal.clone()))
                            })
                        />
                    }
                }).collect_view()}
            </div>

            {move || selected_challenge.get().map(|challenge| view! {
                <SupportModal
                    challenge=challenge
                    on_close=Callback::new(move |_| set_selected_challenge.set(None))
                />
            })}
        </div>
    }
}

#[component]
fn ChallengeCard(challenge: Challenge, on_support: Callback<()>) -> impl IntoView {
    let days_left = progress::days_remaining(&challenge.deadline, Utc::now());

    view! {
        <div class="challenge-card">
            <img src=challenge.image.clone() alt=challenge.title.clone() />
            <div class="challenge-body">
                <p class="card-org">{challenge.organization.clone()}</p>
                <h3>{challenge.title.clone()}</h3>
                <p class="challenge-desc">{challenge.description.clone()}</p>

                <div class="challenge-progress">
                    <div class="progress-labels">
                        <span>"進度"</span>
                        <span class="progress-numbers">
                            {challenge.current}" / "{challenge.goal}" 份"
                        </span>
                    </div>
                    <ProgressBar current=challenge.current goal=challenge.goal />
                </div>

                <div class="challenge-stats">
                    <div>
                        <p class="stat-value">{days_left}</p>
                        <p class="stat-label">"剩餘天數"</p>
                    </div>
                    <div>
                        <p class="stat-value">{challenge.participants}</p>
                        <p class="stat-label">"參與人數"</p>
                    </div>
                </div>

                <div class="challenge-actions">
                    <button class="support-btn" on:click=move |_| on_support.run(())>
                        "支持挑戰"
                    </button>
                    <button class="share-btn" aria-label="分享">"分享"</button>
                </div>
            </div>
        </div>
    }
}

/// Support-package chooser; terminal display-only behavior
#[component]
fn SupportModal(challenge: Challenge, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal support-modal" on:click=|ev| ev.stop_propagation()>
                <button class="modal-close" on:click=move |_| on_close.run(())>
                    "✕"
                </button>
                <div class="support-modal-body">
                    <p class="card-org">{challenge.organization.clone()}</p>
                    <h2>"選擇您的支持方案"</h2>
                    <p class="support-tagline">"您的每一份支持，都是圓夢的力量。"</p>

                    <div class="package-list">
                        {challenge.packages.iter().cloned().map(|pkg| view! {
                            <div class="package-entry">
                                <div class="package-info">
                                    <h4>{pkg.name}</h4>
                                    <p>{pkg.description}</p>
                                    <p class="package-contribution">
                                        "貢獻 "{pkg.contribution}" 份進度"
                                    </p>
                                </div>
                                <div class="package-price">
                                    <p>"$"{pkg.price}</p>
                                    <button class="package-choose-btn">"選擇"</button>
                                </div>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
