//! Story Deck Component
//!
//! Swipeable card stack over the story catalog. Gesture and collection logic
//! live in [`crate::deck`]; this component wires pointer events and the
//! settle timer to it and renders the stack.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::data;
use crate::deck::{Deck, DragEnd, SwipeDirection, SETTLE_MS};
use crate::models::{Story, StoryCard};

/// Viewport width used as the fling distance; falls back when unavailable
fn screen_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1000.0)
}

#[component]
pub fn StoryDeckFeature() -> impl IntoView {
    let (deck, set_deck) = signal(Deck::new(data::story_cards()));
    let (collection_visible, set_collection_visible) = signal(false);

    // Completes the pending swipe or snap-back after the fixed delay. The
    // Settling phase blocks any new gesture until this runs.
    let schedule_settle = move || {
        spawn_local(async move {
            TimeoutFuture::new(SETTLE_MS).await;
            set_deck.update(|d| d.settle());
        });
    };

    let swipe = move |direction: SwipeDirection| {
        let mut accepted = false;
        set_deck.update(|d| accepted = d.swipe(direction, screen_width()));
        if accepted {
            web_sys::console::log_1(&format!("[DECK] swipe {:?}", direction).into());
            schedule_settle();
        }
    };

    let on_pointer_down = move |ev: web_sys::PointerEvent| {
        set_deck.update(|d| d.begin_drag(ev.client_x() as f64));
        if let Some(target) = ev.target() {
            if let Some(el) = target.dyn_ref::<web_sys::Element>() {
                let _ = el.set_pointer_capture(ev.pointer_id());
            }
        }
    };

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        set_deck.update(|d| d.update_drag(ev.client_x() as f64));
    };

    let on_pointer_up = move |ev: web_sys::PointerEvent| {
        if let Some(target) = ev.target() {
            if let Some(el) = target.dyn_ref::<web_sys::Element>() {
                let _ = el.release_pointer_capture(ev.pointer_id());
            }
        }
        let mut outcome = DragEnd::Ignored;
        set_deck.update(|d| outcome = d.end_drag(ev.client_x() as f64, screen_width()));
        match outcome {
            DragEnd::Commit(direction) => {
                web_sys::console::log_1(&format!("[DECK] swipe {:?}", direction).into());
                schedule_settle();
            }
            DragEnd::Snapback => schedule_settle(),
            DragEnd::Ignored => {}
        }
    };

    let controls_disabled = move || deck.with(|d| d.is_empty() || d.is_settling());

    view! {
        <div class="story-deck">
            <div class="deck-intro">
                <h2>"探索公益故事"</h2>
                <p>"向右滑動收藏，向左滑動跳過。你的每一次互動，都是一份支持。"</p>
                <div class="deck-toolbar">
                    <p class="collected-count">
                        "已收藏："{move || deck.with(|d| d.collected_count())}" 篇"
                    </p>
                    <button
                        class="collection-btn"
                        on:click=move |_| set_collection_visible.set(true)
                    >
                        "查看列表"
                    </button>
                </div>
            </div>

            <div class="card-stack">
                {move || {
                    let d = deck.get();
                    if d.is_empty() {
                        view! {
                            <div class="deck-done">
                                <h3>"故事已瀏覽完畢！"</h3>
                                <p>"謝謝您的關注，歡迎稍後再來探索新故事。"</p>
                                <p class="deck-done-count">
                                    "您已收藏了 "
                                    <span>{d.collected_count()}</span>
                                    " 篇動人故事。"
                                </p>
                            </div>
                        }.into_any()
                    } else {
                        let top_index = d.len() - 1;
                        let pose = d.pose();
                        let dragging = d.is_dragging();
                        d.cards().iter().cloned().enumerate().map(|(index, card)| {
                            let is_top = index == top_index;
                            let style = if is_top {
                                format!(
                                    "z-index: {}; transform: translate({}px, {}px) rotate({}deg); transition: {}; touch-action: none; cursor: grab;",
                                    index,
                                    pose.x,
                                    pose.y,
                                    pose.rot,
                                    if dragging { "none" } else { "transform 0.3s ease-out" },
                                )
                            } else {
                                let depth = top_index - index;
                                format!(
                                    "z-index: {}; transform: scale({}) translateY({}px); transition: transform 0.5s;",
                                    index,
                                    1.0 - depth as f64 * 0.05,
                                    depth as f64 * -10.0,
                                )
                            };
                            if is_top {
                                view! {
                                    <div
                                        class="card-slot"
                                        style=style
                                        on:pointerdown=on_pointer_down
                                        on:pointermove=on_pointer_move
                                        on:pointerup=on_pointer_up
                                        on:pointercancel=on_pointer_up
                                    >
                                        <Card card=card />
                                    </div>
                                }.into_any()
                            } else {
                                view! {
                                    <div class="card-slot" style=style>
                                        <Card card=card />
                                    </div>
                                }.into_any()
                            }
                        }).collect_view().into_any()
                    }
                }}
            </div>

            <div class="deck-actions">
                <button
                    class="action-btn skip"
                    disabled=controls_disabled
                    aria-label="跳過"
                    on:click=move |_| swipe(SwipeDirection::Left)
                >
                    "✕"
                </button>
                <button
                    class="action-btn collect"
                    disabled=controls_disabled
                    aria-label="收藏"
                    on:click=move |_| swipe(SwipeDirection::Right)
                >
                    "♥"
                </button>
            </div>

            <Show when=move || collection_visible.get()>
                <CollectedStoriesModal
                    stories=Signal::derive(move || deck.with(|d| d.collected().to_vec()))
                    on_close=Callback::new(move |_| set_collection_visible.set(false))
                />
            </Show>
        </div>
    }
}

/// One card face; Surprise and Story render differently
#[component]
fn Card(card: StoryCard) -> impl IntoView {
    match card {
        StoryCard::Surprise(surprise) => view! {
            <div class="card surprise-card">
                <span class="surprise-icon">"✨"</span>
                <h3>{surprise.title}</h3>
                <p>{surprise.content}</p>
            </div>
        }
        .into_any(),
        StoryCard::Story(story) => view! {
            <div class="card story-card">
                <img src=story.image alt=story.title.clone() />
                <div class="card-body">
                    <p class="card-org">{story.organization}</p>
                    <h3>{story.title}</h3>
                    <p class="card-content">{story.content}</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

/// Modal listing collected stories, most recently collected first
#[component]
fn CollectedStoriesModal(
    stories: Signal<Vec<Story>>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal collection-modal" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>"我收藏的故事"</h2>
                    <button class="modal-close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>
                <Show
                    when=move || !stories.get().is_empty()
                    fallback=|| view! {
                        <div class="collection-empty">
                            <p>"您還沒有收藏任何故事。"</p>
                            <p>"快去探索並向右滑動來收藏您喜歡的故事吧！"</p>
                        </div>
                    }
                >
                    <div class="collection-list">
                        <For
                            each=move || stories.get()
                            key=|story| story.id
                            children=move |story| {
                                view! {
                                    <div class="collection-entry">
                                        <img src=story.image.clone() alt=story.title.clone() />
                                        <div class="collection-entry-body">
                                            <p class="card-org">{story.organization.clone()}</p>
                                            <h3>{story.title.clone()}</h3>
                                            <p>{story.content.clone()}</p>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>
            </div>
        </div>
    }
}
