//! UI Components
//!
//! One Leptos component module per feature, plus shared widgets.

mod crowd_challenge;
mod instant_match;
mod progress_bar;
mod smart_search;
mod story_deck;

pub use crowd_challenge::CrowdChallengeFeature;
pub use instant_match::InstantMatchFeature;
pub use progress_bar::ProgressBar;
pub use smart_search::SmartSearchFeature;
pub use story_deck::StoryDeckFeature;
