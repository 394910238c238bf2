//! Story Deck Engine
//!
//! Ordered card stack (top = last element) plus the pointer-drag gesture
//! state machine. The machine has three phases — Idle, Dragging, Settling —
//! and swipe commits are only possible from Idle/Dragging, so a second swipe
//! cannot start while a settle timer is in flight.

use crate::models::{Story, StoryCard};

/// Horizontal displacement needed to commit a swipe
pub const SWIPE_THRESHOLD_PX: f64 = 75.0;
/// Drag rotation: degrees per pixel of horizontal offset
pub const ROTATION_DIVISOR: f64 = 20.0;
/// Settle/snap-back animation duration
pub const SETTLE_MS: u32 = 300;
/// Fling rotation magnitude in degrees
const FLING_ROTATION_DEG: f64 = 30.0;
/// Fling vertical drop in pixels
const FLING_DROP_PX: f64 = 50.0;

/// Committed swipe direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Skip the top card
    Left,
    /// Collect the top card
    Right,
}

/// Transform applied to the top card for display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPose {
    pub x: f64,
    pub y: f64,
    pub rot: f64,
}

impl CardPose {
    pub const NEUTRAL: CardPose = CardPose { x: 0.0, y: 0.0, rot: 0.0 };
}

/// Gesture phase of the top card
#[derive(Debug, Clone, Copy, PartialEq)]
enum GesturePhase {
    Idle,
    Dragging { start_x: f64 },
    /// Animating; `commit` is the swipe to apply when the timer fires
    Settling { commit: Option<SwipeDirection> },
}

/// Outcome of releasing a drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEnd {
    /// Displacement crossed the threshold; a settle timer must be scheduled
    Commit(SwipeDirection),
    /// Below threshold; card animates back, timer must still be scheduled
    Snapback,
    /// No drag was in progress
    Ignored,
}

/// The story deck and its interaction state
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    /// Remaining cards; top of the deck is the last element
    cards: Vec<StoryCard>,
    collected_count: u32,
    /// Collected stories, most recently collected first
    collected: Vec<Story>,
    phase: GesturePhase,
    pose: CardPose,
}

impl Deck {
    pub fn new(cards: Vec<StoryCard>) -> Self {
        Self {
            cards,
            collected_count: 0,
            collected: Vec::new(),
            phase: GesturePhase::Idle,
            pose: CardPose::NEUTRAL,
        }
    }

    pub fn cards(&self) -> &[StoryCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn top(&self) -> Option<&StoryCard> {
        self.cards.last()
    }

    pub fn collected_count(&self) -> u32 {
        self.collected_count
    }

    pub fn collected(&self) -> &[Story] {
        &self.collected
    }

    pub fn pose(&self) -> CardPose {
        self.pose
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, GesturePhase::Dragging { .. })
    }

    /// True while a settle or snap-back animation is in flight
    pub fn is_settling(&self) -> bool {
        matches!(self.phase, GesturePhase::Settling { .. })
    }

    /// Capture the starting pointer position. No-op unless a top card exists
    /// and the machine is idle.
    pub fn begin_drag(&mut self, x: f64) {
        if self.cards.is_empty() || self.phase != GesturePhase::Idle {
            return;
        }
        self.phase = GesturePhase::Dragging { start_x: x };
    }

    /// Track the pointer while dragging; vertical offset stays 0.
    pub fn update_drag(&mut self, x: f64) {
        if let GesturePhase::Dragging { start_x } = self.phase {
            let dx = x - start_x;
            self.pose = CardPose {
                x: dx,
                y: 0.0,
                rot: dx / ROTATION_DIVISOR,
            };
        }
    }

    /// Release the drag. Past the threshold this commits a swipe and enters
    /// Settling; otherwise the card snaps back (also via Settling, so the
    /// action buttons stay disabled during the animation). The caller
    /// schedules a [`SETTLE_MS`] timer that calls [`Deck::settle`].
    pub fn end_drag(&mut self, x: f64, screen_width: f64) -> DragEnd {
        let GesturePhase::Dragging { start_x } = self.phase else {
            return DragEnd::Ignored;
        };
        let dx = x - start_x;
        if dx > SWIPE_THRESHOLD_PX {
            self.fling(SwipeDirection::Right, screen_width);
            DragEnd::Commit(SwipeDirection::Right)
        } else if dx < -SWIPE_THRESHOLD_PX {
            self.fling(SwipeDirection::Left, screen_width);
            DragEnd::Commit(SwipeDirection::Left)
        } else {
            self.phase = GesturePhase::Settling { commit: None };
            self.pose = CardPose::NEUTRAL;
            DragEnd::Snapback
        }
    }

    /// Button-initiated swipe. Ignored while the deck is empty or an
    /// animation is in flight; returns whether the swipe was accepted.
    pub fn swipe(&mut self, direction: SwipeDirection, screen_width: f64) -> bool {
        if self.cards.is_empty() || self.phase != GesturePhase::Idle {
            return false;
        }
        self.fling(direction, screen_width);
        true
    }

    fn fling(&mut self, direction: SwipeDirection, screen_width: f64) {
        let sign = match direction {
            SwipeDirection::Right => 1.0,
            SwipeDirection::Left => -1.0,
        };
        self.pose = CardPose {
            x: sign * screen_width,
            y: FLING_DROP_PX,
            rot: sign * FLING_ROTATION_DEG,
        };
        self.phase = GesturePhase::Settling { commit: Some(direction) };
    }

    /// Complete the pending transition once the settle timer fires. A
    /// committed right swipe pops the top card and counts it as collected;
    /// only Story cards extend the collected list. Left swipes pop without
    /// collecting; a snap-back just returns to Idle.
    pub fn settle(&mut self) {
        let GesturePhase::Settling { commit } = self.phase else {
            return;
        };
        if let Some(direction) = commit {
            if let Some(card) = self.cards.pop() {
                if direction == SwipeDirection::Right {
                    self.collected_count += 1;
                    match card {
                        StoryCard::Story(story) => self.collected.insert(0, story),
                        StoryCard::Surprise(_) => {}
                    }
                }
            }
        }
        self.phase = GesturePhase::Idle;
        self.pose = CardPose::NEUTRAL;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Story, StoryCard, Surprise};

    const SCREEN: f64 = 1000.0;

    fn make_story(id: u32) -> StoryCard {
        StoryCard::Story(Story {
            id,
            organization: format!("Org {}", id),
            title: format!("Story {}", id),
            content: "content".to_string(),
            image: "img.jpg".to_string(),
        })
    }

    fn make_surprise(id: u32) -> StoryCard {
        StoryCard::Surprise(Surprise {
            id,
            title: format!("Surprise {}", id),
            content: "content".to_string(),
        })
    }

    /// 5 cards, top (last) is a Story
    fn make_deck() -> Deck {
        Deck::new(vec![
            make_surprise(1),
            make_story(2),
            make_surprise(3),
            make_story(4),
            make_story(5),
        ])
    }

    #[test]
    fn test_right_swipe_collects_story() {
        let mut deck = make_deck();
        assert!(deck.swipe(SwipeDirection::Right, SCREEN));
        deck.settle();

        assert_eq!(deck.len(), 4);
        assert_eq!(deck.collected_count(), 1);
        assert_eq!(deck.collected().len(), 1);
        assert_eq!(deck.collected()[0].id, 5);
    }

    #[test]
    fn test_right_swipe_on_surprise_counts_but_does_not_collect() {
        let mut deck = Deck::new(vec![make_surprise(1)]);
        deck.swipe(SwipeDirection::Right, SCREEN);
        deck.settle();

        assert_eq!(deck.collected_count(), 1);
        assert!(deck.collected().is_empty());
    }

    #[test]
    fn test_left_swipe_never_collects() {
        let mut deck = make_deck();
        deck.swipe(SwipeDirection::Left, SCREEN);
        deck.settle();

        assert_eq!(deck.len(), 4);
        assert_eq!(deck.collected_count(), 0);
        assert!(deck.collected().is_empty());
    }

    #[test]
    fn test_collected_count_equals_right_swipes_and_is_most_recent_first() {
        let mut deck = make_deck();
        // top-down: story 5, story 4, surprise 3, story 2, surprise 1
        let swipes = [
            SwipeDirection::Right, // story 5
            SwipeDirection::Left,  // story 4
            SwipeDirection::Right, // surprise 3
            SwipeDirection::Right, // story 2
            SwipeDirection::Left,  // surprise 1
        ];
        for dir in swipes {
            deck.swipe(dir, SCREEN);
            deck.settle();
        }

        assert!(deck.is_empty());
        assert_eq!(deck.collected_count(), 3);
        let ids: Vec<u32> = deck.collected().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 5]);
    }

    #[test]
    fn test_swipe_ignored_while_settling() {
        let mut deck = make_deck();
        assert!(deck.swipe(SwipeDirection::Right, SCREEN));
        assert!(deck.is_settling());
        // Second swipe before the timer fires must be rejected
        assert!(!deck.swipe(SwipeDirection::Left, SCREEN));
        deck.settle();

        assert_eq!(deck.len(), 4);
        assert_eq!(deck.collected_count(), 1);
    }

    #[test]
    fn test_swipe_ignored_on_empty_deck() {
        let mut deck = Deck::new(Vec::new());
        assert!(!deck.swipe(SwipeDirection::Right, SCREEN));
        deck.settle();
        assert_eq!(deck.collected_count(), 0);
    }

    #[test]
    fn test_drag_commit_right() {
        let mut deck = make_deck();
        deck.begin_drag(100.0);
        deck.update_drag(180.0);
        assert_eq!(deck.pose(), CardPose { x: 80.0, y: 0.0, rot: 4.0 });

        let end = deck.end_drag(180.0, SCREEN);
        assert_eq!(end, DragEnd::Commit(SwipeDirection::Right));
        assert_eq!(deck.pose().x, SCREEN);
        deck.settle();
        assert_eq!(deck.collected_count(), 1);
    }

    #[test]
    fn test_drag_below_threshold_snaps_back() {
        let mut deck = make_deck();
        deck.begin_drag(100.0);
        deck.update_drag(160.0);

        // 60px < 75px threshold
        let end = deck.end_drag(160.0, SCREEN);
        assert_eq!(end, DragEnd::Snapback);
        assert!(deck.is_settling());
        assert_eq!(deck.pose(), CardPose::NEUTRAL);

        deck.settle();
        assert!(!deck.is_settling());
        assert_eq!(deck.len(), 5);
        assert_eq!(deck.collected_count(), 0);
    }

    #[test]
    fn test_drag_commit_left() {
        let mut deck = make_deck();
        deck.begin_drag(300.0);
        let end = deck.end_drag(200.0, SCREEN);
        assert_eq!(end, DragEnd::Commit(SwipeDirection::Left));
        assert_eq!(deck.pose().x, -SCREEN);
        assert_eq!(deck.pose().rot, -30.0);
        deck.settle();
        assert_eq!(deck.len(), 4);
    }

    #[test]
    fn test_drag_ignored_while_settling_or_empty() {
        let mut deck = make_deck();
        deck.swipe(SwipeDirection::Right, SCREEN);
        deck.begin_drag(100.0);
        assert!(!deck.is_dragging());
        assert_eq!(deck.end_drag(400.0, SCREEN), DragEnd::Ignored);

        let mut empty = Deck::new(Vec::new());
        empty.begin_drag(100.0);
        assert!(!empty.is_dragging());
    }

    #[test]
    fn test_update_drag_without_begin_is_noop() {
        let mut deck = make_deck();
        deck.update_drag(500.0);
        assert_eq!(deck.pose(), CardPose::NEUTRAL);
    }
}
