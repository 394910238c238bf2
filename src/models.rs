//! Data Model
//!
//! Catalog entry types shared by all four features. Catalogs are loaded once
//! at startup and never mutated; components only reorder or drop references.

use serde::{Deserialize, Serialize};

/// A story card backed by a charity organization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub id: u32,
    pub organization: String,
    pub title: String,
    pub content: String,
    pub image: String,
}

/// A surprise card (no organization, never collected)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surprise {
    pub id: u32,
    pub title: String,
    pub content: String,
}

/// A card in the story deck.
///
/// Only `Story` cards extend the collected list on a right swipe; matches on
/// this enum must stay exhaustive so that rule is visible at every site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StoryCard {
    Story(Story),
    Surprise(Surprise),
}

impl StoryCard {
    pub fn id(&self) -> u32 {
        match self {
            StoryCard::Story(s) => s.id,
            StoryCard::Surprise(s) => s.id,
        }
    }
}

/// A purchasable unit contributing toward a challenge's goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportPackage {
    pub id: String,
    pub name: String,
    pub price: u32,
    pub description: String,
    /// How many units this package contributes to the goal
    pub contribution: u32,
}

/// A crowdfunding-style group challenge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    pub id: String,
    pub title: String,
    pub organization: String,
    pub description: String,
    /// Target number of units; always positive in source data
    pub goal: u32,
    /// Running total of supported units
    pub current: u32,
    /// YYYY-MM-DD
    pub deadline: String,
    pub participants: u32,
    pub image: String,
    pub product_name: String,
    pub packages: Vec<SupportPackage>,
}

/// A catering provider matched against people/budget constraints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CateringProvider {
    pub id: String,
    pub name: String,
    pub specialties: Vec<String>,
    /// min_people <= max_people in source data
    pub min_people: u32,
    pub max_people: u32,
    pub price_per_person: u32,
    pub delivery_time: String,
    /// Charity issue tag (公益議題)
    pub issue: String,
    pub description: String,
    pub image: String,
}

/// Product category (closed enum)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductType {
    Cookie,
    Cake,
    Snack,
    GiftBox,
}

impl ProductType {
    pub const ALL: [ProductType; 4] = [
        ProductType::Cookie,
        ProductType::Cake,
        ProductType::Snack,
        ProductType::GiftBox,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProductType::Cookie => "餅乾",
            ProductType::Cake => "蛋糕",
            ProductType::Snack => "點心",
            ProductType::GiftBox => "禮盒",
        }
    }
}

/// Product style (closed enum)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductStyle {
    Healthy,
    Festive,
    Creative,
}

impl ProductStyle {
    pub const ALL: [ProductStyle; 3] = [
        ProductStyle::Healthy,
        ProductStyle::Festive,
        ProductStyle::Creative,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProductStyle::Healthy => "健康取向",
            ProductStyle::Festive => "節慶限定",
            ProductStyle::Creative => "創意口味",
        }
    }
}

/// Charity issue supported by a product (closed enum)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharityIssue {
    ShelteredWorkshop,
    RuralEducation,
    WomenEmployment,
}

impl CharityIssue {
    pub const ALL: [CharityIssue; 3] = [
        CharityIssue::ShelteredWorkshop,
        CharityIssue::RuralEducation,
        CharityIssue::WomenEmployment,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CharityIssue::ShelteredWorkshop => "庇護工坊",
            CharityIssue::RuralEducation => "偏鄉教育",
            CharityIssue::WomenEmployment => "婦女就業",
        }
    }
}

/// A catalog product, read/filter/sort only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub organization: String,
    pub price: u32,
    pub image: String,
    pub product_type: ProductType,
    pub style: ProductStyle,
    pub issue: CharityIssue,
    /// YYYY-MM-DD
    pub date_added: String,
    pub sales: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_card_json_round_trip() {
        let story = StoryCard::Story(Story {
            id: 7,
            organization: "喜樂庇護工場".to_string(),
            title: "小安的第一爐餅乾".to_string(),
            content: "content".to_string(),
            image: "img.jpg".to_string(),
        });
        let surprise = StoryCard::Surprise(Surprise {
            id: 8,
            title: "驚喜！".to_string(),
            content: "content".to_string(),
        });

        // variants carry their tag so the card type survives serialization
        let story_json = serde_json::to_string(&story).expect("serialize story");
        assert!(story_json.contains("\"type\":\"Story\""));
        let surprise_json = serde_json::to_string(&surprise).expect("serialize surprise");
        assert!(surprise_json.contains("\"type\":\"Surprise\""));

        let story_back: StoryCard = serde_json::from_str(&story_json).expect("deserialize story");
        assert_eq!(story_back, story);
        let surprise_back: StoryCard =
            serde_json::from_str(&surprise_json).expect("deserialize surprise");
        assert_eq!(surprise_back, surprise);
    }
}
