use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Interest, InterestCategory};

/// How active a user is on social media
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialMediaActivity {
    Low,
    #[default]
    Medium,
    High,
}

/// A single historical purchase attached to a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRecord {
    pub id: String,
    pub product_name: String,
    /// Free-text category, e.g. "Gadgets"
    pub category: String,
    pub price: f64,
    pub date: NaiveDate,
}

/// Demographic, behavioral and preference data for one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: u32,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub occupation: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub interests: Vec<Interest>,
    #[serde(default)]
    pub purchase_history: Vec<PurchaseRecord>,
    /// 0-100
    #[serde(default)]
    pub engagement_score: u8,
    /// 0-10
    #[serde(default)]
    pub sentiment_score: u8,
    #[serde(default)]
    pub social_media_activity: SocialMediaActivity,
}

impl UserProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn interest_ids(&self) -> Vec<&str> {
        self.interests.iter().map(|i| i.id.as_str()).collect()
    }

    pub fn interest_categories(&self) -> Vec<InterestCategory> {
        let mut categories: Vec<InterestCategory> = Vec::new();
        for interest in &self.interests {
            if !categories.contains(&interest.category) {
                categories.push(interest.category);
            }
        }
        categories
    }

    pub fn has_interest_in(&self, category: InterestCategory) -> bool {
        self.interests.iter().any(|i| i.category == category)
    }

    /// Replaces the interest set, keeping the first occurrence of each id
    pub fn set_interests(&mut self, interests: Vec<Interest>) {
        let mut unique: Vec<Interest> = Vec::with_capacity(interests.len());
        for interest in interests {
            if !unique.iter().any(|i| i.id == interest.id) {
                unique.push(interest);
            }
        }
        self.interests = unique;
    }

    /// Purchase history ordered by date, most recent first
    pub fn transactions_newest_first(&self) -> Vec<PurchaseRecord> {
        let mut sorted = self.purchase_history.clone();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }
}
