use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Category shared by interests and recommendation candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterestCategory {
    Financial,
    Lifestyle,
    Shopping,
    Travel,
    Technology,
    Health,
    Entertainment,
}

impl InterestCategory {
    pub const ALL: [InterestCategory; 7] = [
        InterestCategory::Financial,
        InterestCategory::Lifestyle,
        InterestCategory::Shopping,
        InterestCategory::Travel,
        InterestCategory::Technology,
        InterestCategory::Health,
        InterestCategory::Entertainment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InterestCategory::Financial => "financial",
            InterestCategory::Lifestyle => "lifestyle",
            InterestCategory::Shopping => "shopping",
            InterestCategory::Travel => "travel",
            InterestCategory::Technology => "technology",
            InterestCategory::Health => "health",
            InterestCategory::Entertainment => "entertainment",
        }
    }
}

impl Display for InterestCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A topic a user can follow, identified by `id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interest {
    /// Internal key, e.g. "homeLoan"
    pub id: String,
    /// Display name, e.g. "Home Loan"
    pub name: String,
    pub category: InterestCategory,
}

impl Interest {
    pub fn new(id: &str, name: &str, category: InterestCategory) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category,
        }
    }
}
