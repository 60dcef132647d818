use serde::{Deserialize, Serialize};

use super::InterestCategory;

/// Kind of item being recommended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationType {
    Product,
    Service,
    Content,
    Financial,
    Experience,
}

/// An item eligible for recommendation. Static reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationCandidate {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub recommendation_type: RecommendationType,
    pub category: InterestCategory,
    pub image_ref: String,
    /// Relevance before personalization, 1-100
    pub base_relevance: u8,
    pub call_to_action: String,
    pub target_url: String,
}

impl RecommendationCandidate {
    /// Case-insensitive substring test over title and description
    pub fn mentions(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}

/// A candidate with its personalized score
///
/// All candidate fields are carried through untouched so consumers can keep
/// filtering on `type` and `category`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredRecommendation {
    #[serde(flatten)]
    pub candidate: RecommendationCandidate,
    /// Final score, 0-100
    pub relevance_score: u8,
}

impl ScoredRecommendation {
    pub fn recommendation_type(&self) -> RecommendationType {
        self.candidate.recommendation_type
    }

    pub fn category(&self) -> InterestCategory {
        self.candidate.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate() -> RecommendationCandidate {
        RecommendationCandidate {
            id: "rec6".to_string(),
            title: "Latest Tech Gadget Bundle".to_string(),
            description: "Curated collection of the newest smart home devices.".to_string(),
            recommendation_type: RecommendationType::Product,
            category: InterestCategory::Technology,
            image_ref: "/rec-gadgets.jpg".to_string(),
            base_relevance: 92,
            call_to_action: "Shop Now".to_string(),
            target_url: "#".to_string(),
        }
    }

    #[test]
    fn test_mentions_is_case_insensitive() {
        let candidate = candidate();
        assert!(candidate.mentions("GADGET"));
        assert!(!candidate.mentions("gadgets"));
        assert!(candidate.mentions("SMART HOME"));
        assert!(!candidate.mentions("yoga"));
    }

    #[test]
    fn test_scored_recommendation_keeps_candidate_fields() {
        let scored = ScoredRecommendation {
            candidate: candidate(),
            relevance_score: 100,
        };
        let json = serde_json::to_value(&scored).unwrap();
        assert_eq!(json["id"], "rec6");
        assert_eq!(json["type"], "product");
        assert_eq!(json["category"], "technology");
        assert_eq!(json["baseRelevance"], 92);
        assert_eq!(json["relevanceScore"], 100);
    }
}
