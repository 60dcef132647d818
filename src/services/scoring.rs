use serde::Serialize;

use crate::models::{
    InterestCategory, RecommendationCandidate, RecommendationType, ScoredRecommendation,
    UserProfile,
};

/// Number of recommendations returned when the caller does not ask for a limit
pub const DEFAULT_LIMIT: usize = 6;

/// Upper bound of a relevance score. There is no lower clamp.
pub const MAX_SCORE: f64 = 100.0;

const INTEREST_MATCH_BONUS: f64 = 20.0;
const CATEGORY_MATCH_BONUS: f64 = 15.0;
const ENGAGEMENT_DIVISOR: f64 = 10.0;
const SENTIMENT_WEIGHT: f64 = 2.0;
const AGE_BONUS: f64 = 10.0;
const YOUNG_AGE_LIMIT: u32 = 25;
const MATURE_AGE_LIMIT: u32 = 30;
const OCCUPATION_BONUS: f64 = 8.0;
const LOCATION_BONUS: f64 = 5.0;
const HIGH_VALUE_PURCHASE_BONUS: f64 = 15.0;
const HIGH_VALUE_PRICE: f64 = 100.0;
const PURCHASE_CATEGORY_BONUS: f64 = 10.0;
const FREQUENT_BUYER_BONUS: f64 = 5.0;
const FREQUENT_BUYER_PURCHASES: usize = 3;

/// Per-rule contributions to a candidate's score
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub candidate_id: String,
    pub base: f64,
    pub interest_match: f64,
    pub category_match: f64,
    pub engagement: f64,
    pub sentiment: f64,
    pub age: f64,
    pub occupation: f64,
    pub location: f64,
    pub high_value_purchase: f64,
    pub purchase_category_matches: f64,
    pub frequent_buyer: f64,
    /// Sum of all contributions before clamping
    pub raw_total: f64,
    /// Clamped to `MAX_SCORE`, fractional part dropped
    pub relevance_score: u8,
}

/// Scores a single candidate against a profile.
///
/// Every rule is evaluated independently; none of them short-circuit another.
pub fn score_candidate(
    profile: &UserProfile,
    candidate: &RecommendationCandidate,
) -> ScoreBreakdown {
    let base = f64::from(candidate.base_relevance);

    // Interest ids (not display names) are matched against the text
    let interest_match = if profile
        .interest_ids()
        .into_iter()
        .any(|id| candidate.mentions(id))
    {
        INTEREST_MATCH_BONUS
    } else {
        0.0
    };

    let category_match = if profile.has_interest_in(candidate.category) {
        CATEGORY_MATCH_BONUS
    } else {
        0.0
    };

    let engagement = f64::from(profile.engagement_score) / ENGAGEMENT_DIVISOR;
    let sentiment = f64::from(profile.sentiment_score) * SENTIMENT_WEIGHT;

    let mut age = 0.0;
    if profile.age < YOUNG_AGE_LIMIT && candidate.recommendation_type == RecommendationType::Product
    {
        age += AGE_BONUS;
    }
    if profile.age > MATURE_AGE_LIMIT
        && candidate.recommendation_type == RecommendationType::Financial
    {
        age += AGE_BONUS;
    }

    let occupation_text = profile.occupation.to_lowercase();
    let mut occupation = 0.0;
    if occupation_text.contains("engineer") && candidate.category == InterestCategory::Technology {
        occupation += OCCUPATION_BONUS;
    }
    if occupation_text.contains("manager")
        && candidate.recommendation_type == RecommendationType::Service
    {
        occupation += OCCUPATION_BONUS;
    }

    // Location checks are case-sensitive
    let mut location = 0.0;
    if profile.location.contains("New York") && candidate.title.contains("Metropolitan") {
        location += LOCATION_BONUS;
    }
    if profile.location.contains("San Francisco") && candidate.category == InterestCategory::Health
    {
        location += LOCATION_BONUS;
    }

    let mut high_value_purchase = 0.0;
    let mut purchase_category_matches = 0.0;
    let mut frequent_buyer = 0.0;
    let purchases = &profile.purchase_history;
    if !purchases.is_empty() {
        if candidate.category == InterestCategory::Financial
            && purchases.iter().any(|p| p.price > HIGH_VALUE_PRICE)
        {
            high_value_purchase = HIGH_VALUE_PURCHASE_BONUS;
        }

        // One bonus per matching purchase
        let matches = purchases
            .iter()
            .filter(|p| candidate.mentions(&p.category))
            .count();
        purchase_category_matches = matches as f64 * PURCHASE_CATEGORY_BONUS;

        if purchases.len() >= FREQUENT_BUYER_PURCHASES
            && candidate.recommendation_type == RecommendationType::Service
        {
            frequent_buyer = FREQUENT_BUYER_BONUS;
        }
    }

    let raw_total = base
        + interest_match
        + category_match
        + engagement
        + sentiment
        + age
        + occupation
        + location
        + high_value_purchase
        + purchase_category_matches
        + frequent_buyer;

    ScoreBreakdown {
        candidate_id: candidate.id.clone(),
        base,
        interest_match,
        category_match,
        engagement,
        sentiment,
        age,
        occupation,
        location,
        high_value_purchase,
        purchase_category_matches,
        frequent_buyer,
        raw_total,
        relevance_score: finalize(raw_total),
    }
}

fn finalize(raw_total: f64) -> u8 {
    // Inputs are non-negative, so only the upper bound needs clamping
    raw_total.min(MAX_SCORE).floor() as u8
}

/// Ranks the candidate pool for a profile.
///
/// Returns at most `limit` recommendations ordered by descending score. Equal
/// scores keep their order from `pool`. An absent profile, an empty pool or a
/// zero limit all yield an empty list.
pub fn score_recommendations(
    profile: Option<&UserProfile>,
    pool: &[RecommendationCandidate],
    limit: usize,
) -> Vec<ScoredRecommendation> {
    let Some(profile) = profile else {
        return Vec::new();
    };
    if limit == 0 || pool.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<ScoredRecommendation> = pool
        .iter()
        .map(|candidate| ScoredRecommendation {
            candidate: candidate.clone(),
            relevance_score: score_candidate(profile, candidate).relevance_score,
        })
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
    scored.truncate(limit);

    tracing::debug!(
        profile_id = %profile.id,
        candidates = pool.len(),
        returned = scored.len(),
        "Scored recommendations"
    );

    scored
}
