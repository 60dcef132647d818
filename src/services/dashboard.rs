use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;

use crate::models::{
    InterestCategory, PurchaseRecord, RecommendationType, ScoredRecommendation, UserProfile,
};

/// Everything the dashboard page renders, independent of any UI technology
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub greeting: String,
    pub date_label: String,
    pub profile: ProfileSummary,
    pub top: Vec<ScoredRecommendation>,
    pub financial: Vec<ScoredRecommendation>,
    pub products: Vec<ScoredRecommendation>,
    pub lifestyle: Vec<ScoredRecommendation>,
    pub transactions: Vec<PurchaseRecord>,
    pub insights: Insights,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub id: String,
    pub full_name: String,
    pub occupation: String,
    pub location: String,
    pub interest_names: Vec<String>,
    /// Distinct categories of the profile's interests, first seen first
    pub interest_categories: Vec<InterestCategory>,
    pub engagement_score: u8,
    pub sentiment_score: u8,
}

/// One insight card. `observations` is empty when `available` is false and
/// `hint` says what would unlock it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightCard {
    pub title: String,
    pub available: bool,
    pub observations: Vec<String>,
    pub hint: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    pub financial_patterns: InsightCard,
    pub shopping_preferences: InsightCard,
    pub lifestyle_analysis: InsightCard,
}

pub fn greeting(now: NaiveDateTime) -> &'static str {
    match now.hour() {
        h if h < 12 => "Good morning",
        h if h < 18 => "Good afternoon",
        _ => "Good evening",
    }
}

/// Builds the dashboard for a profile from an already scored list.
///
/// The tabs partition `scored` without re-scoring it, so every tab is a
/// filtered view of `top` in the same order.
pub fn build_dashboard(
    profile: &UserProfile,
    scored: Vec<ScoredRecommendation>,
    now: NaiveDateTime,
) -> DashboardView {
    let financial = filter(&scored, |r| {
        r.recommendation_type() == RecommendationType::Financial
    });
    let products = filter(&scored, |r| {
        r.recommendation_type() == RecommendationType::Product
    });
    let lifestyle = filter(&scored, |r| {
        matches!(
            r.category(),
            InterestCategory::Lifestyle | InterestCategory::Health
        ) || r.recommendation_type() == RecommendationType::Experience
    });

    DashboardView {
        greeting: format!("{}, {}!", greeting(now), profile.first_name),
        date_label: now.format("%B %-d, %Y").to_string(),
        profile: ProfileSummary {
            id: profile.id.clone(),
            full_name: profile.full_name(),
            occupation: profile.occupation.clone(),
            location: profile.location.clone(),
            interest_names: profile.interests.iter().map(|i| i.name.clone()).collect(),
            interest_categories: profile.interest_categories(),
            engagement_score: profile.engagement_score,
            sentiment_score: profile.sentiment_score,
        },
        top: scored,
        financial,
        products,
        lifestyle,
        transactions: profile.transactions_newest_first(),
        insights: insights(profile),
    }
}

fn filter<F>(scored: &[ScoredRecommendation], predicate: F) -> Vec<ScoredRecommendation>
where
    F: Fn(&ScoredRecommendation) -> bool,
{
    scored.iter().filter(|r| predicate(r)).cloned().collect()
}

pub fn insights(profile: &UserProfile) -> Insights {
    Insights {
        financial_patterns: financial_patterns(profile),
        shopping_preferences: shopping_preferences(profile),
        lifestyle_analysis: lifestyle_analysis(profile),
    }
}

fn any_purchase(profile: &UserProfile, categories: &[&str]) -> bool {
    first_purchase_in(profile, categories).is_some()
}

fn first_purchase_in<'a>(profile: &'a UserProfile, categories: &[&str]) -> Option<&'a PurchaseRecord> {
    profile
        .purchase_history
        .iter()
        .find(|p| categories.contains(&p.category.as_str()))
}

fn spends_over(profile: &UserProfile, amount: f64) -> bool {
    profile.purchase_history.iter().any(|p| p.price > amount)
}

fn financial_patterns(profile: &UserProfile) -> InsightCard {
    let title = "Financial Patterns".to_string();
    let has_financial_purchase = profile
        .purchase_history
        .iter()
        .any(|p| p.category == "Books" && p.product_name.contains("Financial"));

    if !profile.has_interest_in(InterestCategory::Financial) && !has_financial_purchase {
        return InsightCard {
            title,
            available: false,
            observations: Vec::new(),
            hint: Some(
                "Add financial interests or make financial-related purchases to receive personalized financial insights."
                    .to_string(),
            ),
        };
    }

    let basis = match profile.purchase_history.first() {
        Some(purchase) => format!("{} purchase", purchase.product_name),
        None => "financial interests".to_string(),
    };
    let priority = if spends_over(profile, 100.0) {
        "quality over quantity"
    } else {
        "value-based purchases"
    };

    InsightCard {
        title,
        available: true,
        observations: vec![
            format!(
                "Transaction insights: Based on your {}, you might benefit from our premium financial advisory services.",
                basis
            ),
            format!(
                "Spending pattern detected: Your transaction history suggests you prioritize {}.",
                priority
            ),
        ],
        hint: None,
    }
}

fn shopping_preferences(profile: &UserProfile) -> InsightCard {
    let title = "Shopping Preferences".to_string();
    if !profile.has_interest_in(InterestCategory::Shopping) && profile.purchase_history.is_empty() {
        return InsightCard {
            title,
            available: false,
            observations: Vec::new(),
            hint: Some(
                "Complete purchases to receive personalized shopping insights based on your transaction patterns."
                    .to_string(),
            ),
        };
    }

    let categories = match profile.purchase_history.first() {
        Some(purchase) => purchase.category.clone(),
        None => "shopping categories".to_string(),
    };
    let preference = if any_purchase(profile, &["Gadgets"]) {
        "tech-forward products"
    } else {
        "practical, high-quality items"
    };
    let timing = if profile.purchase_history.len() > 1 {
        "regularly throughout the month"
    } else {
        "strategically when needed"
    };

    InsightCard {
        title,
        available: true,
        observations: vec![
            format!(
                "Transaction-based insight: Your purchases in {} indicate preferences for {}.",
                categories, preference
            ),
            format!("Purchase timing: You tend to make purchases {}.", timing),
        ],
        hint: None,
    }
}

fn lifestyle_analysis(profile: &UserProfile) -> InsightCard {
    let purchases = &profile.purchase_history;

    let focus = if let Some(p) = first_purchase_in(profile, &["Books", "Digital", "Fitness"]) {
        format!(
            "Your purchases of {} suggest a focus on personal development and wellness.",
            p.product_name
        )
    } else if let Some(p) = first_purchase_in(profile, &["Sports", "Gadgets"]) {
        format!(
            "Your transactions for {} indicate an active, tech-savvy lifestyle.",
            p.product_name
        )
    } else {
        "Your transaction history suggests balanced spending across various lifestyle categories."
            .to_string()
    };

    let breadth = if purchases.len() > 2 {
        "Your frequent purchases across multiple categories indicate diverse interests and active lifestyle management."
    } else if !purchases.is_empty() {
        "Your focused purchasing in specific categories suggests targeted lifestyle optimization."
    } else {
        "Begin making purchases to unlock transaction-based lifestyle insights."
    };

    let tier = if spends_over(profile, 200.0) {
        "Based on your premium purchases, consider our high-tier membership services for exclusive benefits and priority support."
    } else {
        "Based on your transaction patterns, our value-tier services would align best with your current purchasing behavior."
    };

    let service_fit = if any_purchase(profile, &["Gadgets", "Digital"]) {
        "Your tech-related transactions indicate you would benefit from our digital-first premium services with integrated technology features."
    } else if any_purchase(profile, &["Fitness", "Books"]) {
        "Your wellness-focused transactions suggest our holistic lifestyle services would provide optimal value for your preferences."
    } else {
        "Based on your current transaction profile, our flexible service packages would provide the best balance of features and value."
    };

    InsightCard {
        title: "Lifestyle Analysis".to_string(),
        available: true,
        observations: vec![
            focus,
            breadth.to_string(),
            tier.to_string(),
            service_fit.to_string(),
        ],
        hint: None,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::data::{candidate_pool, demo_profiles};
    use crate::services::scoring::score_recommendations;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(hour, 30, 0)
            .unwrap()
    }

    fn without_history(mut profile: UserProfile) -> UserProfile {
        profile.purchase_history.clear();
        profile.interests.clear();
        profile
    }

    #[test]
    fn test_greeting_by_hour() {
        assert_eq!(greeting(at(0)), "Good morning");
        assert_eq!(greeting(at(11)), "Good morning");
        assert_eq!(greeting(at(12)), "Good afternoon");
        assert_eq!(greeting(at(17)), "Good afternoon");
        assert_eq!(greeting(at(18)), "Good evening");
        assert_eq!(greeting(at(23)), "Good evening");
    }

    #[test]
    fn test_tabs_are_filtered_views_of_top() {
        let profiles = demo_profiles();
        let profile = &profiles[0];
        let scored = score_recommendations(Some(profile), &candidate_pool(), 9);
        let view = build_dashboard(profile, scored, at(9));

        fn ids(list: &[ScoredRecommendation]) -> Vec<String> {
            list.iter().map(|r| r.candidate.id.clone()).collect()
        }
        assert_eq!(view.top.len(), 9);
        assert_eq!(ids(&view.financial), vec!["rec1", "rec2", "rec3"]);
        assert_eq!(ids(&view.products), vec!["rec6"]);
        assert_eq!(ids(&view.lifestyle), vec!["rec5", "rec7"]);
    }

    #[test]
    fn test_header_and_summary() {
        let profiles = demo_profiles();
        let profile = &profiles[1];
        let view = build_dashboard(profile, Vec::new(), at(19));

        assert_eq!(view.greeting, "Good evening, Nikitha!");
        assert_eq!(view.date_label, "October 19, 2026");
        assert_eq!(view.profile.full_name, "Nikitha M");
        assert_eq!(
            view.profile.interest_categories,
            vec![
                InterestCategory::Shopping,
                InterestCategory::Financial,
                InterestCategory::Lifestyle,
                InterestCategory::Health,
            ]
        );
        assert!(view.top.is_empty());
        assert!(view.financial.is_empty());
        assert_eq!(view.transactions[0].id, "p6");
    }

    #[test]
    fn test_insights_for_demo_profiles() {
        let profiles = demo_profiles();

        let isha = insights(&profiles[0]);
        assert!(isha.financial_patterns.available);
        assert_eq!(
            isha.financial_patterns.observations[0],
            "Transaction insights: Based on your Financial Planning Book purchase, you might benefit from our premium financial advisory services."
        );
        assert!(isha.financial_patterns.observations[1].ends_with("quality over quantity."));
        assert!(isha.shopping_preferences.observations[0].contains("tech-forward products"));
        assert!(isha.lifestyle_analysis.observations[0].starts_with("Your purchases of Financial Planning Book"));
        assert!(isha.lifestyle_analysis.observations[2].contains("high-tier membership"));

        let nikitha = insights(&profiles[1]);
        assert!(nikitha.financial_patterns.observations[1].ends_with("value-based purchases."));
        assert!(nikitha.lifestyle_analysis.observations[2].contains("value-tier services"));
        assert!(nikitha.lifestyle_analysis.observations[3].contains("digital-first"));
    }

    #[test]
    fn test_insights_without_activity() {
        let profiles = demo_profiles();
        let blank = without_history(profiles[0].clone());
        let insights = insights(&blank);

        assert!(!insights.financial_patterns.available);
        assert!(insights.financial_patterns.hint.is_some());
        assert!(!insights.shopping_preferences.available);
        assert_eq!(
            insights.lifestyle_analysis.observations[1],
            "Begin making purchases to unlock transaction-based lifestyle insights."
        );
    }
}
