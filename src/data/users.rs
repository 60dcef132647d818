use chrono::NaiveDate;

use super::interests::find_interest;
use crate::models::{Interest, PurchaseRecord, SocialMediaActivity, UserProfile};

fn interests(ids: &[&str]) -> Vec<Interest> {
    ids.iter().filter_map(|id| find_interest(id)).collect()
}

fn purchase(
    id: &str,
    product_name: &str,
    category: &str,
    price: f64,
    (year, month, day): (i32, u32, u32),
) -> PurchaseRecord {
    PurchaseRecord {
        id: id.to_string(),
        product_name: product_name.to_string(),
        category: category.to_string(),
        price,
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
    }
}

/// Demo accounts available for sign-in
pub fn demo_profiles() -> Vec<UserProfile> {
    vec![
        UserProfile {
            id: "1".to_string(),
            first_name: "Isha".to_string(),
            last_name: "Gupta".to_string(),
            email: "isha@example.com".to_string(),
            age: 23,
            gender: "Female".to_string(),
            occupation: "Software Engineer".to_string(),
            location: "New York City".to_string(),
            bio: "Software engineer with a passion for financial planning and sports.".to_string(),
            phone_number: "+1 (555) 123-4567".to_string(),
            interests: interests(&[
                "homeLoan",
                "retirementSavings",
                "etfs",
                "budgetShopping",
                "dining",
                "mortgagePayments",
                "sports",
                "travel",
                "gadgets",
            ]),
            purchase_history: vec![
                purchase("p1", "Financial Planning Book", "Books", 24.99, (2023, 9, 15)),
                purchase("p2", "Running Shoes", "Sports", 129.99, (2023, 10, 2)),
                purchase("p3", "Smart Watch", "Gadgets", 349.99, (2023, 11, 28)),
            ],
            engagement_score: 78,
            sentiment_score: 8,
            social_media_activity: SocialMediaActivity::High,
        },
        UserProfile {
            id: "2".to_string(),
            first_name: "Nikitha".to_string(),
            last_name: "M".to_string(),
            email: "nikitha@example.com".to_string(),
            age: 32,
            gender: "Female".to_string(),
            occupation: "Manager".to_string(),
            location: "San Francisco".to_string(),
            bio: "Manager who enjoys finding great deals, reading, and wellness activities."
                .to_string(),
            phone_number: "+1 (555) 987-6543".to_string(),
            interests: interests(&[
                "discounts",
                "newArrivals",
                "travelCreditCards",
                "books",
                "meditation",
                "yoga",
            ]),
            purchase_history: vec![
                purchase("p4", "Yoga Mat", "Fitness", 65.99, (2023, 8, 22)),
                purchase("p5", "Bestseller Novel", "Books", 19.99, (2023, 9, 8)),
                purchase("p6", "Meditation App Subscription", "Digital", 79.99, (2023, 12, 1)),
            ],
            engagement_score: 85,
            sentiment_score: 9,
            social_media_activity: SocialMediaActivity::Medium,
        },
    ]
}
