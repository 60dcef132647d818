use std::collections::BTreeMap;

use crate::models::{Interest, InterestCategory};

const CATALOG: [(&str, &str, InterestCategory); 15] = [
    ("homeLoan", "Home Loan", InterestCategory::Financial),
    ("retirementSavings", "Retirement Savings", InterestCategory::Financial),
    ("etfs", "ETFs", InterestCategory::Financial),
    ("budgetShopping", "Budget Shopping", InterestCategory::Shopping),
    ("dining", "Dining", InterestCategory::Lifestyle),
    ("mortgagePayments", "Mortgage Payments", InterestCategory::Financial),
    ("sports", "Sports", InterestCategory::Lifestyle),
    ("travel", "Travel", InterestCategory::Travel),
    ("gadgets", "Gadgets", InterestCategory::Technology),
    ("discounts", "Discounts", InterestCategory::Shopping),
    ("newArrivals", "New Arrivals", InterestCategory::Shopping),
    ("travelCreditCards", "Travel Credit Cards", InterestCategory::Financial),
    ("books", "Books", InterestCategory::Lifestyle),
    ("meditation", "Meditation", InterestCategory::Health),
    ("yoga", "Yoga", InterestCategory::Health),
];

/// Every interest a profile can select, in catalog order
pub fn interest_catalog() -> Vec<Interest> {
    CATALOG
        .iter()
        .map(|(id, name, category)| Interest::new(id, name, *category))
        .collect()
}

/// Looks up a catalog interest by its id (exact, case-sensitive)
pub fn find_interest(id: &str) -> Option<Interest> {
    CATALOG
        .iter()
        .find(|(candidate, _, _)| *candidate == id)
        .map(|(id, name, category)| Interest::new(id, name, *category))
}

/// Catalog grouped by category. Every category has an entry, possibly empty.
pub fn interests_by_category() -> BTreeMap<InterestCategory, Vec<Interest>> {
    let mut grouped: BTreeMap<InterestCategory, Vec<Interest>> = InterestCategory::ALL
        .iter()
        .map(|category| (*category, Vec::new()))
        .collect();

    for interest in interest_catalog() {
        grouped.entry(interest.category).or_default().push(interest);
    }

    grouped
}
