use crate::models::{InterestCategory, RecommendationCandidate, RecommendationType};

struct Seed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    recommendation_type: RecommendationType,
    category: InterestCategory,
    image_ref: &'static str,
    base_relevance: u8,
    call_to_action: &'static str,
}

const POOL: [Seed; 15] = [
    Seed {
        id: "rec1",
        title: "First-Time Home Buyer Program",
        description: "Special rates and assistance for first-time home buyers in metropolitan areas.",
        recommendation_type: RecommendationType::Financial,
        category: InterestCategory::Financial,
        image_ref: "/rec-home-loan.jpg",
        base_relevance: 95,
        call_to_action: "Learn More",
    },
    Seed {
        id: "rec2",
        title: "High-Yield Retirement Account",
        description: "Start building your retirement wealth early with our high-yield retirement accounts designed for young professionals.",
        recommendation_type: RecommendationType::Financial,
        category: InterestCategory::Financial,
        image_ref: "/rec-retirement.jpg",
        base_relevance: 90,
        call_to_action: "Open Account",
    },
    Seed {
        id: "rec3",
        title: "Tech Industry ETF Bundle",
        description: "Curated ETF bundle focused on high-growth technology companies with low management fees.",
        recommendation_type: RecommendationType::Financial,
        category: InterestCategory::Financial,
        image_ref: "/rec-etf.jpg",
        base_relevance: 85,
        call_to_action: "Invest Now",
    },
    Seed {
        id: "rec4",
        title: "Smart Budget Shopping Assistant",
        description: "AI-powered tool that finds the best deals based on your shopping habits and preferences.",
        recommendation_type: RecommendationType::Service,
        category: InterestCategory::Shopping,
        image_ref: "/rec-budget.jpg",
        base_relevance: 88,
        call_to_action: "Try Free",
    },
    Seed {
        id: "rec5",
        title: "Exclusive Restaurant Discounts",
        description: "Get 20% off at top-rated restaurants in your area with our dining pass subscription.",
        recommendation_type: RecommendationType::Service,
        category: InterestCategory::Lifestyle,
        image_ref: "/rec-dining.jpg",
        base_relevance: 82,
        call_to_action: "Get Discount",
    },
    Seed {
        id: "rec6",
        title: "Latest Tech Gadget Bundle",
        description: "Curated collection of the newest smart home devices compatible with your existing tech.",
        recommendation_type: RecommendationType::Product,
        category: InterestCategory::Technology,
        image_ref: "/rec-gadgets.jpg",
        base_relevance: 92,
        call_to_action: "Shop Now",
    },
    Seed {
        id: "rec7",
        title: "Adventure Travel Package",
        description: "Customized travel experiences for active lifestyles with special financing options.",
        recommendation_type: RecommendationType::Experience,
        category: InterestCategory::Travel,
        image_ref: "/rec-travel.jpg",
        base_relevance: 87,
        call_to_action: "Explore Packages",
    },
    Seed {
        id: "rec8",
        title: "Premium Shopper Membership",
        description: "Exclusive access to early sales, special discounts, and limited collections at your favorite brands.",
        recommendation_type: RecommendationType::Service,
        category: InterestCategory::Shopping,
        image_ref: "/rec-discounts.jpg",
        base_relevance: 94,
        call_to_action: "Join Now",
    },
    Seed {
        id: "rec9",
        title: "New Season Fashion Alert",
        description: "Be the first to know about new arrivals from designer collections curated for your style profile.",
        recommendation_type: RecommendationType::Service,
        category: InterestCategory::Shopping,
        image_ref: "/rec-fashion.jpg",
        base_relevance: 89,
        call_to_action: "Preview Collection",
    },
    Seed {
        id: "rec10",
        title: "Elite Travel Rewards Card",
        description: "Premium travel credit card with enhanced points on flights, hotels, and exclusive lounge access worldwide.",
        recommendation_type: RecommendationType::Financial,
        category: InterestCategory::Financial,
        image_ref: "/rec-travel-card.jpg",
        base_relevance: 96,
        call_to_action: "Apply Now",
    },
    Seed {
        id: "rec11",
        title: "Curated Book Subscription",
        description: "Personalized monthly book selections based on your reading preferences with exclusive author interviews.",
        recommendation_type: RecommendationType::Service,
        category: InterestCategory::Lifestyle,
        image_ref: "/rec-books.jpg",
        base_relevance: 93,
        call_to_action: "Subscribe",
    },
    Seed {
        id: "rec12",
        title: "Premium Meditation Retreat",
        description: "All-inclusive meditation retreat packages at luxury wellness resorts with special financing available.",
        recommendation_type: RecommendationType::Experience,
        category: InterestCategory::Health,
        image_ref: "/rec-meditation.jpg",
        base_relevance: 91,
        call_to_action: "Book Retreat",
    },
    Seed {
        id: "rec13",
        title: "Advanced Yoga Program",
        description: "Personalized yoga instruction and wellness planning with certified experts for your specific needs.",
        recommendation_type: RecommendationType::Service,
        category: InterestCategory::Health,
        image_ref: "/rec-yoga.jpg",
        base_relevance: 90,
        call_to_action: "Join Program",
    },
    Seed {
        id: "rec14",
        title: "Mortgage Refinancing Analyzer",
        description: "AI tool that continually monitors rates and your mortgage to recommend optimal refinancing opportunities.",
        recommendation_type: RecommendationType::Financial,
        category: InterestCategory::Financial,
        image_ref: "/rec-mortgage.jpg",
        base_relevance: 88,
        call_to_action: "Analyze My Mortgage",
    },
    Seed {
        id: "rec15",
        title: "Premium Sports Membership",
        description: "VIP access to sporting events, exclusive workout classes, and athlete-designed training programs.",
        recommendation_type: RecommendationType::Service,
        category: InterestCategory::Lifestyle,
        image_ref: "/rec-sports.jpg",
        base_relevance: 86,
        call_to_action: "Get Access",
    },
];

/// The fixed pool of recommendation candidates, in catalog order
pub fn candidate_pool() -> Vec<RecommendationCandidate> {
    POOL.iter()
        .map(|seed| RecommendationCandidate {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            recommendation_type: seed.recommendation_type,
            category: seed.category,
            image_ref: seed.image_ref.to_string(),
            base_relevance: seed.base_relevance,
            call_to_action: seed.call_to_action.to_string(),
            target_url: "#".to_string(),
        })
        .collect()
}
