pub mod interest;
pub mod profile;
pub mod recommendation;

pub use interest::{Interest, InterestCategory};
pub use profile::{PurchaseRecord, SocialMediaActivity, UserProfile};
pub use recommendation::{RecommendationCandidate, RecommendationType, ScoredRecommendation};
