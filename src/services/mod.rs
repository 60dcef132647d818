pub mod dashboard;
pub mod profile;
pub mod scoring;
pub mod session;

pub use dashboard::{build_dashboard, DashboardView};
pub use profile::ProfileUpdate;
pub use scoring::{score_candidate, score_recommendations, ScoreBreakdown, DEFAULT_LIMIT};
pub use session::{LoginRequest, Session, SessionId, SessionStore, SESSION_HEADER};
