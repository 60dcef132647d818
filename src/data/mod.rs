//! Static seed data: the interest catalog, the demo accounts and the
//! recommendation candidate pool.

pub mod interests;
pub mod recommendations;
pub mod users;

pub use interests::{find_interest, interest_catalog, interests_by_category};
pub use recommendations::candidate_pool;
pub use users::demo_profiles;
