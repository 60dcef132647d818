pub mod profiles;
pub mod slot;

pub use profiles::{InMemoryProfileStore, ProfileStore};
pub use slot::{FileSessionSlot, MemorySessionSlot, SessionSlot};
