//! In-memory adapters for every driven port.
//!
//! Used by the server when no database is configured and by behavioural
//! tests. Each store owns a `tokio::sync::RwLock`; the conditional writes
//! (unique application insert, pending-only transition) run under a single
//! write guard so they are atomic with respect to concurrent callers.

mod applications;
mod identity;
mod ideas;
mod users;

pub use applications::InMemoryApplicationRepository;
pub use identity::InMemoryIdentityProvider;
pub use ideas::InMemoryIdeaRepository;
pub use users::InMemoryUserRepository;
