//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    AccountCommand, ApplicationCommand, ApplicationQuery, IdeaCommand, IdeaQuery, ProfileCommand,
    ProfileQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub accounts: Arc<dyn AccountCommand>,
    pub profiles: Arc<dyn ProfileQuery>,
    pub profile_updates: Arc<dyn ProfileCommand>,
    pub ideas: Arc<dyn IdeaCommand>,
    pub ideas_query: Arc<dyn IdeaQuery>,
    pub applications: Arc<dyn ApplicationCommand>,
    pub applications_query: Arc<dyn ApplicationQuery>,
}
