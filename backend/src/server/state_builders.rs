//! Builders for the HTTP state from the configured storage backend.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};

use cofounder::domain::ports::{
    ApplicationRepository, IdeaRepository, IdentityProvider, UserRepository,
};
use cofounder::domain::{AccountService, ApplicationLifecycleService, IdeaService};
use cofounder::inbound::http::state::HttpState;
use cofounder::outbound::memory::{
    InMemoryApplicationRepository, InMemoryIdeaRepository, InMemoryIdentityProvider,
    InMemoryUserRepository,
};
use cofounder::outbound::persistence::{
    DbPool, DieselApplicationRepository, DieselIdeaRepository, DieselIdentityProvider,
    DieselUserRepository,
};

use super::ServerConfig;

/// Driven adapters the services are assembled from.
struct Stores<P, U, I, A> {
    identity: Arc<P>,
    users: Arc<U>,
    ideas: Arc<I>,
    applications: Arc<A>,
}

fn assemble<P, U, I, A>(stores: Stores<P, U, I, A>, clock: Arc<dyn Clock>) -> HttpState
where
    P: IdentityProvider + 'static,
    U: UserRepository + 'static,
    I: IdeaRepository + 'static,
    A: ApplicationRepository + 'static,
{
    let Stores {
        identity,
        users,
        ideas,
        applications,
    } = stores;
    let accounts = Arc::new(AccountService::new(identity, users.clone()));
    let idea_service = Arc::new(IdeaService::new(ideas.clone(), clock.clone()));
    let lifecycle = Arc::new(ApplicationLifecycleService::new(
        applications,
        ideas,
        users,
        clock,
    ));
    HttpState {
        accounts: accounts.clone(),
        profiles: accounts.clone(),
        profile_updates: accounts,
        ideas: idea_service.clone(),
        ideas_query: idea_service,
        applications: lifecycle.clone(),
        applications_query: lifecycle,
    }
}

fn memory_stores() -> Stores<
    InMemoryIdentityProvider,
    InMemoryUserRepository,
    InMemoryIdeaRepository,
    InMemoryApplicationRepository,
> {
    Stores {
        identity: Arc::new(InMemoryIdentityProvider::new()),
        users: Arc::new(InMemoryUserRepository::new()),
        ideas: Arc::new(InMemoryIdeaRepository::new()),
        applications: Arc::new(InMemoryApplicationRepository::new()),
    }
}

fn diesel_stores(
    pool: &DbPool,
) -> Stores<
    DieselIdentityProvider,
    DieselUserRepository,
    DieselIdeaRepository,
    DieselApplicationRepository,
> {
    Stores {
        identity: Arc::new(DieselIdentityProvider::new(pool.clone())),
        users: Arc::new(DieselUserRepository::new(pool.clone())),
        ideas: Arc::new(DieselIdeaRepository::new(pool.clone())),
        applications: Arc::new(DieselApplicationRepository::new(pool.clone())),
    }
}

/// Build the shared HTTP state: PostgreSQL adapters when a pool is
/// configured, in-memory stores otherwise.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let state = match &config.db_pool {
        Some(pool) => assemble(diesel_stores(pool), clock),
        None => {
            tracing::warn!("no database configured; data is kept in memory");
            assemble(memory_stores(), clock)
        }
    };
    web::Data::new(state)
}
