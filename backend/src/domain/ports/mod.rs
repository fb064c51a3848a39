//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (repositories, identity provider) expose strongly typed
//! errors built with `define_port_error!`; services map them into the
//! transport-agnostic [`crate::domain::Error`]. Driving ports are what the
//! inbound adapters call.

mod macros;
pub(crate) use macros::define_port_error;

mod account_ports;
mod application_ports;
mod application_repository;
mod idea_ports;
mod idea_repository;
mod identity_provider;
mod user_repository;

#[cfg(test)]
pub use account_ports::{MockAccountCommand, MockProfileCommand, MockProfileQuery};
pub use account_ports::{AccountCommand, ProfileCommand, ProfileQuery};
#[cfg(test)]
pub use application_ports::{MockApplicationCommand, MockApplicationQuery};
pub use application_ports::{ApplicationCommand, ApplicationQuery};
#[cfg(test)]
pub use application_repository::MockApplicationRepository;
pub use application_repository::{
    ApplicationPersistenceError, ApplicationRepository, TransitionOutcome,
};
#[cfg(test)]
pub use idea_ports::{MockIdeaCommand, MockIdeaQuery};
pub use idea_ports::{IdeaCommand, IdeaQuery};
#[cfg(test)]
pub use idea_repository::MockIdeaRepository;
pub use idea_repository::{IdeaPersistenceError, IdeaRepository};
#[cfg(test)]
pub use identity_provider::MockIdentityProvider;
pub use identity_provider::{IdentityError, IdentityProvider};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};

#[cfg(test)]
mod tests;
