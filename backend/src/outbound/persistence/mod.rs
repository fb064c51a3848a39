//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the marketplace's driven ports backed by
//! PostgreSQL via `diesel-async` and `bb8` connection pooling.
//!
//! # Architecture
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types. Lifecycle rules stay in the domain services.
//! - **Internal models**: row structs (`models.rs`) and the table definitions
//!   (`schema.rs`) never leave this module.
//! - **Conditional writes in SQL**: the unique constraint on
//!   `(idea_id, developer_id)` and the pending-only `UPDATE` carry the
//!   concurrency guarantees.
//! - **Strongly typed errors**: driver errors become port errors with fixed
//!   messages.
//!
//! # Example
//!
//! ```ignore
//! use cofounder::outbound::persistence::{DbPool, DieselIdeaRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/cofounder")).await?;
//! let ideas = DieselIdeaRepository::new(pool);
//! ```

mod diesel_application_repository;
mod diesel_error_mapping;
mod diesel_idea_repository;
mod diesel_identity_provider;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_application_repository::DieselApplicationRepository;
pub use diesel_idea_repository::DieselIdeaRepository;
pub use diesel_identity_provider::DieselIdentityProvider;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
