//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **memory**: process-local stores for development and tests
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM
//! - **password**: Argon2id hashing shared by both identity providers
//!
//! Adapters are thin translators between domain types and storage
//! representations. They contain no business logic.

pub mod memory;
pub mod password;
pub mod persistence;
