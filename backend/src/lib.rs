//! Co-founder marketplace backend.
//!
//! Founders post ideas, developers apply to them, and founders accept or
//! reject each application once. The crate follows a hexagonal layout:
//! [`domain`] holds entities, services, and ports; [`inbound`] exposes them
//! over HTTP; [`outbound`] provides in-memory and PostgreSQL adapters.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
