//! Karte core library.
//!
//! Generic resource CRUD engine shared by the Karte clinic services: an
//! in-memory record store enforcing identity and timestamp invariants, and
//! an axum handler layer producing the uniform response envelope.

pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod time;
pub mod ui;

// Re-export the service-facing surface
pub use domain::{Resource, ResourceRepository};
pub use error::ApiError;
pub use infrastructure::dto::http::Envelope;
pub use infrastructure::repository::InMemoryResourceRepository;
pub use ui::state::AppState;
pub use ui::{resource_router, serve};
