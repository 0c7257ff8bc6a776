//! Generic HTTP surface for resource services.

pub mod handler;
pub mod router;
pub mod runner;
mod signal;
pub mod state;

pub use router::resource_router;
pub use runner::serve;
