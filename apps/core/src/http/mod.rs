//! # HTTP Module
//!
//! JSON boundary of the service.
//!
//! ## Routes
//! - `POST /api/generate`: draft a reply for a submitted email
//! - `GET /health`: liveness probe

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::{handle_panic, panic_guard, ErrorResponse};
pub use routes::create_router;
pub use state::AppState;
