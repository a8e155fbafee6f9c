//! Relay endpoint HTTP server
//!
//! A stateless credential-hiding proxy with one route:
//! - POST / - forward an `{audio, mimeType}` payload upstream
//! - OPTIONS / - CORS preflight (answered by the CORS layer)
//! - GET /health - health check
//!
//! Any other method gets a plain-text 405.

mod handlers;
mod routes;
mod state;

pub use handlers::{MISSING_FIELDS_ERROR, MISSING_KEY_ERROR};
pub use routes::create_router;
pub use state::AppState;
