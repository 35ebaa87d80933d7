//! HTTP envelope around the position pipeline.
//!
//! Handlers only parse requests and shape responses; all domain logic lives
//! in `soma_engine`.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::{create_router, serve};
pub use state::AppState;
