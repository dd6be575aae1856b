//! Server-side plumbing shared by the HTTP surface: application state and system routes.

mod health;
mod router;
mod state;

pub use router::system_router;
pub use state::{AppState, AppStateBuilder, AppStateError, AppStateInner};
