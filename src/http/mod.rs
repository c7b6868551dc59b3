//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → handlers.rs (transaction state machine, toggle, status page)
//!     → response.rs (payload shapes, timestamps)
//!     → Send to client
//! ```

pub mod handlers;
pub mod response;
pub mod server;
pub mod status_page;

pub use server::{AppState, HttpServer};
