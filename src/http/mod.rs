//! HTTP subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, asset mount)
//!     → handlers.rs (fixture dispatch, index, discovery JSON)
//!     → askama view rendered to the client
//! ```

pub mod handlers;
pub mod server;

pub use server::HttpServer;
