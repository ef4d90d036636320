//! Fixture page server for bundle-sink browser tests.
//!
//! Serves a fixed set of server-rendered fixture pages, one per bundling
//! scenario, plus the entry scripts those pages reference and a small JSON
//! discovery surface for test harnesses.

// Core subsystems
pub mod config;
pub mod fixtures;
pub mod http;

// Cross-cutting concerns
pub mod lifecycle;
pub mod templates;

pub use config::schema::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
