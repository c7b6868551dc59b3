//! Chaos Demo Service Library

pub mod chaos;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use chaos::ChaosSwitch;
pub use config::schema::DemoConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
