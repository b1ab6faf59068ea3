//! HTTP header inspection service library.

pub mod config;
pub mod headers;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::schema::ServerConfig;
pub use headers::HeaderError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
