//! HTTP server and API surface

pub mod http_server;

pub use http_server::{router, start_server, AppState};
