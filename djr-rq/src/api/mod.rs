//! HTTP API handlers for djr-rq

pub mod health;
pub mod request;
pub mod search;

pub use health::health_routes;
pub use request::{method_not_allowed, preflight, submit_request};
pub use search::search_songs;
