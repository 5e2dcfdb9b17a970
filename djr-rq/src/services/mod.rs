//! Outbound service clients

pub mod form_client;
pub mod itunes_client;

pub use form_client::FormClient;
pub use itunes_client::ItunesClient;
