//! Backend API access: session state, HTTP client, endpoint surface, and
//! the settings-gateway adapter

pub mod client;
pub mod endpoints;
pub mod errors;
pub mod gateway;
pub mod session;
