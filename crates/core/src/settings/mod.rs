//! Settings surface: forms, gateway port, and the controller

pub mod forms;
pub mod ports;
pub mod service;

pub use service::SettingsService;
