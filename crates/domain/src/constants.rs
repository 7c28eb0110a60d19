//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! client.

// API defaults
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

// Pagination (the backend clamps per_page to MAX_PAGE_SIZE)
pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

// Client-side password validation, mirrors the backend rule
pub const MIN_PASSWORD_LENGTH: usize = 8;
