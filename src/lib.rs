pub mod auth;
pub mod config;
pub mod errors;
pub mod format;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod templates_structs;
