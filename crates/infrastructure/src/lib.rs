//! Hostkeep Infrastructure Layer
pub mod backup;
pub mod database;
pub mod repositories;
