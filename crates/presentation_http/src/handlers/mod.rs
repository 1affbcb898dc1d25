//! HTTP request handlers

pub mod health;
pub mod page;
pub mod sessions;
