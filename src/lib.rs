pub mod common;
pub mod models;
pub mod services;
