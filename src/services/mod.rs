pub use auth::*;

pub mod redirect;

mod auth;
