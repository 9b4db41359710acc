pub use role::*;
pub use user::*;

mod role;
mod user;
