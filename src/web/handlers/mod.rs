pub mod auth;
pub mod dashboard;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    auth::configure(cfg);
    dashboard::configure(cfg);
}
