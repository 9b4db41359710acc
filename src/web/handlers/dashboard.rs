use actix_web::{HttpRequest, Responder, get, web};

use crate::web::helpers::{current_user, render, see_other};
use crate::web::state::AppState;
use crate::web::templates::DashboardTemplate;

#[get("/app/dashboard")]
pub async fn dashboard(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    match current_user(&req, state.auth.as_ref()) {
        Some(user) => render(DashboardTemplate { user }),
        None => see_other("/login"),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(dashboard);
}
