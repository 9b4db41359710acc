use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};

use coffeestreet::models::{DEMO_ACCOUNTS, DEMO_PASSWORD, DemoAccount};
use coffeestreet::services::{Authenticator, redirect};

use crate::web::forms::{AuthQuery, LoginForm};
use crate::web::helpers::{current_user, removal_cookie, render, see_other, session_cookie};
use crate::web::state::AppState;
use crate::web::templates::LoginTemplate;

#[get("/login")]
pub async fn login_form(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<AuthQuery>,
) -> impl Responder {
    // Already signed in: skip the form and land on the role's page.
    if let Some(user) = current_user(&req, state.auth.as_ref()) {
        return see_other(redirect::destination(user.role));
    }

    // Demo quick-fill pre-populates both fields and clears any error.
    if let Some(account) = query
        .demo
        .as_deref()
        .and_then(DemoAccount::by_username)
    {
        return render(LoginTemplate {
            error: None,
            username: account.username.to_string(),
            password: DEMO_PASSWORD.to_string(),
            demo_accounts: &DEMO_ACCOUNTS,
        });
    }

    render(LoginTemplate {
        error: query.error.clone(),
        ..LoginTemplate::blank()
    })
}

#[post("/login")]
pub async fn login_submit(
    state: web::Data<AppState>,
    form: web::Form<LoginForm>,
) -> impl Responder {
    // Simulated network latency; the form stays disabled client-side
    // until this attempt resolves.
    if !state.login_delay.is_zero() {
        actix_web::rt::time::sleep(state.login_delay).await;
    }

    // Exactly one authentication attempt per submission.
    match state.auth.login(&form.username, &form.password) {
        Ok(user) => {
            log::info!("User '{}' signed in as {}", user.username, user.role);
            HttpResponse::SeeOther()
                .cookie(session_cookie(user.id))
                .insert_header(("Location", redirect::destination(user.role)))
                .finish()
        }
        Err(e) => {
            // Fields stay intact for correction; the message (or its
            // fallback) comes straight from the rejection.
            render(LoginTemplate {
                error: Some(e.to_string()),
                username: form.username.clone(),
                password: form.password.clone(),
                demo_accounts: &DEMO_ACCOUNTS,
            })
        }
    }
}

#[post("/logout")]
pub async fn logout() -> impl Responder {
    HttpResponse::SeeOther()
        .cookie(removal_cookie())
        .insert_header(("Location", "/login"))
        .finish()
}

#[get("/")]
pub async fn index(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    match current_user(&req, state.auth.as_ref()) {
        Some(user) => see_other(redirect::destination(user.role)),
        None => see_other("/login"),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(login_form)
        .service(login_submit)
        .service(logout)
        .service(index);
}
