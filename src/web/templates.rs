use askama::Template;

use coffeestreet::models::{DemoAccount, User};

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub username: String,
    pub password: String,
    pub demo_accounts: &'static [DemoAccount],
}

impl LoginTemplate {
    pub fn blank() -> Self {
        Self {
            error: None,
            username: String::new(),
            password: String::new(),
            demo_accounts: &coffeestreet::models::DEMO_ACCOUNTS,
        }
    }
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub user: User,
}
