use serde::Deserialize;

#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct AuthQuery {
    pub error: Option<String>,
    /// Demo quick-fill: username of the demo account to pre-populate.
    pub demo: Option<String>,
}
