use std::sync::Arc;
use std::time::Duration;

use coffeestreet::services::Authenticator;

#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<dyn Authenticator>,
    /// Simulated network latency applied to each login attempt.
    /// Injectable so tests run it at zero.
    pub login_delay: Duration,
}
