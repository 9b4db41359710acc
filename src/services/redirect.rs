use crate::models::Role;

/// Landing destination when the role cannot be determined. Also the
/// current destination of every role; the per-role table below keeps
/// its shape so one role can move independently later.
pub const DEFAULT_DESTINATION: &str = "/app/dashboard";

/// Post-login landing path for a role. Total over `Role`.
pub fn destination(role: Role) -> &'static str {
    match role {
        Role::Barista => "/app/dashboard",
        Role::Manager => "/app/dashboard",
        Role::Owner => "/app/dashboard",
    }
}

/// Resolve a raw role string the way a session store hands it back.
/// Anything outside the closed role set falls back to the default
/// destination instead of failing.
pub fn resolve(raw: &str) -> &'static str {
    raw.parse::<Role>()
        .map(destination)
        .unwrap_or(DEFAULT_DESTINATION)
}
