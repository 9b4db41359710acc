use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Role;

/// An authenticated staff account. Owned by the authenticator; the
/// web layer only ever reads it.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub display_name: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// One quick-fill button on the login page. The username doubles as
/// the demo credential; every demo account shares [`DEMO_PASSWORD`].
#[derive(Debug, Clone, Copy)]
pub struct DemoAccount {
    pub label: &'static str,
    pub username: &'static str,
}

/// Shared password of all demo accounts. Intentionally public: these
/// are sandbox shortcuts, not production credentials.
pub const DEMO_PASSWORD: &str = "kopi123";

pub static DEMO_ACCOUNTS: [DemoAccount; 3] = [
    DemoAccount {
        label: "Owner",
        username: "owner",
    },
    DemoAccount {
        label: "Manager",
        username: "manager",
    },
    DemoAccount {
        label: "Barista",
        username: "barista",
    },
];

impl DemoAccount {
    pub fn by_username(username: &str) -> Option<&'static DemoAccount> {
        DEMO_ACCOUNTS.iter().find(|a| a.username == username)
    }
}
