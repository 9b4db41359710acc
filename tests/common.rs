use chrono::{DateTime, Utc};
use uuid::Uuid;

use coffeestreet::models::*;

const SQL_TIME_FMT: &str = "%Y-%m-%d %H:%M:%S%#z";

#[allow(dead_code)]
pub fn parse_time(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_str(s, SQL_TIME_FMT)
        .expect("Invalid time format in test helper")
        .with_timezone(&Utc)
}

#[allow(dead_code)]
pub fn get_seed_owner() -> User {
    User {
        id: Uuid::parse_str("00000000-0000-0000-0000-000000000000")
            .unwrap(),
        username: "owner".to_string(),
        display_name: "Owner".to_string(),
        role: Role::Owner,
        created_at: parse_time("2026-01-04 22:15:06+00"),
    }
}

#[allow(dead_code)]
pub fn get_seed_barista() -> User {
    User {
        id: Uuid::parse_str("00000000-0000-0000-0000-000000000001")
            .unwrap(),
        username: "barista".to_string(),
        display_name: "Barista".to_string(),
        role: Role::Barista,
        created_at: parse_time("2026-01-05 13:22:56+00"),
    }
}
