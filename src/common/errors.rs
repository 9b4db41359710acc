use thiserror::Error;

/// Fallback text shown when a rejection carries no message.
pub const LOGIN_FALLBACK_MESSAGE: &str = "Login gagal";

/// The one user-visible failure of a login attempt. Wrong password,
/// unknown username and internal verification trouble all collapse
/// into this single channel; only the message differs.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum LoginError {
    #[error("{}", message.as_deref().unwrap_or(LOGIN_FALLBACK_MESSAGE))]
    Rejected { message: Option<String> },
}

impl LoginError {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: Some(message.into()),
        }
    }
}

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Password hashing error: {0}")]
    PasswordHash(argon2::password_hash::Error),

    #[error("Duplicate username '{0}' in seed data")]
    DuplicateUsername(String),
}

impl From<argon2::password_hash::Error> for DirectoryError {
    fn from(e: argon2::password_hash::Error) -> Self {
        Self::PasswordHash(e)
    }
}
