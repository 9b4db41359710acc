use argon2::{
    Argon2, Params,
    password_hash::{
        Error, PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::OnceLock;
use uuid::Uuid;

use crate::common::{DirectoryError, LoginError};
use crate::models::{DEMO_ACCOUNTS, DEMO_PASSWORD, Role, User};

pub struct PasswordManager;

static INSTANCE: OnceLock<Argon2> = OnceLock::new();

impl PasswordManager {
    fn engine() -> &'static Argon2<'static> {
        INSTANCE.get_or_init(|| {
            let params = Params::new(
                19 * 1024, // 19MB memory (m)
                2,         // 2 iterations (t)
                1,         // 1 parallelism lane (p)
                None,      // Default hash length (32 bytes)
            )
            .expect("Invalid Argon2 parameters");

            Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params)
        })
    }

    pub fn hash_password(password: &str) -> Result<String, Error> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::engine().hash_password(password.as_bytes(), &salt)?;

        Ok(hash.to_string())
    }

    pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, Error> {
        let parsed_hash = PasswordHash::new(stored_hash)?;

        match Self::engine().verify_password(password.as_bytes(), &parsed_hash) {
            Ok(_) => Ok(true),
            Err(Error::Password) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

/// Credential check plus readable current identity. The login page
/// treats whatever sits behind this trait as opaque: it submits a
/// username/password pair once, and reads the resulting user back to
/// decide where to send them.
pub trait Authenticator: Send + Sync {
    /// Exactly one verification per call. `Err` carries the optional
    /// human-readable rejection message.
    fn login(&self, username: &str, password: &str) -> Result<User, LoginError>;

    /// Resolve a session id back to its user, if any.
    fn find_user(&self, id: Uuid) -> Option<User>;
}

struct DirectoryEntry {
    user: User,
    password_hash: String,
}

/// In-memory staff directory seeded with the three demo accounts.
/// All of them share the public demo password.
pub struct DemoDirectory {
    by_username: HashMap<String, DirectoryEntry>,
}

const REJECTION_MESSAGE: &str = "Username atau password salah";

impl DemoDirectory {
    pub fn seeded() -> Result<Self, DirectoryError> {
        let mut directory = Self {
            by_username: HashMap::new(),
        };

        for account in DEMO_ACCOUNTS {
            // Demo usernames double as role names.
            let role: Role = account
                .username
                .parse()
                .expect("Demo account usernames must be valid roles");
            directory.insert(account.username, account.label, role, DEMO_PASSWORD)?;
        }

        Ok(directory)
    }

    fn insert(
        &mut self,
        username: &str,
        display_name: &str,
        role: Role,
        password: &str,
    ) -> Result<(), DirectoryError> {
        if self.by_username.contains_key(username) {
            return Err(DirectoryError::DuplicateUsername(username.to_string()));
        }

        let entry = DirectoryEntry {
            user: User {
                id: Uuid::new_v4(),
                username: username.to_string(),
                display_name: display_name.to_string(),
                role,
                created_at: Utc::now(),
            },
            password_hash: PasswordManager::hash_password(password)?,
        };
        self.by_username.insert(username.to_string(), entry);

        Ok(())
    }
}

impl Authenticator for DemoDirectory {
    fn login(&self, username: &str, password: &str) -> Result<User, LoginError> {
        let entry = match self.by_username.get(username.trim()) {
            Some(e) => e,
            None => return Err(LoginError::rejected(REJECTION_MESSAGE)),
        };

        let password_valid =
            PasswordManager::verify_password(password, &entry.password_hash).unwrap_or_else(|e| {
                log::error!("Password verification error for '{}': {}", username, e);
                false
            });

        if !password_valid {
            return Err(LoginError::rejected(REJECTION_MESSAGE));
        }

        Ok(entry.user.clone())
    }

    fn find_user(&self, id: Uuid) -> Option<User> {
        self.by_username
            .values()
            .find(|e| e.user.id == id)
            .map(|e| e.user.clone())
    }
}
