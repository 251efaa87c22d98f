use std::sync::Mutex;

use chrono::{DateTime, Utc};

use crate::config::DemoUser;
use crate::errors::AppError;
use crate::models::user::UserProfile;

use super::password;

struct Account {
    profile: UserProfile,
    password_hash: String,
}

/// In-memory account registry behind the cookie session.
/// Only `last_login` changes after registration.
#[derive(Default)]
pub struct AccountStore {
    accounts: Mutex<Vec<Account>>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the configured demo account.
    pub fn with_demo_user(demo: &DemoUser) -> Result<Self, AppError> {
        let store = Self::new();
        let id = store.register(&demo.name, &demo.email, &demo.password)?;
        log::info!("Seeded demo account {} (id={id})", demo.email);
        Ok(store)
    }

    /// Register an account; returns its id. Emails are matched case-insensitively.
    pub fn register(&self, name: &str, email: &str, plain_password: &str) -> Result<u32, AppError> {
        let password_hash = password::hash_password(plain_password)?;
        let now = Utc::now();
        let mut accounts = self.accounts.lock().unwrap_or_else(|e| e.into_inner());

        if accounts.iter().any(|a| a.profile.email.eq_ignore_ascii_case(email)) {
            return Err(AppError::Session(format!("Account {email} already exists")));
        }

        let id = accounts.iter().map(|a| a.profile.id).max().unwrap_or(0) + 1;
        accounts.push(Account {
            profile: UserProfile {
                id,
                name: name.to_string(),
                email: email.to_string(),
                created_at: now,
                last_login: now,
            },
            password_hash,
        });
        Ok(id)
    }

    /// Check credentials. Returns the account id on success.
    pub fn authenticate(&self, email: &str, plain_password: &str) -> Result<Option<u32>, AppError> {
        let candidate = {
            let accounts = self.accounts.lock().unwrap_or_else(|e| e.into_inner());
            accounts
                .iter()
                .find(|a| a.profile.email.eq_ignore_ascii_case(email.trim()))
                .map(|a| (a.profile.id, a.password_hash.clone()))
        };

        let Some((id, hash)) = candidate else {
            return Ok(None);
        };
        Ok(password::verify_password(plain_password, &hash)?.then_some(id))
    }

    pub fn record_login(&self, id: u32, at: DateTime<Utc>) {
        let mut accounts = self.accounts.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(account) = accounts.iter_mut().find(|a| a.profile.id == id) {
            account.profile.last_login = at;
        }
    }

    pub fn find(&self, id: u32) -> Option<UserProfile> {
        let accounts = self.accounts.lock().unwrap_or_else(|e| e.into_inner());
        accounts
            .iter()
            .find(|a| a.profile.id == id)
            .map(|a| a.profile.clone())
    }
}
