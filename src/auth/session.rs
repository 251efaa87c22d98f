use actix_session::Session;

use crate::auth::accounts::AccountStore;
use crate::errors::AppError;
use crate::models::user::UserProfile;

const USER_ID_KEY: &str = "user_id";

/// The session capabilities the dashboard consumes: read the signed-in
/// user and end the session.
pub trait SessionProvider {
    fn current_user(&self) -> Option<UserProfile>;
    fn logout(&self);
}

/// Cookie session backed by the in-memory account store.
pub struct CookieSession<'a> {
    session: &'a Session,
    accounts: &'a AccountStore,
}

impl<'a> CookieSession<'a> {
    pub fn new(session: &'a Session, accounts: &'a AccountStore) -> Self {
        Self { session, accounts }
    }
}

impl SessionProvider for CookieSession<'_> {
    fn current_user(&self) -> Option<UserProfile> {
        get_user_id(self.session).and_then(|id| self.accounts.find(id))
    }

    fn logout(&self) {
        if let Some(id) = get_user_id(self.session) {
            log::info!("User {id} logged out");
        }
        self.session.purge();
    }
}

pub fn get_user_id(session: &Session) -> Option<u32> {
    session.get::<u32>(USER_ID_KEY).unwrap_or(None)
}

pub fn set_user_id(session: &Session, user_id: u32) -> Result<(), AppError> {
    session.renew();
    session
        .insert(USER_ID_KEY, user_id)
        .map_err(|e| AppError::Session(format!("Failed to store user id: {e}")))
}
