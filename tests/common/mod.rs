//! Shared test infrastructure.
//!
//! - `FakeSession` stands in for the session store and counts logouts.
//! - `TestState` / `build_app()` assemble the HTTP app the way `main` does.
//! - Small helpers pull the session cookie and CSRF token out of responses.

#![allow(dead_code)]

use std::cell::Cell;
use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{
    App, Error,
    body::MessageBody,
    cookie::{Cookie, Key},
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    test, web,
};
use chrono::{TimeZone, Utc};
use regex::Regex;

use greenguard::auth::accounts::AccountStore;
use greenguard::auth::session::SessionProvider;
use greenguard::config::AppConfig;
use greenguard::handlers;
use greenguard::metrics::{MetricsSource, StaticMetrics};
use greenguard::models::user::UserProfile;
use greenguard::models::waste::WasteSample;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const APP_NAME: &str = "GreenGuard";
pub const DEMO_EMAIL: &str = "demo@greenguard.local";
pub const DEMO_PASSWORD: &str = "greenguard";
pub const DEMO_NAME: &str = "Demo User";

// ============================================================================
// FAKES
// ============================================================================

pub struct FakeSession {
    pub user: Option<UserProfile>,
    pub logouts: Cell<usize>,
}

impl FakeSession {
    pub fn signed_in() -> Self {
        Self { user: Some(sample_user()), logouts: Cell::new(0) }
    }

    pub fn anonymous() -> Self {
        Self { user: None, logouts: Cell::new(0) }
    }
}

impl SessionProvider for FakeSession {
    fn current_user(&self) -> Option<UserProfile> {
        self.user.clone()
    }

    fn logout(&self) {
        self.logouts.set(self.logouts.get() + 1);
    }
}

pub fn sample_user() -> UserProfile {
    UserProfile {
        id: 7,
        name: "Grace Hopper".to_string(),
        email: "grace@example.com".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 12, 9, 10, 0, 0).unwrap(),
        last_login: Utc.with_ymd_and_hms(2026, 10, 14, 18, 20, 0).unwrap(),
    }
}

/// The four-month sequence the dashboard ships with.
pub fn sample_series() -> Vec<WasteSample> {
    vec![
        WasteSample::new("Jan", 450, 780, 240),
        WasteSample::new("Feb", 420, 800, 220),
        WasteSample::new("Mar", 380, 850, 200),
        WasteSample::new("Apr", 350, 900, 180),
    ]
}

// ============================================================================
// HTTP APP
// ============================================================================

#[derive(Clone)]
pub struct TestState {
    pub config: web::Data<AppConfig>,
    pub accounts: web::Data<AccountStore>,
    pub metrics: Arc<dyn MetricsSource>,
    pub key: Key,
}

impl TestState {
    pub fn new() -> Self {
        Self::with_metrics(StaticMetrics::builtin())
    }

    pub fn with_metrics(metrics: StaticMetrics) -> Self {
        let config = AppConfig::default();
        let accounts = AccountStore::with_demo_user(&config.demo_user).expect("seed demo account");
        Self {
            config: web::Data::new(config),
            accounts: web::Data::new(accounts),
            metrics: Arc::new(metrics),
            key: Key::generate(),
        }
    }
}

/// Takes the state by value so the returned app borrows nothing.
pub fn build_app(
    state: TestState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(
            SessionMiddleware::builder(CookieSessionStore::default(), state.key)
                .cookie_secure(false)
                .build(),
        )
        .app_data(state.config)
        .app_data(state.accounts)
        .app_data(web::Data::from(state.metrics))
        .configure(handlers::configure)
        .default_service(web::to(handlers::not_found))
}

// ============================================================================
// RESPONSE HELPERS
// ============================================================================

/// The session cookie set by a response, if it set one.
pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == "id")
        .map(|c| c.into_owned())
}

pub fn location<B>(resp: &ServiceResponse<B>) -> Option<String> {
    resp.headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}

pub async fn body_string<B: MessageBody>(resp: ServiceResponse<B>) -> String {
    String::from_utf8(test::read_body(resp).await.to_vec()).expect("utf-8 body")
}

pub fn csrf_token(html: &str) -> String {
    let re = Regex::new(r#"name="csrf_token" value="([0-9a-f]{64})""#).unwrap();
    re.captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .expect("csrf token in page")
}

/// Values of every `attr="..."` occurrence, in document order.
pub fn attr_values(html: &str, attr: &str) -> Vec<String> {
    let re = Regex::new(&format!(r#"{}="([^"]*)""#, regex::escape(attr))).unwrap();
    re.captures_iter(html).map(|c| c[1].to_string()).collect()
}
