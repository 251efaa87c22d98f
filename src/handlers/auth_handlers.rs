use actix_session::Session;
use actix_web::{HttpResponse, web};
use chrono::Utc;
use serde::Deserialize;

use crate::auth::accounts::AccountStore;
use crate::auth::csrf;
use crate::auth::session::{CookieSession, get_user_id, set_user_id};
use crate::config::AppConfig;
use crate::errors::{AppError, redirect, render};
use crate::models::dashboard::end_session;
use crate::templates_structs::LoginTemplate;

#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub csrf_token: String,
}

#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

fn login_form(session: &Session, config: &AppConfig, email: &str, error: Option<&str>) -> Result<HttpResponse, AppError> {
    render(LoginTemplate {
        error: error.map(String::from),
        app_name: config.app_name.clone(),
        csrf_token: csrf::get_or_create_token(session),
        email: email.to_string(),
    })
}

pub async fn login_page(
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    if get_user_id(&session).is_some() {
        return Ok(redirect("/dashboard"));
    }
    login_form(&session, &config, "", None)
}

pub async fn login_submit(
    config: web::Data<AppConfig>,
    accounts: web::Data<AccountStore>,
    session: Session,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    match accounts.authenticate(&form.email, &form.password)? {
        Some(id) => {
            accounts.record_login(id, Utc::now());
            set_user_id(&session, id)?;
            log::info!("User {id} logged in");
            Ok(redirect("/dashboard"))
        }
        None => {
            log::warn!("Failed login for {}", form.email);
            login_form(&session, &config, &form.email, Some("Invalid email or password"))
        }
    }
}

pub async fn logout(
    accounts: web::Data<AccountStore>,
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    end_session(&CookieSession::new(&session, &accounts));
    Ok(redirect("/login"))
}
