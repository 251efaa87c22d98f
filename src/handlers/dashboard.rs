use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::auth::accounts::AccountStore;
use crate::auth::session::CookieSession;
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::metrics::MetricsSource;
use crate::models::dashboard::DashboardView;
use crate::models::ui_state::{DashboardQuery, UiState};
use crate::templates_structs::{DashboardTemplate, PageContext};

/// GET /dashboard?tab=<tab>&menu=open
pub async fn index(
    config: web::Data<AppConfig>,
    accounts: web::Data<AccountStore>,
    metrics: web::Data<dyn MetricsSource>,
    session: Session,
    query: web::Query<DashboardQuery>,
) -> Result<HttpResponse, AppError> {
    let ui = UiState::from_query(&query);
    let provider = CookieSession::new(&session, &accounts);
    let view = DashboardView::build(&config.app_name, &provider, metrics.get_ref(), ui);

    if view.profile.is_none() {
        log::warn!("Rendering dashboard without a session user");
    }

    let ctx = PageContext::build(&session, &config);
    render(DashboardTemplate { ctx, view })
}
