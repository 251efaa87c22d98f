pub mod api_v1;
pub mod auth_handlers;
pub mod dashboard;

use actix_web::{HttpResponse, middleware::from_fn, web};
use askama::Template;

use crate::auth::middleware::require_auth;
use crate::config::AppConfig;
use crate::errors::redirect;
use crate::templates_structs::NotFoundTemplate;

/// Register every route. Shared state (`AppConfig`, `AccountStore`,
/// `dyn MetricsSource`) must already be attached as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Public routes
        .route("/login", web::get().to(auth_handlers::login_page))
        .route("/login", web::post().to(auth_handlers::login_submit))
        .route("/", web::get().to(|| async { redirect("/dashboard") }))
        // Protected routes, guarded per resource so unmatched paths reach the 404 service
        .service(
            web::resource("/dashboard")
                .wrap(from_fn(require_auth))
                .route(web::get().to(dashboard::index)),
        )
        .service(
            web::resource("/logout")
                .wrap(from_fn(require_auth))
                .route(web::post().to(auth_handlers::logout)),
        )
        .service(
            web::scope("/api/v1")
                .wrap(from_fn(require_auth))
                .configure(api_v1::configure),
        );
}

/// Default 404 handler (must be registered last).
pub async fn not_found(config: web::Data<AppConfig>) -> HttpResponse {
    let page = NotFoundTemplate { app_name: config.app_name.clone() };
    match page.render() {
        Ok(html) => HttpResponse::NotFound()
            .content_type("text/html; charset=utf-8")
            .body(html),
        Err(e) => {
            log::error!("Template error: {e}");
            HttpResponse::NotFound().body("Not Found")
        }
    }
}
