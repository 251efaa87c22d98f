use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, middleware, web};

use greenguard::auth::accounts::AccountStore;
use greenguard::config::AppConfig;
use greenguard::handlers;
use greenguard::metrics::{MetricsSource, StaticMetrics};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = AppConfig::from_env();

    let metrics = match &config.data_path {
        Some(path) => StaticMetrics::load(path).map_err(std::io::Error::other)?,
        None => {
            log::info!("No DASHBOARD_DATA set, using built-in sample data");
            StaticMetrics::builtin()
        }
    };
    let metrics: Arc<dyn MetricsSource> = Arc::new(metrics);

    let accounts = AccountStore::with_demo_user(&config.demo_user)
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    let accounts = web::Data::new(accounts);

    let secret_key = config.session_key();
    let bind_addr = config.bind_addr.clone();
    let config = web::Data::new(config);

    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(
            CookieSessionStore::default(),
            secret_key.clone(),
        )
        .cookie_secure(false)
        .cookie_http_only(true)
        .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(config.clone())
            .app_data(accounts.clone())
            .app_data(web::Data::from(metrics.clone()))
            .service(actix_files::Files::new("/static", "./static"))
            .configure(handlers::configure)
            .default_service(web::to(handlers::not_found))
    })
    .bind(bind_addr)?
    .run()
    .await
}
