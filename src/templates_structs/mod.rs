// Template context structures for askama templates, organized by page.

mod common;
mod dashboard;

pub use common::{LoginTemplate, NotFoundTemplate};
pub use dashboard::DashboardTemplate;

use actix_session::Session;

use crate::auth::csrf;
use crate::config::AppConfig;

/// Context shared by all authenticated pages.
/// Templates access these as `ctx.app_name`, `ctx.csrf_token`.
pub struct PageContext {
    pub app_name: String,
    pub csrf_token: String,
}

impl PageContext {
    pub fn build(session: &Session, config: &AppConfig) -> Self {
        Self {
            app_name: config.app_name.clone(),
            csrf_token: csrf::get_or_create_token(session),
        }
    }
}
