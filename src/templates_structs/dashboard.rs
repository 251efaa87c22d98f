use askama::Template;

use crate::models::dashboard::DashboardView;

use super::PageContext;

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub ctx: PageContext,
    pub view: DashboardView,
}
