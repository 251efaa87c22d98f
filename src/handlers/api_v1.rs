use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::metrics::MetricsSource;
use crate::models::alert::Alert;
use crate::models::waste::{WasteSample, latest_sample};

#[derive(Serialize)]
pub struct WasteResponse {
    pub samples: Vec<WasteSample>,
    pub latest: Option<WasteSample>,
    pub alerts: Vec<Alert>,
}

/// GET /api/v1/waste - samples in sequence order, the latest sample and alerts.
pub async fn waste(metrics: web::Data<dyn MetricsSource>) -> HttpResponse {
    let samples = metrics.samples();
    let latest = latest_sample(&samples).cloned();
    HttpResponse::Ok().json(WasteResponse {
        samples,
        latest,
        alerts: metrics.alerts(),
    })
}

/// Configure API v1 routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/waste", web::get().to(waste));
}
