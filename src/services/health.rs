use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use tracing::trace;

use crate::storages::ShareLinkStore;

/// Process start marker, captured once in `main`.
#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

pub struct HealthService;

impl HealthService {
    pub async fn health_check(
        storage: web::Data<Arc<dyn ShareLinkStore>>,
        app_start_time: web::Data<AppStartTime>,
    ) -> impl Responder {
        trace!("Received health check request");

        let links = storage.load_all().await;
        let now = chrono::Utc::now();
        let uptime_seconds = (now - app_start_time.start_datetime).num_seconds().max(0) as u64;

        HttpResponse::Ok().json(json!({
            "status": "ok",
            "timestamp": now.to_rfc3339(),
            "uptime": uptime_seconds,
            "links_count": links.len(),
        }))
    }
}
