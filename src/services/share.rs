use std::sync::Arc;

use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde_json::json;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::storages::ShareLinkStore;

pub struct ShareService;

impl ShareService {
    /// GET /api/resume/share-link
    ///
    /// Issues a fresh share id and hands back the full share URL. The
    /// referrer is best-effort: whatever `Referer` the issuing request
    /// carried, or `"direct"`.
    pub async fn generate_share_link(
        req: HttpRequest,
        storage: web::Data<Arc<dyn ShareLinkStore>>,
        config: web::Data<AppConfig>,
    ) -> impl Responder {
        let referrer = req
            .headers()
            .get(header::REFERER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or("direct");

        let link = storage.create(referrer).await;
        let share_url = format!(
            "{}/api/resume/share/{}",
            resolve_base_url(&req, &config),
            link.id
        );

        info!("Issued share link {} (referrer: {})", link.id, link.referrer);

        HttpResponse::Ok().json(json!({
            "success": true,
            "shareUrl": share_url,
            "shortId": link.id,
        }))
    }

    /// GET /api/resume/share/{id}
    ///
    /// Visitors land on the resume section either way; an unknown or
    /// expired id just skips the click bookkeeping.
    pub async fn resolve_shared(
        req: HttpRequest,
        path: web::Path<String>,
        storage: web::Data<Arc<dyn ShareLinkStore>>,
        config: web::Data<AppConfig>,
    ) -> impl Responder {
        let id = path.into_inner();

        match storage.resolve(&id).await {
            Some(link) => debug!("Share link {} resolved, {} clicks", link.id, link.clicks),
            None => debug!("Unknown share link: {}", id),
        }

        let redirect_url = format!("{}/#resume", resolve_base_url(&req, &config));

        HttpResponse::Found()
            .insert_header((header::LOCATION, redirect_url))
            .finish()
    }
}

/// Public base for composed URLs: the configured value when set, the
/// request's own scheme and host otherwise.
fn resolve_base_url(req: &HttpRequest, config: &AppConfig) -> String {
    match &config.base_url {
        Some(base) => base.clone(),
        None => {
            let conn = req.connection_info();
            format!("{}://{}", conn.scheme(), conn.host())
        }
    }
}
