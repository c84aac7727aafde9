use std::fs;

use actix_web::http::header;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use tracing::{debug, warn};

use crate::config::AppConfig;

pub struct ResumeService;

impl ResumeService {
    /// GET /api/resume/download
    pub async fn download(config: web::Data<AppConfig>) -> impl Responder {
        match fs::read(&config.resume_file) {
            Ok(bytes) => {
                debug!("Serving resume download ({} bytes)", bytes.len());
                HttpResponse::Ok()
                    .insert_header((header::CONTENT_TYPE, "application/pdf"))
                    .insert_header((
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", config.resume_download_name),
                    ))
                    .body(bytes)
            }
            Err(e) => {
                warn!("Resume file {} unavailable: {}", config.resume_file, e);
                HttpResponse::NotFound().json(json!({ "error": "Resume file not found" }))
            }
        }
    }
}
