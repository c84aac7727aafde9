//! Environment-driven configuration
//!
//! All knobs come from the process environment (a `.env` file is loaded
//! first in `main`). Every key has a default so a bare `resumelink` starts
//! on localhost with file-backed storage and no mail relay.

use std::env;

use crate::errors::{ResumelinkError, Result};

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    /// Public base for composed URLs. When unset, handlers fall back to
    /// the scheme and host of the incoming request.
    pub base_url: Option<String>,
    pub cors_origin: String,
    /// Backing file of the share-link store.
    pub links_file: String,
    pub resume_file: String,
    pub resume_download_name: String,
    pub log_level: String,
    pub log_file: Option<String>,
    pub log_format: String,
    pub smtp: SmtpConfig,
}

#[derive(Clone, Debug)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub from_address: String,
    pub contact_email: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .map_err(|e| ResumelinkError::config(format!("invalid SERVER_PORT: {}", e)))?;

        Ok(AppConfig {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port,
            base_url: non_empty_var("BASE_URL").map(|s| s.trim_end_matches('/').to_string()),
            cors_origin: env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            links_file: env::var("SHARE_LINKS_FILE")
                .unwrap_or_else(|_| "share-links.json".to_string()),
            resume_file: env::var("RESUME_FILE").unwrap_or_else(|_| "resume.pdf".to_string()),
            resume_download_name: env::var("RESUME_DOWNLOAD_NAME")
                .unwrap_or_else(|_| "resume.pdf".to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            log_file: non_empty_var("LOG_FILE"),
            log_format: env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string()),
            smtp: SmtpConfig::from_env()?,
        })
    }
}

impl SmtpConfig {
    fn from_env() -> Result<Self> {
        let from_address =
            env::var("SMTP_FROM").unwrap_or_else(|_| "noreply@portfolio.com".to_string());
        let contact_email =
            env::var("CONTACT_EMAIL").unwrap_or_else(|_| "hello@yourportfolio.com".to_string());

        // SendGrid preset: fixed relay host and an API-key login
        if env::var("EMAIL_SERVICE").is_ok_and(|v| v == "sendgrid") {
            return Ok(SmtpConfig {
                host: "smtp.sendgrid.net".to_string(),
                port: 587,
                username: Some("apikey".to_string()),
                password: non_empty_var("SENDGRID_API_KEY"),
                from_address,
                contact_email,
            });
        }

        let port = env::var("SMTP_PORT")
            .unwrap_or_else(|_| "587".to_string())
            .parse()
            .map_err(|e| ResumelinkError::config(format!("invalid SMTP_PORT: {}", e)))?;

        Ok(SmtpConfig {
            host: env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
            port,
            username: non_empty_var("SMTP_USER"),
            password: non_empty_var("SMTP_PASS"),
            from_address,
            contact_email,
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}
