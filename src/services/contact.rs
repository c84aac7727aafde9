use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::mailer::Mailer;
use crate::utils::validation::{
    validate_email, validate_message, validate_name, validate_subject, FieldError,
};

/// Contact form payload. Missing fields deserialize as empty strings so
/// validation can report them per-field instead of failing the parse.
#[derive(Deserialize, Clone, Debug)]
pub struct ContactMessage {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

pub struct ContactService;

impl ContactService {
    /// POST /api/contact
    pub async fn send_message(
        form: web::Json<ContactMessage>,
        mailer: web::Data<Option<Mailer>>,
    ) -> impl Responder {
        let form = form.into_inner();

        let errors = validate_contact(&form);
        if !errors.is_empty() {
            return HttpResponse::BadRequest().json(json!({
                "error": "Validation failed",
                "details": errors,
            }));
        }

        match mailer.get_ref() {
            Some(mailer) => {
                if let Err(e) = mailer.send_contact(&form).await {
                    error!("Failed to relay contact message: {}", e);
                    return HttpResponse::InternalServerError().json(json!({
                        "error": "Failed to send message. Please try again later.",
                    }));
                }
            }
            None => {
                // No relay configured: log the submission instead of dropping it
                info!(
                    "Mail relay not configured, contact message from {} <{}>: {}",
                    form.name, form.email, form.subject
                );
            }
        }

        HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Your message has been sent successfully!",
        }))
    }
}

fn validate_contact(form: &ContactMessage) -> Vec<FieldError> {
    [
        validate_name(&form.name),
        validate_email(&form.email),
        validate_subject(&form.subject),
        validate_message(&form.message),
    ]
    .into_iter()
    .flatten()
    .collect()
}
