use actix_web::{web, HttpResponse, Responder};
use crate::core::compose_contact_email;
use crate::models::{ContactRequest, ContactResponse, ErrorResponse};
use crate::routes::AppState;

pub const MISSING_FIELDS: &str = "Missing required fields";
pub const SEND_FAILED: &str = "Failed to send message";

/// Configure contact routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/contact", web::post().to(submit_contact));
}

/// Contact form relay
///
/// POST /api/contact
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "email": "string",
///   "message": "string"
/// }
/// ```
async fn submit_contact(
    state: web::Data<AppState>,
    req: web::Json<ContactRequest>,
) -> impl Responder {
    let submission_id = uuid::Uuid::new_v4();
    let (has_name, has_email, has_message) = req.presence();

    tracing::info!(
        %submission_id,
        has_name,
        has_email,
        has_message,
        "Contact form submission received"
    );

    let Some(submission) = req.into_inner().into_submission() else {
        tracing::warn!(%submission_id, "Rejected contact submission: missing required fields");
        return HttpResponse::BadRequest().json(ErrorResponse::new(MISSING_FIELDS));
    };

    let mail = &state.settings.mail;
    let email = compose_contact_email(&submission, &mail.from, &mail.to);

    match state.mail.send(&email).await {
        Ok(sent) => {
            tracing::info!(%submission_id, email_id = ?sent.id, "Contact email sent");
            HttpResponse::Ok().json(ContactResponse {
                success: true,
                email_id: sent.id,
            })
        }
        Err(e) => {
            tracing::error!(%submission_id, "Failed to send contact email: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(SEND_FAILED))
        }
    }
}
