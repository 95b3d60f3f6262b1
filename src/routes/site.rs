use actix_web::{web, HttpResponse, Responder};
use crate::core::{catalog, CategoryFilter};
use crate::models::{ContactDetails, HealthResponse, SiteResponse, WorkEntry, WorkListResponse};
use crate::routes::AppState;

/// Configure site content routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/work", web::get().to(list_work))
        .route("/site", web::get().to(site_details));
}

/// Health check endpoint
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let mail_configured = state.mail.is_configured();
    let status = if mail_configured { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        mail_configured,
    })
}

/// Work listing filtered by category
///
/// GET /api/work?category=labs&category=client-work
///
/// No category means everything. Other query keys are ignored.
async fn list_work(query: web::Query<Vec<(String, String)>>) -> impl Responder {
    let tags = query
        .iter()
        .filter(|(key, _)| key == "category")
        .map(|(_, value)| value.as_str());
    let filter = CategoryFilter::from_tags(tags);

    let items = catalog::work_items();
    let visible: Vec<WorkEntry> = filter
        .apply(&items)
        .into_iter()
        .cloned()
        .map(WorkEntry::from)
        .collect();

    tracing::debug!(
        "Listing {} of {} work items for {:?}",
        visible.len(),
        items.len(),
        filter.active()
    );

    HttpResponse::Ok().json(WorkListResponse {
        total: visible.len(),
        items: visible,
        active_categories: filter.active(),
    })
}

/// Navigation and contact details for the page shell
async fn site_details(state: web::Data<AppState>) -> impl Responder {
    let site = &state.settings.site;

    HttpResponse::Ok().json(SiteResponse {
        navigation: catalog::nav_items(),
        call_to_action: catalog::call_to_action(),
        contact: ContactDetails {
            email: site.email.clone(),
            phone: site.phone.clone(),
            phone_href: site.phone_href(),
            address: site.address.clone(),
            maps_url: site.google_maps_url(),
        },
    })
}
