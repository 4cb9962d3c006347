use actix_web::{web, HttpResponse, Responder};
use askama::Template;
use log::{error, info};

use super::dashboard_models::{DashboardPage, DashboardState};
use super::progress_source::ProgressSource;

pub async fn dashboard_get(source: web::Data<dyn ProgressSource>) -> impl Responder {
    info!("Received request on /dashboard");

    let state = DashboardState::load(source.get_ref()).await;
    if let DashboardState::Failed(failure) = &state {
        info!("Dashboard could not load progress: {:?}", failure);
    }

    match DashboardPage::new(&state).render() {
        Ok(html) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html),
        Err(e) => {
            error!("Failed to render dashboard: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}
