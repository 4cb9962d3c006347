use actix_web::{web, HttpResponse};

use super::dashboard::dashboard_handlers;
use super::demo_progress::demo_progress_handlers;

pub fn root_configure(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/",
        web::get().to(|| async { HttpResponse::Ok().body("Academic progress demo. See /dashboard.") }),
    );
}

pub fn demo_progress_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/demo-progress", web::get().to(demo_progress_handlers::get_demo_progress)),
    );
}

pub fn dashboard_configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/dashboard", web::get().to(dashboard_handlers::dashboard_get));
}
