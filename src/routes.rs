// src/routes.rs

pub mod dashboard;
pub mod demo_progress;
pub mod routes;
