pub mod dashboard_handlers;
pub mod dashboard_models;
pub mod progress_source;
