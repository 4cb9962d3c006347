pub mod demo_progress_errors;
pub mod demo_progress_handlers;
pub mod demo_progress_models;
