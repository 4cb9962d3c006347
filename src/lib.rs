//! Academic-progress demo backend.
//!
//! Serves the seeded demo user's courses and degree requirements as JSON
//! (`GET /api/demo-progress`) and as an HTML page (`GET /dashboard`). The
//! `seed` binary resets the demo user.

pub mod config;
pub mod credits;
pub mod demo;
pub mod models;
pub mod routes;
pub mod seed;
pub mod store;
