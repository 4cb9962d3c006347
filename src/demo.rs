//! The fixed demo identity shared by the seed program and the HTTP routes.

pub const DEMO_EMAIL: &str = "demo@group1.local";
pub const DEMO_NAME: &str = "Demo Student";
pub const DEMO_PASSWORD: &str = "demo123";

/// Operator command that (re)creates the demo user.
pub const SEED_COMMAND: &str = "make db:seed";
