//! Storage ports for the demo progress data.
//!
//! Handlers and the seed program only see these traits. The MySQL adapter
//! lives in [`mysql_store`]; tests swap in an in-memory store.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{
    academic_course::AcademicCourse, degree_requirement::DegreeRequirement, user::User,
};

pub mod mysql_store;
#[cfg(test)]
pub mod memory_store;

pub use mysql_store::MySqlStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// A user together with the rows it owns.
#[derive(Debug, Clone)]
pub struct UserProgress {
    pub user: User,
    pub academic_courses: Vec<AcademicCourse>,
    pub degree_requirements: Vec<DegreeRequirement>,
}

/// Read side used by the progress endpoint.
#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Load the user with `email` and both related collections.
    ///
    /// Returns `Ok(None)` when no such user exists.
    async fn find_user_progress(&self, email: &str) -> Result<Option<UserProgress>, StoreError>;
}

/// Write side used by the seed program.
#[async_trait]
pub trait SeedStore: Send + Sync {
    /// Replace the user with `progress.user.email`, and every row it owns,
    /// with `progress`. Either all of it is written or none of it is.
    ///
    /// Returns the id of the user that was replaced, if there was one.
    async fn replace_user_with_progress(
        &self,
        progress: &UserProgress,
    ) -> Result<Option<String>, StoreError>;
}
