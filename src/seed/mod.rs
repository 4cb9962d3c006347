//! Reset the demo user and its progress rows.
//!
//! Safe to run repeatedly: an existing demo user is deleted with everything it
//! owns before the fixed rows are written again.

use bcrypt::hash;
use chrono::Utc;
use log::info;
use thiserror::Error;
use uuid::Uuid;

use crate::demo::{DEMO_EMAIL, DEMO_NAME, DEMO_PASSWORD};
use crate::models::user::User;
use crate::store::{SeedStore, StoreError, UserProgress};

mod demo_data;

pub use demo_data::{demo_courses, demo_requirements};

/// bcrypt cost used for the demo password.
pub const DEMO_HASH_COST: u32 = 10;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to hash demo password: {0}")]
    Hash(#[from] bcrypt::BcryptError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    pub user_id: String,
    pub replaced_existing: bool,
    pub courses: usize,
    pub requirements: usize,
}

pub async fn seed_demo_user<S>(store: &S, hash_cost: u32) -> Result<SeedSummary, SeedError>
where
    S: SeedStore + ?Sized,
{
    // Hash before touching storage; a failed hash leaves the old rows alone.
    let user = User {
        id: Uuid::new_v4().to_string(),
        email: DEMO_EMAIL.to_string(),
        name: Some(DEMO_NAME.to_string()),
        password: hash(DEMO_PASSWORD, hash_cost)?,
        created_at: Utc::now(),
    };
    let progress = UserProgress {
        academic_courses: demo_courses(&user.id),
        degree_requirements: demo_requirements(&user.id),
        user,
    };

    let replaced = store.replace_user_with_progress(&progress).await?;
    if let Some(old_id) = &replaced {
        info!("Replaced existing demo user {}", old_id);
    }

    info!(
        "Seeded demo user {} with {} courses and {} requirements",
        progress.user.id,
        progress.academic_courses.len(),
        progress.degree_requirements.len()
    );

    Ok(SeedSummary {
        user_id: progress.user.id,
        replaced_existing: replaced.is_some(),
        courses: progress.academic_courses.len(),
        requirements: progress.degree_requirements.len(),
    })
}
