use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{ProgressStore, SeedStore, StoreError, UserProgress};
use crate::models::{
    academic_course::AcademicCourse, degree_requirement::DegreeRequirement, user::User,
};

#[derive(Debug, Default)]
pub struct MemoryState {
    pub users: Vec<User>,
    pub courses: Vec<AcademicCourse>,
    pub requirements: Vec<DegreeRequirement>,
}

/// In-memory store for handler and seed tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails as if the database were down.
    pub fn unavailable() -> Self {
        Self {
            state: Mutex::default(),
            unavailable: true,
        }
    }

    pub fn with_progress(progress: UserProgress) -> Self {
        let store = Self::new();
        {
            let mut state = store.state.lock().expect("memory store lock");
            state.users.push(progress.user);
            state.courses.extend(progress.academic_courses);
            state.requirements.extend(progress.degree_requirements);
        }
        store
    }

    pub fn snapshot<R>(&self, f: impl FnOnce(&MemoryState) -> R) -> R {
        f(&self.state.lock().expect("memory store lock"))
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable {
            return Err(StoreError::Unavailable("connection refused".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProgressStore for MemoryStore {
    async fn find_user_progress(&self, email: &str) -> Result<Option<UserProgress>, StoreError> {
        self.check_available()?;
        let state = self.state.lock().expect("memory store lock");
        let Some(user) = state.users.iter().find(|u| u.email == email).cloned() else {
            return Ok(None);
        };
        let academic_courses = state
            .courses
            .iter()
            .filter(|c| c.user_id == user.id)
            .cloned()
            .collect();
        let degree_requirements = state
            .requirements
            .iter()
            .filter(|r| r.user_id == user.id)
            .cloned()
            .collect();
        Ok(Some(UserProgress {
            user,
            academic_courses,
            degree_requirements,
        }))
    }
}

#[async_trait]
impl SeedStore for MemoryStore {
    async fn replace_user_with_progress(
        &self,
        progress: &UserProgress,
    ) -> Result<Option<String>, StoreError> {
        self.check_available()?;
        let mut state = self.state.lock().expect("memory store lock");

        let existing = state
            .users
            .iter()
            .find(|u| u.email == progress.user.email)
            .map(|u| u.id.clone());
        let replaced = |user_id: &str| existing.as_deref() == Some(user_id);

        // Check every key before touching state so a rejected write changes nothing.
        let mut course_ids: HashSet<&str> = state
            .courses
            .iter()
            .filter(|c| !replaced(&c.user_id))
            .map(|c| c.id.as_str())
            .collect();
        for course in &progress.academic_courses {
            if !course_ids.insert(&course.id) {
                return Err(StoreError::Unavailable(format!(
                    "duplicate course id {}",
                    course.id
                )));
            }
        }
        let mut requirement_ids: HashSet<&str> = state
            .requirements
            .iter()
            .filter(|r| !replaced(&r.user_id))
            .map(|r| r.id.as_str())
            .collect();
        for requirement in &progress.degree_requirements {
            if !requirement_ids.insert(&requirement.id) {
                return Err(StoreError::Unavailable(format!(
                    "duplicate requirement id {}",
                    requirement.id
                )));
            }
        }

        if let Some(user_id) = &existing {
            state.courses.retain(|c| &c.user_id != user_id);
            state.requirements.retain(|r| &r.user_id != user_id);
            state.users.retain(|u| &u.id != user_id);
        }
        state.users.push(progress.user.clone());
        state.courses.extend_from_slice(&progress.academic_courses);
        state
            .requirements
            .extend_from_slice(&progress.degree_requirements);

        Ok(existing)
    }
}
