use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// `course` and `title` duplicate `code` and `name` for older clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AcademicCourse {
    pub id: String,
    pub user_id: String,
    pub code: String,
    pub name: String,
    pub term: String,
    pub grade: String,
    pub credits: String,
    pub course: String,
    pub title: String,
    pub requirement_group: Option<String>,
}
