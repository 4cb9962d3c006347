use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DegreeRequirement {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub status: String,
    // Course codes, not checked against academic_courses.
    pub courses: Json<Vec<String>>,
}
