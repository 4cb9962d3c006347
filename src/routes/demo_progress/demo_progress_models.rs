use serde::{Deserialize, Serialize};

use crate::models::{academic_course::AcademicCourse, degree_requirement::DegreeRequirement};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressUser {
    pub name: Option<String>,
    pub email: String,
}

// GET /api/demo-progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoProgressResponse {
    pub user: ProgressUser,
    pub total_credits: f64,
    pub academic_courses: Vec<AcademicCourse>,
    pub degree_requirements: Vec<DegreeRequirement>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
