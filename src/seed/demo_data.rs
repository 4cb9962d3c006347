use sqlx::types::Json;
use uuid::Uuid;

use crate::models::{academic_course::AcademicCourse, degree_requirement::DegreeRequirement};

// (code, name, term, grade, credits, requirement group)
const COURSES: [(&str, &str, &str, &str, &str, &str); 5] = [
    ("CIS 252", "Data Structures", "Fall 2024", "A", "3", "Major"),
    ("CIS 275", "Software Design", "Fall 2024", "B+", "3", "Major"),
    ("MAT 295", "Calculus I", "Fall 2023", "A-", "4", "Core"),
    ("WRT 105", "Studio 1", "Fall 2023", "P", "3", "Core"),
    ("PHI 107", "Intro to Ethics", "Spring 2024", "B", "3", "Elective"),
];

const REQUIREMENTS: [(&str, &str, &[&str]); 3] = [
    ("Core Requirements", "In Progress", &["MAT 295", "WRT 105"]),
    ("Major Requirements", "In Progress", &["CIS 252", "CIS 275"]),
    ("Electives", "In Progress", &["PHI 107"]),
];

pub fn demo_courses(user_id: &str) -> Vec<AcademicCourse> {
    COURSES
        .iter()
        .map(|&(code, name, term, grade, credits, group)| AcademicCourse {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            code: code.into(),
            name: name.into(),
            term: term.into(),
            grade: grade.into(),
            credits: credits.into(),
            course: code.into(),
            title: name.into(),
            requirement_group: Some(group.into()),
        })
        .collect()
}

pub fn demo_requirements(user_id: &str) -> Vec<DegreeRequirement> {
    REQUIREMENTS
        .iter()
        .map(|&(title, status, courses)| DegreeRequirement {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            title: title.into(),
            status: status.into(),
            courses: Json(courses.iter().map(|code| code.to_string()).collect()),
        })
        .collect()
}
