use actix_web::{web, HttpResponse};
use log::{error, info};

use super::demo_progress_errors::DemoProgressError;
use super::demo_progress_models::{DemoProgressResponse, ProgressUser};
use crate::credits::total_credits;
use crate::demo::DEMO_EMAIL;
use crate::store::ProgressStore;

// Read-only and unauthenticated: shows the seeded demo user's stored progress.
pub async fn get_demo_progress(
    store: web::Data<dyn ProgressStore>,
) -> Result<HttpResponse, DemoProgressError> {
    info!("Received request for demo progress");

    let progress = match store.find_user_progress(DEMO_EMAIL).await {
        Ok(Some(progress)) => progress,
        Ok(None) => {
            info!("Demo user {} has not been seeded", DEMO_EMAIL);
            return Err(DemoProgressError::NotFound);
        }
        Err(e) => {
            error!("Error fetching demo progress: {}", e);
            return Err(DemoProgressError::Internal);
        }
    };

    let total_credits = total_credits(&progress.academic_courses);
    info!(
        "Returning {} courses ({} credits) for {}",
        progress.academic_courses.len(),
        total_credits,
        progress.user.email
    );

    Ok(HttpResponse::Ok().json(DemoProgressResponse {
        user: ProgressUser {
            name: progress.user.name,
            email: progress.user.email,
        },
        total_credits,
        academic_courses: progress.academic_courses,
        degree_requirements: progress.degree_requirements,
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test, web, App};
    use chrono::Utc;
    use serde_json::Value;
    use sqlx::types::Json;

    use crate::models::{
        academic_course::AcademicCourse, degree_requirement::DegreeRequirement, user::User,
    };
    use crate::routes::routes::demo_progress_configure;
    use crate::store::{memory_store::MemoryStore, ProgressStore, UserProgress};

    fn user(email: &str) -> User {
        User {
            id: "user-1".into(),
            email: email.into(),
            name: Some("Demo User".into()),
            password: "hash".into(),
            created_at: Utc::now(),
        }
    }

    fn course(id: &str, code: &str, credits: &str) -> AcademicCourse {
        AcademicCourse {
            id: id.into(),
            user_id: "user-1".into(),
            code: code.into(),
            name: format!("Course {code}"),
            term: "Fall".into(),
            grade: "A".into(),
            credits: credits.into(),
            course: code.into(),
            title: format!("Course {code}"),
            requirement_group: None,
        }
    }

    fn requirement(id: &str, title: &str, courses: &[&str]) -> DegreeRequirement {
        DegreeRequirement {
            id: id.into(),
            user_id: "user-1".into(),
            title: title.into(),
            status: "In Progress".into(),
            courses: Json(courses.iter().map(|c| c.to_string()).collect()),
        }
    }

    async fn call(store: MemoryStore) -> (StatusCode, Value) {
        let store: Arc<dyn ProgressStore> = Arc::new(store);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(store))
                .configure(demo_progress_configure),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/api/demo-progress")
            .to_request();
        let res = test::call_service(&app, req).await;
        let status = res.status();
        let body: Value = test::read_body_json(res).await;
        (status, body)
    }

    #[actix_web::test]
    async fn returns_404_when_demo_user_missing() {
        let (status, body) = call(MemoryStore::new()).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        let error = body["error"].as_str().unwrap();
        assert!(error.contains("Demo user not found"));
        assert!(error.contains("db:seed"));
    }

    #[actix_web::test]
    async fn ignores_users_other_than_the_demo_user() {
        let store = MemoryStore::with_progress(UserProgress {
            user: user("someone@else.local"),
            academic_courses: vec![course("1", "CIS 275", "3")],
            degree_requirements: vec![],
        });
        let (status, _) = call(store).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn returns_user_courses_and_requirements() {
        let store = MemoryStore::with_progress(UserProgress {
            user: user("demo@group1.local"),
            academic_courses: vec![course("1", "CIS 275", "3")],
            degree_requirements: vec![requirement("1", "Core", &["CIS 275"])],
        });
        let (status, body) = call(store).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["user"],
            serde_json::json!({ "name": "Demo User", "email": "demo@group1.local" })
        );
        assert_eq!(body["totalCredits"].as_f64(), Some(3.0));
        assert_eq!(body["academicCourses"].as_array().unwrap().len(), 1);
        assert_eq!(body["academicCourses"][0]["code"], "CIS 275");
        assert_eq!(body["academicCourses"][0]["userId"], "user-1");
        assert_eq!(body["degreeRequirements"].as_array().unwrap().len(), 1);
        assert_eq!(
            body["degreeRequirements"][0]["courses"],
            serde_json::json!(["CIS 275"])
        );
        assert!(body["user"].get("password").is_none());
    }

    #[actix_web::test]
    async fn sums_credits_across_courses() {
        let store = MemoryStore::with_progress(UserProgress {
            user: user("demo@group1.local"),
            academic_courses: vec![course("1", "A", "4"), course("2", "B", "3")],
            degree_requirements: vec![],
        });
        let (status, body) = call(store).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalCredits"].as_f64(), Some(7.0));
    }

    #[actix_web::test]
    async fn user_without_courses_has_zero_credits() {
        let store = MemoryStore::with_progress(UserProgress {
            user: user("demo@group1.local"),
            academic_courses: vec![],
            degree_requirements: vec![],
        });
        let (status, body) = call(store).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalCredits"].as_f64(), Some(0.0));
        assert_eq!(body["academicCourses"], serde_json::json!([]));
    }

    #[actix_web::test]
    async fn storage_failure_returns_fixed_500() {
        let (status, body) = call(MemoryStore::unavailable()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "error": "Failed to fetch demo progress" }));
    }
}
