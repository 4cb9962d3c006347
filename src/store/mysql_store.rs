use async_trait::async_trait;
use log::info;
use sqlx::mysql::{MySqlConnection, MySqlPool, MySqlPoolOptions};
use sqlx::{MySql, QueryBuilder};

use super::{ProgressStore, SeedStore, StoreError, UserProgress};
use crate::models::{
    academic_course::AcademicCourse, degree_requirement::DegreeRequirement, user::User,
};

#[derive(Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = MySqlPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    pub async fn run_migrations(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        info!("Database migrations are up to date");
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl ProgressStore for MySqlStore {
    async fn find_user_progress(&self, email: &str) -> Result<Option<UserProgress>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, name, password, created_at FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        let Some(user) = user else {
            return Ok(None);
        };

        // `seq` follows insertion order.
        let academic_courses = sqlx::query_as::<_, AcademicCourse>(
            "SELECT id, user_id, code, name, term, grade, credits, course, title, requirement_group
             FROM academic_courses
             WHERE user_id = ?
             ORDER BY seq",
        )
        .bind(&user.id)
        .fetch_all(&self.pool)
        .await?;

        let degree_requirements = sqlx::query_as::<_, DegreeRequirement>(
            "SELECT id, user_id, title, status, courses
             FROM degree_requirements
             WHERE user_id = ?
             ORDER BY seq",
        )
        .bind(&user.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(UserProgress {
            user,
            academic_courses,
            degree_requirements,
        }))
    }
}

#[async_trait]
impl SeedStore for MySqlStore {
    async fn replace_user_with_progress(
        &self,
        progress: &UserProgress,
    ) -> Result<Option<String>, StoreError> {
        let mut tx = self.pool.begin().await?;

        let existing =
            sqlx::query_scalar::<_, String>("SELECT id FROM users WHERE email = ? FOR UPDATE")
                .bind(&progress.user.email)
                .fetch_optional(&mut *tx)
                .await?;

        if let Some(user_id) = &existing {
            delete_user_with_progress(&mut tx, user_id).await?;
        }
        insert_user(&mut tx, &progress.user).await?;
        insert_courses(&mut tx, &progress.academic_courses).await?;
        insert_requirements(&mut tx, &progress.degree_requirements).await?;

        // Dropping `tx` on an early return rolls everything back.
        tx.commit().await?;
        Ok(existing)
    }
}

async fn delete_user_with_progress(
    conn: &mut MySqlConnection,
    user_id: &str,
) -> Result<(), StoreError> {
    sqlx::query("DELETE FROM academic_courses WHERE user_id = ?")
        .bind(user_id)
        .execute(&mut *conn)
        .await?;
    sqlx::query("DELETE FROM degree_requirements WHERE user_id = ?")
        .bind(user_id)
        .execute(&mut *conn)
        .await?;
    sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(user_id)
        .execute(&mut *conn)
        .await?;
    Ok(())
}

async fn insert_user(conn: &mut MySqlConnection, user: &User) -> Result<(), StoreError> {
    sqlx::query("INSERT INTO users (id, email, name, password, created_at) VALUES (?, ?, ?, ?, ?)")
        .bind(&user.id)
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.password)
        .bind(user.created_at)
        .execute(&mut *conn)
        .await?;
    Ok(())
}

// A multi-row INSERT assigns `seq` in VALUES order.
async fn insert_courses(
    conn: &mut MySqlConnection,
    courses: &[AcademicCourse],
) -> Result<(), StoreError> {
    if courses.is_empty() {
        return Ok(());
    }

    let mut builder: QueryBuilder<MySql> = QueryBuilder::new(
        "INSERT INTO academic_courses \
         (id, user_id, code, name, term, grade, credits, course, title, requirement_group) ",
    );
    builder.push_values(courses, |mut row, course| {
        row.push_bind(course.id.clone())
            .push_bind(course.user_id.clone())
            .push_bind(course.code.clone())
            .push_bind(course.name.clone())
            .push_bind(course.term.clone())
            .push_bind(course.grade.clone())
            .push_bind(course.credits.clone())
            .push_bind(course.course.clone())
            .push_bind(course.title.clone())
            .push_bind(course.requirement_group.clone());
    });
    builder.build().execute(&mut *conn).await?;
    Ok(())
}

async fn insert_requirements(
    conn: &mut MySqlConnection,
    requirements: &[DegreeRequirement],
) -> Result<(), StoreError> {
    if requirements.is_empty() {
        return Ok(());
    }

    let mut builder: QueryBuilder<MySql> =
        QueryBuilder::new("INSERT INTO degree_requirements (id, user_id, title, status, courses) ");
    builder.push_values(requirements, |mut row, requirement| {
        row.push_bind(requirement.id.clone())
            .push_bind(requirement.user_id.clone())
            .push_bind(requirement.title.clone())
            .push_bind(requirement.status.clone())
            .push_bind(requirement.courses.clone());
    });
    builder.build().execute(&mut *conn).await?;
    Ok(())
}
