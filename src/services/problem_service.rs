use crate::dto::problem_dto::{CreateProblemPayload, UpdateProblemPayload};
use crate::error::{Error, Result};
use crate::models::problem::Problem;
use crate::utils::time::now;
use sqlx::PgPool;
use uuid::Uuid;

const PROBLEM_COLUMNS: &str =
    "id, main_category, sub_category, problem, translation, image, created_at, updated_at";

#[derive(Clone)]
pub struct ProblemService {
    pool: PgPool,
}

impl ProblemService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: CreateProblemPayload) -> Result<Problem> {
        let new = payload.into_new()?;
        let id = Uuid::new_v4();
        let stamped_at = now();

        let problem = sqlx::query_as::<_, Problem>(&format!(
            r#"
            INSERT INTO problems (
                id, main_category, sub_category, problem, translation, image, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
            RETURNING {}
            "#,
            PROBLEM_COLUMNS
        ))
        .bind(id)
        .bind(&new.main_category)
        .bind(&new.sub_category)
        .bind(&new.problem)
        .bind(&new.translation)
        .bind(&new.image)
        .bind(stamped_at)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(problem_id = %problem.id, main_category = %problem.main_category, "problem created");
        Ok(problem)
    }

    /// Every problem, ordered by main then sub category using byte-wise comparison.
    pub async fn list_all(&self) -> Result<Vec<Problem>> {
        let problems = sqlx::query_as::<_, Problem>(&format!(
            r#"
            SELECT {}
            FROM problems
            ORDER BY main_category COLLATE "C" ASC, sub_category COLLATE "C" ASC
            "#,
            PROBLEM_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(problems)
    }

    pub async fn update(&self, id: &str, payload: UpdateProblemPayload) -> Result<Problem> {
        let id = Uuid::parse_str(id)?;
        let (translation_set, translation) = split_patch(payload.translation);
        let (image_set, image) = split_patch(payload.image);

        let problem = sqlx::query_as::<_, Problem>(&format!(
            r#"
            UPDATE problems
            SET
                main_category = COALESCE($2, main_category),
                sub_category = COALESCE($3, sub_category),
                problem = COALESCE($4, problem),
                translation = CASE WHEN $5 THEN $6 ELSE translation END,
                image = CASE WHEN $7 THEN $8 ELSE image END,
                updated_at = $9
            WHERE id = $1
            RETURNING {}
            "#,
            PROBLEM_COLUMNS
        ))
        .bind(id)
        .bind(payload.main_category)
        .bind(payload.sub_category)
        .bind(payload.problem)
        .bind(translation_set)
        .bind(translation)
        .bind(image_set)
        .bind(image)
        .bind(now())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Problem not found.".to_string()))?;

        tracing::info!(problem_id = %problem.id, "problem updated");
        Ok(problem)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let id = Uuid::parse_str(id)?;
        let res = sqlx::query("DELETE FROM problems WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if res.rows_affected() == 0 {
            return Err(Error::NotFound("Problem not found.".to_string()));
        }

        tracing::info!(problem_id = %id, "problem deleted");
        Ok(())
    }

    /// Removes every problem. Results referencing the same categories are untouched.
    pub async fn delete_all(&self) -> Result<u64> {
        let res = sqlx::query("DELETE FROM problems")
            .execute(&self.pool)
            .await?;

        tracing::warn!(deleted = res.rows_affected(), "all problems deleted");
        Ok(res.rows_affected())
    }
}

/// Turns a nullable patch field into a (present, value) pair for binding.
fn split_patch(field: Option<Option<String>>) -> (bool, Option<String>) {
    match field {
        Some(value) => (true, value),
        None => (false, None),
    }
}
