use crate::dto::result_dto::{CreateResultPayload, ResultListQuery};
use crate::error::Result;
use crate::models::quiz_result::QuizResult;
use crate::utils::time::now;
use sqlx::{types::Json, PgPool};
use uuid::Uuid;

const RESULT_COLUMNS: &str = "id, username, main_category, sub_category, score, wrong_sentence_count, total_count, attempted_count, wrong_answers, status, created_at, updated_at";

#[derive(Clone)]
pub struct ResultService {
    pool: PgPool,
}

impl ResultService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: CreateResultPayload) -> Result<QuizResult> {
        tracing::debug!(?payload, "received result");
        let new = payload.into_new()?;
        let id = Uuid::new_v4();
        let stamped_at = now();

        let result = sqlx::query_as::<_, QuizResult>(&format!(
            r#"
            INSERT INTO results (
                id, username, main_category, sub_category, score,
                wrong_sentence_count, total_count, attempted_count,
                wrong_answers, status, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $11)
            RETURNING {}
            "#,
            RESULT_COLUMNS
        ))
        .bind(id)
        .bind(&new.user)
        .bind(&new.main_category)
        .bind(&new.sub_category)
        .bind(new.score)
        .bind(new.wrong_sentence_count)
        .bind(new.total_count)
        .bind(new.attempted_count)
        .bind(Json(&new.wrong_answers))
        .bind(&new.status)
        .bind(stamped_at)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(result_id = %result.id, user = %result.user, score = result.score, "result recorded");
        Ok(result)
    }

    /// Results matching every supplied filter, newest first.
    pub async fn list(&self, query: ResultListQuery) -> Result<Vec<QuizResult>> {
        let (where_clause, args) = build_filter(&query);

        let items_query = format!(
            "SELECT {} FROM results {} ORDER BY created_at DESC",
            RESULT_COLUMNS, where_clause
        );

        let mut statement = sqlx::query_as::<_, QuizResult>(&items_query);
        for value in &args {
            statement = statement.bind(value);
        }
        let items = statement.fetch_all(&self.pool).await?;

        Ok(items)
    }

    pub async fn delete_all(&self) -> Result<u64> {
        let res = sqlx::query("DELETE FROM results")
            .execute(&self.pool)
            .await?;

        tracing::warn!(deleted = res.rows_affected(), "all results deleted");
        Ok(res.rows_affected())
    }
}

/// Conjunction of equality clauses for the supplied filters only.
/// Returns an empty clause when nothing is supplied.
fn build_filter(query: &ResultListQuery) -> (String, Vec<String>) {
    let mut filters = Vec::new();
    let mut args: Vec<String> = Vec::new();

    let columns = [
        ("username", &query.user),
        ("main_category", &query.main_category),
        ("sub_category", &query.sub_category),
    ];
    for (column, value) in columns {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            filters.push(format!("{} = ${}", column, args.len() + 1));
            args.push(value.to_string());
        }
    }

    let where_clause = if filters.is_empty() {
        "".to_string()
    } else {
        format!("WHERE {}", filters.join(" AND "))
    };

    (where_clause, args)
}
