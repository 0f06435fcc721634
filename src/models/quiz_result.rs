use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};
use utoipa::ToSchema;
use uuid::Uuid;

/// One recorded attempt at a sub-category's problem set.
#[derive(Debug, Clone, FromRow)]
pub struct QuizResult {
    pub id: Uuid,
    #[sqlx(rename = "username")]
    pub user: String,
    pub main_category: String,
    pub sub_category: String,
    pub score: f64,
    pub wrong_sentence_count: Option<i64>,
    pub total_count: Option<i64>,
    pub attempted_count: Option<i64>,
    pub wrong_answers: Json<Vec<WrongAnswer>>,
    pub status: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Plain value entry inside `wrong_answers`; it has no identity of its own.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WrongAnswer {
    pub problem: Option<String>,
    pub user_answer: Option<String>,
    pub correct_answer: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}
