use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::{Error, Result};
use crate::models::quiz_result::{QuizResult, WrongAnswer};

pub const RESULT_FIELDS_REQUIRED: &str = "Required result fields missing.";

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateResultPayload {
    #[validate(required, length(min = 1))]
    pub user: Option<String>,
    #[validate(required, length(min = 1))]
    pub main_category: Option<String>,
    #[validate(required, length(min = 1))]
    pub sub_category: Option<String>,
    #[validate(required)]
    pub score: Option<f64>,
    pub wrong_sentence_count: Option<i64>,
    pub total_count: Option<i64>,
    pub attempted_count: Option<i64>,
    #[serde(default)]
    pub wrong_answers: Option<Vec<WrongAnswer>>,
    pub status: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewResult {
    pub user: String,
    pub main_category: String,
    pub sub_category: String,
    pub score: f64,
    pub wrong_sentence_count: Option<i64>,
    pub total_count: Option<i64>,
    pub attempted_count: Option<i64>,
    pub wrong_answers: Vec<WrongAnswer>,
    pub status: Option<String>,
}

impl CreateResultPayload {
    pub fn into_new(self) -> Result<NewResult> {
        self.validate()
            .map_err(|_| Error::Validation(RESULT_FIELDS_REQUIRED.to_string()))?;

        match (self.user, self.main_category, self.sub_category, self.score) {
            (Some(user), Some(main_category), Some(sub_category), Some(score)) => Ok(NewResult {
                user,
                main_category,
                sub_category,
                score,
                wrong_sentence_count: self.wrong_sentence_count,
                total_count: self.total_count,
                attempted_count: self.attempted_count,
                wrong_answers: self.wrong_answers.unwrap_or_default(),
                status: self.status,
            }),
            _ => Err(Error::Validation(RESULT_FIELDS_REQUIRED.to_string())),
        }
    }
}

/// Exact-match filters. Missing or empty parameters impose no constraint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ResultListQuery {
    pub user: Option<String>,
    pub main_category: Option<String>,
    pub sub_category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResultResponse {
    pub id: Uuid,
    pub user: String,
    pub main_category: String,
    pub sub_category: String,
    pub score: f64,
    pub wrong_sentence_count: Option<i64>,
    pub total_count: Option<i64>,
    pub attempted_count: Option<i64>,
    pub wrong_answers: Vec<WrongAnswer>,
    pub status: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<QuizResult> for ResultResponse {
    fn from(value: QuizResult) -> Self {
        Self {
            id: value.id,
            user: value.user,
            main_category: value.main_category,
            sub_category: value.sub_category,
            score: value.score,
            wrong_sentence_count: value.wrong_sentence_count,
            total_count: value.total_count,
            attempted_count: value.attempted_count,
            wrong_answers: value.wrong_answers.0,
            status: value.status,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
