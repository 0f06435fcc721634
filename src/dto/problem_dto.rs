use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::dto::deserialize_nullable;
use crate::error::{Error, Result};
use crate::models::problem::Problem;

pub const PROBLEM_FIELDS_REQUIRED: &str = "mainCategory, subCategory, and problem are required.";

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProblemPayload {
    #[validate(required, length(min = 1))]
    pub main_category: Option<String>,
    #[validate(required, length(min = 1))]
    pub sub_category: Option<String>,
    #[validate(required, length(min = 1))]
    pub problem: Option<String>,
    pub translation: Option<String>,
    pub image: Option<String>,
}

/// A create payload that passed validation.
#[derive(Debug, Clone)]
pub struct NewProblem {
    pub main_category: String,
    pub sub_category: String,
    pub problem: String,
    pub translation: Option<String>,
    pub image: Option<String>,
}

impl CreateProblemPayload {
    pub fn into_new(self) -> Result<NewProblem> {
        self.validate()
            .map_err(|_| Error::Validation(PROBLEM_FIELDS_REQUIRED.to_string()))?;

        match (self.main_category, self.sub_category, self.problem) {
            (Some(main_category), Some(sub_category), Some(problem)) => Ok(NewProblem {
                main_category,
                sub_category,
                problem,
                translation: self.translation,
                image: self.image,
            }),
            _ => Err(Error::Validation(PROBLEM_FIELDS_REQUIRED.to_string())),
        }
    }
}

/// Partial update. Absent fields keep their stored value. Required fields are
/// not re-validated here, so an empty string is written as given.
/// `translation` and `image` can be cleared with an explicit `null`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProblemPayload {
    pub main_category: Option<String>,
    pub sub_category: Option<String>,
    pub problem: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[schema(value_type = Option<String>, nullable)]
    pub translation: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[schema(value_type = Option<String>, nullable)]
    pub image: Option<Option<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProblemResponse {
    pub id: Uuid,
    pub main_category: String,
    pub sub_category: String,
    pub problem: String,
    pub translation: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Problem> for ProblemResponse {
    fn from(value: Problem) -> Self {
        Self {
            id: value.id,
            main_category: value.main_category,
            sub_category: value.sub_category,
            problem: value.problem,
            translation: value.translation,
            image: value.image,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
