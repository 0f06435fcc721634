pub mod problem_dto;
pub mod result_dto;

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_count: Option<u64>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            deleted_count: None,
        }
    }

    pub fn with_count(message: impl Into<String>, deleted_count: u64) -> Self {
        Self {
            message: message.into(),
            deleted_count: Some(deleted_count),
        }
    }
}

/// Maps a present `null` to `Some(None)` so patches can clear a field.
/// Pair with `#[serde(default)]` so an absent field stays `None`.
pub(crate) fn deserialize_nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
