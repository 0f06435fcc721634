use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::{
        result_dto::{CreateResultPayload, ResultListQuery, ResultResponse},
        MessageResponse,
    },
    error::Result,
    routes::extract::{JsonBody, QueryParams},
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/results",
    request_body = CreateResultPayload,
    responses(
        (status = 201, description = "Result recorded", body = ResultResponse),
        (status = 400, description = "user, mainCategory, subCategory or score missing", body = MessageResponse),
        (status = 500, description = "Store error", body = MessageResponse)
    )
)]
#[axum::debug_handler]
pub async fn create_result(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateResultPayload>,
) -> Result<impl IntoResponse> {
    let result = state.result_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(ResultResponse::from(result))))
}

#[utoipa::path(
    get,
    path = "/api/results",
    params(
        ("user" = Option<String>, Query, description = "Exact user match"),
        ("mainCategory" = Option<String>, Query, description = "Exact main category match"),
        ("subCategory" = Option<String>, Query, description = "Exact sub category match")
    ),
    responses(
        (status = 200, description = "Matching results, newest first", body = [ResultResponse]),
        (status = 500, description = "Store error", body = MessageResponse)
    )
)]
#[axum::debug_handler]
pub async fn list_results(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<ResultListQuery>,
) -> Result<impl IntoResponse> {
    let results = state.result_service.list(query).await?;
    let items: Vec<ResultResponse> = results.into_iter().map(Into::into).collect();
    Ok(Json(items))
}

#[utoipa::path(
    delete,
    path = "/api/results",
    responses(
        (status = 200, description = "Every result deleted", body = MessageResponse),
        (status = 500, description = "Store error", body = MessageResponse)
    )
)]
#[axum::debug_handler]
pub async fn delete_all_results(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let deleted = state.result_service.delete_all().await?;
    Ok(Json(MessageResponse::with_count(
        "All results deleted successfully.",
        deleted,
    )))
}
