use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::{
        problem_dto::{CreateProblemPayload, ProblemResponse, UpdateProblemPayload},
        MessageResponse,
    },
    error::Result,
    routes::extract::JsonBody,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/problems",
    request_body = CreateProblemPayload,
    responses(
        (status = 201, description = "Problem created", body = ProblemResponse),
        (status = 400, description = "mainCategory, subCategory or problem missing", body = MessageResponse),
        (status = 500, description = "Store error", body = MessageResponse)
    )
)]
#[axum::debug_handler]
pub async fn create_problem(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateProblemPayload>,
) -> Result<impl IntoResponse> {
    let problem = state.problem_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(ProblemResponse::from(problem))))
}

#[utoipa::path(
    get,
    path = "/api/problems",
    responses(
        (status = 200, description = "All problems ordered by main and sub category", body = [ProblemResponse]),
        (status = 500, description = "Store error", body = MessageResponse)
    )
)]
#[axum::debug_handler]
pub async fn list_problems(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let problems = state.problem_service.list_all().await?;
    let items: Vec<ProblemResponse> = problems.into_iter().map(Into::into).collect();
    Ok(Json(items))
}

#[utoipa::path(
    put,
    path = "/api/problems/{id}",
    params(
        ("id" = String, Path, description = "Problem ID")
    ),
    request_body = UpdateProblemPayload,
    responses(
        (status = 200, description = "Problem updated", body = ProblemResponse),
        (status = 404, description = "Problem not found", body = MessageResponse),
        (status = 500, description = "Store error", body = MessageResponse)
    )
)]
#[axum::debug_handler]
pub async fn update_problem(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdateProblemPayload>,
) -> Result<impl IntoResponse> {
    let problem = state.problem_service.update(&id, payload).await?;
    Ok(Json(ProblemResponse::from(problem)))
}

#[utoipa::path(
    delete,
    path = "/api/problems/{id}",
    params(
        ("id" = String, Path, description = "Problem ID")
    ),
    responses(
        (status = 200, description = "Problem deleted", body = MessageResponse),
        (status = 404, description = "Problem not found", body = MessageResponse),
        (status = 500, description = "Store error", body = MessageResponse)
    )
)]
#[axum::debug_handler]
pub async fn delete_problem(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    state.problem_service.delete(&id).await?;
    Ok(Json(MessageResponse::new("Problem deleted successfully.")))
}

#[utoipa::path(
    delete,
    path = "/api/problems",
    responses(
        (status = 200, description = "Every problem deleted", body = MessageResponse),
        (status = 500, description = "Store error", body = MessageResponse)
    )
)]
#[axum::debug_handler]
pub async fn delete_all_problems(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let deleted = state.problem_service.delete_all().await?;
    Ok(Json(MessageResponse::with_count(
        "All problems deleted successfully.",
        deleted,
    )))
}
