pub mod extract;
pub mod health;
pub mod problem;
pub mod result;

use axum::{
    routing::{delete, get, put},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

use crate::{
    dto::{
        problem_dto::{CreateProblemPayload, ProblemResponse, UpdateProblemPayload},
        result_dto::{CreateResultPayload, ResultResponse},
        MessageResponse,
    },
    models::quiz_result::WrongAnswer,
    AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        problem::create_problem,
        problem::list_problems,
        problem::update_problem,
        problem::delete_problem,
        problem::delete_all_problems,
        result::create_result,
        result::list_results,
        result::delete_all_results,
    ),
    components(schemas(
        CreateProblemPayload,
        UpdateProblemPayload,
        ProblemResponse,
        CreateResultPayload,
        ResultResponse,
        WrongAnswer,
        MessageResponse,
    ))
)]
pub struct ApiDoc;

pub fn api_router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/problems",
            get(problem::list_problems)
                .post(problem::create_problem)
                .delete(problem::delete_all_problems),
        )
        .route("/api/problems/all", delete(problem::delete_all_problems))
        .route(
            "/api/problems/:id",
            put(problem::update_problem).delete(problem::delete_problem),
        )
        .route(
            "/api/results",
            get(result::list_results)
                .post(result::create_result)
                .delete(result::delete_all_results),
        )
        .route("/api/results/all", delete(result::delete_all_results))
}

/// The full application: banner, health, API and docs, with tracing and CORS.
pub fn app(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(health::banner))
        .route("/health", get(health::health))
        .route(
            "/api/docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .merge(api_router())
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
