pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{problem_service::ProblemService, result_service::ResultService};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub problem_service: ProblemService,
    pub result_service: ResultService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let problem_service = ProblemService::new(pool.clone());
        let result_service = ResultService::new(pool.clone());

        Self {
            pool,
            problem_service,
            result_service,
        }
    }
}
