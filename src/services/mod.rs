pub mod problem_service;
pub mod result_service;
