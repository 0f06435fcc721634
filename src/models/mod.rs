pub mod problem;
pub mod quiz_result;
