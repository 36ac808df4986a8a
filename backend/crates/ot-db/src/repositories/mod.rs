pub mod facilitator_repository;
pub mod grade_repository;
pub mod module_repository;
pub mod student_repository;
pub mod test_repository;
pub mod user_repository;
