pub mod connection;
pub mod error;
pub mod profile_store;
pub mod repositories;

mod decode;

pub use connection::database::{migrate, open_in_memory, open_pool};
pub use error::{DbError, Result};
pub use profile_store::SqliteProfileStore;
pub use repositories::facilitator_repository::FacilitatorRepository;
pub use repositories::grade_repository::{GradeRepository, SortOrder};
pub use repositories::module_repository::ModuleRepository;
pub use repositories::student_repository::StudentRepository;
pub use repositories::test_repository::TestRepository;
pub use repositories::user_repository::UserRepository;
