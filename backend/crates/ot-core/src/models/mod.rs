pub mod account_status;
pub mod external_id;
pub mod facilitator_record;
pub mod grade;
pub mod grade_letter;
pub mod identity;
pub mod module;
pub mod profile_record;
pub mod profile_update;
pub mod question;
pub mod question_type;
pub mod role;
pub mod student_record;
