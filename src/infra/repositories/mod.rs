pub mod sqlite_management_repo;
pub mod sqlite_slot_repo;
pub mod sqlite_template_repo;

pub mod postgres_management_repo;
pub mod postgres_slot_repo;
pub mod postgres_template_repo;
