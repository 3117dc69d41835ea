pub mod execution_admin;

pub use execution_admin::ExecutionAdmin;
