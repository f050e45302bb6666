pub mod require_bearer;

pub use require_bearer::require_bearer;
