pub mod auth;
pub mod error;
pub mod time;

pub use auth::{LoginResponse, Operation, Role, SessionContext};
pub use error::ClinicError;
