pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::LoginRequest;
pub use services::LoginService;
pub use router::auth_routes;
