pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::Doctor;
pub use services::DoctorService;
pub use router::doctor_routes;
