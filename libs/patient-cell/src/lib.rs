pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::Patient;
pub use services::PatientService;
pub use router::patient_routes;
