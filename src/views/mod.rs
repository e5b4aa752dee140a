pub mod app;
pub mod auth;
pub mod company_registration;
pub mod dashboard;

pub use app::App;
