pub mod auth_viewmodel;
pub mod dashboard_viewmodel;
pub mod wizard_viewmodel;

pub use auth_viewmodel::AuthViewModel;
pub use dashboard_viewmodel::{DashboardContent, DashboardViewModel};
pub use wizard_viewmodel::{FormAction, SubmitOutcome, WizardStep, WizardViewModel};
