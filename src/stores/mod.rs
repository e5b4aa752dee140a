pub mod auth_store;
pub mod company_store;
pub mod wizard_store;

pub use auth_store::AuthStore;
pub use company_store::{CompanyAction, CompanyStore, CompanyStoreHandle};
pub use wizard_store::{WizardAction, WizardState};
