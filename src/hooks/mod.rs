pub mod company_context;
pub mod use_auth;
pub mod use_company_profile;
pub mod use_company_wizard;

pub use company_context::CompanyContextProvider;
pub use use_auth::{use_auth, UseAuthHandle};
pub use use_company_profile::{use_company_profile, UseCompanyProfileHandle};
pub use use_company_wizard::{use_company_wizard, UseCompanyWizardHandle, WizardHandle};
