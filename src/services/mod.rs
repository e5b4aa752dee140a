pub mod api_client;
pub mod company_api;
pub mod token_store;

pub use api_client::ApiClient;
pub use company_api::{AuthApi, CompanyApi};
pub use token_store::{LocalTokenStore, MemoryTokenStore, TokenStore};
