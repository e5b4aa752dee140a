// ============================================================================
// API SEAMS - what the viewmodels need from the backend
// ============================================================================
// ApiClient implements these over HTTP; tests plug in recording fakes.
// Futures are not Send: everything runs on the browser event loop.
// ============================================================================

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{ApiEnvelope, CompanyProfile, LoginData, LoginRequest, RegisterRequest, SessionToken, UploadedImage};

#[async_trait(?Send)]
pub trait AuthApi {
    /// POST /auth/register
    async fn register(&self, data: &RegisterRequest) -> Result<ApiEnvelope<LoginData>>;

    /// POST /auth/login. Does not persist anything.
    async fn login(&self, data: &LoginRequest) -> Result<ApiEnvelope<LoginData>>;
}

#[async_trait(?Send)]
pub trait CompanyApi {
    /// Handle of a staged image (`web_sys::File` in the browser)
    type File;

    async fn register_company(
        &self,
        data: &CompanyProfile,
        token: &SessionToken,
    ) -> Result<ApiEnvelope<CompanyProfile>>;

    async fn get_company_profile(&self, token: &SessionToken) -> Result<ApiEnvelope<CompanyProfile>>;

    async fn update_company_profile(
        &self,
        data: &CompanyProfile,
        token: &SessionToken,
    ) -> Result<ApiEnvelope<CompanyProfile>>;

    /// Multipart field `logo`
    async fn upload_logo(&self, file: &Self::File, token: &SessionToken) -> Result<ApiEnvelope<UploadedImage>>;

    /// Multipart field `banner`
    async fn upload_banner(&self, file: &Self::File, token: &SessionToken) -> Result<ApiEnvelope<UploadedImage>>;
}
