// ============================================================================
// API CLIENT - HTTP ONLY (Stateless)
// ============================================================================
// No business logic and no storage: the session token comes in as a parameter
// and every envelope goes back to the caller unchanged.
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use crate::config::CONFIG;
use crate::error::{ApiError, Result};
use crate::models::{ApiEnvelope, CompanyProfile, LoginData, LoginRequest, RegisterRequest, SessionToken, UploadedImage};
use crate::services::company_api::{AuthApi, CompanyApi};
use crate::utils::constants::*;

#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(&CONFIG.api_base_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn upload(
        &self,
        path: &str,
        field: &str,
        file: &File,
        token: &SessionToken,
    ) -> Result<ApiEnvelope<UploadedImage>> {
        let form = FormData::new().map_err(js_error)?;
        form.append_with_blob_and_filename(field, file, &file.name())
            .map_err(js_error)?;

        log::info!("🖼️ Subiendo {} ({} bytes)", field, file.size());

        // No Content-Type header: the browser adds the multipart boundary
        let response = Request::post(&self.url(path))
            .header("Authorization", &token.bearer())
            .body(form)?
            .send()
            .await?;

        read_envelope(response).await
    }
}

/// 2xx → parsed envelope; anything else → error carrying the backend message if present
async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<ApiEnvelope<T>> {
    if response.ok() {
        return response
            .json::<ApiEnvelope<T>>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()));
    }

    let status = response.status();
    let status_text = response.status_text();
    let message = response
        .text()
        .await
        .ok()
        .and_then(|body| serde_json::from_str::<ApiEnvelope<serde_json::Value>>(&body).ok())
        .and_then(|envelope| envelope.message)
        .unwrap_or(status_text);

    log::warn!("⚠️ HTTP {} desde {}: {}", status, response.url(), message);
    Err(ApiError::from_status(status, message))
}

fn js_error(e: JsValue) -> ApiError {
    ApiError::Network(format!("{:?}", e))
}

#[async_trait(?Send)]
impl AuthApi for ApiClient {
    async fn register(&self, data: &RegisterRequest) -> Result<ApiEnvelope<LoginData>> {
        log::info!("📝 Registro de usuario: {}", data.email);
        let response = Request::post(&self.url(PATH_AUTH_REGISTER))
            .json(data)?
            .send()
            .await?;
        read_envelope(response).await
    }

    async fn login(&self, data: &LoginRequest) -> Result<ApiEnvelope<LoginData>> {
        log::info!("🔐 Login: {}", data.email);
        let response = Request::post(&self.url(PATH_AUTH_LOGIN))
            .json(data)?
            .send()
            .await?;
        read_envelope(response).await
    }
}

#[async_trait(?Send)]
impl CompanyApi for ApiClient {
    type File = File;

    async fn register_company(
        &self,
        data: &CompanyProfile,
        token: &SessionToken,
    ) -> Result<ApiEnvelope<CompanyProfile>> {
        log::info!("🏢 Registrando empresa: {}", data.company_name);
        let response = Request::post(&self.url(PATH_COMPANY_REGISTER))
            .header("Authorization", &token.bearer())
            .json(data)?
            .send()
            .await?;
        read_envelope(response).await
    }

    async fn get_company_profile(&self, token: &SessionToken) -> Result<ApiEnvelope<CompanyProfile>> {
        log::debug!("📋 Obteniendo perfil de empresa");
        let response = Request::get(&self.url(PATH_COMPANY_PROFILE))
            .header("Authorization", &token.bearer())
            .send()
            .await?;
        read_envelope(response).await
    }

    async fn update_company_profile(
        &self,
        data: &CompanyProfile,
        token: &SessionToken,
    ) -> Result<ApiEnvelope<CompanyProfile>> {
        log::info!("📝 Actualizando empresa: {}", data.company_name);
        let response = Request::put(&self.url(PATH_COMPANY_UPDATE))
            .header("Authorization", &token.bearer())
            .json(data)?
            .send()
            .await?;
        read_envelope(response).await
    }

    async fn upload_logo(&self, file: &File, token: &SessionToken) -> Result<ApiEnvelope<UploadedImage>> {
        self.upload(PATH_UPLOAD_LOGO, FIELD_LOGO, file, token).await
    }

    async fn upload_banner(&self, file: &File, token: &SessionToken) -> Result<ApiEnvelope<UploadedImage>> {
        self.upload(PATH_UPLOAD_BANNER, FIELD_BANNER, file, token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_paths_without_double_slash() {
        let client = ApiClient::with_base_url("http://127.0.0.1:8000/api/");
        assert_eq!(client.url(PATH_COMPANY_PROFILE), "http://127.0.0.1:8000/api/company/profile");
        assert_eq!(client.url(PATH_UPLOAD_BANNER), "http://127.0.0.1:8000/api/company/upload_banner");
    }
}
