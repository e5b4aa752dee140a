// ============================================================================
// DASHBOARD VIEWMODEL - read-only profile view
// ============================================================================

use crate::error::{ApiError, Result};
use crate::models::{ApiEnvelope, CompanyProfile, SocialLinks};
use crate::services::{ApiClient, CompanyApi, LocalTokenStore, TokenStore};

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardContent {
    Loading,
    /// No profile yet: render the "Register Company" call-to-action
    Empty,
    Profile(CompanyProfile),
}

impl DashboardContent {
    /// `success:false`, missing/empty `data` and transport errors all mean "no profile"
    pub fn from_response(response: Result<ApiEnvelope<CompanyProfile>>) -> Self {
        match response {
            Ok(envelope) => match envelope.into_data() {
                Some(profile) if !profile.is_empty() => DashboardContent::Profile(profile),
                _ => DashboardContent::Empty,
            },
            Err(e) => {
                log::error!("❌ Error obteniendo empresa: {}", e);
                DashboardContent::Empty
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLinkItem {
    pub label: &'static str,
    pub href: String,
}

/// One anchor per non-empty platform URL
pub fn social_link_items(links: &SocialLinks) -> Vec<SocialLinkItem> {
    links
        .filled()
        .map(|(platform, url)| SocialLinkItem {
            label: platform.label(),
            href: url.trim().to_string(),
        })
        .collect()
}

pub fn or_na(value: &str) -> &str {
    if value.trim().is_empty() {
        "N/A"
    } else {
        value
    }
}

pub struct DashboardViewModel<A, S> {
    api: A,
    tokens: S,
}

impl DashboardViewModel<ApiClient, LocalTokenStore> {
    pub fn new() -> Self {
        Self::with(ApiClient::new(), LocalTokenStore)
    }
}

impl<A: CompanyApi, S: TokenStore> DashboardViewModel<A, S> {
    pub fn with(api: A, tokens: S) -> Self {
        Self { api, tokens }
    }

    /// Always hits the backend. Only a missing session is an error.
    pub async fn load(&self) -> Result<DashboardContent> {
        let token = self.tokens.session_token()?;
        let response = self.api.get_company_profile(&token).await;
        if let Err(ApiError::Unauthorized(message)) = &response {
            log::warn!("⚠️ Token rechazado: {}", message);
        }
        Ok(DashboardContent::from_response(response))
    }
}
