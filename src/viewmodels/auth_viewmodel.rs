// ============================================================================
// AUTH VIEWMODEL - login, signup, logout
// ============================================================================
// The API client never touches storage; persisting the login record is done
// here, right after a successful response.
// ============================================================================

use crate::error::{ApiError, Result};
use crate::models::{ApiEnvelope, LoginData, LoginRequest, RegisterRequest};
use crate::services::{ApiClient, AuthApi, LocalTokenStore, TokenStore};
use crate::validation::is_valid_email;

/// Client-side checks before POST /auth/register
pub fn validate_registration(data: &RegisterRequest, password_confirm: &str) -> std::result::Result<(), String> {
    if data.full_name.trim().is_empty()
        || data.email.trim().is_empty()
        || data.mobile_no.trim().is_empty()
        || data.password.is_empty()
    {
        return Err("Please fill in all required fields".to_string());
    }
    if !is_valid_email(&data.email) {
        return Err("Invalid email address".to_string());
    }
    if data.password != password_confirm {
        return Err("Passwords do not match".to_string());
    }
    if !matches!(data.gender.as_str(), "m" | "f" | "o") {
        return Err("Please select a gender".to_string());
    }
    Ok(())
}

/// Backend auth failures come back as 400/401 with a readable message
fn auth_error(e: ApiError) -> ApiError {
    match e {
        ApiError::Unauthorized(message) | ApiError::Http { message, .. } => ApiError::Rejected(message),
        other => other,
    }
}

pub struct AuthViewModel<A, S> {
    api: A,
    tokens: S,
}

impl AuthViewModel<ApiClient, LocalTokenStore> {
    pub fn new() -> Self {
        Self::with(ApiClient::new(), LocalTokenStore)
    }
}

impl<A: AuthApi, S: TokenStore> AuthViewModel<A, S> {
    pub fn with(api: A, tokens: S) -> Self {
        Self { api, tokens }
    }

    /// Session persisted by a previous page load
    pub fn restore(&self) -> Option<LoginData> {
        self.tokens
            .load()
            .filter(|data| data.session_token().is_some())
    }

    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginData> {
        let envelope = self.api.login(credentials).await.map_err(auth_error)?;
        self.persist(envelope, "Invalid credentials")
    }

    pub async fn register(&self, data: &RegisterRequest, password_confirm: &str) -> Result<LoginData> {
        validate_registration(data, password_confirm).map_err(ApiError::Rejected)?;
        let envelope = self.api.register(data).await.map_err(auth_error)?;
        self.persist(envelope, "Registration failed")
    }

    pub fn logout(&self) -> Result<()> {
        log::info!("👋 Logout");
        self.tokens.clear()
    }

    fn persist(&self, envelope: ApiEnvelope<LoginData>, fallback: &str) -> Result<LoginData> {
        if !envelope.success {
            return Err(ApiError::Rejected(envelope.message_or(fallback)));
        }
        let data = envelope
            .data
            .filter(|data| data.session_token().is_some())
            .ok_or_else(|| ApiError::Parse("response without token".to_string()))?;

        self.tokens.save(&data)?;
        log::info!("✅ Sesión iniciada: {}", data.email);
        Ok(data)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::services::MemoryTokenStore;
    use async_trait::async_trait;
    use futures::executor::block_on;

    pub(crate) struct FakeAuthApi {
        response: Result<ApiEnvelope<LoginData>>,
    }

    impl FakeAuthApi {
        pub(crate) fn accepting(token: &str) -> Self {
            Self {
                response: Ok(ApiEnvelope::ok(LoginData {
                    user_id: 9,
                    email: "hr@acme.io".into(),
                    full_name: Some("Ada Lovelace".into()),
                    token: token.into(),
                })),
            }
        }

        fn failing(e: ApiError) -> Self {
            Self { response: Err(e) }
        }
    }

    #[async_trait(?Send)]
    impl AuthApi for FakeAuthApi {
        async fn register(&self, _: &RegisterRequest) -> Result<ApiEnvelope<LoginData>> {
            self.response.clone()
        }

        async fn login(&self, _: &LoginRequest) -> Result<ApiEnvelope<LoginData>> {
            self.response.clone()
        }
    }

    fn credentials() -> LoginRequest {
        LoginRequest {
            email: "hr@acme.io".into(),
            password: "secret".into(),
        }
    }

    fn signup() -> RegisterRequest {
        RegisterRequest {
            email: "hr@acme.io".into(),
            password: "secret".into(),
            full_name: "Ada Lovelace".into(),
            gender: "f".into(),
            mobile_no: "+91 98765 43210".into(),
            ..Default::default()
        }
    }

    #[test]
    fn login_persists_token() {
        let vm = AuthViewModel::with(FakeAuthApi::accepting("jwt-1"), MemoryTokenStore::default());
        let data = block_on(vm.login(&credentials())).unwrap();
        assert_eq!(data.display_name(), "Ada Lovelace");
        assert_eq!(vm.tokens.session_token().unwrap().as_str(), "jwt-1");
        assert_eq!(vm.restore(), Some(data));
    }

    #[test]
    fn invalid_credentials_store_nothing() {
        let vm = AuthViewModel::with(
            FakeAuthApi::failing(ApiError::Unauthorized("Invalid credentials".into())),
            MemoryTokenStore::default(),
        );
        let err = block_on(vm.login(&credentials())).unwrap_err();
        assert_eq!(err.user_message(), "Invalid credentials");
        assert!(vm.restore().is_none());
    }

    #[test]
    fn logout_clears_token() {
        let vm = AuthViewModel::with(FakeAuthApi::accepting("jwt-1"), MemoryTokenStore::default());
        block_on(vm.login(&credentials())).unwrap();

        vm.logout().unwrap();

        assert_eq!(vm.tokens.session_token(), Err(ApiError::MissingAuth));
        assert!(vm.restore().is_none());
    }

    #[test]
    fn register_checks_passwords_before_calling_backend() {
        let vm = AuthViewModel::with(FakeAuthApi::accepting("jwt-1"), MemoryTokenStore::default());
        let err = block_on(vm.register(&signup(), "other")).unwrap_err();
        assert_eq!(err, ApiError::Rejected("Passwords do not match".into()));
        assert!(vm.restore().is_none());
    }

    #[test]
    fn register_persists_returned_token() {
        let vm = AuthViewModel::with(FakeAuthApi::accepting("jwt-2"), MemoryTokenStore::default());
        block_on(vm.register(&signup(), "secret")).unwrap();
        assert_eq!(vm.tokens.session_token().unwrap().as_str(), "jwt-2");
    }

    #[test]
    fn registration_validation_rules() {
        let mut data = signup();
        assert_eq!(validate_registration(&data, "secret"), Ok(()));

        data.email = "not-an-email".into();
        assert_eq!(validate_registration(&data, "secret"), Err("Invalid email address".into()));

        data = signup();
        data.full_name.clear();
        assert!(validate_registration(&data, "secret").is_err());

        data = signup();
        data.gender.clear();
        assert_eq!(validate_registration(&data, "secret"), Err("Please select a gender".into()));
    }

    #[test]
    fn success_without_token_is_an_error() {
        let vm = AuthViewModel::with(FakeAuthApi::accepting(""), MemoryTokenStore::default());
        assert!(matches!(block_on(vm.login(&credentials())), Err(ApiError::Parse(_))));
    }
}
