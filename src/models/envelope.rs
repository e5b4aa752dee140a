use serde::{Deserialize, Serialize};

/// Response envelope shared by every backend endpoint: `{success, data?, message?}`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
    /// Serializer field errors on 400 responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<serde_json::Value>,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            errors: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            errors: None,
        }
    }

    /// `data` only when the backend reported success
    pub fn into_data(self) -> Option<T> {
        if self.success {
            self.data
        } else {
            None
        }
    }

    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .clone()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// `data` of the upload endpoints
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct UploadedImage {
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub banner_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CompanyProfile, LoginData};

    #[test]
    fn login_envelope_carries_token() {
        let env: ApiEnvelope<LoginData> = serde_json::from_str(
            r#"{"success": true, "data": {"user_id": 3, "email": "hr@acme.io", "full_name": "Ada", "token": "jwt"}}"#,
        )
        .unwrap();
        let data = env.into_data().unwrap();
        assert_eq!(data.user_id, 3);
        assert_eq!(data.token, "jwt");
    }

    #[test]
    fn login_failure_without_data_field() {
        let env: ApiEnvelope<LoginData> =
            serde_json::from_str(r#"{"success": false, "message": "Invalid credentials"}"#).unwrap();
        assert!(env.data.is_none());
        assert_eq!(env.message_or("x"), "Invalid credentials");
    }

    #[test]
    fn failure_envelope_without_data() {
        let env: ApiEnvelope<CompanyProfile> =
            serde_json::from_str(r#"{"success": false, "message": "Company profile not found"}"#).unwrap();
        assert!(!env.success);
        assert_eq!(env.message_or("x"), "Company profile not found");
        assert_eq!(env.into_data(), None);
    }

    #[test]
    fn serializer_errors_are_kept() {
        let env: ApiEnvelope<CompanyProfile> = serde_json::from_str(
            r#"{"success": false, "message": "Company registration failed", "errors": {"company_name": ["This field is required."]}}"#,
        )
        .unwrap();
        assert!(env.errors.unwrap()["company_name"].is_array());
    }

    #[test]
    fn empty_message_uses_fallback() {
        let env: ApiEnvelope<()> = ApiEnvelope {
            success: false,
            data: None,
            message: Some(String::new()),
            errors: None,
        };
        assert_eq!(env.message_or("Save failed"), "Save failed");
    }
}
