use serde::{Deserialize, Serialize};

/// Bearer credential attached to authenticated requests
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Blank tokens are treated as "not logged in"
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            None
        } else {
            Some(Self(token))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

// Never print the credential itself
impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionToken(***)")
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    /// 'm', 'f' or 'o'
    pub gender: String,
    pub mobile_no: String,
    /// 'e' for email signup
    pub signup_type: String,
}

impl Default for RegisterRequest {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            full_name: String::new(),
            gender: String::new(),
            mobile_no: String::new(),
            signup_type: "e".to_string(),
        }
    }
}

/// `data` of both /auth/login and /auth/register; persisted as the session record
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginData {
    pub user_id: i64,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub token: String,
}

impl LoginData {
    pub fn session_token(&self) -> Option<SessionToken> {
        SessionToken::new(self.token.clone())
    }

    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_token_is_rejected() {
        assert!(SessionToken::new("").is_none());
        assert!(SessionToken::new("  ").is_none());
        assert_eq!(SessionToken::new("abc").unwrap().bearer(), "Bearer abc");
    }

    #[test]
    fn debug_hides_token() {
        let token = SessionToken::new("secret-jwt").unwrap();
        assert!(!format!("{:?}", token).contains("secret-jwt"));
    }

    #[test]
    fn register_response_without_full_name_parses() {
        let data: LoginData =
            serde_json::from_str(r#"{"user_id": 7, "email": "hr@acme.io", "token": "jwt"}"#).unwrap();
        assert_eq!(data.full_name, None);
        assert_eq!(data.display_name(), "hr@acme.io");
    }
}
