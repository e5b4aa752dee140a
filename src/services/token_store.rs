// ============================================================================
// TOKEN STORE - persisted session record
// ============================================================================
// The login record (with the bearer token) survives page reloads in
// localStorage. Callers read the token here and pass it explicitly to the API.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_storage::{LocalStorage, Storage};

use crate::error::{ApiError, Result};
use crate::models::{LoginData, SessionToken};
use crate::utils::constants::STORAGE_KEY_LOGIN_DATA;

pub trait TokenStore {
    fn load(&self) -> Option<LoginData>;
    fn save(&self, data: &LoginData) -> Result<()>;
    fn clear(&self) -> Result<()>;

    /// Credential for an authenticated call, or `MissingAuth` after logout
    fn session_token(&self) -> Result<SessionToken> {
        self.load()
            .and_then(|data| data.session_token())
            .ok_or(ApiError::MissingAuth)
    }
}

impl<T: TokenStore + ?Sized> TokenStore for Rc<T> {
    fn load(&self) -> Option<LoginData> {
        (**self).load()
    }

    fn save(&self, data: &LoginData) -> Result<()> {
        (**self).save(data)
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }
}

/// Browser localStorage under a single key
#[derive(Clone, Copy, Default, PartialEq)]
pub struct LocalTokenStore;

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<LoginData> {
        LocalStorage::get::<LoginData>(STORAGE_KEY_LOGIN_DATA).ok()
    }

    fn save(&self, data: &LoginData) -> Result<()> {
        LocalStorage::set(STORAGE_KEY_LOGIN_DATA, data)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        LocalStorage::delete(STORAGE_KEY_LOGIN_DATA);
        Ok(())
    }
}

/// Process-local store, one per session. Used by tests and isolated previews.
#[derive(Default)]
pub struct MemoryTokenStore {
    record: RefCell<Option<LoginData>>,
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<LoginData> {
        self.record.borrow().clone()
    }

    fn save(&self, data: &LoginData) -> Result<()> {
        *self.record.borrow_mut() = Some(data.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.record.borrow_mut().take();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(token: &str) -> LoginData {
        LoginData {
            user_id: 1,
            email: "hr@acme.io".into(),
            full_name: Some("Ada".into()),
            token: token.into(),
        }
    }

    #[test]
    fn empty_store_has_no_session() {
        let store = MemoryTokenStore::default();
        assert_eq!(store.session_token(), Err(ApiError::MissingAuth));
    }

    #[test]
    fn saved_token_is_returned_until_cleared() {
        let store = MemoryTokenStore::default();
        store.save(&record("jwt-1")).unwrap();
        assert_eq!(store.session_token().unwrap().as_str(), "jwt-1");

        store.clear().unwrap();
        assert_eq!(store.session_token(), Err(ApiError::MissingAuth));
        assert!(store.load().is_none());
    }

    #[test]
    fn blank_persisted_token_counts_as_logged_out() {
        let store = MemoryTokenStore::default();
        store.save(&record("")).unwrap();
        assert_eq!(store.session_token(), Err(ApiError::MissingAuth));
    }
}
