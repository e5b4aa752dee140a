// ============================================================================
// USE AUTH - login, signup and logout wired to the app shell
// ============================================================================

use yew::prelude::*;
use web_sys::window;

use crate::error::ApiError;
use crate::models::{LoginRequest, RegisterRequest, Screen};
use crate::stores::{AuthStore, CompanyAction, CompanyStoreHandle};
use crate::viewmodels::AuthViewModel;

pub struct UseAuthHandle {
    pub state: UseStateHandle<AuthStore>,
    pub login: Callback<LoginRequest>,
    /// Form data plus the password confirmation
    pub register: Callback<(RegisterRequest, String)>,
    pub logout: Callback<()>,
}

fn failure_message(e: &ApiError, fallback: &str) -> String {
    match e {
        ApiError::Rejected(message) => message.clone(),
        other => format!("{}: {}", fallback, other),
    }
}

#[hook]
pub fn use_auth(navigate: Callback<Screen>) -> UseAuthHandle {
    // Session restored synchronously so the first render already knows
    let state = use_state(|| AuthStore::restored(AuthViewModel::new().restore()));
    let company_store = use_context::<CompanyStoreHandle>();

    let login = {
        let state = state.clone();
        let navigate = navigate.clone();
        Callback::from(move |credentials: LoginRequest| {
            if state.loading {
                return;
            }
            state.set(AuthStore {
                loading: true,
                error: None,
                ..(*state).clone()
            });

            let state = state.clone();
            let navigate = navigate.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match AuthViewModel::new().login(&credentials).await {
                    Ok(user) => {
                        state.set(AuthStore::restored(Some(user)));
                        navigate.emit(Screen::Dashboard);
                    }
                    Err(e) => {
                        log::error!("❌ Error en login: {}", e);
                        state.set(AuthStore {
                            user: None,
                            loading: false,
                            error: Some(failure_message(&e, "Login failed")),
                        });
                    }
                }
            });
        })
    };

    let register = {
        let state = state.clone();
        let navigate = navigate.clone();
        Callback::from(move |(data, password_confirm): (RegisterRequest, String)| {
            if state.loading {
                return;
            }
            state.set(AuthStore {
                loading: true,
                error: None,
                ..(*state).clone()
            });

            let state = state.clone();
            let navigate = navigate.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match AuthViewModel::new().register(&data, &password_confirm).await {
                    Ok(user) => {
                        log::info!("🏢 Cuenta creada, registro de empresa");
                        state.set(AuthStore::restored(Some(user)));
                        navigate.emit(Screen::CompanyRegistration);
                    }
                    Err(e) => {
                        log::error!("❌ Error en registro: {}", e);
                        state.set(AuthStore {
                            user: None,
                            loading: false,
                            error: Some(failure_message(&e, "Registration failed")),
                        });
                    }
                }
            });
        })
    };

    let logout = {
        let state = state.clone();
        Callback::from(move |_| {
            if let Err(e) = AuthViewModel::new().logout() {
                log::error!("❌ Error limpiando sesión: {}", e);
                if let Some(win) = window() {
                    let _ = win.alert_with_message(&e.user_message());
                }
            }
            if let Some(store) = &company_store {
                store.dispatch(CompanyAction::ResetCompanyData);
            }
            state.set(AuthStore::default());
            navigate.emit(Screen::Login);
        })
    };

    UseAuthHandle {
        state,
        login,
        register,
        logout,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_message_is_shown_verbatim() {
        let e = ApiError::Rejected("Invalid credentials".into());
        assert_eq!(failure_message(&e, "Login failed"), "Invalid credentials");
    }

    #[test]
    fn transport_errors_get_a_prefix() {
        let e = ApiError::Network("connection refused".into());
        assert!(failure_message(&e, "Login failed").starts_with("Login failed: "));
    }
}
