// ============================================================================
// USE COMPANY WIZARD - draft state and submit flow of the registration wizard
// ============================================================================
// State lives in a reducer (stores::wizard_store); the network side is the
// WizardViewModel. This hook only glues both to the browser.
// ============================================================================

use yew::prelude::*;
use web_sys::{window, File, Url};

use crate::error::ApiError;
use crate::models::{CompanyField, Screen};
use crate::stores::{CompanyAction, CompanyStoreHandle, WizardAction, WizardState};
use crate::utils::{MSG_SAVE_FAILED, MSG_SAVE_SUCCESS};
use crate::viewmodels::{SubmitOutcome, WizardStep, WizardViewModel};

pub type WizardHandle = UseReducerHandle<WizardState<File>>;

pub struct UseCompanyWizardHandle {
    pub state: WizardHandle,
    pub next: Callback<()>,
    pub previous: Callback<()>,
    pub go_to: Callback<WizardStep>,
    pub set_field: Callback<(CompanyField, String)>,
    pub stage_logo: Callback<Option<File>>,
    pub stage_banner: Callback<Option<File>>,
    pub submit: Callback<()>,
}

fn alert(message: &str) {
    if let Some(win) = window() {
        let _ = win.alert_with_message(message);
    }
}

/// Object URL for a local preview, releasing the previous one
fn preview(file: Option<File>, previous: Option<&String>) -> Option<(File, String)> {
    if let Some(url) = previous {
        let _ = Url::revoke_object_url(url);
    }
    let file = file?;
    match Url::create_object_url_with_blob(&file) {
        Ok(url) => Some((file, url)),
        Err(e) => {
            log::error!("❌ No se pudo crear la vista previa: {:?}", e);
            Some((file, String::new()))
        }
    }
}

#[hook]
pub fn use_company_wizard(navigate: Callback<Screen>) -> UseCompanyWizardHandle {
    let state = use_reducer(WizardState::<File>::default);
    let company_store = use_context::<CompanyStoreHandle>();

    // Prefill from an existing profile on mount
    {
        let state = state.clone();
        let navigate = navigate.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match WizardViewModel::new().load_existing().await {
                    Ok(Some(profile)) => {
                        log::info!("📋 Empresa existente cargada: {}", profile.company_name);
                        state.dispatch(WizardAction::LoadProfile(profile));
                    }
                    Ok(None) => {}
                    Err(ApiError::MissingAuth) => navigate.emit(Screen::Login),
                    Err(e) => log::error!("❌ Error cargando empresa: {}", e),
                }
            });
            || ()
        });
    }

    let next = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(WizardAction::Next))
    };

    let previous = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(WizardAction::Previous))
    };

    let go_to = {
        let state = state.clone();
        Callback::from(move |step: WizardStep| state.dispatch(WizardAction::GoTo(step)))
    };

    let set_field = {
        let state = state.clone();
        Callback::from(move |(field, value): (CompanyField, String)| {
            state.dispatch(WizardAction::SetField(field, value))
        })
    };

    let stage_logo = {
        let state = state.clone();
        Callback::from(move |file: Option<File>| {
            let staged = preview(file, state.logo_preview.as_ref());
            state.dispatch(WizardAction::StageLogo(staged));
        })
    };

    let stage_banner = {
        let state = state.clone();
        Callback::from(move |file: Option<File>| {
            let staged = preview(file, state.banner_preview.as_ref());
            state.dispatch(WizardAction::StageBanner(staged));
        })
    };

    let submit = {
        let state = state.clone();
        Callback::from(move |_| {
            if state.loading {
                return;
            }
            state.dispatch(WizardAction::SubmitStarted);
            if let Some(store) = &company_store {
                store.dispatch(CompanyAction::SetLoading(true));
            }

            let draft = state.draft.clone();
            let state = state.clone();
            let store = company_store.clone();
            let navigate = navigate.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = WizardViewModel::new().submit(&draft).await;
                if let Some(store) = &store {
                    store.dispatch(CompanyAction::SetLoading(false));
                }

                match result {
                    Ok(SubmitOutcome::Saved(profile)) => {
                        if let Some(store) = &store {
                            store.dispatch(CompanyAction::UpdateCompanyData(profile));
                        }
                        state.dispatch(WizardAction::SubmitSucceeded);
                        alert(MSG_SAVE_SUCCESS);
                        navigate.emit(Screen::Dashboard);
                    }
                    Ok(SubmitOutcome::Rejected(message)) => {
                        state.dispatch(WizardAction::SubmitFailed(message));
                    }
                    Ok(SubmitOutcome::Invalid(errors)) => {
                        state.dispatch(WizardAction::SubmitInvalid(errors));
                    }
                    Err(ApiError::MissingAuth) => {
                        state.dispatch(WizardAction::SubmitFailed(ApiError::MissingAuth.user_message()));
                        navigate.emit(Screen::Login);
                    }
                    Err(e) => {
                        log::error!("❌ Error guardando empresa: {}", e);
                        state.dispatch(WizardAction::SubmitFailed(MSG_SAVE_FAILED.to_string()));
                    }
                }
            });
        })
    };

    UseCompanyWizardHandle {
        state,
        next,
        previous,
        go_to,
        set_field,
        stage_logo,
        stage_banner,
        submit,
    }
}
