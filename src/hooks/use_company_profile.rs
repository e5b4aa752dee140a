use yew::prelude::*;

use crate::error::ApiError;
use crate::models::Screen;
use crate::viewmodels::{DashboardContent, DashboardViewModel};

pub struct UseCompanyProfileHandle {
    pub content: UseStateHandle<DashboardContent>,
    pub reload: Callback<()>,
}

/// Dashboard data, fetched on every mount
#[hook]
pub fn use_company_profile(navigate: Callback<Screen>) -> UseCompanyProfileHandle {
    let content = use_state(|| DashboardContent::Loading);

    let reload = {
        let content = content.clone();
        Callback::from(move |_| {
            content.set(DashboardContent::Loading);
            let content = content.clone();
            let navigate = navigate.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match DashboardViewModel::new().load().await {
                    Ok(loaded) => content.set(loaded),
                    Err(ApiError::MissingAuth) => {
                        log::warn!("⚠️ Sin sesión, volviendo al login");
                        navigate.emit(Screen::Login);
                    }
                    Err(e) => {
                        log::error!("❌ Error cargando dashboard: {}", e);
                        content.set(DashboardContent::Empty);
                    }
                }
            });
        })
    };

    {
        let reload = reload.clone();
        use_effect_with((), move |_| {
            reload.emit(());
            || ()
        });
    }

    UseCompanyProfileHandle { content, reload }
}
