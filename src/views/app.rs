// ============================================================================
// APP VIEW - shell and screen switching
// ============================================================================
// No router: the current screen is a piece of state, protected screens fall
// back to Login whenever there is no session.
// ============================================================================

use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::{use_auth, CompanyContextProvider};
use crate::models::Screen;
use crate::services::{LocalTokenStore, TokenStore};
use crate::views::auth::{LoginView, RegisterView};
use crate::views::company_registration::CompanyRegistration;
use crate::views::dashboard::Dashboard;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <CompanyContextProvider>
            <Shell />
        </CompanyContextProvider>
    }
}

#[function_component(Shell)]
fn shell() -> Html {
    let screen = use_state(|| Screen::initial(LocalTokenStore.session_token().is_ok()));

    let navigate = {
        let screen = screen.clone();
        Callback::from(move |next: Screen| {
            log::debug!("🧭 Navegación: {:?}", next);
            screen.set(next);
        })
    };

    let auth = use_auth(navigate.clone());
    let current = auth.state.resolve(*screen);

    let content = match current {
        Screen::Login => html! {
            <LoginView
                on_login={auth.login.clone()}
                on_show_register={navigate.reform(|_: ()| Screen::Register)}
                loading={auth.state.loading}
                error={auth.state.error.clone()}
            />
        },
        Screen::Register => html! {
            <RegisterView
                on_register={auth.register.clone()}
                on_show_login={navigate.reform(|_: ()| Screen::Login)}
                loading={auth.state.loading}
                error={auth.state.error.clone()}
            />
        },
        Screen::CompanyRegistration => html! {
            <CompanyRegistration navigate={navigate.clone()} />
        },
        Screen::Dashboard => html! {
            <Dashboard
                navigate={navigate.clone()}
                on_logout={auth.logout.clone()}
                user_name={auth.state.user.as_ref().map(|u| u.display_name().to_string())}
            />
        },
    };

    html! {
        <div class="app">
            <header class="app-header">
                <span class="brand">{CONFIG.brand_name.clone()}</span>
            </header>
            <main class="app-main">{content}</main>
        </div>
    }
}
