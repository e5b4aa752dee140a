use yew::prelude::*;
use web_sys::HtmlInputElement;

use crate::models::LoginRequest;

#[derive(Properties, PartialEq)]
pub struct LoginViewProps {
    pub on_login: Callback<LoginRequest>,
    pub on_show_register: Callback<()>,
    #[prop_or_default]
    pub loading: bool,
    #[prop_or_default]
    pub error: Option<String>,
}

#[function_component(LoginView)]
pub fn login_view(props: &LoginViewProps) -> Html {
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let local_error = use_state(|| None::<String>);

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let local_error = local_error.clone();
        let on_login = props.on_login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                let email = email_input.value().trim().to_string();
                let password = password_input.value();

                if email.is_empty() || password.is_empty() {
                    local_error.set(Some("Please enter your email and password".to_string()));
                    return;
                }

                local_error.set(None);
                on_login.emit(LoginRequest { email, password });
            }
        })
    };

    let error = (*local_error).clone().or_else(|| props.error.clone());

    html! {
        <div class="auth-screen">
            <div class="auth-container">
                <div class="auth-header">
                    <h1>{"Login as a Company"}</h1>
                    <p>{"Welcome back! Sign in to manage your company profile."}</p>
                </div>

                <form class="auth-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            placeholder="you@company.com"
                            ref={email_ref}
                            autocomplete="email"
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            placeholder="Password"
                            ref={password_ref}
                            autocomplete="current-password"
                        />
                    </div>

                    if let Some(error) = error {
                        <div class="form-error">{error}</div>
                    }

                    <button type="submit" class="btn-primary" disabled={props.loading}>
                        { if props.loading { "Logging in..." } else { "Login" } }
                    </button>
                </form>

                <div class="auth-footer">
                    <span>{"Don't have an account? "}</span>
                    <button type="button" class="btn-link" onclick={props.on_show_register.reform(|_| ())}>
                        {"Sign up"}
                    </button>
                </div>
            </div>
        </div>
    }
}
