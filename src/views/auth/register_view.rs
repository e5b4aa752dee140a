use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement};

use crate::models::RegisterRequest;
use crate::utils::GENDER_OPTIONS;
use crate::viewmodels::auth_viewmodel::validate_registration;

#[derive(Properties, PartialEq)]
pub struct RegisterViewProps {
    /// Form data plus the password confirmation
    pub on_register: Callback<(RegisterRequest, String)>,
    pub on_show_login: Callback<()>,
    #[prop_or_default]
    pub loading: bool,
    #[prop_or_default]
    pub error: Option<String>,
}

#[function_component(RegisterView)]
pub fn register_view(props: &RegisterViewProps) -> Html {
    let full_name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let mobile_ref = use_node_ref();
    let gender_ref = use_node_ref();
    let password_ref = use_node_ref();
    let password_confirm_ref = use_node_ref();
    let local_error = use_state(|| None::<String>);

    let on_submit = {
        let full_name_ref = full_name_ref.clone();
        let email_ref = email_ref.clone();
        let mobile_ref = mobile_ref.clone();
        let gender_ref = gender_ref.clone();
        let password_ref = password_ref.clone();
        let password_confirm_ref = password_confirm_ref.clone();
        let local_error = local_error.clone();
        let on_register = props.on_register.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (
                Some(full_name_input),
                Some(email_input),
                Some(mobile_input),
                Some(gender_select),
                Some(password_input),
                Some(password_confirm_input),
            ) = (
                full_name_ref.cast::<HtmlInputElement>(),
                email_ref.cast::<HtmlInputElement>(),
                mobile_ref.cast::<HtmlInputElement>(),
                gender_ref.cast::<HtmlSelectElement>(),
                password_ref.cast::<HtmlInputElement>(),
                password_confirm_ref.cast::<HtmlInputElement>(),
            ) {
                let data = RegisterRequest {
                    full_name: full_name_input.value().trim().to_string(),
                    email: email_input.value().trim().to_string(),
                    mobile_no: mobile_input.value().trim().to_string(),
                    gender: gender_select.value(),
                    password: password_input.value(),
                    ..Default::default()
                };
                let confirm = password_confirm_input.value();

                // Same checks run again in the viewmodel before the request
                if let Err(message) = validate_registration(&data, &confirm) {
                    local_error.set(Some(message));
                    return;
                }

                local_error.set(None);
                on_register.emit((data, confirm));
            }
        })
    };

    let error = (*local_error).clone().or_else(|| props.error.clone());

    html! {
        <div class="auth-screen">
            <div class="auth-container">
                <div class="auth-header">
                    <h1>{"Register as a Company"}</h1>
                    <p>{"Create your account to publish your company profile."}</p>
                </div>

                <form class="auth-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="full_name">{"Full Name"}<span class="required">{" *"}</span></label>
                        <input type="text" id="full_name" name="full_name" placeholder="Full name" ref={full_name_ref} />
                    </div>

                    <div class="form-group">
                        <label for="email">{"Email"}<span class="required">{" *"}</span></label>
                        <input type="email" id="email" name="email" placeholder="you@company.com" ref={email_ref} />
                    </div>

                    <div class="form-group">
                        <label for="mobile_no">{"Mobile No."}<span class="required">{" *"}</span></label>
                        <input type="tel" id="mobile_no" name="mobile_no" placeholder="+91 98765 43210" ref={mobile_ref} />
                    </div>

                    <div class="form-group">
                        <label for="gender">{"Gender"}<span class="required">{" *"}</span></label>
                        <select id="gender" name="gender" ref={gender_ref}>
                            <option value="">{"Select gender"}</option>
                            { for GENDER_OPTIONS.iter().map(|(value, label)| html! {
                                <option value={*value}>{*label}</option>
                            }) }
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="password">{"Password"}<span class="required">{" *"}</span></label>
                        <input type="password" id="password" name="password" placeholder="Password" ref={password_ref} />
                    </div>

                    <div class="form-group">
                        <label for="password_confirm">{"Confirm Password"}<span class="required">{" *"}</span></label>
                        <input
                            type="password"
                            id="password_confirm"
                            name="password_confirm"
                            placeholder="Confirm password"
                            ref={password_confirm_ref}
                        />
                    </div>

                    if let Some(error) = error {
                        <div class="form-error">{error}</div>
                    }

                    <button type="submit" class="btn-primary" disabled={props.loading}>
                        { if props.loading { "Creating account..." } else { "Register" } }
                    </button>
                </form>

                <div class="auth-footer">
                    <span>{"Already have an account? "}</span>
                    <button type="button" class="btn-link" onclick={props.on_show_login.reform(|_| ())}>
                        {"Login"}
                    </button>
                </div>
            </div>
        </div>
    }
}
