use yew::prelude::*;
use web_sys::HtmlInputElement;

use crate::models::SocialPlatform;

#[derive(Properties, PartialEq)]
pub struct SocialLinkInputProps {
    pub platform: SocialPlatform,
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub error: Option<String>,
}

/// One social profile row; clearing it stores an empty string
#[function_component(SocialLinkInput)]
pub fn social_link_input(props: &SocialLinkInputProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };
    let on_clear = props.on_change.reform(|_: MouseEvent| String::new());
    let name = props.platform.key();

    html! {
        <div class={classes!("form-group", "social-link", props.error.is_some().then_some("has-error"))}>
            <label for={name}>{format!("Social Link ({})", props.platform.label())}</label>
            <div class="social-input">
                <span class="social-icon">{props.platform.icon()}</span>
                <input
                    type="url"
                    id={name}
                    {name}
                    value={props.value.clone()}
                    placeholder={props.platform.placeholder()}
                    {oninput}
                />
                if !props.value.is_empty() {
                    <button type="button" class="btn-remove" onclick={on_clear}>{"✕"}</button>
                }
            </div>
            if let Some(error) = &props.error {
                <span class="field-error">{error}</span>
            }
        </div>
    }
}
