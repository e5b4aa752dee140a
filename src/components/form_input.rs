use yew::prelude::*;
use web_sys::HtmlInputElement;

#[derive(Properties, PartialEq)]
pub struct FormInputProps {
    pub label: AttrValue,
    pub name: AttrValue,
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub required: bool,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
}

#[function_component(FormInput)]
pub fn form_input(props: &FormInputProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <div class={classes!("form-group", props.error.is_some().then_some("has-error"))}>
            <label for={props.name.clone()}>
                {props.label.clone()}
                if props.required {
                    <span class="required">{" *"}</span>
                }
            </label>
            <input
                type={props.input_type.clone()}
                id={props.name.clone()}
                name={props.name.clone()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                {oninput}
            />
            if let Some(error) = &props.error {
                <span class="field-error">{error}</span>
            }
        </div>
    }
}
