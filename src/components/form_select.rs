use yew::prelude::*;
use web_sys::HtmlSelectElement;

#[derive(Properties, PartialEq)]
pub struct FormSelectProps {
    pub label: AttrValue,
    pub name: AttrValue,
    pub value: AttrValue,
    pub options: &'static [&'static str],
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or(AttrValue::Static("Select..."))]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub required: bool,
}

/// Placeholder option (empty value) followed by the options
#[function_component(FormSelect)]
pub fn form_select(props: &FormSelectProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value());
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
            <select id={props.name.clone()} name={props.name.clone()} {onchange}>
                <option value="" selected={props.value.is_empty()}>{props.placeholder.clone()}</option>
                { for props.options.iter().map(|option| html! {
                    <option value={*option} selected={props.value.as_str() == *option}>{*option}</option>
                }) }
            </select>
            if let Some(error) = &props.error {
                <span class="field-error">{error}</span>
            }
        </div>
    }
}
