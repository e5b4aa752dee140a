use yew::prelude::*;
use web_sys::HtmlTextAreaElement;

#[derive(Properties, PartialEq)]
pub struct FormTextareaProps {
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
    #[prop_or(4)]
    pub rows: u32,
}

#[function_component(FormTextarea)]
pub fn form_textarea(props: &FormTextareaProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit(area.value());
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
            <textarea
                id={props.name.clone()}
                name={props.name.clone()}
                rows={props.rows.to_string()}
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
