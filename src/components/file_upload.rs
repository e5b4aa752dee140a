use yew::prelude::*;
use web_sys::{File, HtmlInputElement};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Logo,
    Banner,
}

impl ImageKind {
    pub fn hint(&self) -> &'static str {
        match self {
            ImageKind::Logo => "A photo larger than 400 pixels works best. Max photo size 5 MB.",
            ImageKind::Banner => "Banner images optimal dimension 1520×400. Supported format JPEG, PNG. Max photo size 5 MB.",
        }
    }

    fn preview_class(&self) -> &'static str {
        match self {
            ImageKind::Logo => "preview-logo",
            ImageKind::Banner => "preview-banner",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct FileUploadProps {
    pub label: AttrValue,
    pub kind: ImageKind,
    /// Object URL of the staged file, or the stored image URL
    #[prop_or_default]
    pub preview: Option<String>,
    pub on_select: Callback<Option<File>>,
    #[prop_or_default]
    pub required: bool,
}

/// Stages an image locally; nothing is uploaded until the wizard submits
#[function_component(FileUpload)]
pub fn file_upload(props: &FileUploadProps) -> Html {
    let onchange = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let file = input.files().and_then(|files| files.get(0));
            if file.is_some() {
                on_select.emit(file);
            }
        })
    };

    let on_remove = props.on_select.reform(|_: MouseEvent| None);

    html! {
        <div class="form-group file-upload">
            <label>
                {props.label.clone()}
                if props.required {
                    <span class="required">{" *"}</span>
                }
            </label>
            if let Some(src) = props.preview.as_ref().filter(|src| !src.is_empty()) {
                <div class={classes!("upload-preview", props.kind.preview_class())}>
                    <img src={src.clone()} alt={props.label.clone()} />
                    <button type="button" class="btn-remove" onclick={on_remove}>{"✕ Remove"}</button>
                </div>
            } else {
                <label class="upload-dropzone">
                    <input type="file" accept="image/*" {onchange} />
                    <span class="upload-icon">{"☁️"}</span>
                    <span>{"Browse photo or drop here"}</span>
                </label>
            }
            <p class="upload-hint">{props.kind.hint()}</p>
        </div>
    }
}
