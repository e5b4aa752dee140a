// ============================================================================
// WIZARD STORE - local state of the registration wizard
// ============================================================================
// Reducer so that keystrokes arriving before a re-render never overwrite
// each other. Owned by the wizard; dropped when the user navigates away.
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::models::{CompanyDraft, CompanyField, CompanyProfile};
use crate::validation::ValidationErrors;
use crate::viewmodels::WizardStep;

#[derive(Debug, Clone, PartialEq)]
pub struct WizardState<F> {
    pub step: WizardStep,
    pub draft: CompanyDraft<F>,
    /// Object URLs of staged images
    pub logo_preview: Option<String>,
    pub banner_preview: Option<String>,
    pub errors: ValidationErrors,
    pub error: Option<String>,
    pub loading: bool,
    /// Set by the first field edit; a late prefill no longer applies after it
    pub edited: bool,
}

impl<F> Default for WizardState<F> {
    fn default() -> Self {
        Self {
            step: WizardStep::CompanyInfo,
            draft: CompanyDraft::default(),
            logo_preview: None,
            banner_preview: None,
            errors: ValidationErrors::default(),
            error: None,
            loading: false,
            edited: false,
        }
    }
}

impl<F> WizardState<F> {
    /// Staged preview first, then the image already stored for the company
    pub fn logo_image(&self) -> Option<String> {
        self.logo_preview
            .clone()
            .or_else(|| non_empty(&self.draft.profile.company_logo_url))
    }

    pub fn banner_image(&self) -> Option<String> {
        self.banner_preview
            .clone()
            .or_else(|| non_empty(&self.draft.profile.company_banner_url))
    }

    pub fn field_error(&self, field: CompanyField) -> Option<String> {
        self.errors.get(field).map(str::to_string)
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub enum WizardAction<F> {
    Next,
    Previous,
    GoTo(WizardStep),
    SetField(CompanyField, String),
    /// `None` removes the staged file (and its preview)
    StageLogo(Option<(F, String)>),
    StageBanner(Option<(F, String)>),
    LoadProfile(CompanyProfile),
    SubmitStarted,
    SubmitInvalid(ValidationErrors),
    SubmitFailed(String),
    SubmitSucceeded,
}

impl<F: Clone> Reducible for WizardState<F> {
    type Action = WizardAction<F>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            WizardAction::Next => next.step = next.step.next(),
            WizardAction::Previous => next.step = next.step.previous(),
            WizardAction::GoTo(step) => next.step = step,
            WizardAction::SetField(field, value) => {
                next.draft.set_field(field, value);
                next.errors.clear(field);
                next.edited = true;
            }
            WizardAction::StageLogo(staged) => {
                let (file, preview) = staged.unzip();
                if file.is_none() {
                    next.draft.profile.company_logo_url.clear();
                }
                next.draft.stage_logo(file);
                next.logo_preview = preview;
            }
            WizardAction::StageBanner(staged) => {
                let (file, preview) = staged.unzip();
                if file.is_none() {
                    next.draft.profile.company_banner_url.clear();
                }
                next.draft.stage_banner(file);
                next.banner_preview = preview;
            }
            WizardAction::LoadProfile(_) if self.edited => {
                log::debug!("📋 Perfil precargado ignorado, el formulario ya fue editado");
            }
            WizardAction::LoadProfile(profile) => next.draft.merge_profile(profile),
            WizardAction::SubmitStarted => {
                next.loading = true;
                next.error = None;
            }
            WizardAction::SubmitInvalid(errors) => {
                let steps: Vec<&str> = WizardStep::ALL
                    .iter()
                    .filter(|step| errors.iter().any(|e| WizardStep::of_field(e.field) == **step))
                    .map(|step| step.label())
                    .collect();
                next.error = Some(format!("Please fix the highlighted fields in: {}", steps.join(", ")));
                next.errors = errors;
                next.loading = false;
            }
            WizardAction::SubmitFailed(message) => {
                next.error = Some(message);
                next.loading = false;
            }
            WizardAction::SubmitSucceeded => {
                next.loading = false;
                next.error = None;
            }
        }
        Rc::new(next)
    }
}
