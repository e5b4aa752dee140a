// ============================================================================
// COMPANY REGISTRATION - four step wizard
// ============================================================================

use yew::prelude::*;

use crate::components::{
    FileUpload, FormInput, FormSelect, FormTextarea, ImageKind, SocialLinkInput, TabNavigation,
};
use crate::hooks::{use_company_wizard, UseCompanyWizardHandle};
use crate::models::{CompanyField, Screen, SocialPlatform};
use crate::utils::{INDUSTRY_OPTIONS, ORGANIZATION_TYPES, TEAM_SIZES};
use crate::validation::is_required;
use crate::viewmodels::{FormAction, WizardStep};

#[derive(Properties, PartialEq)]
pub struct CompanyRegistrationProps {
    pub navigate: Callback<Screen>,
}

fn on_field(wizard: &UseCompanyWizardHandle, field: CompanyField) -> Callback<String> {
    wizard.set_field.reform(move |value: String| (field, value))
}

fn input(wizard: &UseCompanyWizardHandle, field: CompanyField, input_type: &'static str, placeholder: &'static str) -> Html {
    html! {
        <FormInput
            label={field.label()}
            name={field.name()}
            value={wizard.state.draft.profile.get(field).to_string()}
            on_change={on_field(wizard, field)}
            error={wizard.state.field_error(field)}
            required={is_required(field)}
            {input_type}
            {placeholder}
        />
    }
}

fn select(wizard: &UseCompanyWizardHandle, field: CompanyField, options: &'static [&'static str]) -> Html {
    html! {
        <FormSelect
            label={field.label()}
            name={field.name()}
            value={wizard.state.draft.profile.get(field).to_string()}
            {options}
            on_change={on_field(wizard, field)}
            error={wizard.state.field_error(field)}
            required={is_required(field)}
        />
    }
}

fn textarea(wizard: &UseCompanyWizardHandle, field: CompanyField, placeholder: &'static str) -> Html {
    html! {
        <FormTextarea
            label={field.label()}
            name={field.name()}
            value={wizard.state.draft.profile.get(field).to_string()}
            on_change={on_field(wizard, field)}
            error={wizard.state.field_error(field)}
            required={is_required(field)}
            {placeholder}
        />
    }
}

fn company_info_step(wizard: &UseCompanyWizardHandle) -> Html {
    html! {
        <>
            <h3 class="step-title">{"Logo & Banner Image"}</h3>
            <div class="upload-row">
                <FileUpload
                    label="Upload Logo"
                    kind={ImageKind::Logo}
                    preview={wizard.state.logo_image()}
                    on_select={wizard.stage_logo.clone()}
                />
                <FileUpload
                    label="Banner Image"
                    kind={ImageKind::Banner}
                    preview={wizard.state.banner_image()}
                    on_select={wizard.stage_banner.clone()}
                />
            </div>
            { input(wizard, CompanyField::CompanyName, "text", "Company name") }
            { textarea(wizard, CompanyField::AboutCompany, "Write down about your company here. Let the candidate know who we are...") }
        </>
    }
}

fn founding_info_step(wizard: &UseCompanyWizardHandle) -> Html {
    html! {
        <>
            <div class="form-row">
                { select(wizard, CompanyField::OrganizationsType, ORGANIZATION_TYPES) }
                { select(wizard, CompanyField::IndustryType, INDUSTRY_OPTIONS) }
                { select(wizard, CompanyField::TeamSize, TEAM_SIZES) }
            </div>
            <div class="form-row">
                { input(wizard, CompanyField::YearOfEstablishment, "date", "dd/mm/yyyy") }
                { input(wizard, CompanyField::CompanyWebsite, "url", "Website url...") }
                { input(wizard, CompanyField::CompanyAppLink, "url", "App link...") }
            </div>
            { textarea(wizard, CompanyField::CompanyVision, "Tell us about your company vision...") }
            { input(wizard, CompanyField::CareersLink, "url", "Careers page url...") }
        </>
    }
}

fn social_media_step(wizard: &UseCompanyWizardHandle) -> Html {
    html! {
        <>
            { for SocialPlatform::ALL.iter().map(|platform| {
                let field = CompanyField::Social(*platform);
                html! {
                    <SocialLinkInput
                        platform={*platform}
                        value={wizard.state.draft.profile.social_links.get(*platform).to_string()}
                        on_change={on_field(wizard, field)}
                        error={wizard.state.field_error(field)}
                    />
                }
            }) }
        </>
    }
}

fn contact_step(wizard: &UseCompanyWizardHandle) -> Html {
    html! {
        <>
            { input(wizard, CompanyField::MapLocationUrl, "url", "Google Maps link...") }
            { input(wizard, CompanyField::HeadquarterPhoneNo, "tel", "Phone number...") }
            { input(wizard, CompanyField::HeadquarterMailId, "email", "Email address") }
        </>
    }
}

#[function_component(CompanyRegistration)]
pub fn company_registration(props: &CompanyRegistrationProps) -> Html {
    let wizard = use_company_wizard(props.navigate.clone());
    let step = wizard.state.step;

    let body = match step {
        WizardStep::CompanyInfo => company_info_step(&wizard),
        WizardStep::FoundingInfo => founding_info_step(&wizard),
        WizardStep::SocialMedia => social_media_step(&wizard),
        WizardStep::Contact => contact_step(&wizard),
    };

    // Enter in a text field submits the form; only the last step saves
    let on_submit = {
        let submit = wizard.submit.clone();
        let next = wizard.next.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match step.form_action() {
                FormAction::Submit => submit.emit(()),
                FormAction::Advance => next.emit(()),
            }
        })
    };

    html! {
        <div class="company-registration">
            <div class="wizard-header">
                <div class="progress-label">
                    <span>{"Setup Progress"}</span>
                    <span>{format!("{:.0}% Completed", step.progress_percent())}</span>
                </div>
                <div class="progress-bar">
                    <div class="progress-fill" style={format!("width: {}%", step.progress_percent())}></div>
                </div>
            </div>

            <TabNavigation current={step} on_step_change={wizard.go_to.clone()} />

            <form class="wizard-form" onsubmit={on_submit}>
                {body}

                if let Some(error) = &wizard.state.error {
                    <div class="form-error">{error}</div>
                }

                <div class="wizard-actions">
                    if !step.is_first() {
                        <button type="button" class="btn-secondary" onclick={wizard.previous.reform(|_| ())}>
                            {"Previous"}
                        </button>
                    }
                    if step.is_last() {
                        <button type="submit" class="btn-primary" disabled={wizard.state.loading}>
                            { if wizard.state.loading { "Saving..." } else { "Finish Editing" } }
                        </button>
                    } else {
                        <button type="button" class="btn-primary" onclick={wizard.next.reform(|_| ())}>
                            {"Save & Next →"}
                        </button>
                    }
                </div>
            </form>
        </div>
    }
}
