// ============================================================================
// WIZARD VIEWMODEL - company registration logic
// ============================================================================
// Steps, load-on-mount and the submit flow. Returns values; the hook owns state.
// ============================================================================

use crate::error::{ApiError, Result};
use crate::models::{CompanyDraft, CompanyField, CompanyProfile, SessionToken};
use crate::services::{ApiClient, CompanyApi, LocalTokenStore, TokenStore};
use crate::utils::constants::MSG_SAVE_REJECTED;
use crate::validation::{validate_profile, ValidationErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    CompanyInfo,
    FoundingInfo,
    SocialMedia,
    Contact,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::CompanyInfo,
        WizardStep::FoundingInfo,
        WizardStep::SocialMedia,
        WizardStep::Contact,
    ];

    pub fn index(&self) -> usize {
        match self {
            WizardStep::CompanyInfo => 0,
            WizardStep::FoundingInfo => 1,
            WizardStep::SocialMedia => 2,
            WizardStep::Contact => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::CompanyInfo => "Company Info",
            WizardStep::FoundingInfo => "Founding Info",
            WizardStep::SocialMedia => "Social Media Profile",
            WizardStep::Contact => "Contact",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            WizardStep::CompanyInfo => "🏢",
            WizardStep::FoundingInfo => "📋",
            WizardStep::SocialMedia => "🌐",
            WizardStep::Contact => "📞",
        }
    }

    /// Clamped: no-op on the last step
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1).unwrap_or(self)
    }

    /// Clamped: no-op on the first step
    pub fn previous(self) -> Self {
        self.index()
            .checked_sub(1)
            .and_then(Self::from_index)
            .unwrap_or(self)
    }

    pub fn is_first(&self) -> bool {
        *self == WizardStep::CompanyInfo
    }

    pub fn is_last(&self) -> bool {
        *self == WizardStep::Contact
    }

    /// What a form submission (button or Enter key) does on this step
    pub fn form_action(&self) -> FormAction {
        if self.is_last() {
            FormAction::Submit
        } else {
            FormAction::Advance
        }
    }

    pub fn progress_percent(&self) -> f64 {
        (self.index() + 1) as f64 / Self::ALL.len() as f64 * 100.0
    }

    /// Step whose form renders the field
    pub fn of_field(field: CompanyField) -> Self {
        match field {
            CompanyField::CompanyName | CompanyField::AboutCompany => WizardStep::CompanyInfo,
            CompanyField::OrganizationsType
            | CompanyField::IndustryType
            | CompanyField::TeamSize
            | CompanyField::YearOfEstablishment
            | CompanyField::CompanyWebsite
            | CompanyField::CompanyAppLink
            | CompanyField::CompanyVision
            | CompanyField::CareersLink => WizardStep::FoundingInfo,
            CompanyField::Social(_) => WizardStep::SocialMedia,
            CompanyField::HeadquarterPhoneNo
            | CompanyField::HeadquarterMailId
            | CompanyField::MapLocationUrl => WizardStep::Contact,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Advance,
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    Create,
    Update,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Profile persisted (and staged images uploaded); carries what the store should hold
    Saved(CompanyProfile),
    /// Well-formed `success: false` from create/update; nothing uploaded
    Rejected(String),
    /// Client-side validation failed; no request was sent
    Invalid(ValidationErrors),
}

/// ViewModel del wizard - SOLO lógica
pub struct WizardViewModel<A, S> {
    api: A,
    tokens: S,
}

impl WizardViewModel<ApiClient, LocalTokenStore> {
    pub fn new() -> Self {
        Self::with(ApiClient::new(), LocalTokenStore)
    }
}

impl<A: CompanyApi, S: TokenStore> WizardViewModel<A, S> {
    pub fn with(api: A, tokens: S) -> Self {
        Self { api, tokens }
    }

    /// Existing profile to prefill the draft. `None` is the normal "new company" case.
    pub async fn load_existing(&self) -> Result<Option<CompanyProfile>> {
        let token = self.tokens.session_token()?;
        match self.api.get_company_profile(&token).await {
            Ok(envelope) => Ok(envelope.into_data()),
            Err(e) if e.is_not_found() => {
                log::info!("ℹ️ Sin empresa existente, formulario vacío");
                Ok(None)
            }
            Err(e) => {
                log::warn!("⚠️ Perfil no cargado, formulario vacío ({})", e);
                Ok(None)
            }
        }
    }

    /// Profile fetch decides create vs update; any fetch failure means create
    async fn resolve_mode(&self, token: &SessionToken) -> SaveMode {
        match self.api.get_company_profile(token).await {
            Ok(envelope) if envelope.success && envelope.data.is_some() => SaveMode::Update,
            Ok(_) => SaveMode::Create,
            Err(e) => {
                log::debug!("📋 Perfil no disponible ({}), se crea uno nuevo", e);
                SaveMode::Create
            }
        }
    }

    pub async fn submit(&self, draft: &CompanyDraft<A::File>) -> Result<SubmitOutcome> {
        let token = self.tokens.session_token()?;

        let errors = validate_profile(&draft.profile);
        if !errors.is_empty() {
            log::warn!("⚠️ Formulario con {} errores, no se envía", errors.len());
            return Ok(SubmitOutcome::Invalid(errors));
        }

        let mode = self.resolve_mode(&token).await;
        let response = match mode {
            SaveMode::Update => self.api.update_company_profile(&draft.profile, &token).await?,
            SaveMode::Create => self.api.register_company(&draft.profile, &token).await?,
        };

        if !response.success {
            let message = response.message_or(MSG_SAVE_REJECTED);
            log::error!("❌ Backend rechazó la empresa ({:?}): {}", mode, message);
            return Ok(SubmitOutcome::Rejected(message));
        }

        let mut saved = draft.profile.clone();

        // Logo then banner, never concurrently
        if let Some(logo) = &draft.logo_file {
            let uploaded = self.api.upload_logo(logo, &token).await?;
            if !uploaded.success {
                return Err(ApiError::Rejected(uploaded.message_or("Logo upload failed")));
            }
            if let Some(url) = uploaded.data.and_then(|d| d.logo_url) {
                saved.company_logo_url = url;
            }
        }

        if let Some(banner) = &draft.banner_file {
            let uploaded = self.api.upload_banner(banner, &token).await?;
            if !uploaded.success {
                return Err(ApiError::Rejected(uploaded.message_or("Banner upload failed")));
            }
            if let Some(url) = uploaded.data.and_then(|d| d.banner_url) {
                saved.company_banner_url = url;
            }
        }

        log::info!("✅ Empresa guardada ({:?}): {}", mode, saved.company_name);
        Ok(SubmitOutcome::Saved(saved))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ApiEnvelope, LoginData, SocialPlatform, UploadedImage};
    use crate::services::MemoryTokenStore;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct FakeApi {
        existing: Result<ApiEnvelope<CompanyProfile>>,
        save_response: ApiEnvelope<CompanyProfile>,
        logo_response: ApiEnvelope<UploadedImage>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeApi {
        fn new(existing: Result<ApiEnvelope<CompanyProfile>>) -> Self {
            Self {
                existing,
                save_response: ApiEnvelope::ok(CompanyProfile::default()),
                logo_response: ApiEnvelope::ok(UploadedImage {
                    logo_url: Some("https://cdn.example/logo.png".into()),
                    banner_url: None,
                }),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn log(&self, call: &str) {
            self.calls.borrow_mut().push(call.to_string());
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl CompanyApi for FakeApi {
        type File = &'static str;

        async fn register_company(&self, _: &CompanyProfile, _: &SessionToken) -> Result<ApiEnvelope<CompanyProfile>> {
            self.log("register_company");
            Ok(self.save_response.clone())
        }

        async fn get_company_profile(&self, _: &SessionToken) -> Result<ApiEnvelope<CompanyProfile>> {
            self.log("get_company_profile");
            self.existing.clone()
        }

        async fn update_company_profile(&self, _: &CompanyProfile, _: &SessionToken) -> Result<ApiEnvelope<CompanyProfile>> {
            self.log("update_company_profile");
            Ok(self.save_response.clone())
        }

        async fn upload_logo(&self, file: &Self::File, _: &SessionToken) -> Result<ApiEnvelope<UploadedImage>> {
            self.log(&format!("upload_logo:start:{}", file));
            futures::future::ready(()).await;
            self.log("upload_logo:end");
            Ok(self.logo_response.clone())
        }

        async fn upload_banner(&self, file: &Self::File, _: &SessionToken) -> Result<ApiEnvelope<UploadedImage>> {
            self.log(&format!("upload_banner:start:{}", file));
            self.log("upload_banner:end");
            Ok(ApiEnvelope::ok(UploadedImage::default()))
        }
    }

    fn logged_in() -> MemoryTokenStore {
        let store = MemoryTokenStore::default();
        store
            .save(&LoginData {
                user_id: 1,
                email: "hr@acme.io".into(),
                full_name: None,
                token: "jwt".into(),
            })
            .unwrap();
        store
    }

    fn draft() -> CompanyDraft<&'static str> {
        let mut draft = CompanyDraft::default();
        draft.set_field(CompanyField::CompanyName, "Acme".into());
        draft
    }

    fn existing_profile() -> Result<ApiEnvelope<CompanyProfile>> {
        Ok(ApiEnvelope::ok(CompanyProfile {
            company_name: "Acme".into(),
            ..Default::default()
        }))
    }

    #[test]
    fn next_and_previous_are_clamped() {
        assert_eq!(WizardStep::Contact.next(), WizardStep::Contact);
        assert_eq!(WizardStep::CompanyInfo.previous(), WizardStep::CompanyInfo);
        assert_eq!(WizardStep::CompanyInfo.next(), WizardStep::FoundingInfo);
        assert_eq!(WizardStep::Contact.previous(), WizardStep::SocialMedia);
        for step in WizardStep::ALL {
            assert!(step.next().index() <= 3);
            assert_eq!(WizardStep::from_index(step.index()), Some(step));
        }
    }

    #[test]
    fn only_the_contact_step_submits() {
        assert_eq!(WizardStep::CompanyInfo.form_action(), FormAction::Advance);
        assert_eq!(WizardStep::FoundingInfo.form_action(), FormAction::Advance);
        assert_eq!(WizardStep::SocialMedia.form_action(), FormAction::Advance);
        assert_eq!(WizardStep::Contact.form_action(), FormAction::Submit);
    }

    #[test]
    fn progress_tracks_step() {
        assert_eq!(WizardStep::CompanyInfo.progress_percent(), 25.0);
        assert_eq!(WizardStep::Contact.progress_percent(), 100.0);
    }

    #[test]
    fn existing_profile_routes_through_update() {
        let api = FakeApi::new(existing_profile());
        let vm = WizardViewModel::with(api, logged_in());

        let outcome = block_on(vm.submit(&draft())).unwrap();

        assert!(matches!(outcome, SubmitOutcome::Saved(_)));
        assert_eq!(vm.api.calls(), vec!["get_company_profile", "update_company_profile"]);
    }

    #[test]
    fn missing_profile_routes_through_register() {
        let api = FakeApi::new(Err(ApiError::NotFound("Company profile not found".into())));
        let vm = WizardViewModel::with(api, logged_in());

        block_on(vm.submit(&draft())).unwrap();

        let calls = vm.api.calls();
        assert!(calls.contains(&"register_company".to_string()));
        assert!(!calls.contains(&"update_company_profile".to_string()));
    }

    #[test]
    fn unstaged_images_are_never_uploaded() {
        let api = FakeApi::new(existing_profile());
        let vm = WizardViewModel::with(api, logged_in());

        block_on(vm.submit(&draft())).unwrap();

        assert!(vm.api.calls().iter().all(|c| !c.starts_with("upload")));
    }

    #[test]
    fn logo_finishes_before_banner_starts() {
        let api = FakeApi::new(existing_profile());
        let vm = WizardViewModel::with(api, logged_in());
        let mut draft = draft();
        draft.stage_logo(Some("logo.png"));
        draft.stage_banner(Some("banner.jpg"));

        let outcome = block_on(vm.submit(&draft)).unwrap();

        let calls = vm.api.calls();
        let logo_end = calls.iter().position(|c| c == "upload_logo:end").unwrap();
        let banner_start = calls.iter().position(|c| c == "upload_banner:start:banner.jpg").unwrap();
        assert!(logo_end < banner_start);
        match outcome {
            SubmitOutcome::Saved(saved) => assert_eq!(saved.company_logo_url, "https://cdn.example/logo.png"),
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn only_staged_logo_is_uploaded() {
        let api = FakeApi::new(existing_profile());
        let vm = WizardViewModel::with(api, logged_in());
        let mut draft = draft();
        draft.stage_logo(Some("logo.png"));

        block_on(vm.submit(&draft)).unwrap();

        let calls = vm.api.calls();
        assert!(calls.contains(&"upload_logo:start:logo.png".to_string()));
        assert!(calls.iter().all(|c| !c.starts_with("upload_banner")));
    }

    #[test]
    fn rejected_save_surfaces_message_and_skips_uploads() {
        let mut api = FakeApi::new(existing_profile());
        api.save_response = ApiEnvelope::failure("Company registration failed");
        let vm = WizardViewModel::with(api, logged_in());
        let mut draft = draft();
        draft.stage_logo(Some("logo.png"));

        let outcome = block_on(vm.submit(&draft)).unwrap();

        assert_eq!(outcome, SubmitOutcome::Rejected("Company registration failed".into()));
        assert!(vm.api.calls().iter().all(|c| !c.starts_with("upload")));
    }

    #[test]
    fn invalid_draft_never_hits_the_network() {
        let api = FakeApi::new(existing_profile());
        let vm = WizardViewModel::with(api, logged_in());

        let outcome = block_on(vm.submit(&CompanyDraft::default())).unwrap();

        match outcome {
            SubmitOutcome::Invalid(errors) => assert!(errors.get(CompanyField::CompanyName).is_some()),
            other => panic!("unexpected outcome {:?}", other),
        }
        assert!(vm.api.calls().is_empty());
    }

    #[test]
    fn failed_logo_upload_stops_before_banner() {
        let mut api = FakeApi::new(existing_profile());
        api.logo_response = ApiEnvelope::failure("No logo file provided");
        let vm = WizardViewModel::with(api, logged_in());
        let mut draft = draft();
        draft.stage_logo(Some("logo.png"));
        draft.stage_banner(Some("banner.jpg"));

        let result = block_on(vm.submit(&draft));

        assert_eq!(result, Err(ApiError::Rejected("No logo file provided".into())));
        assert!(vm.api.calls().iter().all(|c| !c.starts_with("upload_banner")));
    }

    #[test]
    fn submit_without_session_fails_with_missing_auth() {
        let api = FakeApi::new(existing_profile());
        let vm = WizardViewModel::with(api, MemoryTokenStore::default());

        assert_eq!(block_on(vm.submit(&draft())), Err(ApiError::MissingAuth));
        assert!(vm.api.calls().is_empty());
    }

    #[test]
    fn load_existing_returns_full_profile_or_none() {
        let api = FakeApi::new(existing_profile());
        let vm = WizardViewModel::with(api, logged_in());
        let loaded = block_on(vm.load_existing()).unwrap().unwrap();
        assert_eq!(loaded.company_name, "Acme");

        let api = FakeApi::new(Err(ApiError::NotFound("Company profile not found".into())));
        let vm = WizardViewModel::with(api, logged_in());
        assert_eq!(block_on(vm.load_existing()), Ok(None));
    }

    #[test]
    fn every_field_belongs_to_one_step() {
        assert_eq!(WizardStep::of_field(CompanyField::CompanyName), WizardStep::CompanyInfo);
        assert_eq!(WizardStep::of_field(CompanyField::TeamSize), WizardStep::FoundingInfo);
        assert_eq!(WizardStep::of_field(CompanyField::Social(SocialPlatform::YouTube)), WizardStep::SocialMedia);
        assert_eq!(WizardStep::of_field(CompanyField::MapLocationUrl), WizardStep::Contact);
    }
}
