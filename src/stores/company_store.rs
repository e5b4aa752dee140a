// ============================================================================
// COMPANY STORE - global slice shared through a ContextProvider
// ============================================================================
// Written by the wizard after a successful submit, reset on logout.
// The dashboard still re-fetches on mount instead of reading this cache.
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::models::CompanyProfile;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompanyStore {
    pub company_data: CompanyProfile,
    pub loading: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CompanyAction {
    /// The payload always carries every profile key, so the merge is a replace
    UpdateCompanyData(CompanyProfile),
    ResetCompanyData,
    SetLoading(bool),
}

impl Reducible for CompanyStore {
    type Action = CompanyAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CompanyAction::UpdateCompanyData(profile) => next.company_data = profile,
            CompanyAction::ResetCompanyData => next.company_data = CompanyProfile::default(),
            CompanyAction::SetLoading(loading) => next.loading = loading,
        }
        Rc::new(next)
    }
}

pub type CompanyStoreHandle = UseReducerHandle<CompanyStore>;
