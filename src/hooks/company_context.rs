// ============================================================================
// COMPANY CONTEXT - global company slice shared between screens
// ============================================================================

use yew::prelude::*;

use crate::stores::{CompanyStore, CompanyStoreHandle};

#[derive(Properties, PartialEq)]
pub struct CompanyContextProviderProps {
    pub children: Children,
}

/// Wraps the app so the wizard can write the slice and logout can reset it
#[function_component(CompanyContextProvider)]
pub fn company_context_provider(props: &CompanyContextProviderProps) -> Html {
    let store = use_reducer(CompanyStore::default);

    html! {
        <ContextProvider<CompanyStoreHandle> context={store}>
            {props.children.clone()}
        </ContextProvider<CompanyStoreHandle>>
    }
}
