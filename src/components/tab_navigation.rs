use yew::prelude::*;

use crate::viewmodels::WizardStep;

/// `active` for the current step, `completed` for the ones before it
fn tab_state(step: WizardStep, current: WizardStep) -> Option<&'static str> {
    if step == current {
        Some("active")
    } else if step.index() < current.index() {
        Some("completed")
    } else {
        None
    }
}

#[derive(Properties, PartialEq)]
pub struct TabNavigationProps {
    pub current: WizardStep,
    pub on_step_change: Callback<WizardStep>,
}

#[function_component(TabNavigation)]
pub fn tab_navigation(props: &TabNavigationProps) -> Html {
    html! {
        <nav class="tab-navigation">
            { for WizardStep::ALL.iter().map(|step| {
                let step = *step;
                let onclick = props.on_step_change.reform(move |_: MouseEvent| step);
                html! {
                    <button
                        type="button"
                        class={classes!("tab", tab_state(step, props.current))}
                        {onclick}
                    >
                        <span class="tab-icon">{step.icon()}</span>
                        <span class="tab-label">{step.label()}</span>
                    </button>
                }
            }) }
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earlier_steps_are_completed() {
        let current = WizardStep::SocialMedia;
        assert_eq!(tab_state(WizardStep::CompanyInfo, current), Some("completed"));
        assert_eq!(tab_state(WizardStep::FoundingInfo, current), Some("completed"));
        assert_eq!(tab_state(WizardStep::SocialMedia, current), Some("active"));
        assert_eq!(tab_state(WizardStep::Contact, current), None);
    }
}
