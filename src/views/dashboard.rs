// ============================================================================
// DASHBOARD - read-only company profile
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_company_profile;
use crate::models::{CompanyProfile, Screen};
use crate::viewmodels::dashboard_viewmodel::{or_na, social_link_items};
use crate::viewmodels::DashboardContent;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub navigate: Callback<Screen>,
    pub on_logout: Callback<()>,
    #[prop_or_default]
    pub user_name: Option<String>,
}

fn detail(label: &'static str, value: &str) -> Html {
    html! {
        <div class="detail-row">
            <span class="detail-label">{label}</span>
            <span class="detail-value">{or_na(value).to_string()}</span>
        </div>
    }
}

fn profile_card(profile: &CompanyProfile) -> Html {
    let links = social_link_items(&profile.social_links);

    html! {
        <div class="profile-card">
            if !profile.company_banner_url.is_empty() {
                <img class="profile-banner" src={profile.company_banner_url.clone()} alt="Company banner" />
            }
            <div class="profile-heading">
                if !profile.company_logo_url.is_empty() {
                    <img class="profile-logo" src={profile.company_logo_url.clone()} alt="Company logo" />
                }
                <h2>{or_na(&profile.company_name).to_string()}</h2>
            </div>

            <section class="profile-section">
                <h3>{"About"}</h3>
                <p>{or_na(&profile.about_company).to_string()}</p>
            </section>

            <section class="profile-section">
                <h3>{"Company Details"}</h3>
                { detail("Organization Type", &profile.organizations_type) }
                { detail("Industry", &profile.industry_type) }
                { detail("Team Size", &profile.team_size) }
                { detail("Established", &profile.year_of_establishment) }
                { detail("Website", &profile.company_website) }
                { detail("Vision", &profile.company_vision) }
                { detail("Careers", &profile.careers_link) }
            </section>

            <section class="profile-section">
                <h3>{"Contact"}</h3>
                { detail("Phone", &profile.headquarter_phone_no) }
                { detail("Email", &profile.headquarter_mail_id) }
                { detail("Location", &profile.map_location_url) }
            </section>

            if !links.is_empty() {
                <section class="profile-section">
                    <h3>{"Social Links"}</h3>
                    <div class="social-links">
                        { for links.into_iter().map(|link| html! {
                            <a href={link.href} target="_blank" rel="noopener noreferrer">{link.label}</a>
                        }) }
                    </div>
                </section>
            }
        </div>
    }
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let profile = use_company_profile(props.navigate.clone());
    let to_wizard = props.navigate.reform(|_: MouseEvent| Screen::CompanyRegistration);

    let content = match &*profile.content {
        DashboardContent::Loading => html! {
            <div class="loading">{"Loading..."}</div>
        },
        DashboardContent::Empty => html! {
            <div class="empty-state">
                <h2>{"No company profile found"}</h2>
                <p>{"Register your company to start hiring."}</p>
                <button class="btn-primary" onclick={to_wizard}>{"Register Company"}</button>
            </div>
        },
        DashboardContent::Profile(company) => html! {
            <>
                {profile_card(company)}
                <div class="dashboard-actions">
                    <button class="btn-primary" onclick={to_wizard}>{"Edit Profile"}</button>
                </div>
            </>
        },
    };

    html! {
        <div class="dashboard">
            <div class="dashboard-header">
                <h1>{"Company Dashboard"}</h1>
                if let Some(name) = &props.user_name {
                    <span class="user-name">{name}</span>
                }
                <button class="btn-secondary" onclick={props.on_logout.reform(|_| ())}>{"Logout"}</button>
            </div>
            {content}
        </div>
    }
}
