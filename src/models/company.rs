use serde::{Deserialize, Deserializer, Serialize};

/// Backend sends `null` for blank optional columns; the UI works with plain strings.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_default_links<'de, D>(deserializer: D) -> Result<SocialLinks, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<SocialLinks>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialPlatform {
    LinkedIn,
    Facebook,
    Twitter,
    Instagram,
    YouTube,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 5] = [
        SocialPlatform::LinkedIn,
        SocialPlatform::Facebook,
        SocialPlatform::Twitter,
        SocialPlatform::Instagram,
        SocialPlatform::YouTube,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SocialPlatform::LinkedIn => "linkedin",
            SocialPlatform::Facebook => "facebook",
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::YouTube => "youtube",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SocialPlatform::LinkedIn => "LinkedIn",
            SocialPlatform::Facebook => "Facebook",
            SocialPlatform::Twitter => "Twitter",
            SocialPlatform::Instagram => "Instagram",
            SocialPlatform::YouTube => "YouTube",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SocialPlatform::LinkedIn => "in",
            SocialPlatform::Facebook => "f",
            SocialPlatform::Twitter => "𝕏",
            SocialPlatform::Instagram => "📷",
            SocialPlatform::YouTube => "▶",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            SocialPlatform::LinkedIn => "linkedin.com/username",
            SocialPlatform::Facebook => "facebook.com/username",
            SocialPlatform::Twitter => "twitter.com/username",
            SocialPlatform::Instagram => "instagram.com/username",
            SocialPlatform::YouTube => "youtube.com/username",
        }
    }
}

/// Exactly five platforms, always present (possibly empty). Unknown keys are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    #[serde(deserialize_with = "null_as_empty")]
    pub linkedin: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub facebook: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub twitter: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub instagram: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub youtube: String,
}

impl SocialLinks {
    pub fn get(&self, platform: SocialPlatform) -> &str {
        match platform {
            SocialPlatform::LinkedIn => &self.linkedin,
            SocialPlatform::Facebook => &self.facebook,
            SocialPlatform::Twitter => &self.twitter,
            SocialPlatform::Instagram => &self.instagram,
            SocialPlatform::YouTube => &self.youtube,
        }
    }

    pub fn set(&mut self, platform: SocialPlatform, value: String) {
        let slot = match platform {
            SocialPlatform::LinkedIn => &mut self.linkedin,
            SocialPlatform::Facebook => &mut self.facebook,
            SocialPlatform::Twitter => &mut self.twitter,
            SocialPlatform::Instagram => &mut self.instagram,
            SocialPlatform::YouTube => &mut self.youtube,
        };
        *slot = value;
    }

    /// Platforms with a non-empty URL, in display order
    pub fn filled(&self) -> impl Iterator<Item = (SocialPlatform, &str)> + '_ {
        SocialPlatform::ALL
            .into_iter()
            .map(move |p| (p, self.get(p)))
            .filter(|(_, url)| !url.trim().is_empty())
    }
}

/// Company profile as stored by the backend (one per account)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyProfile {
    #[serde(deserialize_with = "null_as_empty")]
    pub company_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub about_company: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub company_logo_url: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub company_banner_url: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub organizations_type: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub industry_type: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub team_size: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub year_of_establishment: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub company_website: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub company_app_link: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub company_vision: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub careers_link: String,
    #[serde(deserialize_with = "null_as_default_links")]
    pub social_links: SocialLinks,
    #[serde(deserialize_with = "null_as_empty")]
    pub headquarter_phone_no: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub headquarter_mail_id: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub map_location_url: String,
}

/// Every editable field of the profile, addressed the way form widgets name them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompanyField {
    CompanyName,
    AboutCompany,
    OrganizationsType,
    IndustryType,
    TeamSize,
    YearOfEstablishment,
    CompanyWebsite,
    CompanyAppLink,
    CompanyVision,
    CareersLink,
    Social(SocialPlatform),
    HeadquarterPhoneNo,
    HeadquarterMailId,
    MapLocationUrl,
}

impl CompanyField {
    pub fn name(&self) -> &'static str {
        match self {
            CompanyField::CompanyName => "company_name",
            CompanyField::AboutCompany => "about_company",
            CompanyField::OrganizationsType => "organizations_type",
            CompanyField::IndustryType => "industry_type",
            CompanyField::TeamSize => "team_size",
            CompanyField::YearOfEstablishment => "year_of_establishment",
            CompanyField::CompanyWebsite => "company_website",
            CompanyField::CompanyAppLink => "company_app_link",
            CompanyField::CompanyVision => "company_vision",
            CompanyField::CareersLink => "careers_link",
            CompanyField::Social(platform) => platform.key(),
            CompanyField::HeadquarterPhoneNo => "headquarter_phone_no",
            CompanyField::HeadquarterMailId => "headquarter_mail_id",
            CompanyField::MapLocationUrl => "map_location_url",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompanyField::CompanyName => "Company name",
            CompanyField::AboutCompany => "About Us",
            CompanyField::OrganizationsType => "Organization Type",
            CompanyField::IndustryType => "Industry Types",
            CompanyField::TeamSize => "Team Size",
            CompanyField::YearOfEstablishment => "Year of Establishment",
            CompanyField::CompanyWebsite => "Company Website",
            CompanyField::CompanyAppLink => "Company App Link",
            CompanyField::CompanyVision => "Company Vision",
            CompanyField::CareersLink => "Official Careers Link",
            CompanyField::Social(platform) => platform.label(),
            CompanyField::HeadquarterPhoneNo => "Headquarter Phone Number",
            CompanyField::HeadquarterMailId => "Headquarter Email",
            CompanyField::MapLocationUrl => "Map Location URL",
        }
    }
}

impl CompanyProfile {
    pub fn get(&self, field: CompanyField) -> &str {
        match field {
            CompanyField::CompanyName => &self.company_name,
            CompanyField::AboutCompany => &self.about_company,
            CompanyField::OrganizationsType => &self.organizations_type,
            CompanyField::IndustryType => &self.industry_type,
            CompanyField::TeamSize => &self.team_size,
            CompanyField::YearOfEstablishment => &self.year_of_establishment,
            CompanyField::CompanyWebsite => &self.company_website,
            CompanyField::CompanyAppLink => &self.company_app_link,
            CompanyField::CompanyVision => &self.company_vision,
            CompanyField::CareersLink => &self.careers_link,
            CompanyField::Social(platform) => self.social_links.get(platform),
            CompanyField::HeadquarterPhoneNo => &self.headquarter_phone_no,
            CompanyField::HeadquarterMailId => &self.headquarter_mail_id,
            CompanyField::MapLocationUrl => &self.map_location_url,
        }
    }

    pub fn set(&mut self, field: CompanyField, value: String) {
        let slot = match field {
            CompanyField::Social(platform) => return self.social_links.set(platform, value),
            CompanyField::CompanyName => &mut self.company_name,
            CompanyField::AboutCompany => &mut self.about_company,
            CompanyField::OrganizationsType => &mut self.organizations_type,
            CompanyField::IndustryType => &mut self.industry_type,
            CompanyField::TeamSize => &mut self.team_size,
            CompanyField::YearOfEstablishment => &mut self.year_of_establishment,
            CompanyField::CompanyWebsite => &mut self.company_website,
            CompanyField::CompanyAppLink => &mut self.company_app_link,
            CompanyField::CompanyVision => &mut self.company_vision,
            CompanyField::CareersLink => &mut self.careers_link,
            CompanyField::HeadquarterPhoneNo => &mut self.headquarter_phone_no,
            CompanyField::HeadquarterMailId => &mut self.headquarter_mail_id,
            CompanyField::MapLocationUrl => &mut self.map_location_url,
        };
        *slot = value;
    }

    pub fn is_empty(&self) -> bool {
        self == &CompanyProfile::default()
    }
}

/// Wizard draft: the profile being edited plus images staged for upload on submit.
///
/// Generic over the file handle so the submit flow can run against
/// `web_sys::File` in the browser and plain values in tests.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyDraft<F> {
    pub profile: CompanyProfile,
    pub logo_file: Option<F>,
    pub banner_file: Option<F>,
}

impl<F> Default for CompanyDraft<F> {
    fn default() -> Self {
        Self {
            profile: CompanyProfile::default(),
            logo_file: None,
            banner_file: None,
        }
    }
}

impl<F> CompanyDraft<F> {
    /// Replaces every profile field with the fetched one. Staged files stay.
    pub fn merge_profile(&mut self, fetched: CompanyProfile) {
        self.profile = fetched;
    }

    pub fn set_field(&mut self, field: CompanyField, value: String) {
        self.profile.set(field, value);
    }

    pub fn stage_logo(&mut self, file: Option<F>) {
        self.logo_file = file;
    }

    pub fn stage_banner(&mut self, file: Option<F>) {
        self.banner_file = file;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nulls_and_missing_social_keys_become_empty_strings() {
        let json = r#"{
            "company_name": "Acme",
            "about_company": null,
            "year_of_establishment": "2015-04-01",
            "social_links": {"linkedin": "https://linkedin.com/acme", "mastodon": "x"}
        }"#;
        let profile: CompanyProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.company_name, "Acme");
        assert_eq!(profile.about_company, "");
        assert_eq!(profile.social_links.linkedin, "https://linkedin.com/acme");
        assert_eq!(profile.social_links.facebook, "");
        assert_eq!(profile.social_links.youtube, "");
    }

    #[test]
    fn null_social_links_keeps_all_five_keys() {
        let profile: CompanyProfile = serde_json::from_str(r#"{"social_links": null}"#).unwrap();
        let value = serde_json::to_value(&profile.social_links).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 5);
        for platform in SocialPlatform::ALL {
            assert_eq!(value[platform.key()], "");
        }
    }

    #[test]
    fn set_and_get_address_the_same_slot() {
        let mut profile = CompanyProfile::default();
        profile.set(CompanyField::TeamSize, "10-50".into());
        profile.set(CompanyField::Social(SocialPlatform::Twitter), "twitter.com/acme".into());
        assert_eq!(profile.get(CompanyField::TeamSize), "10-50");
        assert_eq!(profile.social_links.twitter, "twitter.com/acme");
        assert!(!profile.is_empty());
    }

    #[test]
    fn filled_skips_blank_platforms() {
        let links = SocialLinks {
            facebook: "".into(),
            instagram: "https://instagram.com/acme".into(),
            youtube: "   ".into(),
            ..Default::default()
        };
        let filled: Vec<_> = links.filled().collect();
        assert_eq!(filled, vec![(SocialPlatform::Instagram, "https://instagram.com/acme")]);
    }

    #[test]
    fn merge_keeps_staged_files() {
        let mut draft: CompanyDraft<&str> = CompanyDraft::default();
        draft.stage_logo(Some("logo.png"));
        draft.merge_profile(CompanyProfile {
            company_name: "Acme".into(),
            team_size: "1-10".into(),
            ..Default::default()
        });
        assert_eq!(draft.profile.company_name, "Acme");
        assert_eq!(draft.profile.team_size, "1-10");
        assert_eq!(draft.logo_file, Some("logo.png"));
    }
}
