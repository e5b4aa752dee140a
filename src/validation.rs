//! Declarative validation for the company profile.
//!
//! One schema feeds both the wizard's pre-submit gate and the inline error
//! slot of the form field components. Empty optional fields always pass.

use chrono::NaiveDate;
use regex::Regex;
use url::Url;

use crate::models::{CompanyField, CompanyProfile, SocialPlatform};

lazy_static::lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    Url,
    Email,
    Date,
    Phone,
}

pub struct FieldRules {
    pub field: CompanyField,
    pub rules: &'static [Rule],
}

pub const COMPANY_SCHEMA: &[FieldRules] = &[
    FieldRules { field: CompanyField::CompanyName, rules: &[Rule::Required] },
    FieldRules { field: CompanyField::YearOfEstablishment, rules: &[Rule::Date] },
    FieldRules { field: CompanyField::CompanyWebsite, rules: &[Rule::Url] },
    FieldRules { field: CompanyField::CompanyAppLink, rules: &[Rule::Url] },
    FieldRules { field: CompanyField::CareersLink, rules: &[Rule::Url] },
    FieldRules { field: CompanyField::Social(SocialPlatform::LinkedIn), rules: &[Rule::Url] },
    FieldRules { field: CompanyField::Social(SocialPlatform::Facebook), rules: &[Rule::Url] },
    FieldRules { field: CompanyField::Social(SocialPlatform::Twitter), rules: &[Rule::Url] },
    FieldRules { field: CompanyField::Social(SocialPlatform::Instagram), rules: &[Rule::Url] },
    FieldRules { field: CompanyField::Social(SocialPlatform::YouTube), rules: &[Rule::Url] },
    FieldRules { field: CompanyField::HeadquarterPhoneNo, rules: &[Rule::Phone] },
    FieldRules { field: CompanyField::HeadquarterMailId, rules: &[Rule::Email] },
    FieldRules { field: CompanyField::MapLocationUrl, rules: &[Rule::Url] },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: CompanyField,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: CompanyField) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Drops the error of a field the user just edited
    pub fn clear(&mut self, field: CompanyField) {
        self.0.retain(|e| e.field != field);
    }
}

impl Rule {
    /// `None` when the value satisfies the rule
    pub fn check(&self, label: &str, value: &str) -> Option<String> {
        let value = value.trim();
        if value.is_empty() {
            return match self {
                Rule::Required => Some(format!("{} is required", label)),
                _ => None,
            };
        }
        let (ok, message) = match self {
            Rule::Required => (true, ""),
            Rule::Url => (is_valid_url(value), "Enter a valid URL"),
            Rule::Email => (is_valid_email(value), "Enter a valid email address"),
            Rule::Date => (
                NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok(),
                "Use the YYYY-MM-DD format",
            ),
            Rule::Phone => (is_valid_phone(value), "Enter a valid phone number"),
        };
        (!ok).then(|| message.to_string())
    }
}

fn is_web_url(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
        && url
            .host_str()
            .map_or(false, |host| host.contains('.') || host == "localhost")
}

/// Accepts scheme-less links like `linkedin.com/acme` or `acme.io:8080` by
/// assuming https. An explicit non-web scheme (`ftp://`) is rejected.
pub fn is_valid_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) if is_web_url(&url) => true,
        _ if value.contains("://") => false,
        _ => Url::parse(&format!("https://{}", value)).map_or(false, |url| is_web_url(&url)),
    }
}

/// 7 to 15 digits; spaces, dashes, parentheses and a leading `+` are separators
pub fn is_valid_phone(value: &str) -> bool {
    let value = value.trim();
    let body = value.strip_prefix('+').unwrap_or(value);
    if !body.chars().all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')')) {
        return false;
    }
    let digits = body.chars().filter(char::is_ascii_digit).count();
    (7..=15).contains(&digits)
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}

/// Runs the whole schema; first failing rule per field wins
pub fn validate_profile(profile: &CompanyProfile) -> ValidationErrors {
    let errors = COMPANY_SCHEMA
        .iter()
        .filter_map(|entry| {
            let value = profile.get(entry.field);
            entry
                .rules
                .iter()
                .find_map(|rule| rule.check(entry.field.label(), value))
                .map(|message| FieldError { field: entry.field, message })
        })
        .collect();
    ValidationErrors(errors)
}

/// Whether the field carries a Required rule (drives the `*` marker)
pub fn is_required(field: CompanyField) -> bool {
    COMPANY_SCHEMA
        .iter()
        .any(|entry| entry.field == field && entry.rules.contains(&Rule::Required))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_profile_only_misses_company_name() {
        let errors = validate_profile(&CompanyProfile::default());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(CompanyField::CompanyName), Some("Company name is required"));
    }

    #[test]
    fn malformed_values_are_reported_per_field() {
        let mut profile = CompanyProfile {
            company_name: "Acme".into(),
            company_website: "not a url".into(),
            headquarter_mail_id: "contact-at-acme".into(),
            year_of_establishment: "15/04/2015".into(),
            headquarter_phone_no: "call me".into(),
            ..Default::default()
        };
        profile.social_links.facebook = "facebook.com/acme".into();

        let errors = validate_profile(&profile);
        assert_eq!(errors.get(CompanyField::CompanyWebsite), Some("Enter a valid URL"));
        assert_eq!(errors.get(CompanyField::HeadquarterMailId), Some("Enter a valid email address"));
        assert_eq!(errors.get(CompanyField::YearOfEstablishment), Some("Use the YYYY-MM-DD format"));
        assert_eq!(errors.get(CompanyField::HeadquarterPhoneNo), Some("Enter a valid phone number"));
        assert_eq!(errors.get(CompanyField::Social(SocialPlatform::Facebook)), None);
    }

    #[test]
    fn well_formed_profile_passes() {
        let profile = CompanyProfile {
            company_name: "Acme".into(),
            company_website: "https://acme.io".into(),
            careers_link: "acme.io/careers".into(),
            map_location_url: "https://maps.google.com/?q=acme".into(),
            headquarter_mail_id: "contact@acme.io".into(),
            headquarter_phone_no: "(555) 123-4567".into(),
            year_of_establishment: "2015-04-01".into(),
            ..Default::default()
        };
        assert!(validate_profile(&profile).is_empty());
    }

    #[test]
    fn url_rules() {
        assert!(is_valid_url("linkedin.com/company/acme"));
        assert!(is_valid_url("http://localhost:3000"));
        assert!(!is_valid_url("ftp://acme.io"));
        assert!(!is_valid_url("acme"));
    }

    #[test]
    fn urls_with_port_but_no_scheme() {
        assert!(is_valid_url("acme.io:8080/careers"));
        assert!(is_valid_url("www.acme.io:8080"));
        assert!(is_valid_url("localhost:3000"));
        assert!(!is_valid_url("ftp://acme.io:21"));
    }

    #[test]
    fn phone_formats() {
        assert!(is_valid_phone("(555) 123-4567"));
        assert!(is_valid_phone("+1 (555) 123-4567"));
        assert!(is_valid_phone("+91 98765 43210"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("555-CALL-NOW"));
        assert!(!is_valid_phone("55+5 1234567"));
    }

    #[test]
    fn clearing_removes_single_field_error() {
        let mut errors = validate_profile(&CompanyProfile::default());
        errors.clear(CompanyField::CompanyName);
        assert!(errors.is_empty());
    }

    #[test]
    fn only_company_name_is_required() {
        assert!(is_required(CompanyField::CompanyName));
        assert!(!is_required(CompanyField::HeadquarterMailId));
    }
}
