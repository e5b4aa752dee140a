/// Backend base URL when API_BASE_URL is not set at compile time
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api";

// Storage keys
pub const STORAGE_KEY_LOGIN_DATA: &str = "hirenext_loginData";

// Endpoints (relative to the base URL)
pub const PATH_AUTH_REGISTER: &str = "/auth/register";
pub const PATH_AUTH_LOGIN: &str = "/auth/login";
pub const PATH_COMPANY_REGISTER: &str = "/company/register";
pub const PATH_COMPANY_PROFILE: &str = "/company/profile";
pub const PATH_COMPANY_UPDATE: &str = "/company/profile/update";
pub const PATH_UPLOAD_LOGO: &str = "/company/upload_logo";
pub const PATH_UPLOAD_BANNER: &str = "/company/upload_banner";

// Multipart field names
pub const FIELD_LOGO: &str = "logo";
pub const FIELD_BANNER: &str = "banner";

// Select options for the Founding Info step
pub const INDUSTRY_OPTIONS: &[&str] = &[
    "Fintech",
    "Engineering",
    "Software & IT",
    "Edtech",
    "Oil & Gas",
    "Healthcare",
    "E-commerce",
    "Manufacturing",
    "Other",
];

pub const ORGANIZATION_TYPES: &[&str] = &[
    "Private Limited",
    "Public Limited",
    "Startup",
    "Non-Profit",
    "Government",
    "Partnership",
    "Sole Proprietorship",
];

pub const TEAM_SIZES: &[&str] = &["1-10", "10-50", "50-100", "100-500", "500-1000", "1000+"];

pub const GENDER_OPTIONS: &[(&str, &str)] = &[("m", "Male"), ("f", "Female"), ("o", "Other")];

// User-facing messages
pub const MSG_SAVE_FAILED: &str = "Failed to save company";
pub const MSG_SAVE_REJECTED: &str = "Save failed";
pub const MSG_SAVE_SUCCESS: &str = "Company saved successfully!";
