pub mod auth;
pub mod company;
pub mod envelope;
pub mod screen;

pub use auth::{LoginData, LoginRequest, RegisterRequest, SessionToken};
pub use company::{CompanyDraft, CompanyField, CompanyProfile, SocialLinks, SocialPlatform};
pub use envelope::{ApiEnvelope, UploadedImage};
pub use screen::Screen;
