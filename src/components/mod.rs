pub mod file_upload;
pub mod form_input;
pub mod form_select;
pub mod form_textarea;
pub mod social_link_input;
pub mod tab_navigation;

pub use file_upload::{FileUpload, ImageKind};
pub use form_input::FormInput;
pub use form_select::FormSelect;
pub use form_textarea::FormTextarea;
pub use social_link_input::SocialLinkInput;
pub use tab_navigation::TabNavigation;
