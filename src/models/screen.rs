/// Top-level screens. Navigation is a state change on the app shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Register,
    CompanyRegistration,
    Dashboard,
}

impl Screen {
    /// Screen shown on startup, depending on whether a session was restored
    pub fn initial(logged_in: bool) -> Self {
        if logged_in {
            Screen::Dashboard
        } else {
            Screen::Login
        }
    }

    pub fn requires_auth(&self) -> bool {
        matches!(self, Screen::CompanyRegistration | Screen::Dashboard)
    }
}
