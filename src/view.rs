/// The screen currently mounted. Purely in-memory: there is no history stack
/// and no URL synchronization, so a reload starts over from whatever session
/// survives in the browser store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Login,
    Register,
    Dashboard,
    Cnpj,
}

impl ViewState {
    /// Where the app starts: the dashboard when a persisted session was
    /// restored, the login screen otherwise.
    pub fn initial(has_session: bool) -> Self {
        if has_session {
            ViewState::Dashboard
        } else {
            ViewState::Login
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_dashboard_with_session() {
        assert_eq!(ViewState::initial(true), ViewState::Dashboard);
    }

    #[test]
    fn starts_on_login_without_session() {
        assert_eq!(ViewState::initial(false), ViewState::Login);
    }
}
