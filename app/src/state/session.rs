//! Session state for the current user.
//!
//! No verification happens anywhere: submitting the login form establishes
//! a session from whatever email was typed, and guest sessions carry no
//! identity at all. Nothing is persisted across reloads.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Who is signed in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionUser {
    /// Email-identified account (unverified).
    Account { email: String },
    /// Anonymous guest session.
    Guest,
}

/// Session state tracking the current user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<SessionUser>,
}

impl SessionState {
    /// Whether any session (account or guest) exists.
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Establish an account session. The password is accepted unchecked and
    /// never stored.
    pub fn sign_in(&mut self, email: String) {
        self.user = Some(SessionUser::Account { email });
    }

    /// Establish a guest session.
    pub fn sign_in_guest(&mut self) {
        self.user = Some(SessionUser::Guest);
    }

    /// Drop the session.
    pub fn sign_out(&mut self) {
        self.user = None;
    }

    /// Short display name for the header: the email's local part, or
    /// "Guest".
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        match &self.user {
            Some(SessionUser::Account { email }) => Some(
                email
                    .split('@')
                    .next()
                    .filter(|part| !part.is_empty())
                    .unwrap_or(email.as_str())
                    .to_owned(),
            ),
            Some(SessionUser::Guest) => Some("Guest".to_owned()),
            None => None,
        }
    }
}
