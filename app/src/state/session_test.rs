use super::*;

#[test]
fn default_session_is_signed_out() {
    let state = SessionState::default();
    assert!(!state.is_signed_in());
    assert_eq!(state.display_name(), None);
}

#[test]
fn sign_in_establishes_account_session() {
    let mut state = SessionState::default();
    state.sign_in("ada@example.com".to_owned());
    assert!(state.is_signed_in());
    assert_eq!(
        state.user,
        Some(SessionUser::Account {
            email: "ada@example.com".to_owned()
        })
    );
}

#[test]
fn guest_session_counts_as_signed_in() {
    let mut state = SessionState::default();
    state.sign_in_guest();
    assert!(state.is_signed_in());
    assert_eq!(state.display_name().as_deref(), Some("Guest"));
}

#[test]
fn sign_out_drops_session() {
    let mut state = SessionState::default();
    state.sign_in_guest();
    state.sign_out();
    assert!(!state.is_signed_in());
}

#[test]
fn display_name_uses_email_local_part() {
    let mut state = SessionState::default();
    state.sign_in("ada@example.com".to_owned());
    assert_eq!(state.display_name().as_deref(), Some("ada"));
}

#[test]
fn display_name_falls_back_to_full_email() {
    let mut state = SessionState::default();
    state.sign_in("@example.com".to_owned());
    assert_eq!(state.display_name().as_deref(), Some("@example.com"));
}
