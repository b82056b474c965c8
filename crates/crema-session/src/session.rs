//! Session state snapshot.

use crema_model::{TokenPair, UserProfile};

/// Authentication state of the storefront client.
///
/// Snapshots are handed out by [`crate::SessionStore`]; only the store
/// mutates the live copy.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Profile of the signed-in user, present after a profile fetch.
    pub user: Option<UserProfile>,
    /// Short-lived bearer credential, mirrored into the persistent cache.
    pub access_token: Option<String>,
    /// Longer-lived credential, used only to mint new access tokens.
    pub refresh_token: Option<String>,
    /// Whether the admin area is currently enabled.
    ///
    /// Derived from `user`; never true while `user` is `None`.
    pub admin_mode: bool,
    /// Whether an operation is in flight.
    pub loading: bool,
    /// Set when a refresh failed terminally and re-login is required.
    pub token_invalid: bool,
    /// Token generation counter; advances on every token change or clear.
    /// Callers that observed a 401 compare it to decide whether a refresh
    /// already happened.
    pub(crate) generation: u64,
}

impl Session {
    /// Whether the session holds an access token.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// The generation the caller observed; used by the refresh
    /// coordinator to deduplicate concurrent refresh attempts.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Installs a fresh token pair.
    pub(crate) fn apply_tokens(&mut self, pair: &TokenPair) {
        self.access_token = Some(pair.access.clone());
        self.refresh_token = Some(pair.refresh.clone());
        self.token_invalid = false;
        self.generation += 1;
    }

    /// Installs the profile and recomputes admin eligibility.
    ///
    /// The admin flag is derived from the new profile every time, so a
    /// role change or allow-list mismatch revokes it and an eligible
    /// profile elevates the session.
    pub(crate) fn apply_user(&mut self, user: UserProfile, allow_list: &[String]) {
        self.admin_mode = crate::admin::compute_admin_mode(&user, allow_list);
        self.user = Some(user);
    }

    /// Restores cached tokens at startup. The access token may be stale;
    /// the caller is expected to refresh before trusting it.
    pub(crate) fn restore_tokens(&mut self, access: Option<String>, refresh: String) {
        self.access_token = access;
        self.refresh_token = Some(refresh);
        self.token_invalid = false;
        self.generation += 1;
    }

    /// Clears everything, advancing the generation so concurrent refresh
    /// waiters notice the change.
    pub(crate) fn clear(&mut self) {
        self.user = None;
        self.access_token = None;
        self.refresh_token = None;
        self.admin_mode = false;
        self.loading = false;
        self.token_invalid = false;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(n: u32) -> TokenPair {
        TokenPair {
            access: format!("access-{n}"),
            refresh: format!("refresh-{n}"),
        }
    }

    #[test]
    fn empty_session_is_signed_out() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert!(session.user.is_none());
        assert!(!session.admin_mode);
    }

    #[test]
    fn tokens_advance_the_generation() {
        let mut session = Session::default();
        let before = session.generation();
        session.apply_tokens(&pair(1));
        assert!(session.is_authenticated());
        assert_eq!(session.generation(), before + 1);
    }

    #[test]
    fn clear_resets_all_fields_and_advances() {
        let mut session = Session::default();
        session.apply_tokens(&pair(1));
        session.token_invalid = true;
        let generation = session.generation();

        session.clear();
        assert!(!session.is_authenticated());
        assert!(session.refresh_token.is_none());
        assert!(!session.token_invalid);
        assert_eq!(session.generation(), generation + 1);
    }

    #[test]
    fn admin_mode_tracks_profile_eligibility() {
        use crema_model::UserProfile;

        let mut session = Session::default();
        session.admin_mode = true;
        session.apply_user(UserProfile::new("user@example.com"), &[]);
        assert!(!session.admin_mode);

        let allow = vec!["owner@crema.shop".to_string()];
        session.apply_user(UserProfile::new("owner@crema.shop"), &allow);
        assert!(session.admin_mode);
    }
}
