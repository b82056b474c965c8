//! Admin-mode derivation.

use crema_model::UserProfile;

/// Computes whether a session is eligible for the admin area.
///
/// True iff the user's email (trimmed and case-folded) appears in the
/// allow-list, or the server assigned the admin role. Pure and
/// idempotent: the same input always yields the same answer.
///
/// The flag only gates client-side views. The server authorizes every
/// admin request on its own; this is never a security boundary.
#[must_use]
pub fn compute_admin_mode(user: &UserProfile, allow_list: &[String]) -> bool {
    if user.has_admin_role() {
        return true;
    }

    let email = user.email.trim().to_lowercase();
    allow_list
        .iter()
        .any(|entry| entry.trim().to_lowercase() == email)
}

#[cfg(test)]
mod tests {
    use crema_model::UserRole;

    use super::*;

    fn allow_list() -> Vec<String> {
        vec!["owner@crema.shop".to_string(), "Staff@Crema.Shop".to_string()]
    }

    #[test]
    fn allow_listed_email_is_admin() {
        let user = UserProfile::new("owner@crema.shop");
        assert!(compute_admin_mode(&user, &allow_list()));
    }

    #[test]
    fn email_comparison_trims_and_case_folds() {
        let user = UserProfile::new("  STAFF@crema.shop ");
        assert!(compute_admin_mode(&user, &allow_list()));
    }

    #[test]
    fn admin_role_is_admin_without_allow_list() {
        let user = UserProfile::new("someone@example.com").with_role(UserRole::Admin);
        assert!(compute_admin_mode(&user, &[]));
    }

    #[test]
    fn regular_user_is_not_admin() {
        let user = UserProfile::new("user@example.com");
        assert!(!compute_admin_mode(&user, &allow_list()));
    }

    #[test]
    fn unrelated_profile_fields_do_not_flip_the_result() {
        let user = UserProfile::new("owner@crema.shop");
        let before = compute_admin_mode(&user, &allow_list());

        let renamed = user.with_first_name("New").with_last_name("Name");
        assert_eq!(compute_admin_mode(&renamed, &allow_list()), before);
    }

    #[test]
    fn recomputation_is_idempotent() {
        let user = UserProfile::new("owner@crema.shop");
        let first = compute_admin_mode(&user, &allow_list());
        let second = compute_admin_mode(&user, &allow_list());
        assert_eq!(first, second);
    }
}
