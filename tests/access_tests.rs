mod common;

#[cfg(test)]
pub mod access_tests {
    use super::common::*;

    use tourbook::models::Role;
    use tourbook::services::access::*;

    #[test]
    fn test_evaluate_without_session_requires_login() {
        assert_eq!(evaluate(None, None), Access::LoginRequired);
        assert_eq!(evaluate(None, Some(Role::Admin)), Access::LoginRequired);
    }

    #[test]
    fn test_evaluate_any_role() {
        let session = get_seed_session(Role::Client, NOW + 60);
        assert_eq!(evaluate(Some(&session), None), Access::Granted);
    }

    #[test]
    fn test_evaluate_matching_role() {
        let admin = get_seed_session(Role::Admin, NOW + 60);
        let manager = get_seed_session(Role::Manager, NOW + 60);

        assert_eq!(evaluate(Some(&admin), Some(Role::Admin)), Access::Granted);
        assert_eq!(evaluate(Some(&manager), Some(Role::Manager)), Access::Granted);
    }

    #[test]
    fn test_evaluate_role_mismatch_is_denied() {
        let client = get_seed_session(Role::Client, NOW + 60);

        assert_eq!(
            evaluate(Some(&client), Some(Role::Admin)),
            Access::Denied {
                required: Role::Admin,
                actual: Role::Client
            }
        );
    }

    #[test]
    fn test_evaluate_admin_is_not_manager() {
        let admin = get_seed_session(Role::Admin, NOW + 60);

        assert!(matches!(
            evaluate(Some(&admin), Some(Role::Manager)),
            Access::Denied { .. }
        ));
    }

    #[test]
    fn test_is_protected() {
        for path in ["/bookings", "/profile", "/admin", "/manager", "/admin/", "/bookings?x=1"] {
            assert!(is_protected(path), "{path} should be protected");
        }
        let public = [
            "/",
            "/login",
            "/register",
            "/tours",
            "/tours/4",
            "/categories",
            "/administrator",
        ];
        for path in public {
            assert!(!is_protected(path), "{path} should be public");
        }
    }

    #[test]
    fn test_dashboard_and_home_for_role() {
        assert_eq!(dashboard_for(Role::Admin), Some(ADMIN_PATH));
        assert_eq!(dashboard_for(Role::Manager), Some(MANAGER_PATH));
        assert_eq!(dashboard_for(Role::Client), None);
        assert_eq!(home_for(Role::Client), TOURS_PATH);
        assert_eq!(home_for(Role::Admin), ADMIN_PATH);
    }

    #[test]
    fn test_can_edit_account_excludes_own_account() {
        assert!(!can_edit_account(Some(7), 7));
        assert!(can_edit_account(Some(7), 8));
        assert!(can_edit_account(None, 7));
    }
}
