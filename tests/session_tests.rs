mod common;

#[cfg(test)]
pub mod session_tests {
    use super::common::*;

    use tourbook::common::SessionError;
    use tourbook::models::Role;
    use tourbook::services::access::{EXPIRED_LOGIN_PATH, LOGIN_PATH};
    use tourbook::services::session::{TOKEN_KEY, USER_KEY};
    use tourbook::services::{
        AuthSession, RequestAuth, SessionCheck, SessionManager, SessionStorage,
    };
    use tourbook::types::AuthResponse;

    fn stored(session: &AuthSession) -> SessionManager<MemoryStorage> {
        let manager = SessionManager::new(MemoryStorage::new());
        manager.write(session).unwrap();
        manager
    }

    #[test]
    fn test_write_then_read_session() {
        let session = get_seed_session(Role::Client, NOW + 60);
        let manager = stored(&session);

        assert_eq!(manager.read().unwrap(), Some(session));
    }

    #[test]
    fn test_write_stores_user_as_camel_case_json() {
        let manager = stored(&get_seed_session(Role::Manager, NOW + 60));
        let raw = manager.storage().get(USER_KEY).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["lastName"], "Lovelace");
        assert_eq!(json["role"], "MANAGER");
    }

    #[test]
    fn test_read_empty_storage() {
        let manager = SessionManager::new(MemoryStorage::new());
        assert_eq!(manager.read().unwrap(), None);
    }

    #[test]
    fn test_read_token_without_user_fails() {
        let storage = MemoryStorage::new().with(TOKEN_KEY, &make_token(NOW + 60));
        let manager = SessionManager::new(storage);

        assert!(matches!(manager.read(), Err(SessionError::MalformedUser(_))));
    }

    #[test]
    fn test_check_anonymous() {
        let manager = SessionManager::new(MemoryStorage::new());
        assert_eq!(manager.check(NOW), SessionCheck::Anonymous);
    }

    #[test]
    fn test_check_active_keeps_storage() {
        let session = get_seed_session(Role::Client, NOW + 3600);
        let manager = stored(&session);

        let check = manager.check(NOW);

        assert_eq!(check.session(), Some(&session));
        assert_eq!(check.redirect(), None);
        assert!(manager.storage().contains(TOKEN_KEY));
        assert!(manager.storage().contains(USER_KEY));
    }

    #[test]
    fn test_check_expired_clears_storage_and_redirects() {
        let manager = stored(&get_seed_session(Role::Client, NOW - 10));

        let check = manager.check(NOW);

        assert_eq!(check, SessionCheck::Expired);
        assert_eq!(check.redirect(), Some(EXPIRED_LOGIN_PATH));
        assert_eq!(EXPIRED_LOGIN_PATH, "/login?tokenExpired=true");
        assert!(manager.storage().is_empty());
    }

    #[test]
    fn test_check_malformed_user_clears_storage() {
        let storage = MemoryStorage::new()
            .with(TOKEN_KEY, &make_token(NOW + 60))
            .with(USER_KEY, "{not json");
        let manager = SessionManager::new(storage);

        assert_eq!(manager.check(NOW), SessionCheck::Anonymous);
        assert!(manager.storage().is_empty());
    }

    #[test]
    fn test_check_unreadable_token_is_expired() {
        let session = AuthSession {
            token: "not-a-jwt".to_string(),
            user: get_seed_user(Role::Client),
        };
        let manager = stored(&session);

        assert_eq!(manager.check(NOW), SessionCheck::Expired);
        assert!(manager.storage().is_empty());
    }

    #[test]
    fn test_request_auth_sends_stored_token() {
        let session = get_seed_session(Role::Client, NOW + 3600);
        let manager = stored(&session);

        assert_eq!(manager.request_auth(NOW, true), RequestAuth::Bearer(session.token));
    }

    #[test]
    fn test_request_auth_ends_session_cleared_elsewhere() {
        let manager = stored(&get_seed_session(Role::Client, NOW + 3600));
        manager.clear();

        assert_eq!(manager.request_auth(NOW, true), RequestAuth::Ended(LOGIN_PATH));
    }

    #[test]
    fn test_request_auth_anonymous_visitor() {
        let manager = SessionManager::new(MemoryStorage::new());

        assert_eq!(manager.request_auth(NOW, false), RequestAuth::Anonymous);
    }

    #[test]
    fn test_request_auth_expired_token() {
        let manager = stored(&get_seed_session(Role::Admin, NOW - 1));

        assert_eq!(manager.request_auth(NOW, true), RequestAuth::Ended(EXPIRED_LOGIN_PATH));
        assert!(manager.storage().is_empty());
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let manager = stored(&get_seed_session(Role::Admin, NOW + 60));

        manager.clear();

        assert!(!manager.storage().contains(TOKEN_KEY));
        assert!(!manager.storage().contains(USER_KEY));
    }

    #[test]
    fn test_session_from_auth_response() {
        let response = AuthResponse {
            token: make_token(NOW + 60),
            user: get_seed_user(Role::Admin),
        };

        let session = AuthSession::from(response);

        assert_eq!(session.role(), Role::Admin);
        assert!(!session.is_expired(NOW));
    }
}
