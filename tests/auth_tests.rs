mod common;

#[cfg(test)]
pub mod auth_tests {
    use super::common::*;

    use tourbook::common::{ApiError, AuthError, ValidationError};
    use tourbook::models::Role;
    use tourbook::services::auth::{login, register};
    use tourbook::services::validation::*;
    use tourbook::types::AuthResponse;

    fn register_form() -> RegisterForm {
        RegisterForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@test.com".to_string(),
            password: "engine42".to_string(),
            confirm_password: "engine42".to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_with_empty_fields_sends_nothing() {
        let api = client(MockTransport::new());

        let err = login(&api, &LoginForm::default()).await.unwrap_err();
        assert_eq!(err, AuthError::Invalid(ValidationError::Required("Email")));

        let form = LoginForm {
            email: "ada@test.com".to_string(),
            password: String::new(),
        };
        let err = login(&api, &form).await.unwrap_err();
        assert_eq!(err, AuthError::Invalid(ValidationError::Required("Password")));

        assert_eq!(api.transport().request_count(), 0);
    }

    #[tokio::test]
    async fn test_login_success() {
        let session = get_seed_session(Role::Manager, NOW + 3600);
        let response = AuthResponse {
            token: session.token.clone(),
            user: session.user.clone(),
        };
        let api = client(MockTransport::new().respond_json(200, &response));
        let form = LoginForm {
            email: "  ada@test.com ".to_string(),
            password: "engine42".to_string(),
        };

        let signed_in = login(&api, &form).await.unwrap();

        assert_eq!(signed_in, session);
        let requests = api.transport().requests();
        assert_eq!(requests[0].url, format!("{TEST_API}/auth/login"));
        assert_eq!(requests[0].bearer, None);
        assert_eq!(api.transport().body(0)["email"], "ada@test.com");
    }

    #[tokio::test]
    async fn test_login_rejected_credentials() {
        let api = client(
            MockTransport::new().respond(400, r#"{"message":"Invalid email or password"}"#),
        );
        let form = LoginForm {
            email: "ada@test.com".to_string(),
            password: "wrong".to_string(),
        };

        let err = login(&api, &form).await.unwrap_err();

        assert_eq!(err.to_string(), "Invalid email or password");
        assert!(matches!(err, AuthError::Api(ApiError::Status { status: 400, .. })));
    }

    #[tokio::test]
    async fn test_anonymous_401_is_not_session_expiry() {
        let api = client(MockTransport::new().respond(401, ""));
        let form = LoginForm {
            email: "ada@test.com".to_string(),
            password: "wrong".to_string(),
        };

        let err = login(&api, &form).await.unwrap_err();

        assert_eq!(err.to_string(), "Invalid email or password");
        assert!(matches!(err, AuthError::Api(ApiError::Status { status: 401, .. })));
    }

    #[tokio::test]
    async fn test_register_with_missing_names_sends_nothing() {
        let api = client(MockTransport::new());
        let form = RegisterForm {
            first_name: "   ".to_string(),
            ..register_form()
        };

        let err = register(&api, &form).await.unwrap_err();

        assert_eq!(err, AuthError::Invalid(ValidationError::Required("First name")));
        assert_eq!(api.transport().request_count(), 0);
    }

    #[tokio::test]
    async fn test_register_success() {
        let session = get_seed_session(Role::Client, NOW + 3600);
        let response = AuthResponse {
            token: session.token.clone(),
            user: session.user.clone(),
        };
        let api = client(MockTransport::new().respond_json(201, &response));

        let registered = register(&api, &register_form()).await.unwrap();

        assert_eq!(registered.role(), Role::Client);
        let body = api.transport().body(0);
        assert_eq!(body["firstName"], "Ada");
        assert_eq!(body["lastName"], "Lovelace");
        assert!(body.get("confirmPassword").is_none());
    }

    #[test]
    fn test_register_validation() {
        let short = RegisterForm {
            password: "abc".to_string(),
            confirm_password: "abc".to_string(),
            ..register_form()
        };
        assert_eq!(short.validate(), Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LENGTH)));

        let mismatch = RegisterForm {
            confirm_password: "engine43".to_string(),
            ..register_form()
        };
        assert_eq!(mismatch.validate(), Err(ValidationError::PasswordMismatch));

        let bad_email = RegisterForm {
            email: "ada.test.com".to_string(),
            ..register_form()
        };
        assert_eq!(bad_email.validate(), Err(ValidationError::InvalidEmail));

        let long_name = RegisterForm {
            last_name: "x".repeat(51),
            ..register_form()
        };
        assert!(matches!(
            long_name.validate(),
            Err(ValidationError::TooLong { field: "Last name", .. })
        ));

        assert!(register_form().validate().is_ok());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("user@example.com"));
        assert!(validate_email(" user.name+tag@mail.example.org "));
        assert!(!validate_email(""));
        assert!(!validate_email("user@"));
        assert!(!validate_email("@example.com"));
        assert!(!validate_email("user@example"));
        assert!(!validate_email("user@@example.com"));
        assert!(!validate_email("us er@example.com"));
        assert!(!validate_email("user@.example.com"));
    }
}
