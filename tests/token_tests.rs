mod common;

#[cfg(test)]
pub mod token_tests {
    use super::common::*;

    use tourbook::common::SessionError;
    use tourbook::services::token::{decode_claims, is_expired};

    #[test]
    fn test_decode_claims_reads_payload() {
        let claims = decode_claims(&make_token(NOW + 60)).unwrap();

        assert_eq!(claims.expires_at(), Some(NOW + 60));
        assert_eq!(claims.role.as_deref(), Some("CLIENT"));
    }

    #[test]
    fn test_decode_claims_tolerates_padding() {
        let token = make_token(NOW);
        let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
        parts[1].push_str("==");

        let claims = decode_claims(&parts.join(".")).unwrap();
        assert_eq!(claims.expires_at(), Some(NOW));
    }

    #[test]
    fn test_decode_claims_fails_without_payload() {
        assert!(matches!(
            decode_claims("just-one-segment"),
            Err(SessionError::MalformedToken(_))
        ));
    }

    #[test]
    fn test_decode_claims_fails_on_bad_base64() {
        assert!(decode_claims("aaa.!!!.bbb").is_err());
    }

    #[test]
    fn test_decode_claims_fails_on_non_json_payload() {
        let token = format!("x.{}.y", "bm90IGpzb24"); // "not json"
        assert!(decode_claims(&token).is_err());
    }

    #[test]
    fn test_is_expired_past_exp() {
        assert!(is_expired(&make_token(NOW - 1), NOW));
    }

    #[test]
    fn test_is_expired_at_exact_exp() {
        assert!(is_expired(&make_token(NOW), NOW));
    }

    #[test]
    fn test_is_expired_future_exp() {
        assert!(!is_expired(&make_token(NOW + 3600), NOW));
    }

    #[test]
    fn test_is_expired_fractional_exp() {
        let token = make_token_with(&format!(r#"{{"exp":{}.75}}"#, NOW + 1));
        assert!(!is_expired(&token, NOW));
        assert!(is_expired(&token, NOW + 1));
    }

    #[test]
    fn test_is_expired_without_exp_never_expires() {
        let token = make_token_with(r#"{"sub":"ada@test.com"}"#);
        assert!(!is_expired(&token, i64::MAX));
    }

    #[test]
    fn test_is_expired_unreadable_token() {
        assert!(is_expired("garbage", NOW));
    }
}
