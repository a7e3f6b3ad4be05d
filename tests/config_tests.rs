mod common;

#[cfg(test)]
pub mod config_tests {
    use super::common::*;

    use tourbook::common::*;

    #[test]
    fn test_api_config_trims_base_url() {
        let config = ApiConfig::new(" http://api.test/api/ ");

        assert_eq!(config.base_url(), TEST_API);
        assert_eq!(config.url("/tours"), "http://api.test/api/tours");
        assert_eq!(config.url("tours/3"), "http://api.test/api/tours/3");
    }

    #[test]
    fn test_api_config_empty_falls_back_to_default() {
        assert_eq!(ApiConfig::new("  ").base_url(), DEFAULT_API_URL);
    }

    #[test]
    fn test_api_origin() {
        assert_eq!(ApiConfig::new(DEFAULT_API_URL).origin(), "http://localhost:8080");
        assert_eq!(ApiConfig::new("https://api.example.com").origin(), "https://api.example.com");
        assert_eq!(ApiConfig::new("https://example.com/v2/api").origin(), "https://example.com");
    }

    #[test]
    fn test_csp_admits_api_origin() {
        let csp = content_security_policy(&ApiConfig::new("https://api.example.com/api"));

        assert!(csp.contains("connect-src 'self' https://api.example.com "));
        assert!(csp.contains("frame-ancestors 'none'"));
        assert!(csp.starts_with("default-src 'self';"));
    }
}
