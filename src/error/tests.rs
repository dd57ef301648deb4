//! Unit tests for error handling

use super::*;

#[cfg(test)]
mod fpl_error_tests {
    use super::*;

    #[tokio::test]
    async fn test_transport_error_conversion() {
        // nothing listens on the discard port
        let result = reqwest::Client::new().get("http://127.0.0.1:9/").send().await;
        let fpl_error = FplError::from(result.unwrap_err());

        assert!(matches!(fpl_error, FplError::Transport(_)));
        assert_eq!(fpl_error.kind(), ErrorKind::Transport);
    }

    #[test]
    fn test_decode_error_carries_path() {
        let json_error = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let fpl_error = FplError::decode("bootstrap-static/", json_error);

        assert_eq!(fpl_error.kind(), ErrorKind::Decode);
        assert!(fpl_error.to_string().contains("bootstrap-static/"));
    }

    #[test]
    fn test_validation_errors() {
        let error = FplError::GameweekOutOfRange { gameweek: 39 };
        assert_eq!(error.kind(), ErrorKind::Validation);
        assert_eq!(
            error.to_string(),
            "Gameweek number should be between 1 and 38, got 39"
        );

        let error = FplError::MissingId { what: "player id" };
        assert_eq!(error.kind(), ErrorKind::Validation);
        assert!(error.to_string().contains("player id"));
    }

    #[test]
    fn test_invalid_header_error_conversion() {
        let header_error = reqwest::header::HeaderValue::from_str("invalid\nheader").unwrap_err();
        let fpl_error = FplError::from(header_error);

        assert!(matches!(fpl_error, FplError::InvalidHeader(_)));
        assert_eq!(fpl_error.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_auth_error_conversion() {
        let fpl_error = FplError::from(AuthError::MissingSessionCookie {
            name: "pl_profile".to_string(),
        });

        assert_eq!(fpl_error.kind(), ErrorKind::Authentication);
        assert!(fpl_error.to_string().contains("pl_profile"));
    }

    #[test]
    fn test_auth_error_messages() {
        assert_eq!(
            AuthError::Rejected { status: 403 }.to_string(),
            "login was rejected with status 403"
        );
        assert_eq!(
            AuthError::FormFieldTimeout {
                selector: "#loginUsername".to_string()
            }
            .to_string(),
            "form field `#loginUsername` did not appear in time"
        );
        assert_eq!(AuthError::EmptyProxyPool.to_string(), "proxy list is empty");
        assert_eq!(
            AuthError::InvalidLoginUrl {
                url: "not a url".to_string(),
                message: "relative URL without a base".to_string(),
            }
            .to_string(),
            "invalid login URL `not a url`: relative URL without a base"
        );
    }

    #[test]
    fn test_error_debug_format() {
        let error = FplError::InvalidUrl("not a url".to_string());
        let debug_string = format!("{:?}", error);
        assert!(debug_string.contains("InvalidUrl"));
    }
}
