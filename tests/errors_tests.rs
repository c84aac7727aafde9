use resumelink::errors::{ResumelinkError, Result};

#[cfg(test)]
mod error_creation_tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let error = ResumelinkError::config("invalid SERVER_PORT");

        assert!(matches!(error, ResumelinkError::Config(_)));
        assert!(error.to_string().contains("Configuration Error"));
        assert!(error.to_string().contains("invalid SERVER_PORT"));
    }

    #[test]
    fn test_file_operation_error() {
        let error = ResumelinkError::file_operation("write failed");

        assert!(matches!(error, ResumelinkError::FileOperation(_)));
        assert!(error.to_string().contains("File Operation Error"));
        assert!(error.to_string().contains("write failed"));
    }

    #[test]
    fn test_validation_error() {
        let error = ResumelinkError::validation("field rejected");

        assert!(matches!(error, ResumelinkError::Validation(_)));
        assert!(error.to_string().contains("Validation Error"));
    }

    #[test]
    fn test_not_found_error() {
        let error = ResumelinkError::not_found("unknown id");

        assert!(matches!(error, ResumelinkError::NotFound(_)));
        assert!(error.to_string().contains("Resource Not Found"));
    }

    #[test]
    fn test_mail_errors() {
        let address = ResumelinkError::mail_address("bad mailbox");
        let transport = ResumelinkError::mail_transport("connection refused");

        assert_eq!(address.error_type(), "Mail Address Error");
        assert_eq!(transport.error_type(), "Mail Transport Error");
        assert_eq!(transport.message(), "connection refused");
    }
}

#[cfg(test)]
mod error_code_tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(ResumelinkError::config("x").code(), "E001");
        assert_eq!(ResumelinkError::file_operation("x").code(), "E002");
        assert_eq!(ResumelinkError::serialization("x").code(), "E003");
        assert_eq!(ResumelinkError::validation("x").code(), "E004");
        assert_eq!(ResumelinkError::not_found("x").code(), "E005");
        assert_eq!(ResumelinkError::date_parse("x").code(), "E006");
        assert_eq!(ResumelinkError::mail_address("x").code(), "E007");
        assert_eq!(ResumelinkError::mail_transport("x").code(), "E008");
    }
}

#[cfg(test)]
mod error_conversion_tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: ResumelinkError = io_error.into();

        assert!(matches!(error, ResumelinkError::FileOperation(_)));
        assert!(error.message().contains("denied"));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{ truncated").unwrap_err();
        let error: ResumelinkError = json_error.into();

        assert!(matches!(error, ResumelinkError::Serialization(_)));
    }

    #[test]
    fn test_chrono_error_conversion() {
        let parse_error = chrono::DateTime::parse_from_rfc3339("yesterday").unwrap_err();
        let error: ResumelinkError = parse_error.into();

        assert!(matches!(error, ResumelinkError::DateParse(_)));
    }

    #[test]
    fn test_address_error_conversion() {
        let address_error = "definitely not an address".parse::<lettre::Address>().unwrap_err();
        let error: ResumelinkError = address_error.into();

        assert!(matches!(error, ResumelinkError::MailAddress(_)));
    }

    #[test]
    fn test_result_alias() {
        fn may_fail(fail: bool) -> Result<u32> {
            if fail {
                Err(ResumelinkError::validation("nope"))
            } else {
                Ok(7)
            }
        }

        assert_eq!(may_fail(false).unwrap(), 7);
        assert!(may_fail(true).is_err());
    }
}
