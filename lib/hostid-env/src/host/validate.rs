use std::sync::OnceLock;

use regex::Regex;

use super::HOST_ID_PREFIX;

fn host_id_regex() -> &'static Regex {
    static HOST_ID_REGEX: OnceLock<Regex> = OnceLock::new();
    HOST_ID_REGEX.get_or_init(|| Regex::new(r"^HOST-[0-9a-fA-F]+$").unwrap())
}

/// Validates a host identifier candidate, describing why it was rejected.
///
/// The candidate must be `HOST-` followed by one or more hexadecimal digits (either case), with nothing before or after.
/// Surrounding whitespace is not tolerated.
///
/// # Errors
///
/// If the candidate is not a valid host identifier, the reason is returned.
pub fn validate_host_id(candidate: &str) -> Result<(), String> {
    if host_id_regex().is_match(candidate) {
        return Ok(());
    }

    if candidate.is_empty() {
        return Err("host identifier is empty".to_string());
    }

    match candidate.strip_prefix(HOST_ID_PREFIX) {
        None => Err(format!("'{}' does not start with '{}'", candidate, HOST_ID_PREFIX)),
        Some("") => Err(format!("'{}' has no hexadecimal digits after the prefix", candidate)),
        Some(_) => Err(format!("'{}' contains non-hexadecimal characters", candidate)),
    }
}

/// Returns `true` if the candidate is a syntactically valid host identifier.
pub fn is_valid_host_id(candidate: &str) -> bool {
    host_id_regex().is_match(candidate)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn accepts_valid_identifiers() {
        assert!(is_valid_host_id("HOST-AAF98EFF909EE3F6"));
        assert!(is_valid_host_id("HOST-aaf98eff909ee3f6"));
        assert!(is_valid_host_id("HOST-0"));
        assert!(validate_host_id("HOST-2EF98EFF909EE3F6").is_ok());
    }

    #[test]
    fn rejects_invalid_identifiers() {
        assert!(!is_valid_host_id(""));
        assert!(!is_valid_host_id("HOST-"));
        assert!(!is_valid_host_id("HOST-ZZF98EFF909EE3F6"));
        assert!(!is_valid_host_id("host-AAF98EFF909EE3F6"));
        assert!(!is_valid_host_id("AAF98EFF909EE3F6"));
        assert!(!is_valid_host_id(" HOST-AAF98EFF909EE3F6"));
        assert!(!is_valid_host_id("HOST-AAF98EFF909EE3F6\n"));
        assert!(!is_valid_host_id("xHOST-AAF98EFF909EE3F6"));
        assert!(!is_valid_host_id("HOST-AAF98EFF 909EE3F6"));
    }

    #[test]
    fn rejection_reasons() {
        assert_eq!(validate_host_id("").unwrap_err(), "host identifier is empty");
        assert!(validate_host_id("AAF98EFF").unwrap_err().contains("does not start with"));
        assert!(validate_host_id("HOST-").unwrap_err().contains("no hexadecimal digits"));
        assert!(validate_host_id("HOST-ZZ").unwrap_err().contains("non-hexadecimal"));
    }

    proptest! {
        #[test]
        fn property_test_hex_tokens_are_valid(token in "[0-9a-fA-F]{1,32}") {
            let candidate = format!("HOST-{}", token);
            prop_assert!(is_valid_host_id(&candidate));
            prop_assert!(validate_host_id(&candidate).is_ok());
        }

        #[test]
        fn property_test_non_hex_character_is_invalid(
            prefix in "[0-9a-fA-F]{0,8}",
            bad in "[g-zG-Z_\\-. ]",
            suffix in "[0-9a-fA-F]{0,8}",
        ) {
            let candidate = format!("HOST-{}{}{}", prefix, bad, suffix);
            prop_assert!(!is_valid_host_id(&candidate));
            prop_assert!(validate_host_id(&candidate).is_err());
        }
    }
}
