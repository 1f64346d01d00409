use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

/// UUID 格式校验（8-4-4-4-12 十六进制，不区分大小写）
pub fn validate_uuid(value: &str) -> Result<(), ValidationError> {
    lazy_static! {
        static ref UUID_RE: Regex =
            Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$").unwrap();
    }

    if UUID_RE.is_match(value) { Ok(()) } else { Err(ValidationError::new("uuid")) }
}

/// 非空白字符串
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() { Err(ValidationError::new("blank")) } else { Ok(()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_shape() {
        assert!(validate_uuid("0b5c1c3e-2f57-4f57-9d0e-6b1f4a6c9a01").is_ok());
        assert!(validate_uuid("0B5C1C3E-2F57-4F57-9D0E-6B1F4A6C9A01").is_ok());
        assert!(validate_uuid("0b5c1c3e2f574f579d0e6b1f4a6c9a01").is_err());
        assert!(validate_uuid("games").is_err());
        assert!(validate_uuid("").is_err());
    }

    #[test]
    fn blank_strings_rejected() {
        assert!(validate_not_blank("games").is_ok());
        assert!(validate_not_blank("   ").is_err());
    }
}
