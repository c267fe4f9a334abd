use alloc::string::String;
use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    MalformedPluralRule(String),
    InvalidInput(&'static str),
}

pub type CoreResult<T> = Result<T, CoreError>;

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::MalformedPluralRule(message) => {
                write!(f, "malformed plural rule: {message}")
            }
            CoreError::InvalidInput(message) => write!(f, "invalid input: {message}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoreError {}

#[cfg(test)]
mod tests {
    use super::CoreError;
    use alloc::string::ToString;

    #[test]
    fn display_formats_malformed_plural_rule() {
        let err = CoreError::MalformedPluralRule("unexpected token at offset 3".to_string());
        assert_eq!(
            err.to_string(),
            "malformed plural rule: unexpected token at offset 3"
        );
    }

    #[test]
    fn display_formats_invalid_input() {
        let err = CoreError::InvalidInput("language is empty");
        assert_eq!(err.to_string(), "invalid input: language is empty");
    }
}
