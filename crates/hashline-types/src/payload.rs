use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// A validated record payload.
///
/// The only precondition the ledger enforces: a payload must not be
/// empty. Everything else — content, length, encoding beyond UTF-8 —
/// is accepted as given.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(String);

impl Payload {
    /// Create a payload, rejecting the empty string.
    pub fn new(text: impl Into<String>) -> Result<Self, TypeError> {
        let text = text.into();
        if text.is_empty() {
            return Err(TypeError::EmptyPayload);
        }
        Ok(Self(text))
    }

    /// The payload text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Payload({:?})", self.0)
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Payload {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Payload {
    type Error = TypeError;

    fn try_from(text: &str) -> Result<Self, TypeError> {
        Self::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_payload_is_accepted() {
        let payload = Payload::new("5645").unwrap();
        assert_eq!(payload.as_str(), "5645");
    }

    #[test]
    fn empty_payload_is_rejected() {
        let err = Payload::new("").unwrap_err();
        assert_eq!(err, TypeError::EmptyPayload);
    }

    #[test]
    fn whitespace_is_not_empty() {
        // Only the truly empty string is invalid.
        assert!(Payload::new(" ").is_ok());
    }

    #[test]
    fn try_from_str() {
        assert!(Payload::try_from("data").is_ok());
        assert!(Payload::try_from("").is_err());
    }

    #[test]
    fn serde_is_transparent() {
        let payload = Payload::new("abc").unwrap();
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, "\"abc\"");
        let parsed: Payload = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, payload);
    }

    #[test]
    fn display_is_bare_text() {
        let payload = Payload::new("hello").unwrap();
        assert_eq!(format!("{payload}"), "hello");
    }
}
