use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Secret string, such as an access token or a client secret.
///
/// The memory is cleared on drop and the value never shows in `Debug` output.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecureString(String);

impl SecureString {
    /// Wraps a secret.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the secret.
    ///
    /// The returned reference should not be kept longer than needed.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Checks if the secret is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecureString([REDACTED])")
    }
}

impl From<String> for SecureString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SecureString {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_redact_debug_output() {
        let secret = SecureString::from("eyJ0eXAiOiJKV1QiLCJub25jZSI6");

        let debug = format!("{secret:?}");

        assert_eq!(debug, "SecureString([REDACTED])");
        assert_eq!(secret.as_str(), "eyJ0eXAiOiJKV1QiLCJub25jZSI6");
    }

    #[test]
    fn should_clear_on_zeroize() {
        let mut secret = SecureString::new("client-secret");

        secret.zeroize();

        assert!(secret.is_empty());
    }
}
