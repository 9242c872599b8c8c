//! Account credentials.

use std::fmt;

/// StatCounter account credentials.
///
/// Set once at client construction and read-only thereafter. The password is
/// the shared secret behind the request signature; it is never transmitted,
/// only its SHA-1 digest over the query string leaves the process.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Creates credentials from a username and password.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the account username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the shared secret.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let creds = Credentials::new("testuser", "secret");
        assert_eq!(creds.username(), "testuser");
        assert_eq!(creds.password(), "secret");
    }

    #[test]
    fn test_debug_redacts_password() {
        let creds = Credentials::new("testuser", "secret");
        let debug = format!("{creds:?}");
        assert!(debug.contains("testuser"));
        assert!(!debug.contains("secret"));
    }
}
