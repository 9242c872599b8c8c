//! Signed URL construction.
//!
//! Every request carries the protocol version, a Unix timestamp, the
//! username, the endpoint parameters, and a SHA-1 digest binding the whole
//! query string to the shared secret.

use sha1::{Digest, Sha1};
use statcounter_types::Credentials;

use crate::query::QueryParams;

/// Base URL of the StatCounter API service.
pub const BASE_URL: &str = "https://api.statcounter.com";

/// Protocol version sent as the `vn` parameter.
pub const API_VERSION: &str = "3";

/// Builds the fully qualified, signed URL for an endpoint.
///
/// The unsigned query string is composed in a fixed order - `vn`, `t`
/// (Unix timestamp), `u` (username), the endpoint parameters in their
/// assembled order, then `f=xml` - and the signature is the SHA-1 hex digest
/// of that string with the password appended. The leading `?` is part of the
/// signed bytes. The password itself never appears in the URL.
///
/// `timestamp` is passed in rather than read from the clock, so output is
/// reproducible byte-for-byte.
///
/// # Example
///
/// ```
/// use statcounter_client::query::QueryParams;
/// use statcounter_client::url::{BASE_URL, signed_url};
/// use statcounter_types::Credentials;
///
/// let creds = Credentials::new("testuser", "secret");
/// let url = signed_url(BASE_URL, "user_projects", &creds, &QueryParams::new(), 1_600_000_000);
/// assert!(url.starts_with(
///     "https://api.statcounter.com/user_projects/?vn=3&t=1600000000&u=testuser&f=xml&sha1="
/// ));
/// ```
#[must_use]
pub fn signed_url(
    base_url: &str,
    endpoint: &str,
    credentials: &Credentials,
    params: &QueryParams,
    timestamp: i64,
) -> String {
    let mut query = format!(
        "?vn={API_VERSION}&t={timestamp}&u={}",
        credentials.username()
    );
    query.push_str(&params.serialized());
    query.push_str("&f=xml");

    let mut hasher = Sha1::new();
    hasher.update(query.as_bytes());
    hasher.update(credentials.password().as_bytes());
    let digest = hex::encode(hasher.finalize());

    format!("{base_url}/{endpoint}/{query}&sha1={digest}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> Credentials {
        Credentials::new("testuser", "secret")
    }

    #[test]
    fn test_signed_url_fixed_timestamp() {
        let url = signed_url(BASE_URL, "user_projects", &creds(), &QueryParams::new(), 1_600_000_000);
        assert_eq!(
            url,
            "https://api.statcounter.com/user_projects/?vn=3&t=1600000000&u=testuser&f=xml\
             &sha1=f0f8ae8e64b1b04d30a16cc062d36dfb6d0ac81a"
        );
    }

    #[test]
    fn test_signed_url_with_params() {
        let mut params = QueryParams::new();
        params.push("s", "entry");
        params.push("pi", "123");
        params.push("n", "20");
        params.push("o", "0");
        let url = signed_url(BASE_URL, "stats", &creds(), &params, 1_600_000_000);
        assert_eq!(
            url,
            "https://api.statcounter.com/stats/?vn=3&t=1600000000&u=testuser\
             &s=entry&pi=123&n=20&o=0&f=xml&sha1=ac8045b7fac97b2f4466e245687193b91434d219"
        );
    }

    #[test]
    fn test_signed_url_deterministic() {
        let params = QueryParams::new();
        let first = signed_url(BASE_URL, "user_projects", &creds(), &params, 1_600_000_000);
        let second = signed_url(BASE_URL, "user_projects", &creds(), &params, 1_600_000_000);
        assert_eq!(first, second);
    }

    #[test]
    fn test_password_changes_signature() {
        let other = Credentials::new("testuser", "hunter2");
        let url = signed_url(BASE_URL, "user_projects", &other, &QueryParams::new(), 1_600_000_000);
        assert!(url.ends_with("&sha1=367a20f6fb8073c35b051b8d67b86a30fab6ae93"));
    }

    #[test]
    fn test_timestamp_changes_signature() {
        let params = QueryParams::new();
        let first = signed_url(BASE_URL, "user_projects", &creds(), &params, 1_600_000_000);
        let second = signed_url(BASE_URL, "user_projects", &creds(), &params, 1_600_000_001);
        assert_ne!(first, second);
    }

    #[test]
    fn test_custom_base_url() {
        let url = signed_url("http://localhost:8080", "stats", &creds(), &QueryParams::new(), 0);
        assert!(url.starts_with("http://localhost:8080/stats/?vn=3&t=0&u=testuser"));
    }
}
