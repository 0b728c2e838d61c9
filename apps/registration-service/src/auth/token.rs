use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

const TOKEN_TTL_HOURS: i64 = 12;

/// Opaque bearer token good enough to carry an admin identity between
/// `/auth/login` and the `auth_guard` middleware, without pulling in a JWT
/// crate — issuing real JWTs is explicitly out of scope (spec.md §1).
///
/// Shape: `hex(subject:role:expiry_unix)` `.` `hex(hmac_sha256(secret, payload))`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminClaims {
    pub subject: String,
    pub role: String,
}

fn sign(secret: &str, payload: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(payload.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

pub fn issue(secret: &str, subject: &str, role: &str) -> String {
    let expiry = (Utc::now() + Duration::hours(TOKEN_TTL_HOURS)).timestamp();
    let payload = format!("{subject}:{role}:{expiry}");
    let payload_hex = hex::encode(payload.as_bytes());
    let signature = sign(secret, &payload_hex);
    format!("{payload_hex}.{signature}")
}

/// Verifies the signature and expiry, returning the claims on success.
pub fn verify(secret: &str, token: &str) -> Option<AdminClaims> {
    let (payload_hex, signature) = token.split_once('.')?;
    let expected = sign(secret, payload_hex);
    if expected.as_bytes() != signature.as_bytes() {
        return None;
    }

    let payload_bytes = hex::decode(payload_hex).ok()?;
    let payload = String::from_utf8(payload_bytes).ok()?;
    let mut parts = payload.splitn(3, ':');
    let subject = parts.next()?.to_string();
    let role = parts.next()?.to_string();
    let expiry: i64 = parts.next()?.parse().ok()?;

    if Utc::now().timestamp() > expiry {
        return None;
    }

    Some(AdminClaims { subject, role })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_valid_token() {
        let token = issue("secret", "admin@example.com", "admin");
        let claims = verify("secret", &token).expect("valid token");
        assert_eq!(claims.subject, "admin@example.com");
        assert_eq!(claims.role, "admin");
    }

    #[test]
    fn rejects_tampered_signature() {
        let token = issue("secret", "admin@example.com", "admin");
        let mut tampered = token.clone();
        tampered.push('f');
        assert!(verify("secret", &tampered).is_none());
    }

    #[test]
    fn rejects_wrong_secret() {
        let token = issue("secret", "admin@example.com", "admin");
        assert!(verify("other-secret", &token).is_none());
    }
}
