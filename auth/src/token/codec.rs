use base64::engine::general_purpose;
use base64::Engine as _;
use chrono::Duration;
use chrono::Utc;
use hmac::Hmac;
use hmac::Mac;
use serde::Deserialize;
use serde::Serialize;
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::claims::Claims;
use super::errors::TokenError;

type HmacSha256 = Hmac<Sha256>;

/// Signing algorithm identifier carried in the token header.
const ALGORITHM: &str = "HS256";

/// Token codec for issuing and validating signed bearer tokens.
///
/// Wire format: three base64url segments joined by `.`: a JSON header
/// naming the algorithm, a JSON claims payload, and an HMAC-SHA256 tag over
/// the first two segments. The key is symmetric: the process that issues a
/// token is the process that verifies it.
///
/// # Security Notes
/// - The secret should be at least 256 bits (32 bytes)
/// - Store secrets in environment variables or secure vaults, never in code
/// - Rotate secrets periodically
pub struct TokenCodec {
    secret: Vec<u8>,
    ttl: Duration,
}

#[derive(Debug, Serialize, Deserialize)]
struct Header {
    alg: String,
    typ: String,
}

impl Header {
    fn hs256() -> Self {
        Self {
            alg: ALGORITHM.to_string(),
            typ: "JWT".to_string(),
        }
    }
}

impl TokenCodec {
    /// Create a new token codec.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    /// * `ttl` - Lifetime of issued tokens
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            secret: secret.to_vec(),
            ttl,
        }
    }

    /// Issue a token for a subject with the configured lifetime.
    ///
    /// # Arguments
    /// * `subject` - Principal identifier to embed as the `sub` claim
    ///
    /// # Returns
    /// Signed token string
    ///
    /// # Errors
    /// * `EncodingFailed` - Claims serialization failed
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        self.encode(&Claims::for_subject(subject, self.ttl))
    }

    /// Encode a claim set into a signed token.
    ///
    /// # Arguments
    /// * `claims` - Claims to encode
    ///
    /// # Returns
    /// Signed token string
    ///
    /// # Errors
    /// * `EncodingFailed` - Serialization failed
    pub fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = serde_json::to_vec(&Header::hs256())
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))?;
        let payload =
            serde_json::to_vec(claims).map_err(|e| TokenError::EncodingFailed(e.to_string()))?;

        let header_b64 = general_purpose::URL_SAFE_NO_PAD.encode(header);
        let payload_b64 = general_purpose::URL_SAFE_NO_PAD.encode(payload);
        let signature_b64 =
            general_purpose::URL_SAFE_NO_PAD.encode(self.sign(&header_b64, &payload_b64));

        Ok(format!("{header_b64}.{payload_b64}.{signature_b64}"))
    }

    /// Decode and validate a token.
    ///
    /// The signature is recomputed over the header and payload segments
    /// exactly as received and checked before any payload field is read, so
    /// a forged payload cannot influence the outcome, not even through its
    /// own expiry. Expiry is checked last, against the current time, with no
    /// skew tolerance.
    ///
    /// # Arguments
    /// * `token` - Token string to decode
    ///
    /// # Returns
    /// Decoded claims
    ///
    /// # Errors
    /// * `Malformed` - Wrong segment count, bad base64url, or unparseable claims
    /// * `InvalidSignature` - Signature does not match
    /// * `Expired` - Token expiry is in the past
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let mut segments = token.splitn(4, '.');
        let (header_b64, payload_b64, signature_b64) = match (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) {
            (Some(h), Some(p), Some(s), None) => (h, p, s),
            _ => return Err(TokenError::Malformed("expected three dot-separated segments")),
        };

        let header_bytes = general_purpose::URL_SAFE_NO_PAD
            .decode(header_b64)
            .map_err(|_| TokenError::Malformed("header segment is not base64url"))?;
        let payload_bytes = general_purpose::URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|_| TokenError::Malformed("payload segment is not base64url"))?;
        let signature = general_purpose::URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| TokenError::Malformed("signature segment is not base64url"))?;

        let expected = self.sign(header_b64, payload_b64);
        if !bool::from(expected.ct_eq(signature.as_slice())) {
            return Err(TokenError::InvalidSignature);
        }

        let header: Header = serde_json::from_slice(&header_bytes)
            .map_err(|_| TokenError::Malformed("header is not valid JSON"))?;
        if header.alg != ALGORITHM {
            return Err(TokenError::Malformed("unsupported signing algorithm"));
        }

        let claims: Claims = serde_json::from_slice(&payload_bytes)
            .map_err(|_| TokenError::Malformed("payload is missing required claims"))?;

        if claims.is_expired(Utc::now().timestamp()) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    /// MAC over the two encoded segments joined by the separator.
    fn sign(&self, header_b64: &str, payload_b64: &str) -> Vec<u8> {
        // HMAC accepts keys of any length, so new_from_slice cannot fail
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC accepts keys of any length");
        mac.update(header_b64.as_bytes());
        mac.update(b".");
        mac.update(payload_b64.as_bytes());
        mac.finalize().into_bytes().to_vec()
    }
}
