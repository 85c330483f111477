use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use tracing::debug;

use super::errors::TokenError;

/// How tokens are read.
#[derive(Debug, Clone, Default)]
pub struct TokenConfig {
    pub jwt_secret: Option<String>,
    /// When false the payload is decoded without checking the signature or expiry.
    pub verify_signature: bool,
}

#[derive(Debug, Deserialize)]
struct Claims {
    #[serde(default)]
    email: Option<String>,
}

/// Extracts the `email` claim from a JWT.
pub struct TokenDecoder {
    key: DecodingKey,
    validation: Validation,
    verifying: bool,
}

impl TokenDecoder {
    /// # Examples
    /// ```
    /// use service::auth::{TokenConfig, TokenDecoder};
    /// let decoder = TokenDecoder::new(&TokenConfig::default()).unwrap();
    /// assert!(!decoder.is_verifying());
    /// assert!(decoder.email("not-a-jwt").is_err());
    /// ```
    pub fn new(cfg: &TokenConfig) -> Result<Self, TokenError> {
        if cfg.verify_signature {
            let secret = cfg
                .jwt_secret
                .as_deref()
                .filter(|s| !s.trim().is_empty())
                .ok_or_else(|| TokenError::Config("signature verification needs a secret".into()))?;
            let mut validation = Validation::new(Algorithm::HS256);
            validation.validate_exp = true;
            validation.validate_aud = false;
            Ok(Self { key: DecodingKey::from_secret(secret.as_bytes()), validation, verifying: true })
        } else {
            let mut validation = Validation::new(Algorithm::HS256);
            validation.insecure_disable_signature_validation();
            validation.validate_exp = false;
            validation.validate_aud = false;
            validation.required_spec_claims.clear();
            Ok(Self { key: DecodingKey::from_secret(&[]), validation, verifying: false })
        }
    }

    pub fn is_verifying(&self) -> bool { self.verifying }

    /// Read the `email` claim of `token`.
    pub fn email(&self, token: &str) -> Result<String, TokenError> {
        let data = decode::<Claims>(token, &self.key, &self.validation).map_err(|e| {
            debug!(err = %e, verifying = self.verifying, "token decode failed");
            TokenError::Invalid(e.to_string())
        })?;
        data.claims
            .email
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .ok_or(TokenError::MissingEmail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde::Serialize;

    #[derive(Serialize)]
    struct TestClaims<'a> {
        #[serde(skip_serializing_if = "Option::is_none")]
        email: Option<&'a str>,
        exp: i64,
    }

    fn token(email: Option<&str>, secret: &str, exp_offset_secs: i64) -> String {
        let exp = chrono::Utc::now().timestamp() + exp_offset_secs;
        encode(&Header::default(), &TestClaims { email, exp }, &EncodingKey::from_secret(secret.as_bytes())).unwrap()
    }

    fn verifying(secret: &str) -> TokenDecoder {
        TokenDecoder::new(&TokenConfig { jwt_secret: Some(secret.into()), verify_signature: true }).unwrap()
    }

    #[test]
    fn decode_only_ignores_signature_and_expiry() {
        let d = TokenDecoder::new(&TokenConfig::default()).unwrap();
        let t = token(Some("ana@example.org"), "whatever-secret", -3600);
        assert_eq!(d.email(&t).unwrap(), "ana@example.org");
    }

    #[test]
    fn decode_only_requires_email_claim() {
        let d = TokenDecoder::new(&TokenConfig::default()).unwrap();
        let t = token(None, "s", 60);
        assert!(matches!(d.email(&t), Err(TokenError::MissingEmail)));
    }

    #[test]
    fn garbage_is_invalid() {
        let d = TokenDecoder::new(&TokenConfig::default()).unwrap();
        assert!(matches!(d.email("a.b.c"), Err(TokenError::Invalid(_))));
    }

    #[test]
    fn verifying_accepts_matching_secret() {
        let t = token(Some("ana@example.org"), "s3cret", 600);
        assert_eq!(verifying("s3cret").email(&t).unwrap(), "ana@example.org");
    }

    #[test]
    fn verifying_rejects_foreign_signature_and_expired() {
        let foreign = token(Some("ana@example.org"), "other", 600);
        assert!(matches!(verifying("s3cret").email(&foreign), Err(TokenError::Invalid(_))));
        let expired = token(Some("ana@example.org"), "s3cret", -3600);
        assert!(matches!(verifying("s3cret").email(&expired), Err(TokenError::Invalid(_))));
    }

    #[test]
    fn verifying_needs_secret() {
        let res = TokenDecoder::new(&TokenConfig { jwt_secret: None, verify_signature: true });
        assert!(matches!(res, Err(TokenError::Config(_))));
    }
}
