use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};
use base64::{engine::general_purpose, Engine as _};
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default)]
pub struct ConsoleAuthConfig {
    pub enabled: bool,
    pub issuer: String,
    pub audience: Vec<String>,
    pub required_scope: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub iss: String,
    #[serde(default)]
    pub aud: Vec<String>,
    pub exp: i64,
    pub iat: i64,
    #[serde(default)]
    pub scope: String,
}

impl TokenClaims {
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    pub fn has_scope(&self, required_scope: &str) -> bool {
        self.scope.split_whitespace().any(|s| s == required_scope)
    }
}

#[derive(Debug, Clone)]
pub struct ValidatedToken {
    pub claims: TokenClaims,
    pub raw_token: String,
}

pub async fn bearer_validation_middleware(
    config: axum::extract::State<ConsoleAuthConfig>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let auth_header = req
        .headers()
        .get("authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(StatusCode::UNAUTHORIZED)?;

    if !auth_header.starts_with("Bearer ") {
        return Err(StatusCode::UNAUTHORIZED);
    }

    let token = &auth_header[7..];

    let validated_token = validate_token(token, &config)?;

    req.extensions_mut().insert(validated_token);

    Ok(next.run(req).await)
}

fn validate_token(token: &str, config: &ConsoleAuthConfig) -> Result<ValidatedToken, StatusCode> {
    let parts: Vec<&str> = token.split('.').collect();

    if parts.len() != 3 {
        return Err(StatusCode::UNAUTHORIZED);
    }

    let payload = parts[1];

    let decoded = general_purpose::URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| StatusCode::UNAUTHORIZED)?;

    let claims: TokenClaims =
        serde_json::from_slice(&decoded).map_err(|_| StatusCode::UNAUTHORIZED)?;

    if claims.is_expired() {
        return Err(StatusCode::UNAUTHORIZED);
    }

    if !config.issuer.is_empty() && claims.iss != config.issuer {
        tracing::warn!(
            "Token issuer mismatch: expected {}, got {}",
            config.issuer,
            claims.iss
        );
        return Err(StatusCode::FORBIDDEN);
    }

    if !config.audience.is_empty() {
        let has_valid_audience = claims.aud.iter().any(|aud| config.audience.contains(aud));
        if !has_valid_audience {
            tracing::warn!(
                "Token audience mismatch: expected one of {:?}, got {:?}",
                config.audience,
                claims.aud
            );
            return Err(StatusCode::FORBIDDEN);
        }
    }

    if let Some(ref required_scope) = config.required_scope {
        if !claims.has_scope(required_scope) {
            tracing::warn!("Token missing required scope: {}", required_scope);
            return Err(StatusCode::FORBIDDEN);
        }
    }

    Ok(ValidatedToken {
        claims,
        raw_token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_claims(claims: &TokenClaims) -> String {
        let payload = general_purpose::URL_SAFE_NO_PAD
            .encode(serde_json::to_vec(claims).unwrap());
        format!("header.{}.signature", payload)
    }

    fn live_claims() -> TokenClaims {
        let now = Utc::now().timestamp();
        TokenClaims {
            sub: "admin".to_string(),
            iss: "console".to_string(),
            aud: vec!["core-console".to_string()],
            exp: now + 3600,
            iat: now,
            scope: "console:admin".to_string(),
        }
    }

    #[test]
    fn test_well_formed_token_is_accepted() {
        let config = ConsoleAuthConfig {
            enabled: true,
            issuer: "console".to_string(),
            audience: vec!["core-console".to_string()],
            required_scope: Some("console:admin".to_string()),
        };

        let token = token_with_claims(&live_claims());
        let validated = validate_token(&token, &config).unwrap();
        assert_eq!(validated.claims.sub, "admin");
    }

    #[test]
    fn test_malformed_token_is_rejected() {
        let config = ConsoleAuthConfig::default();
        assert_eq!(
            validate_token("not-a-token", &config).unwrap_err(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            validate_token("a.%%%.c", &config).unwrap_err(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let mut claims = live_claims();
        claims.exp = Utc::now().timestamp() - 10;

        let token = token_with_claims(&claims);
        assert_eq!(
            validate_token(&token, &ConsoleAuthConfig::default()).unwrap_err(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_issuer_mismatch_is_forbidden() {
        let config = ConsoleAuthConfig {
            enabled: true,
            issuer: "other".to_string(),
            audience: Vec::new(),
            required_scope: None,
        };

        let token = token_with_claims(&live_claims());
        assert_eq!(
            validate_token(&token, &config).unwrap_err(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn test_missing_scope_is_forbidden() {
        let config = ConsoleAuthConfig {
            enabled: true,
            issuer: String::new(),
            audience: Vec::new(),
            required_scope: Some("console:write".to_string()),
        };

        let token = token_with_claims(&live_claims());
        assert_eq!(
            validate_token(&token, &config).unwrap_err(),
            StatusCode::FORBIDDEN
        );
    }
}
