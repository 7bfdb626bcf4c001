use std::env;

use crate::middleware::ConsoleAuthConfig;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub mongodb_uri: String,
    pub mongodb_name: String,
    pub auth: ConsoleAuthConfig,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()?;

        let mongodb_uri = env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

        let mongodb_name = env::var("MONGODB_NAME")
            .unwrap_or_else(|_| "console".to_string());

        let auth_enabled = env::var("CONSOLE_AUTH_ENABLED")
            .unwrap_or_else(|_| "false".to_string())
            .parse()
            .unwrap_or(false);

        let auth_issuer = env::var("CONSOLE_AUTH_ISSUER")
            .unwrap_or_else(|_| "".to_string());

        let auth_audience = env::var("CONSOLE_AUTH_AUDIENCE")
            .unwrap_or_else(|_| "".to_string())
            .split(',')
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect();

        let auth_required_scope = env::var("CONSOLE_AUTH_SCOPE").ok();

        let auth = ConsoleAuthConfig {
            enabled: auth_enabled,
            issuer: auth_issuer,
            audience: auth_audience,
            required_scope: auth_required_scope,
        };

        Ok(Self {
            port,
            mongodb_uri,
            mongodb_name,
            auth,
        })
    }
}
