//! Request session

use super::types::AuthConfig;
use reqwest::RequestBuilder;
use std::fmt;

/// Credentials applied to every request a client sends.
///
/// Build one per logged-in user and pass it to the client builder.
#[derive(Clone, Default)]
pub struct Session {
    auth: AuthConfig,
}

impl Session {
    /// Session without credentials
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Session from auth configuration
    pub fn new(auth: AuthConfig) -> Self {
        Self { auth }
    }

    /// Session carrying a bearer token
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::new(AuthConfig::bearer(token))
    }

    /// Check if requests will carry credentials
    pub fn is_authenticated(&self) -> bool {
        match &self.auth {
            AuthConfig::None => false,
            AuthConfig::Bearer { token } => !token.is_empty(),
            AuthConfig::ApiKey { value, .. } => !value.is_empty(),
        }
    }

    /// Auth configuration backing this session
    pub fn auth(&self) -> &AuthConfig {
        &self.auth
    }

    /// Header name and value this session adds, if any
    pub fn header(&self) -> Option<(String, String)> {
        if !self.is_authenticated() {
            return None;
        }
        match &self.auth {
            AuthConfig::None => None,
            AuthConfig::Bearer { token } => {
                Some(("Authorization".to_string(), format!("Bearer {token}")))
            }
            AuthConfig::ApiKey { header, value } => Some((header.clone(), value.clone())),
        }
    }

    /// Apply credentials to a request
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        match self.header() {
            Some((name, value)) => req.header(name, value),
            None => req,
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.auth {
            AuthConfig::None => "none",
            AuthConfig::Bearer { .. } => "bearer",
            AuthConfig::ApiKey { .. } => "api_key",
        };
        f.debug_struct("Session")
            .field("auth", &kind)
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
