//! Authentication configuration for warehouse connections.
//!
//! This module resolves the `authenticator` parameter into a closed set of
//! authentication variants and extracts the credential fields each variant
//! needs. Secrets are never displayed in debug or display output.

use crate::connection::params::first_present;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The mechanism used to prove identity to the warehouse service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Authenticator {
    /// Username and password login (the default)
    UsernamePassword,

    /// RSA key-pair / JWT authentication
    KeyPair,

    /// OAuth access token
    OAuth,

    /// Single sign-on through an identity provider
    Sso,

    /// Browser-based SSO launched on the client machine
    ExternalBrowser,
}

impl Authenticator {
    /// Resolve an authenticator alias (case-insensitive) to its variant.
    ///
    /// | alias | variant |
    /// |---|---|
    /// | `default`, `snowflake` | [`Authenticator::UsernamePassword`] |
    /// | `key_pair`, `jwt`, `snowflake_jwt` | [`Authenticator::KeyPair`] |
    /// | `oauth` | [`Authenticator::OAuth`] |
    /// | `sso` | [`Authenticator::Sso`] |
    /// | `externalbrowser` | [`Authenticator::ExternalBrowser`] |
    pub fn from_alias(alias: &str) -> Result<Self, ConfigError> {
        match alias.trim().to_ascii_lowercase().as_str() {
            "default" | "snowflake" => Ok(Authenticator::UsernamePassword),
            "key_pair" | "jwt" | "snowflake_jwt" => Ok(Authenticator::KeyPair),
            "oauth" => Ok(Authenticator::OAuth),
            "sso" => Ok(Authenticator::Sso),
            "externalbrowser" => Ok(Authenticator::ExternalBrowser),
            _ => Err(ConfigError::UnsupportedAuthenticator(alias.to_string())),
        }
    }
}

impl Default for Authenticator {
    fn default() -> Self {
        Authenticator::UsernamePassword
    }
}

impl fmt::Display for Authenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Authenticator::UsernamePassword => write!(f, "username/password"),
            Authenticator::KeyPair => write!(f, "key pair"),
            Authenticator::OAuth => write!(f, "oauth"),
            Authenticator::Sso => write!(f, "sso"),
            Authenticator::ExternalBrowser => write!(f, "external browser"),
        }
    }
}

/// Credentials and identity-provider settings for a connection.
///
/// Which field is actually required depends on the resolved
/// [`Authenticator`]; that rule is enforced by the validator after the
/// whole configuration is built, not here.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthenticationConfig {
    /// Resolved authentication mechanism
    pub authenticator: Authenticator,

    /// Login password (stored securely, never logged)
    pub password: Option<String>,

    /// Path to the RSA private key file
    pub private_key_path: Option<String>,

    /// Passphrase for an encrypted private key
    pub private_key_passphrase: Option<String>,

    /// OAuth access token
    pub oauth_token: Option<String>,

    /// OAuth refresh token
    pub oauth_refresh_token: Option<String>,

    /// Identity-provider properties collected from `sso_*` parameters,
    /// keyed by the suffix after the stripped prefix
    pub sso_properties: HashMap<String, String>,
}

impl AuthenticationConfig {
    /// Extract authentication settings from a merged parameter map.
    ///
    /// The map is expected to carry lowercase keys, as produced by
    /// [`merge_params`](crate::connection::merge_params). Credential keys
    /// use first-match-wins fallbacks: `token` before `oauth_token`,
    /// `private_key_file` before `private_key_path`, `private_key_pwd`
    /// before `private_key_passphrase`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedAuthenticator`] when the
    /// `authenticator` value matches no recognized alias.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let authenticator = match first_present(params, &["authenticator"]) {
            Some(alias) => Authenticator::from_alias(alias)?,
            None => Authenticator::default(),
        };

        let mut sso_properties = HashMap::new();
        for (key, value) in params {
            if let Some(suffix) = key.to_ascii_lowercase().strip_prefix("sso_") {
                sso_properties.insert(suffix.to_string(), value.clone());
            }
        }

        Ok(Self {
            authenticator,
            password: first_present(params, &["password"]).map(str::to_string),
            private_key_path: first_present(params, &["private_key_file", "private_key_path"])
                .map(str::to_string),
            private_key_passphrase: first_present(
                params,
                &["private_key_pwd", "private_key_passphrase"],
            )
            .map(str::to_string),
            oauth_token: first_present(params, &["token", "oauth_token"]).map(str::to_string),
            oauth_refresh_token: first_present(params, &["oauth_refresh_token"])
                .map(str::to_string),
            sso_properties,
        })
    }

    /// The parameter name the resolved authenticator requires, paired with
    /// whether a non-blank value for it is present. `None` for variants
    /// that need no additional field.
    pub(crate) fn required_field(&self) -> Option<(&'static str, bool)> {
        let (field, value) = match self.authenticator {
            Authenticator::UsernamePassword => ("password", &self.password),
            Authenticator::KeyPair => ("private_key_path", &self.private_key_path),
            Authenticator::OAuth => ("oauth_token", &self.oauth_token),
            Authenticator::Sso | Authenticator::ExternalBrowser => return None,
        };
        let present = value
            .as_deref()
            .is_some_and(|value| !value.trim().is_empty());
        Some((field, present))
    }
}

impl Default for AuthenticationConfig {
    fn default() -> Self {
        Self {
            authenticator: Authenticator::default(),
            password: None,
            private_key_path: None,
            private_key_passphrase: None,
            oauth_token: None,
            oauth_refresh_token: None,
            sso_properties: HashMap::new(),
        }
    }
}

// Prevent secrets from being displayed in debug output
impl fmt::Debug for AuthenticationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthenticationConfig")
            .field("authenticator", &self.authenticator)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("private_key_path", &self.private_key_path)
            .field(
                "private_key_passphrase",
                &self.private_key_passphrase.as_ref().map(|_| "<redacted>"),
            )
            .field(
                "oauth_token",
                &self.oauth_token.as_ref().map(|_| "<redacted>"),
            )
            .field(
                "oauth_refresh_token",
                &self.oauth_refresh_token.as_ref().map(|_| "<redacted>"),
            )
            .field("sso_properties", &self.sso_properties)
            .finish()
    }
}

impl fmt::Display for AuthenticationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthenticationConfig({})", self.authenticator)
    }
}
