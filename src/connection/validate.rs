//! Post-build validation of connection configuration.
//!
//! All rules are evaluated on every pass; the validator accumulates
//! violations rather than stopping at the first so the caller sees every
//! problem in one round trip.

use crate::connection::params::ConnectionConfig;
use serde::Serialize;

/// A single validation violation: a human-readable message plus the
/// configuration field names it concerns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Human-readable description of the violation
    pub message: String,

    /// Names of the fields the violation concerns
    pub fields: Vec<String>,
}

impl ValidationResult {
    fn new(message: impl Into<String>, fields: &[&str]) -> Self {
        Self {
            message: message.into(),
            fields: fields.iter().map(|field| field.to_string()).collect(),
        }
    }
}

/// Validate a built configuration, returning every violation found.
///
/// Rule order is fixed: account, user, the authentication field required by
/// the resolved authenticator, then the pool size ranges. An empty result
/// means the configuration is fully valid.
pub fn validate(config: &ConnectionConfig) -> Vec<ValidationResult> {
    let mut violations = Vec::new();

    if config.account.trim().is_empty() {
        violations.push(ValidationResult::new("account must not be empty", &["account"]));
    }

    if config.user.trim().is_empty() {
        violations.push(ValidationResult::new("user must not be empty", &["user"]));
    }

    if let Some((field, present)) = config.authentication.required_field() {
        if !present {
            violations.push(ValidationResult::new(
                format!(
                    "{} is required for {} authentication",
                    field, config.authentication.authenticator
                ),
                &[field],
            ));
        }
    }

    if !(1..=1000).contains(&config.pool.max_pool_size) {
        violations.push(ValidationResult::new(
            format!(
                "max_pool_size must be between 1 and 1000, got {}",
                config.pool.max_pool_size
            ),
            &["max_pool_size"],
        ));
    }

    if config.pool.min_pool_size > 100 {
        violations.push(ValidationResult::new(
            format!(
                "min_pool_size must be between 0 and 100, got {}",
                config.pool.min_pool_size
            ),
            &["min_pool_size"],
        ));
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::auth::{AuthenticationConfig, Authenticator};
    use crate::connection::pool::ConnectionPoolConfig;

    fn valid_config() -> ConnectionConfig {
        ConnectionConfig {
            account: "acme".to_string(),
            user: "bob".to_string(),
            database: None,
            schema: None,
            warehouse: None,
            role: None,
            authentication: AuthenticationConfig {
                password: Some("secret".to_string()),
                ..Default::default()
            },
            pool: ConnectionPoolConfig::default(),
            query_timeout: std::time::Duration::from_secs(300),
            enable_compression: true,
        }
    }

    #[test]
    fn test_valid_config_has_no_violations() {
        assert!(validate(&valid_config()).is_empty());
    }

    #[test]
    fn test_blank_account_and_user() {
        let mut config = valid_config();
        config.account = "  ".to_string();
        config.user = String::new();

        let violations = validate(&config);
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].fields, vec!["account"]);
        assert_eq!(violations[1].fields, vec!["user"]);
    }

    #[test]
    fn test_missing_password_named() {
        let mut config = valid_config();
        config.authentication.password = None;

        let violations = validate(&config);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].fields, vec!["password"]);
        assert!(violations[0].message.contains("username/password"));
    }

    #[test]
    fn test_missing_oauth_token_named() {
        let mut config = valid_config();
        config.authentication.authenticator = Authenticator::OAuth;

        let violations = validate(&config);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].fields, vec!["oauth_token"]);
    }

    #[test]
    fn test_sso_requires_no_credential() {
        let mut config = valid_config();
        config.authentication.authenticator = Authenticator::Sso;
        config.authentication.password = None;

        assert!(validate(&config).is_empty());
    }

    #[test]
    fn test_pool_ranges() {
        let mut config = valid_config();
        config.pool.max_pool_size = 0;
        config.pool.min_pool_size = 101;

        let violations = validate(&config);
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].fields, vec!["max_pool_size"]);
        assert_eq!(violations[1].fields, vec!["min_pool_size"]);

        config.pool.max_pool_size = 1001;
        let violations = validate(&config);
        assert_eq!(violations[0].fields, vec!["max_pool_size"]);

        config.pool.max_pool_size = 1000;
        config.pool.min_pool_size = 100;
        assert!(validate(&config).is_empty());
    }

    #[test]
    fn test_all_rules_evaluated() {
        let config = ConnectionConfig {
            account: String::new(),
            user: String::new(),
            authentication: AuthenticationConfig {
                authenticator: Authenticator::OAuth,
                ..Default::default()
            },
            pool: ConnectionPoolConfig {
                max_pool_size: 0,
                min_pool_size: 200,
                ..Default::default()
            },
            ..valid_config()
        };

        let violations = validate(&config);
        assert_eq!(violations.len(), 5);
    }
}
