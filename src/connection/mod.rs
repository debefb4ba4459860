//! Connection configuration for warehouse connections.
//!
//! This module provides parameter merging, authentication configuration,
//! pool sizing, and validation functionality.
//!
//! # Example
//!
//! ```
//! use snowconn_rs::connection::{ConnectionConfig, Authenticator};
//! use std::collections::HashMap;
//!
//! # fn example() -> Result<(), snowconn_rs::ConfigError> {
//! // Using the builder
//! let config = ConnectionConfig::builder()
//!     .account("acme")
//!     .user("bob")
//!     .authenticator(Authenticator::KeyPair)
//!     .private_key_path("/etc/keys/rsa_key.p8")
//!     .build()?;
//!
//! // Or parse from parameter maps
//! let mut params = HashMap::new();
//! params.insert("account".to_string(), "acme".to_string());
//! params.insert("user".to_string(), "bob".to_string());
//! params.insert("password".to_string(), "secret".to_string());
//! let config = ConnectionConfig::parse(Some(&params), None)?;
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod auth;
pub mod params;
pub mod pool;
pub mod validate;

pub use auth::{AuthenticationConfig, Authenticator};
pub use params::{merge_params, ConnectionConfig, ConnectionConfigBuilder};
pub use pool::{parse_duration, ConnectionPoolConfig, OverflowPolicy};
pub use validate::{validate, ValidationResult};
