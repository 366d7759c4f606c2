//! Account request types.
//!
//! There is no password handling: the storefront identifies customers by
//! phone number only.

use serde::Deserialize;

/// Registration form.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Three-part full name.
    pub full_name: String,
    pub phone_number: String,
}

/// Login form.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub phone_number: String,
}
