use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classification tag stored with every user. Carries no permissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Manager,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Manager => "manager",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Role::Customer),
            "manager" => Ok(Role::Manager),
            "admin" => Ok(Role::Admin),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

/// Represents a registered user in the store.
///
/// `id` and `employee_code` are assigned by the registry on creation and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub employee_code: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub tax_id: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub super_password: Option<String>,
}

/// Caller-supplied fields for both creating and updating a user.
///
/// On update every field replaces the stored value, except `super_password`,
/// which is only replaced by a non-empty value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub tax_id: String,
    pub role: Role,
    #[serde(default)]
    pub super_password: Option<String>,
}

impl UserInput {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        tax_id: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            tax_id: tax_id.into(),
            role,
            super_password: None,
        }
    }

    pub fn with_super_password(mut self, super_password: impl Into<String>) -> Self {
        self.super_password = Some(super_password.into());
        self
    }

    /// The super password, treating an empty string as absent.
    pub fn provided_super_password(&self) -> Option<&str> {
        self.super_password.as_deref().filter(|s| !s.is_empty())
    }
}
