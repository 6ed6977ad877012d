//! Registration rules for user records.
//!
//! The rules run in a fixed order and stop at the first failure, so a caller
//! always sees the earliest violated rule.

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::UserError;
use super::tax_id;
use crate::actor_framework::Store;
use crate::domain::{User, UserInput};

pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_SYMBOLS: &str = "@$!%*?&";

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

fn is_password_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || PASSWORD_SYMBOLS.contains(c)
}

/// At least eight characters from `[A-Za-z0-9@$!%*?&]`, with one lowercase,
/// one uppercase, one digit and one symbol.
pub fn is_strong_password(password: &str) -> bool {
    password.len() >= PASSWORD_MIN_LEN
        && password.chars().all(is_password_char)
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
}

pub fn validate_email(email: &str) -> Result<(), UserError> {
    is_valid_email(email).then_some(()).ok_or(UserError::InvalidEmail)
}

pub fn validate_password(password: &str) -> Result<(), UserError> {
    is_strong_password(password).then_some(()).ok_or(UserError::InvalidPassword)
}

/// An absent or empty super password is accepted.
pub fn validate_super_password(super_password: Option<&str>) -> Result<(), UserError> {
    match super_password {
        Some(sp) if !sp.is_empty() && !is_strong_password(sp) => Err(UserError::InvalidSuperPassword),
        _ => Ok(()),
    }
}

pub fn validate_tax_id(value: &str) -> Result<(), UserError> {
    tax_id::check(value).map_err(UserError::InvalidTaxId)
}

/// A candidate record together with the records it must not collide with.
pub struct Candidate<'a> {
    pub input: &'a UserInput,
    pub existing: &'a Store<User>,
    /// Stored record that is allowed to share the candidate's email and tax id.
    pub owner: Option<&'a str>,
}

impl Candidate<'_> {
    /// True if any record other than the owner satisfies `pred`.
    fn clashes(&self, pred: impl Fn(&User) -> bool) -> bool {
        self.existing
            .values()
            .any(|u| Some(u.id.as_str()) != self.owner && pred(u))
    }
}

type Rule = fn(&Candidate<'_>) -> Result<(), UserError>;

fn email_format(c: &Candidate<'_>) -> Result<(), UserError> {
    validate_email(&c.input.email)
}

fn password_strength(c: &Candidate<'_>) -> Result<(), UserError> {
    validate_password(&c.input.password)
}

fn super_password_strength(c: &Candidate<'_>) -> Result<(), UserError> {
    validate_super_password(c.input.super_password.as_deref())
}

fn email_unique(c: &Candidate<'_>) -> Result<(), UserError> {
    if c.clashes(|u| u.email == c.input.email) {
        return Err(UserError::EmailInUse);
    }
    Ok(())
}

fn tax_id_unique(c: &Candidate<'_>) -> Result<(), UserError> {
    if c.clashes(|u| u.tax_id == c.input.tax_id) {
        return Err(UserError::TaxIdInUse);
    }
    Ok(())
}

fn tax_id_valid(c: &Candidate<'_>) -> Result<(), UserError> {
    validate_tax_id(&c.input.tax_id)
}

const RULES: [Rule; 6] = [
    email_format,
    password_strength,
    super_password_strength,
    email_unique,
    tax_id_unique,
    tax_id_valid,
];

/// Runs every rule in order. `owner` is the id of the record being updated,
/// or `None` on create.
pub fn validate(input: &UserInput, existing: &Store<User>, owner: Option<&str>) -> Result<(), UserError> {
    let candidate = Candidate { input, existing, owner };
    RULES.iter().try_for_each(|rule| rule(&candidate))
}
