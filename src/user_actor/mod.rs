//! User-specific domain logic: registration rules and the entity hooks that
//! apply them inside the store actor.

pub mod entity;
pub mod error;
pub mod tax_id;
pub mod validation;

pub use error::*;
pub use tax_id::TaxIdError;
