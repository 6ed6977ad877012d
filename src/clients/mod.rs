//! Typed handles over the generic resource clients.

#[macro_use]
mod macros;

pub mod user_client;

pub use user_client::UserClient;
