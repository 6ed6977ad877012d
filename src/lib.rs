//! # User Registry
//!
//! A user-registration store that admits a record only when it passes a fixed
//! chain of format, strength and uniqueness rules.
//!
//! ## Layout
//!
//! - **Domain types** - [`User`], [`UserInput`], [`Role`]
//! - **Registration rules** - [`user_actor::validation`] and the tax id
//!   checksum in [`user_actor::tax_id`]
//! - **Store actor** - [`actor_framework::ResourceActor`] owns the records and
//!   handles one request at a time
//! - **Client** - [`UserClient`] is the cloneable handle callers use
//! - **System** - [`RegistrySystem`] starts the actor and shuts it down
//!
//! ## Example Usage
//!
//! ```no_run
//! use user_registry::{RegistrySystem, Role, UserInput};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let system = RegistrySystem::new();
//!
//! let input = UserInput::new("Ana", "a@b.com", "Abcdef1!", "111.444.777-35", Role::Customer);
//! let user = system.user_client.create_user(input).await?;
//! assert_eq!(user.employee_code, "1");
//!
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod clients;
pub mod domain;
pub mod user_actor;

#[cfg(test)]
mod mock_framework;

pub use app_system::{setup_tracing, RegistryConfig, RegistrySystem, SystemError};
pub use clients::UserClient;
pub use domain::{Role, User, UserInput};
pub use user_actor::{TaxIdError, UserError};
