use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{error, info};

use super::config::RegistryConfig;
use super::error::SystemError;
use crate::actor_framework::ResourceActor;
use crate::clients::UserClient;
use crate::domain::User;

/// Starts the user store actor and hands out its client.
///
/// Must be created inside a Tokio runtime.
pub struct RegistrySystem {
    pub user_client: UserClient,
    handle: JoinHandle<()>,
}

impl Default for RegistrySystem {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrySystem {
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        info!(buffer_size = config.buffer_size.get(), id_prefix = %config.id_prefix, "Starting registry system");

        // numbering is per registry; two systems both start at `<prefix>_1`
        let counter = Arc::new(AtomicU64::new(1));
        let prefix = config.id_prefix;
        let next_user_id = move || {
            let id = counter.fetch_add(1, Ordering::SeqCst);
            format!("{}_{}", prefix, id)
        };

        let (user_actor, user_resource_client) = ResourceActor::<User>::new(config.buffer_size.get(), next_user_id);
        let user_client = UserClient::new(user_resource_client);
        let handle = tokio::spawn(user_actor.run());

        Self { user_client, handle }
    }

    /// Drops this system's client and waits for the actor to drain.
    ///
    /// The actor only stops once every clone of the client is gone.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");
        drop(self.user_client);

        if let Err(e) = self.handle.await {
            error!(error = %e, "Actor task failed");
            return Err(e.into());
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
