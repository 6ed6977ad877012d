use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{User, UserInput};
use crate::user_actor::UserError;

/// Client for interacting with the user registry actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl_basic_client!(UserClient, User, UserError, user);

impl UserClient {
    /// Registers a new user. The returned record carries its assigned id and
    /// employee code.
    #[instrument(fields(user_email = %input.email), skip(self, input))]
    pub async fn create_user(&self, input: UserInput) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.create(input).await.map_err(UserError::from)
    }

    /// Replaces the fields of user `id`. Validation runs first, so an invalid
    /// payload is reported even when `id` is unknown.
    #[instrument(fields(user_id = %id, user_email = %input.email), skip(self, id, input))]
    pub async fn update_user(&self, id: String, input: UserInput) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.update(id, input).await.map_err(UserError::from)
    }
}
