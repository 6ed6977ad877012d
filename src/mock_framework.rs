//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! [`create_mock_client`] returns a client wired to a receiver the test owns.
//! Helpers such as [`expect_create`] pull the next request off that receiver
//! so the test can assert on it and answer in place of the actor.

use tokio::sync::{mpsc, oneshot};

use crate::actor_framework::{Entity, ResourceClient, ResourceRequest, Response};

/// Creates a mock client and a receiver for asserting requests.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreateParams, Response<T, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Update, Response<T, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update { id, update, respond_to }) => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<()>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::UserClient;
    use crate::domain::{Role, User, UserInput};
    use crate::user_actor::UserError;

    fn input() -> UserInput {
        UserInput::new("Test", "test@example.com", "Abcdef1!", "111.444.777-35", Role::Customer)
    }

    #[tokio::test]
    async fn test_mock_client_create() {
        let (inner, mut receiver) = create_mock_client::<User>(10);
        let client = UserClient::new(inner);

        let create_task = tokio::spawn(async move { client.create_user(input()).await });

        let (params, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(params.email, "test@example.com");
        responder.send(Err(UserError::EmailInUse)).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Err(UserError::EmailInUse));
    }

    #[tokio::test]
    async fn test_mock_client_update_and_delete() {
        let (inner, mut receiver) = create_mock_client::<User>(10);
        let client = UserClient::new(inner);

        let task = tokio::spawn(async move {
            let updated = client.update_user("user_9".into(), input()).await;
            let deleted = client.delete_user("user_9".into()).await;
            (updated, deleted)
        });

        let (id, update, responder) = expect_update(&mut receiver).await.expect("Expected Update request");
        assert_eq!(id, "user_9");
        assert_eq!(update.name, "Test");
        responder.send(Err(UserError::NotFound(id))).unwrap();

        let (id, responder) = expect_delete(&mut receiver).await.expect("Expected Delete request");
        assert_eq!(id, "user_9");
        responder.send(()).unwrap();

        let (updated, deleted) = task.await.unwrap();
        assert_eq!(updated, Err(UserError::NotFound("user_9".into())));
        assert_eq!(deleted, Ok(()));
    }

    #[tokio::test]
    async fn test_dropped_responder_is_communication_error() {
        let (inner, mut receiver) = create_mock_client::<User>(10);
        let client = UserClient::new(inner);

        let task = tokio::spawn(async move { client.get_user("user_1".into()).await });

        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, "user_1");
        drop(responder);

        let result = task.await.unwrap();
        assert!(matches!(result, Err(UserError::ActorCommunicationError(_))));
    }
}
