use std::fmt::{Debug, Display};
use std::hash::Hash;

use indexmap::IndexMap;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

// =============================================================================
// 1. THE ABSTRACTION (Entity trait with store-aware hooks)
// =============================================================================

/// Insertion-ordered storage owned by a [`ResourceActor`].
pub type Store<T> = IndexMap<<T as Entity>::Id, T>;

/// Trait that any domain entity must implement to be managed by [`ResourceActor`].
///
/// Validation hooks get read-only access to the whole store so that rules
/// spanning several records (uniqueness, for instance) run inside the actor,
/// before anything is mutated.
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;
    type CreateParams: Send + Sync + Debug;
    type Update: Send + Sync + Debug;
    type Error: std::error::Error + Clone + Send + Sync + 'static;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Checks creation params against the current contents. No id is
    /// allocated when this rejects.
    fn validate_create(params: &Self::CreateParams, store: &Store<Self>) -> Result<(), Self::Error>;

    /// Construct the full entity. `sequence` counts every successful creation
    /// over the actor's lifetime, starting at 1.
    fn from_create_params(id: Self::Id, sequence: u64, params: Self::CreateParams) -> Self;

    /// Checks an update before the target is looked up, so a rejection is
    /// reported even when `id` is unknown.
    fn validate_update(id: &Self::Id, update: &Self::Update, store: &Store<Self>) -> Result<(), Self::Error>;

    /// Apply an already validated update.
    fn on_update(&mut self, update: Self::Update);

    /// Error reported when an update targets a missing id.
    fn not_found(id: &Self::Id) -> Self::Error;
}

/// Failures seen by a [`ResourceClient`] caller.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError<E> {
    #[error("{0}")]
    Entity(E),
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T, E> = oneshot::Sender<Result<T, E>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T, T::Error>,
    },
    Get {
        id: T::Id,
        respond_to: oneshot::Sender<Option<T>>,
    },
    List {
        respond_to: oneshot::Sender<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T, T::Error>,
    },
    Delete {
        id: T::Id,
        respond_to: oneshot::Sender<()>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// Sole owner of a [`Store`]. Requests are handled one at a time, which
/// serializes every mutation and gives reads a consistent snapshot.
pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Store<T>,
    created: u64,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    /// # Panics
    ///
    /// Panics if `buffer_size` is 0.
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: IndexMap::new(),
            created: 0,
            next_id_fn: Box::new(next_id_fn),
        };
        (actor, ResourceClient::new(sender))
    }

    #[instrument(name = "resource_actor", skip(self))]
    pub async fn run(mut self) {
        info!("ResourceActor starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    let _ = respond_to.send(self.handle_create(params));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let _ = respond_to.send(self.handle_get(&id));
                }
                ResourceRequest::List { respond_to } => {
                    let _ = respond_to.send(self.handle_list());
                }
                ResourceRequest::Update { id, update, respond_to } => {
                    let _ = respond_to.send(self.handle_update(id, update));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    self.handle_delete(&id);
                    let _ = respond_to.send(());
                }
            }
        }

        info!(records = self.store.len(), "ResourceActor stopped");
    }

    #[instrument(skip(self, params))]
    fn handle_create(&mut self, params: T::CreateParams) -> Result<T, T::Error> {
        debug!("Processing create request");

        if let Err(e) = T::validate_create(&params, &self.store) {
            warn!(error = %e, "Create rejected");
            return Err(e);
        }

        let id = (self.next_id_fn)();
        self.created += 1;
        let item = T::from_create_params(id, self.created, params);
        let id = item.id().clone();
        self.store.insert(id.clone(), item.clone());

        info!(id = %id, sequence = self.created, "Resource created");
        Ok(item)
    }

    #[instrument(fields(id = %id), skip(self, id))]
    fn handle_get(&self, id: &T::Id) -> Option<T> {
        let item = self.store.get(id).cloned();
        debug!(found = item.is_some(), "Processed get request");
        item
    }

    #[instrument(skip(self))]
    fn handle_list(&self) -> Vec<T> {
        let items: Vec<T> = self.store.values().cloned().collect();
        debug!(count = items.len(), "Listed resources");
        items
    }

    #[instrument(fields(id = %id), skip(self, id, update))]
    fn handle_update(&mut self, id: T::Id, update: T::Update) -> Result<T, T::Error> {
        debug!("Processing update request");

        if let Err(e) = T::validate_update(&id, &update, &self.store) {
            warn!(error = %e, "Update rejected");
            return Err(e);
        }

        match self.store.get_mut(&id) {
            Some(item) => {
                item.on_update(update);
                info!("Resource updated");
                Ok(item.clone())
            }
            None => {
                warn!("Resource not found for update");
                Err(T::not_found(&id))
            }
        }
    }

    #[instrument(fields(id = %id), skip(self, id))]
    fn handle_delete(&mut self, id: &T::Id) {
        // shift_remove keeps the remaining records in insertion order
        match self.store.shift_remove(id) {
            Some(_) => info!("Resource deleted"),
            None => debug!("Nothing to delete"),
        }
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError<T::Error>> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T, FrameworkError<T::Error>> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to })
            .await?
            .map_err(FrameworkError::Entity)
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError<T::Error>> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError<T::Error>> {
        self.request(|respond_to| ResourceRequest::List { respond_to }).await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError<T::Error>> {
        self.request(|respond_to| ResourceRequest::Update { id, update, respond_to })
            .await?
            .map_err(FrameworkError::Entity)
    }

    /// Removing an unknown id is not an error.
    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError<T::Error>> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to }).await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
