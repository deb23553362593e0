use std::fmt::{Debug, Display};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks and Outcomes)
// =============================================================================

/// Trait that any domain entity must implement to be managed by ResourceActor
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Clone + Send + Sync + Display + Debug;
    type Patch: Send + Sync + Debug;
    type Error: From<FrameworkError> + Send + Debug + 'static;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// The ID of the entity a patch is aimed at
    fn patch_target(patch: &Self::Patch) -> &Self::Id;

    /// Reject a patch before anything in the store is touched.
    fn validate_patch(patch: &Self::Patch) -> Result<(), Self::Error>;

    // --- Lifecycle Hooks ---

    /// Apply an already validated patch. Must not fail halfway.
    fn on_update(&mut self, patch: Self::Patch);
    fn on_clear(_items: &[Self]) {}
}

/// Result of a single update: the store never invents entities.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome<T: Entity> {
    Updated(T),
    NotFound(T::Id),
}

impl<T: Entity> UpdateOutcome<T> {
    pub fn is_updated(&self) -> bool {
        matches!(self, UpdateOutcome::Updated(_))
    }
}

/// Failures of the channel plumbing between a client and its actor.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
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
    List {
        respond_to: Response<Vec<T>, T::Error>,
    },
    Update {
        patch: T::Patch,
        respond_to: Response<UpdateOutcome<T>, T::Error>,
    },
    UpdateMany {
        patches: Vec<T::Patch>,
        respond_to: Response<Vec<UpdateOutcome<T>>, T::Error>,
    },
    Clear {
        respond_to: Response<(), T::Error>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// Sole owner of an ordered collection of entities.
///
/// Requests are handled one at a time, so the collection has exactly one
/// writer no matter how many clients are cloned.
pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(buffer_size: usize, seed: Vec<T>) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: seed,
        };
        let client = ResourceClient { sender };
        (actor, client)
    }

    #[instrument(name = "resource_actor", skip(self))]
    pub async fn run(mut self) {
        info!(items = self.store.len(), "ResourceActor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.clone()));
                }
                ResourceRequest::Update { patch, respond_to } => {
                    let _ = respond_to.send(self.apply(patch));
                }
                ResourceRequest::UpdateMany { patches, respond_to } => {
                    let _ = respond_to.send(self.apply_all(patches));
                }
                ResourceRequest::Clear { respond_to } => {
                    T::on_clear(&self.store);
                    self.store.clear();
                    debug!("Store cleared");
                    let _ = respond_to.send(Ok(()));
                }
            }
        }
        info!("ResourceActor stopped");
    }

    fn apply(&mut self, patch: T::Patch) -> Result<UpdateOutcome<T>, T::Error> {
        T::validate_patch(&patch)?;

        let target = T::patch_target(&patch).clone();
        match self.store.iter_mut().find(|item| *item.id() == target) {
            Some(item) => {
                item.on_update(patch);
                debug!(id = %target, "Item updated");
                Ok(UpdateOutcome::Updated(item.clone()))
            }
            None => {
                warn!(id = %target, "Item not found, update ignored");
                Ok(UpdateOutcome::NotFound(target))
            }
        }
    }

    // Stops at the first rejected patch; earlier patches stay applied.
    fn apply_all(&mut self, patches: Vec<T::Patch>) -> Result<Vec<UpdateOutcome<T>>, T::Error> {
        let mut outcomes = Vec::with_capacity(patches.len());
        for patch in patches {
            outcomes.push(self.apply(patch)?);
        }
        Ok(outcomes)
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

    pub async fn list(&self) -> Result<Vec<T>, T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.send(ResourceRequest::List { respond_to }).await?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn update(&self, patch: T::Patch) -> Result<UpdateOutcome<T>, T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.send(ResourceRequest::Update { patch, respond_to }).await?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn update_many(&self, patches: Vec<T::Patch>) -> Result<Vec<UpdateOutcome<T>>, T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.send(ResourceRequest::UpdateMany { patches, respond_to }).await?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn clear(&self) -> Result<(), T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.send(ResourceRequest::Clear { respond_to }).await?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    async fn send(&self, request: ResourceRequest<T>) -> Result<(), FrameworkError> {
        self.sender
            .send(request)
            .await
            .map_err(|_| FrameworkError::ActorClosed)
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Counter {
        id: String,
        value: u32,
    }

    #[derive(Debug)]
    struct CounterPatch {
        id: String,
        value: u32,
    }

    #[derive(Debug, PartialEq)]
    enum CounterError {
        TooLarge(u32),
        Framework(FrameworkError),
    }

    impl From<FrameworkError> for CounterError {
        fn from(e: FrameworkError) -> Self {
            CounterError::Framework(e)
        }
    }

    impl Entity for Counter {
        type Id = String;
        type Patch = CounterPatch;
        type Error = CounterError;

        fn id(&self) -> &String {
            &self.id
        }

        fn patch_target(patch: &CounterPatch) -> &String {
            &patch.id
        }

        fn validate_patch(patch: &CounterPatch) -> Result<(), CounterError> {
            if patch.value > 10 {
                return Err(CounterError::TooLarge(patch.value));
            }
            Ok(())
        }

        fn on_update(&mut self, patch: CounterPatch) {
            self.value = patch.value;
        }
    }

    fn counter(id: &str, value: u32) -> Counter {
        Counter { id: id.into(), value }
    }

    fn patch(id: &str, value: u32) -> CounterPatch {
        CounterPatch { id: id.into(), value }
    }

    // --- Tests ---

    #[tokio::test]
    async fn test_resource_actor_keeps_seed_order() {
        let (actor, client) = ResourceActor::new(10, vec![counter("b", 1), counter("a", 2)]);
        tokio::spawn(actor.run());

        let items = client.list().await.unwrap();
        let ids: Vec<&str> = items.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_reported_not_applied() {
        let (actor, client) = ResourceActor::new(10, vec![counter("a", 1)]);
        tokio::spawn(actor.run());

        let outcome = client.update(patch("zzz", 3)).await.unwrap();
        assert_eq!(outcome, UpdateOutcome::NotFound("zzz".to_string()));
        assert_eq!(client.list().await.unwrap(), vec![counter("a", 1)]);
    }

    #[tokio::test]
    async fn test_update_many_stops_at_first_rejection() {
        let (actor, client) = ResourceActor::new(10, vec![counter("a", 1), counter("b", 1), counter("c", 1)]);
        tokio::spawn(actor.run());

        let result = client
            .update_many(vec![patch("a", 5), patch("b", 50), patch("c", 7)])
            .await;
        assert_eq!(result, Err(CounterError::TooLarge(50)));

        let items = client.list().await.unwrap();
        assert_eq!(items, vec![counter("a", 5), counter("b", 1), counter("c", 1)]);
    }

    #[tokio::test]
    async fn test_client_reports_closed_actor() {
        let (actor, client) = ResourceActor::<Counter>::new(1, Vec::new());
        drop(actor);

        let result = client.clear().await;
        assert_eq!(result, Err(CounterError::Framework(FrameworkError::ActorClosed)));
    }
}
