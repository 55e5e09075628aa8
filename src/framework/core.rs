//! # Core Actor Framework
//!
//! This module defines the generic building blocks for the component actors.
//!
//! ## Key Types
//!
//! - [`ActorEntity`]: The trait that every component type must implement.
//! - [`ResourceActor`]: The generic actor that owns the instances of one component kind.
//! - [`ResourceClient`]: The generic client for communicating with actors.
//! - [`FrameworkError`]: Mailbox-level errors (e.g., ActorClosed, NotFound).

use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use async_trait::async_trait;

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks, DTOs, and Actions)
// =============================================================================

/// Trait that any component entity must implement to be managed by ResourceActor.
///
/// # Architecture Note
/// By defining a contract (`ActorEntity`) that all our component types (Registry,
/// FungibleUnit, RewardPool, GovernanceUnit, Bundle) must satisfy, we can write the
/// `ResourceActor` logic *once* and reuse it everywhere.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks (e.g., probing
/// other actors). It also defines a `Context` type, which is injected into every hook. This
/// allows "Late Binding" of dependencies (passing clients to `run()` instead of `new()`).
///
/// # Atomic creation
/// The actor inserts a new entity into its store only after `from_create_params`,
/// `on_create` and `check_conflict` have all succeeded. A failed create leaves no residue.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type CreateParams: Send + Sync + Debug;

    /// Enum representing component-specific operations (e.g., `Transfer`).
    /// Use [`std::convert::Infallible`] for components without operations.
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The per-actor error type. Mailbox failures are folded into it through
    /// `From<FrameworkError>`, so callers only ever match on one enum.
    type Error: std::error::Error + From<FrameworkError> + Send + Sync + 'static;

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed and before it is committed.
    /// Use this hook to perform validation that needs other actors.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called once per already-committed entity before a new one is committed.
    /// Returning an error rejects the new entity.
    fn check_conflict(&self, _existing: &Self) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom component-specific action.
    ///
    /// Implementations must validate before mutating: an action that returns an error
    /// must leave the entity unchanged.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the actor framework itself.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Item already exists: {0}")]
    AlreadyExists(String),
    #[error("Create request carried no id and the actor has no id generator")]
    MissingId,
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T, E> = oneshot::Sender<Result<T, E>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants cover the component lifecycle this system needs: creation (with an id
/// chosen by the caller or by the actor), reads, enumeration, and component-specific
/// actions. There is no update or delete: components change only
/// through their own actions, and nothing destroys them.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        id: Option<T::Id>,
        params: T::CreateParams,
        respond_to: Response<T::Id, T::Error>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>, T::Error>,
    },
    List {
        respond_to: Response<Vec<T>, T::Error>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult, T::Error>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

type IdGenerator<Id> = Box<dyn Fn() -> Id + Send + Sync>;

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// Each `ResourceActor` processes its own messages *sequentially* in a loop, including
/// the awaited `on_create` hook. Two creates can therefore never interleave, which is
/// what lets the factory assign bundle ids without a lock.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id_fn: Option<IdGenerator<T::Id>>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates an actor whose ids are always supplied by the caller
    /// (see [`ResourceClient::create_with_id`]).
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        Self::build(buffer_size, None)
    }

    /// Creates an actor that assigns ids itself when the caller does not supply one.
    pub fn with_id_generator(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        Self::build(buffer_size, Some(Box::new(next_id_fn)))
    }

    fn build(
        buffer_size: usize,
        next_id_fn: Option<IdGenerator<T::Id>>,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id_fn,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. This allows entities
    /// to access external dependencies (like other clients) that were created *after*
    /// the actor was instantiated but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "FungibleUnit" instead of the full path)
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create {
                    id,
                    params,
                    respond_to,
                } => {
                    debug!(entity_type, ?id, ?params, "Create");
                    let result = self.create(entity_type, id, params, &context).await;
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item.handle_action(action, &context).await;
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let not_found = FrameworkError::NotFound(id.to_string());
                        let _ = respond_to.send(Err(not_found.into()));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(
        &mut self,
        entity_type: &str,
        id: Option<T::Id>,
        params: T::CreateParams,
        context: &T::Context,
    ) -> Result<T::Id, T::Error> {
        let id = match id.or_else(|| self.next_id_fn.as_ref().map(|next| next())) {
            Some(id) => id,
            None => {
                warn!(entity_type, "Create without id");
                return Err(FrameworkError::MissingId.into());
            }
        };
        if self.store.contains_key(&id) {
            warn!(entity_type, %id, "Already exists");
            return Err(FrameworkError::AlreadyExists(id.to_string()).into());
        }

        let mut item = T::from_create_params(id.clone(), params).map_err(|e| {
            warn!(entity_type, %id, error = %e, "Create failed");
            e
        })?;
        if let Err(e) = item.on_create(context).await {
            warn!(entity_type, %id, error = %e, "on_create failed");
            return Err(e);
        }
        for existing in self.store.values() {
            if let Err(e) = item.check_conflict(existing) {
                warn!(entity_type, %id, error = %e, "Conflict");
                return Err(e);
            }
        }

        self.store.insert(id.clone(), item);
        info!(entity_type, %id, size = self.store.len(), "Created");
        Ok(id)
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a `ResourceActor`.
///
/// Holds only a sender, so it is cheap to clone and share across tasks.
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    /// Creates an entity under an id chosen by the actor's generator.
    pub async fn create(&self, params: T::CreateParams) -> Result<T::Id, T::Error> {
        self.call(|respond_to| ResourceRequest::Create {
            id: None,
            params,
            respond_to,
        })
        .await
    }

    /// Creates an entity under an id chosen by the caller.
    pub async fn create_with_id(
        &self,
        id: T::Id,
        params: T::CreateParams,
    ) -> Result<T::Id, T::Error> {
        self.call(|respond_to| ResourceRequest::Create {
            id: Some(id),
            params,
            respond_to,
        })
        .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, T::Error> {
        self.call(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    pub async fn list(&self) -> Result<Vec<T>, T::Error> {
        self.call(|respond_to| ResourceRequest::List { respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, T::Error> {
        self.call(|respond_to| ResourceRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }

    async fn call<R>(
        &self,
        request: impl FnOnce(Response<R, T::Error>) -> ResourceRequest<T>,
    ) -> Result<R, T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(request(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Ticket {
        id: String,
        holder: String,
        punches: u32,
    }

    #[derive(Debug)]
    struct TicketCreate {
        holder: String,
    }

    #[derive(Debug)]
    enum TicketAction {
        Punch,
        PunchTwice,
    }

    #[derive(Debug, thiserror::Error, PartialEq)]
    enum TicketError {
        #[error("holder must not be empty")]
        EmptyHolder,
        #[error("holder {0} already has a ticket")]
        Duplicate(String),
        #[error("ticket is full")]
        Full,
        #[error(transparent)]
        Framework(#[from] FrameworkError),
    }

    #[async_trait]
    impl ActorEntity for Ticket {
        type Id = String;
        type CreateParams = TicketCreate;
        type Action = TicketAction;
        type ActionResult = u32;
        type Context = ();
        type Error = TicketError;

        fn from_create_params(id: String, params: TicketCreate) -> Result<Self, TicketError> {
            if params.holder.is_empty() {
                return Err(TicketError::EmptyHolder);
            }
            Ok(Self {
                id,
                holder: params.holder,
                punches: 0,
            })
        }

        fn check_conflict(&self, existing: &Self) -> Result<(), TicketError> {
            if existing.holder == self.holder {
                return Err(TicketError::Duplicate(self.holder.clone()));
            }
            Ok(())
        }

        async fn handle_action(
            &mut self,
            action: TicketAction,
            _ctx: &(),
        ) -> Result<u32, TicketError> {
            let wanted = match action {
                TicketAction::Punch => 1,
                TicketAction::PunchTwice => 2,
            };
            if self.punches + wanted > 2 {
                return Err(TicketError::Full);
            }
            self.punches += wanted;
            Ok(self.punches)
        }
    }

    fn spawn_tickets() -> ResourceClient<Ticket> {
        let counter = Arc::new(AtomicU64::new(1));
        let next_id = move || format!("ticket_{}", counter.fetch_add(1, Ordering::SeqCst));
        let (actor, client) = ResourceActor::with_id_generator(10, next_id);
        tokio::spawn(actor.run(()));
        client
    }

    // --- Tests ---

    #[tokio::test]
    async fn test_resource_actor_with_actions() {
        let client = spawn_tickets();

        let id = client
            .create(TicketCreate { holder: "alice".into() })
            .await
            .unwrap();
        assert_eq!(id, "ticket_1");

        assert_eq!(client.perform_action(id.clone(), TicketAction::Punch).await, Ok(1));
        assert_eq!(
            client.perform_action(id.clone(), TicketAction::PunchTwice).await,
            Err(TicketError::Full)
        );

        let ticket = client.get(id.clone()).await.unwrap().unwrap();
        assert_eq!(ticket.punches, 1);
    }

    #[tokio::test]
    async fn test_failed_create_leaves_no_residue() {
        let client = spawn_tickets();

        let err = client
            .create(TicketCreate { holder: String::new() })
            .await
            .unwrap_err();
        assert_eq!(err, TicketError::EmptyHolder);
        assert!(client.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_conflicting_create_is_rejected() {
        let client = spawn_tickets();
        client.create(TicketCreate { holder: "bob".into() }).await.unwrap();

        let err = client
            .create(TicketCreate { holder: "bob".into() })
            .await
            .unwrap_err();
        assert_eq!(err, TicketError::Duplicate("bob".into()));
        assert_eq!(client.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_caller_supplied_ids() {
        let (actor, client) = ResourceActor::<Ticket>::new(10);
        tokio::spawn(actor.run(()));

        let id = client
            .create_with_id("gate_7".into(), TicketCreate { holder: "carol".into() })
            .await
            .unwrap();
        assert_eq!(id, "gate_7");

        let err = client
            .create_with_id("gate_7".into(), TicketCreate { holder: "dave".into() })
            .await
            .unwrap_err();
        assert_eq!(err, TicketError::Framework(FrameworkError::AlreadyExists("gate_7".into())));

        let err = client
            .create(TicketCreate { holder: "erin".into() })
            .await
            .unwrap_err();
        assert_eq!(err, TicketError::Framework(FrameworkError::MissingId));
    }

    #[tokio::test]
    async fn test_action_on_unknown_id() {
        let client = spawn_tickets();
        let err = client
            .perform_action("ticket_404".into(), TicketAction::Punch)
            .await
            .unwrap_err();
        assert_eq!(err, TicketError::Framework(FrameworkError::NotFound("ticket_404".into())));
    }

    #[tokio::test]
    async fn test_closed_actor_reports_actor_closed() {
        let (actor, client) = ResourceActor::<Ticket>::new(1);
        drop(actor);
        let err = client.get("ticket_1".into()).await.unwrap_err();
        assert_eq!(err, TicketError::Framework(FrameworkError::ActorClosed));
    }
}
