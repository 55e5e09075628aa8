//! # Mock Framework
//!
//! Utilities for testing an actor against scripted dependencies.
//!
//! [`MockClient`] hands out a real [`ResourceClient`] whose requests are answered from a
//! queue of expectations instead of a running actor. This is how the governance and
//! factory actors are tested without spawning every leaf actor they probe.
//! For one-off assertions on the raw request, use [`create_mock_client`] and [`expect_get`].

use crate::framework::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock client.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, T::Error>,
    },
    Create {
        response: Result<T::Id, T::Error>,
    },
    List {
        response: Result<Vec<T>, T::Error>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, T::Error>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Requests are matched in order against the queued expectations. A request that does
/// not match the next expectation (wrong kind, or wrong id) is answered with
/// `FrameworkError::NotFound` and recorded as a mismatch; [`MockClient::verify`] then
/// fails the test.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<DeploymentRecord>::new();
/// mock.expect_get(address).return_ok(Some(record));
///
/// let client = LedgerClient::new(mock.client());
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    mismatches: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let mismatches = Arc::new(Mutex::new(Vec::new()));
        let queue = expectations.clone();
        let mismatch_log = mismatches.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();
                answer(request, expectation, &mismatch_log);
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            mismatches,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ListExpectationBuilder<T> {
        ListExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self, id: T::Id) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met and no request was unexpected.
    pub fn verify(&self) {
        let mismatches = self.mismatches.lock().unwrap();
        if !mismatches.is_empty() {
            panic!("Unexpected requests: {:?}", *mismatches);
        }
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Answers one request from one expectation, logging any mismatch before replying.
fn answer<T: ActorEntity>(
    request: ResourceRequest<T>,
    expectation: Option<Expectation<T>>,
    log: &Mutex<Vec<String>>,
) {
    match (request, expectation) {
        (
            ResourceRequest::Get { id, respond_to },
            Some(Expectation::Get { id: expected, response }),
        ) => {
            if id != expected {
                return reject(respond_to, format!("get {id}, expected get {expected}"), log);
            }
            let _ = respond_to.send(response);
        }
        (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
            let _ = respond_to.send(response);
        }
        (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
            let _ = respond_to.send(response);
        }
        (
            ResourceRequest::Action { id, respond_to, .. },
            Some(Expectation::Action { id: expected, response }),
        ) => {
            if id != expected {
                let message = format!("action on {id}, expected action on {expected}");
                return reject(respond_to, message, log);
            }
            let _ = respond_to.send(response);
        }
        (ResourceRequest::Get { id, respond_to }, _) => {
            reject(respond_to, format!("unexpected get {id}"), log)
        }
        (ResourceRequest::Create { respond_to, .. }, _) => {
            reject(respond_to, "unexpected create".to_string(), log)
        }
        (ResourceRequest::List { respond_to }, _) => {
            reject(respond_to, "unexpected list".to_string(), log)
        }
        (ResourceRequest::Action { id, respond_to, .. }, _) => {
            reject(respond_to, format!("unexpected action on {id}"), log)
        }
    }
}

fn reject<R, E: From<FrameworkError>>(
    respond_to: Response<R, E>,
    mismatch: String,
    log: &Mutex<Vec<String>>,
) {
    log.lock().unwrap().push(mismatch.clone());
    let _ = respond_to.send(Err(FrameworkError::NotFound(mismatch).into()));
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Queue<T>,
}

impl<T: ActorEntity> GetExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: Option<T>) {
        self.expectations.lock().unwrap().push_back(Expectation::Get {
            id: self.id,
            response: Ok(value),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: T::Error) {
        self.expectations.lock().unwrap().push_back(Expectation::Get {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<T: ActorEntity> {
    expectations: Queue<T>,
}

impl<T: ActorEntity> CreateExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, id: T::Id) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Create { response: Ok(id) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: T::Error) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Create { response: Err(error) });
    }
}

/// Builder for `list` expectations.
pub struct ListExpectationBuilder<T: ActorEntity> {
    expectations: Queue<T>,
}

impl<T: ActorEntity> ListExpectationBuilder<T> {
    /// Sets the expectation to return the given entities.
    pub fn return_ok(self, items: Vec<T>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::List { response: Ok(items) });
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Queue<T>,
}

impl<T: ActorEntity> ActionExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, result: T::ActionResult) {
        self.expectations.lock().unwrap().push_back(Expectation::Action {
            id: self.id,
            response: Ok(result),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: T::Error) {
        self.expectations.lock().unwrap().push_back(Expectation::Action {
            id: self.id,
            response: Err(error),
        });
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests land on.
///
/// # Testing Strategy
/// When a test only cares about *what* a client sends (e.g., that `ledger.begin` sends an
/// action for the right address), it can read the request straight off the channel and
/// answer it by hand.
///
/// **Note**: Consider using [`MockClient`] for a more fluent API.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Address, Registry};
    use crate::registry_actor::{RegistryAction, RegistryActionResult, RegistryError};

    #[tokio::test]
    async fn test_mock_client_raw_channel() {
        let (client, mut receiver) = create_mock_client::<Registry>(10);
        let address = Address::from_raw(3);

        let get_task = tokio::spawn(async move { client.get(address).await });

        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, address);
        responder.send(Ok(Some(Registry::new(address)))).unwrap();

        let fetched = get_task.await.unwrap().unwrap();
        assert_eq!(fetched.map(|r| r.address), Some(address));
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let address = Address::from_raw(5);
        let mut mock = MockClient::<Registry>::new();
        mock.expect_get(address).return_ok(Some(Registry::new(address)));
        mock.expect_action(address)
            .return_err(RegistryError::NameNotFound("dao".into()));

        let client = mock.client();
        assert!(client.get(address).await.unwrap().is_some());
        let err = client
            .perform_action(address, RegistryAction::Resolve("dao".into()))
            .await
            .unwrap_err();
        assert_eq!(err, RegistryError::NameNotFound("dao".into()));

        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_client_flags_wrong_id() {
        let mut mock = MockClient::<Registry>::new();
        mock.expect_action(Address::from_raw(1))
            .return_ok(RegistryActionResult::Registered);

        let result = mock
            .client()
            .perform_action(Address::from_raw(2), RegistryAction::Resolve("x".into()))
            .await;
        assert!(result.is_err());

        let verdict = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| mock.verify()));
        assert!(verdict.is_err());
    }
}
