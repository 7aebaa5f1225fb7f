//! # Mock Framework
//!
//! Utilities for testing clients in isolation, without spawning a `ResourceActor`.
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Determinism** | Fully deterministic | Subject to scheduler |
//! | **State** | No real state (expectations) | Real state management |
//! | **Use Case** | Testing logic *around* the client | Testing the actor or full system |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! Two styles are available:
//!
//! - The fluent [`MockClient`]: queue expectations, hand out the client, call [`MockClient::verify`].
//! - The raw [`create_mock_client`] + `expect_*` helpers: receive the request yourself,
//!   inspect its payload, and answer through the responder.
//!
//! ```rust,ignore
//! let mut mock = MockClient::<Order>::new();
//! mock.expect_get(OrderId(1)).return_ok(None);
//!
//! let client = OrderClient::new(mock.client(), menu);
//! assert!(matches!(client.get_order(OrderId(1)).await, Err(OrderError::NotFound(_))));
//! mock.verify();
//! ```

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::{ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the response the mock should give it.
enum Expectation<T: ActorEntity> {
    Create {
        response: Result<T, FrameworkError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Count {
        response: Result<usize, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Requests must arrive in the order the expectations were queued. A request that does not
/// match the next expectation (wrong kind or wrong ID) panics the mock task; the caller then
/// sees [`FrameworkError::ActorDropped`] and [`MockClient::verify`] reports the leftover.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: expected, response })) => {
                        assert_eq!(id, expected, "Get for unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "Update for unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to, .. }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Count { respond_to, .. }, Some(Expectation::Count { response })) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Create { response })
    }

    /// Expects a `get` operation for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| Expectation::Get { id, response })
    }

    /// Expects an `update` operation for `id`.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| Expectation::Update { id, response })
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::List { response })
    }

    /// Expects a `count` operation.
    pub fn expect_count(&mut self) -> ExpectationBuilder<T, usize> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Count { response })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder that completes an expectation with its response.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Expectations<T>,
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    fn new(
        expectations: Expectations<T>,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            expectations,
            make: Box::new(make),
        }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        let expectation = (self.make)(Ok(value));
        self.expectations.lock().unwrap().push_back(expectation);
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        let expectation = (self.make)(Err(error));
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// RAW HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// The client sends messages to a channel the test controls. The test inspects each
/// message and answers through its responder, simulating success or failure
/// deterministically.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Update, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Query, Response<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::List { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Count request
pub async fn expect_count<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Query, Response<usize>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Count { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Ticket {
        id: u32,
        holder: String,
    }

    #[derive(Debug)]
    struct TicketCreate {
        holder: String,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Ticket error")]
    struct TicketError;

    #[async_trait]
    impl ActorEntity for Ticket {
        type Id = u32;
        type Create = TicketCreate;
        type Update = ();
        type Query = ();
        type Context = ();
        type Error = TicketError;

        fn from_create_params(id: u32, params: TicketCreate, _ctx: &()) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                holder: params.holder,
            })
        }

        fn matches(&self, _query: &()) -> bool {
            true
        }

        async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Ticket>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(TicketCreate {
                    holder: "Test".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.holder, "Test");
        responder
            .send(Ok(Ticket {
                id: 1,
                holder: payload.holder,
            }))
            .unwrap();

        let result = create_task.await.unwrap();
        assert!(matches!(result, Ok(ticket) if ticket.id == 1));
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Ticket>::new();
        let ticket = Ticket {
            id: 1,
            holder: "Test".to_string(),
        };

        mock.expect_create().return_ok(ticket.clone());
        mock.expect_get(1).return_ok(Some(ticket.clone()));
        mock.expect_count().return_ok(1);
        mock.expect_list().return_err(FrameworkError::ActorClosed);

        let client = mock.client();

        let created = client
            .create(TicketCreate {
                holder: "Test".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created, ticket);

        let fetched = client.get(1).await.unwrap();
        assert_eq!(fetched, Some(ticket));

        assert_eq!(client.count(()).await.unwrap(), 1);
        assert!(matches!(client.list(()).await, Err(FrameworkError::ActorClosed)));

        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn test_verify_reports_unmet_expectations() {
        let mut mock = MockClient::<Ticket>::new();
        mock.expect_update(3).return_err(FrameworkError::NotFound("3".into()));
        mock.verify();
    }
}
