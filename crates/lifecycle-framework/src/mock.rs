//! # Mock Store & Testing Guide
//!
//! `MockStore<T>` hands out a real [`StoreClient<T>`] whose requests are answered from
//! a queue of scripted expectations instead of stored rows. Use it to drive a
//! [`LifecycleService`](crate::LifecycleService) through failures that an in-memory
//! store never produces.
//!
//! | Feature | MockStore | StoreActor |
//! |---------|-----------|------------|
//! | **State** | None (scripted replies) | Real rows |
//! | **Determinism** | Fully scripted | Sequential per store |
//! | **Error Injection** | `return_err` | Not possible |
//!
//! ## Testing Strategies
//!
//! 1. **Service over a mocked store**: script every store call the operation makes, in
//!    order, then `verify()` that none are left.
//! 2. **Service over a real store**: spawn a `StoreActor` and test the rules end to end.
//! 3. **Full system**: build the whole runtime and go through the transport layer.
//!
//! ```rust,ignore
//! let mock = MockStore::<HiveRecord>::new();
//! mock.expect_get().return_ok(Some(hive.clone()));
//! mock.expect_save().return_err(StoreError::Backend("disk full".into()));
//!
//! let service = LifecycleService::builder()
//!     .store(Arc::new(mock.client()))
//!     .audit(Arc::new(FixedUser(1)))
//!     .context(sections)
//!     .build()?;
//! let err = service.set_status(hive.id, true).await.unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Unexpected);
//! mock.verify();
//! ```
//!
//! A request that arrives with no matching expectation makes the mock task panic; the
//! caller then sees `StoreError::Dropped`.

use crate::client::StoreClient;
use crate::entity::Record;
use crate::error::StoreError;
use crate::message::StoreRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

enum Expectation<T: Record> {
    List(Result<Vec<T>, StoreError>),
    Get(Result<Option<T>, StoreError>),
    Find(Result<Vec<T>, StoreError>),
    Insert(Result<T, StoreError>),
    Save(Result<T, StoreError>),
    Remove(Result<T, StoreError>),
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A store double with expectation tracking.
pub struct MockStore<T: Record> {
    client: StoreClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Record> Default for MockStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> MockStore<T> {
    /// Creates a mock with no expectations. Must be called inside a tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().expect("mock queue poisoned").pop_front();

                match (request, expectation) {
                    (StoreRequest::List { respond_to }, Some(Expectation::List(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::Get { respond_to, .. }, Some(Expectation::Get(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::Find { respond_to, .. }, Some(Expectation::Find(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Insert { respond_to, .. },
                        Some(Expectation::Insert(response)),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::Save { respond_to, .. }, Some(Expectation::Save(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Remove { respond_to, .. },
                        Some(Expectation::Remove(response)),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("Unexpected store request: {request:?}");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    pub fn expect_list(&self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(Expectation::List)
    }

    pub fn expect_get(&self) -> ExpectationBuilder<T, Option<T>> {
        self.builder(Expectation::Get)
    }

    pub fn expect_find(&self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(Expectation::Find)
    }

    pub fn expect_insert(&self) -> ExpectationBuilder<T, T> {
        self.builder(Expectation::Insert)
    }

    pub fn expect_save(&self) -> ExpectationBuilder<T, T> {
        self.builder(Expectation::Save)
    }

    pub fn expect_remove(&self) -> ExpectationBuilder<T, T> {
        self.builder(Expectation::Remove)
    }

    /// Panics if any scripted expectation was not consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().expect("mock queue poisoned").len();
        if remaining > 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }

    fn builder<R>(
        &self,
        wrap: fn(Result<R, StoreError>) -> Expectation<T>,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap,
        }
    }
}

/// Scripts the reply to one store request.
pub struct ExpectationBuilder<T: Record, R> {
    expectations: Queue<T>,
    wrap: fn(Result<R, StoreError>) -> Expectation<T>,
}

impl<T: Record, R> ExpectationBuilder<T, R> {
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, StoreError>) {
        self.expectations
            .lock()
            .expect("mock queue poisoned")
            .push_back((self.wrap)(response));
    }
}
