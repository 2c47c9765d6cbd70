//! # In-Memory Store Actor
//!
//! `StoreActor<T>` owns every row of one entity kind and processes [`StoreRequest`]s
//! sequentially on its own tokio task. Nothing else can touch the rows, so no
//! `Mutex` or `RwLock` guards them.
//!
//! # Usage Pattern
//!
//! 1.  **Create**: `StoreActor::new(buffer)` returns the actor and a cloneable client.
//! 2.  **Run**: spawn `actor.run()` on a background task.
//! 3.  **Use**: hand the client (or an `Arc<dyn EntityStore<T>>` of it) to services.
//!
//! ```rust,ignore
//! let (actor, client) = StoreActor::<HiveRecord>::new(32);
//! let handle = tokio::spawn(actor.run());
//! let hive = client.insert(record).await?;
//! drop(client);
//! handle.await?;
//! ```
//!
//! The actor exits once every client has been dropped.

use crate::client::StoreClient;
use crate::entity::Record;
use crate::error::StoreError;
use crate::message::StoreRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

pub struct StoreActor<T: Record> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    rows: Vec<T>,
    next_id: u32,
}

impl<T: Record> StoreActor<T> {
    /// Creates a new `StoreActor` and its associated `StoreClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; callers wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            rows: Vec::new(),
            next_id: 1,
        };
        (actor, StoreClient::new(sender))
    }

    /// Runs the actor's event loop until the channel closes.
    pub async fn run(mut self) {
        // "HiveRecord" rather than "katla_admin::model::hive::HiveRecord"
        let record_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(record_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::List { respond_to } => {
                    debug!(record_type, size = self.rows.len(), "List");
                    let _ = respond_to.send(Ok(self.rows.clone()));
                }
                StoreRequest::Get { id, respond_to } => {
                    let row = self.position(id).map(|idx| self.rows[idx].clone());
                    debug!(record_type, %id, found = row.is_some(), "Get");
                    let _ = respond_to.send(Ok(row));
                }
                StoreRequest::Find {
                    predicate,
                    respond_to,
                } => {
                    let matches: Vec<T> = self
                        .rows
                        .iter()
                        .filter(|row| predicate(row))
                        .cloned()
                        .collect();
                    debug!(record_type, matched = matches.len(), "Find");
                    let _ = respond_to.send(Ok(matches));
                }
                StoreRequest::Insert {
                    mut record,
                    respond_to,
                } => {
                    let Some(next) = self.next_id.checked_add(1) else {
                        warn!(record_type, "Id space exhausted");
                        let _ = respond_to.send(Err(StoreError::Backend(
                            "id space exhausted".to_string(),
                        )));
                        continue;
                    };
                    let id = T::Id::from(self.next_id);
                    self.next_id = next;
                    record.assign_id(id);
                    self.rows.push(record.clone());
                    info!(record_type, %id, size = self.rows.len(), "Inserted");
                    let _ = respond_to.send(Ok(record));
                }
                StoreRequest::Save { record, respond_to } => {
                    let id = record.id();
                    match self.position(id) {
                        Some(idx) => {
                            self.rows[idx] = record.clone();
                            info!(record_type, %id, "Saved");
                            let _ = respond_to.send(Ok(record));
                        }
                        None => {
                            warn!(record_type, %id, "Not found");
                            let _ = respond_to.send(Err(StoreError::Missing(id.to_string())));
                        }
                    }
                }
                StoreRequest::Remove { id, respond_to } => match self.position(id) {
                    Some(idx) => {
                        let removed = self.rows.remove(idx);
                        info!(record_type, %id, size = self.rows.len(), "Removed");
                        let _ = respond_to.send(Ok(removed));
                    }
                    None => {
                        warn!(record_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::Missing(id.to_string())));
                    }
                },
            }
        }

        info!(record_type, size = self.rows.len(), "Shutdown");
    }

    fn position(&self, id: T::Id) -> Option<usize> {
        self.rows.iter().position(|row| row.id() == id)
    }
}
