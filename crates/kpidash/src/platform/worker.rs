//! Background request execution.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;

use kpidash_core::{AnalyticsClient, Completion, RequestFailed, Ticket, Transport};

/// Executes tickets without blocking the UI thread.
pub trait RequestWorker {
    /// Start running a ticket.
    ///
    /// Returns false if the ticket could not be started; no completion will
    /// arrive for it.
    fn send(&self, ticket: Ticket) -> bool;

    /// Try to receive a finished request (non-blocking)
    fn try_recv(&self) -> Option<Completion>;
}

/// Runs every ticket on its own thread so requests overlap.
///
/// There is no cancellation: a thread always runs its request to the end and
/// reports back, and the owning controller decides whether the answer is stale.
pub struct ThreadWorker<T> {
    client: Arc<AnalyticsClient<T>>,
    response_tx: Sender<Completion>,
    response_rx: Receiver<Completion>,
}

impl<T> ThreadWorker<T>
where
    T: Transport + Send + Sync + 'static,
{
    pub fn new(client: AnalyticsClient<T>) -> Self {
        let (response_tx, response_rx) = channel();
        Self {
            client: Arc::new(client),
            response_tx,
            response_rx,
        }
    }
}

impl<T> RequestWorker for ThreadWorker<T>
where
    T: Transport + Send + Sync + 'static,
{
    fn send(&self, ticket: Ticket) -> bool {
        let client = Arc::clone(&self.client);
        let response_tx = self.response_tx.clone();
        let seq = ticket.token.seq;

        let spawned = thread::Builder::new()
            .name(format!("request-{seq}"))
            .spawn(move || {
                tracing::debug!(slot = ?ticket.token.slot, seq, endpoint = %ticket.call.endpoint(), "Request started");
                let result = client.call(&ticket.call);
                // The receiver only goes away when the app is shutting down
                let _ = response_tx.send(Completion::new(&ticket, result));
            });

        match spawned {
            Ok(_) => true,
            Err(e) => {
                tracing::error!(seq, error = %e, "Failed to spawn request thread");
                false
            }
        }
    }

    fn try_recv(&self) -> Option<Completion> {
        self.response_rx.try_recv().ok()
    }
}

/// Completion reported when a ticket never reached a worker thread.
pub(crate) fn not_started(ticket: &Ticket) -> Completion {
    Completion::new(
        ticket,
        Err(RequestFailed::transport("Could not start request")),
    )
}
