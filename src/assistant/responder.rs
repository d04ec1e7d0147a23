//! Delayed reply delivery for the chat widget.
//!
//! The simulated "thinking" pause is a cancellable task keyed to a chat
//! session: each reply carries the session tag it was requested under,
//! late replies from a torn-down session are dropped by the receiver,
//! and resetting the session aborts anything still in flight.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use super::{FilterResult, ShoppingAssistant};

/// Monotonic tag identifying one chat session.
pub type SessionId = u64;

/// A finished interpretation, tagged with the session that requested it.
#[derive(Debug)]
pub struct Reply {
    pub session: SessionId,
    pub query: String,
    pub result: FilterResult,
}

/// Schedules interpretations behind a randomized delay and delivers them
/// over a channel.
pub struct Responder {
    assistant: Arc<ShoppingAssistant>,
    runtime: Handle,
    tx: mpsc::UnboundedSender<Reply>,
    session: SessionId,
    pending: Vec<JoinHandle<()>>,
    delay_min_ms: u64,
    delay_max_ms: u64,
}

impl Responder {
    /// Must be called inside a tokio runtime; reply tasks are spawned onto
    /// the current handle.
    pub fn new(
        assistant: Arc<ShoppingAssistant>,
        delay_min_ms: u64,
        delay_max_ms: u64,
    ) -> (Self, mpsc::UnboundedReceiver<Reply>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let responder = Self {
            assistant,
            runtime: Handle::current(),
            tx,
            session: 0,
            pending: Vec::new(),
            delay_min_ms,
            delay_max_ms,
        };
        (responder, rx)
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    /// Schedule an interpretation after the simulated thinking delay.
    pub fn submit(&mut self, query: String) {
        self.pending.retain(|handle| !handle.is_finished());

        let delay = Duration::from_millis(
            rand::thread_rng().gen_range(self.delay_min_ms..=self.delay_max_ms),
        );
        let assistant = self.assistant.clone();
        let tx = self.tx.clone();
        let session = self.session;

        debug!(session, delay_ms = delay.as_millis() as u64, "reply scheduled");

        let handle = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let result = assistant.process_query(&query);
            let _ = tx.send(Reply {
                session,
                query,
                result,
            });
        });
        self.pending.push(handle);
    }

    /// True when a reply belongs to the live session.
    pub fn is_live(&self, reply: &Reply) -> bool {
        reply.session == self.session
    }

    /// Abort in-flight replies and start a fresh session. A reply that was
    /// already sent keeps its old tag and fails `is_live`.
    pub fn reset(&mut self) {
        for handle in self.pending.drain(..) {
            handle.abort();
        }
        self.session += 1;
        debug!(session = self.session, "chat session reset");
    }

    pub fn has_pending(&self) -> bool {
        self.pending.iter().any(|handle| !handle.is_finished())
    }
}

impl Drop for Responder {
    fn drop(&mut self) {
        for handle in &self.pending {
            handle.abort();
        }
    }
}
