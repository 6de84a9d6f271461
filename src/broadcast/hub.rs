use std::collections::HashMap;

use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

/// Identifier of a registered session, the client's remote address.
pub type SessionId = String;

/// Fan-out hub for live sessions.
///
/// The hub keeps one outbound sender per registered session and clones
/// every published line into all of them. It is shared as
/// `Arc<Mutex<Hub>>`: the mutex is the single coordination point for
/// registry mutation, and a channel is closed exactly once because the only
/// stored sender is dropped when its entry is removed.
#[derive(Debug, Default)]
pub struct Hub {
    sessions: HashMap<SessionId, UnboundedSender<String>>,
}

impl Hub {
    /// Creates a hub with no registered sessions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a session's outbound sender to the registry.
    ///
    /// A session registers once, right after its channel is created. A
    /// reconnecting client shows up as a brand-new entry with a brand-new
    /// channel; closed channels are never revived.
    pub fn register(&mut self, id: SessionId, sender: UnboundedSender<String>) {
        debug!(session = %id, "session registered");
        self.sessions.insert(id, sender);
    }

    /// Removes a session from the registry.
    ///
    /// Dropping the stored sender is what closes the channel, so removal is
    /// the close. Removal is idempotent, and only the owning session calls
    /// this, on its own exit path.
    pub fn unregister(&mut self, id: &str) {
        if self.sessions.remove(id).is_some() {
            debug!(session = %id, "session unregistered");
        }
    }

    /// Delivers `line` to every currently registered session.
    ///
    /// Senders are unbounded, so a slow reader queues instead of blocking
    /// publication. A receiver that has already gone away is logged and
    /// skipped.
    pub fn publish(&self, line: &str) {
        for (id, sender) in &self.sessions {
            if sender.send(line.to_string()).is_err() {
                warn!(session = %id, "dropping message for closed session");
            }
        }
    }

    /// Number of currently registered sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}
