use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, Lines,
};
use tokio::sync::mpsc;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::broadcast::Hub;
use crate::store::IdeaStore;

use super::message::{Command, NOTICE_PREFIX, TERMINATOR};

/// Handler for one client connection.
///
/// The session reads newline-terminated commands until EOF, an I/O error,
/// or the idle timeout. Every outgoing line, reply and pushed notification
/// alike, goes through one outbound channel drained by a single writer
/// task, so a reply can never interleave with a broadcast push.
pub struct Session {
    id: String,
    store: Arc<IdeaStore>,
    hub: Option<Arc<Mutex<Hub>>>,
    idle_timeout: Option<Duration>,
}

impl Session {
    /// Creates a session for one accepted connection.
    ///
    /// `hub` is `None` when broadcast is disabled; the session then only
    /// ever writes its own replies.
    pub fn new(
        id: String,
        store: Arc<IdeaStore>,
        hub: Option<Arc<Mutex<Hub>>>,
        idle_timeout: Option<Duration>,
    ) -> Self {
        Self {
            id,
            store,
            hub,
            idle_timeout,
        }
    }

    /// Runs the protocol loop until the peer goes away.
    ///
    /// Generic over the stream so the loop can be exercised over an
    /// in-memory duplex pipe as well as a `TcpStream`.
    pub async fn run<S>(self, stream: S)
    where
        S: AsyncRead + AsyncWrite + Send + 'static,
    {
        let (reader, mut writer) = tokio::io::split(stream);
        let (tx, mut rx) = mpsc::unbounded_channel::<String>();

        // Single writer task: drains the outbound channel onto the socket.
        let writer_id = self.id.clone();
        let writer_task = tokio::spawn(async move {
            while let Some(line) = rx.recv().await {
                if let Err(e) = writer.write_all(format!("{line}\n").as_bytes()).await {
                    debug!(session = %writer_id, error = %e, "write failed, stopping writer");
                    break;
                }
            }
        });

        if let Some(hub) = &self.hub {
            hub.lock().unwrap().register(self.id.clone(), tx.clone());
        }

        let mut lines = BufReader::new(reader).lines();
        while let Some(line) = self.next_line(&mut lines).await {
            match Command::parse(&line) {
                Some(Command::Add(text)) => {
                    if let Some(idea) = self.store.add(&text) {
                        if let Some(hub) = &self.hub {
                            hub.lock()
                                .unwrap()
                                .publish(&format!("{NOTICE_PREFIX}{idea}"));
                        }
                    }
                    let _ = tx.send(TERMINATOR.to_string());
                }
                Some(Command::List) => {
                    for idea in self.store.list() {
                        let _ = tx.send(idea);
                    }
                    let _ = tx.send(TERMINATOR.to_string());
                }
                // Lenient policy: unrecognized lines get no reply.
                None => {}
            }
        }

        if let Some(hub) = &self.hub {
            hub.lock().unwrap().unregister(&self.id);
        }
        drop(tx);
        let _ = writer_task.await;
        debug!(session = %self.id, "session closed");
    }

    // Reads the next line, bounded by the idle timeout when one is set.
    async fn next_line<R>(&self, lines: &mut Lines<R>) -> Option<String>
    where
        R: AsyncBufRead + Unpin,
    {
        let result = match self.idle_timeout {
            Some(limit) => match timeout(limit, lines.next_line()).await {
                Ok(result) => result,
                Err(_) => {
                    debug!(session = %self.id, "idle timeout, closing session");
                    return None;
                }
            },
            None => lines.next_line().await,
        };
        match result {
            Ok(Some(line)) => Some(line),
            Ok(None) => None,
            Err(e) => {
                warn!(session = %self.id, error = %e, "read failed");
                None
            }
        }
    }
}
