use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::broadcast::Hub;
use crate::config::Settings;
use crate::store::IdeaStore;
use crate::utils::error::ServerError;

use super::session::Session;

/// The idea-board TCP server.
///
/// Owns the shared store and the broadcast hub, accepts connections, and
/// spawns one session task per client. All state is instance state, so any
/// number of servers can coexist in one process without cross-talk.
pub struct Server {
    store: Arc<IdeaStore>,
    hub: Arc<Mutex<Hub>>,
    settings: Settings,
    listener: Mutex<Option<TcpListener>>,
    local_addr: Option<SocketAddr>,
    shutdown: watch::Sender<bool>,
}

impl Server {
    /// Creates a server from settings. Call [`listen`](Self::listen) before
    /// [`serve`](Self::serve).
    pub fn new(settings: Settings) -> Self {
        let (shutdown, _) = watch::channel(false);
        Self {
            store: Arc::new(IdeaStore::new()),
            hub: Arc::new(Mutex::new(Hub::new())),
            settings,
            listener: Mutex::new(None),
            local_addr: None,
            shutdown,
        }
    }

    /// Binds the TCP listener and returns the bound address.
    ///
    /// An empty `addr` binds `127.0.0.1:0`, letting the OS pick a free
    /// port; the actual address is retained for
    /// [`local_addr`](Self::local_addr), which is what tests use to
    /// connect.
    pub async fn listen(&mut self, addr: &str) -> Result<SocketAddr, ServerError> {
        let addr = if addr.is_empty() { "127.0.0.1:0" } else { addr };
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: addr.to_string(),
                source,
            })?;
        let local = listener.local_addr()?;
        self.local_addr = Some(local);
        *self.listener.lock().unwrap() = Some(listener);
        info!(%local, "listening");
        Ok(local)
    }

    /// The address bound by `listen`, if any.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.local_addr
    }

    /// Accepts connections until [`close`](Self::close) is called.
    ///
    /// Every accepted connection runs as its own task, so one stuck client
    /// never blocks acceptance of the next. A transient accept error is
    /// logged and the loop continues.
    pub async fn serve(&self) -> Result<(), ServerError> {
        let listener = self
            .listener
            .lock()
            .unwrap()
            .take()
            .ok_or(ServerError::NotListening)?;
        let mut shutdown = self.shutdown.subscribe();
        if *shutdown.borrow() {
            return Ok(());
        }

        loop {
            tokio::select! {
                _ = shutdown.changed() => {
                    if *shutdown.borrow() {
                        info!("server shutting down");
                        return Ok(());
                    }
                }
                accepted = listener.accept() => {
                    match accepted {
                        Ok((stream, peer)) => {
                            let session = Session::new(
                                peer.to_string(),
                                self.store.clone(),
                                self.settings.server.broadcast.then(|| self.hub.clone()),
                                self.idle_timeout(),
                            );
                            tokio::spawn(session.run(stream));
                        }
                        Err(e) => warn!(error = %e, "accept failed"),
                    }
                }
            }
        }
    }

    /// Binds `addr` and serves until shutdown.
    pub async fn listen_and_serve(&mut self, addr: &str) -> Result<(), ServerError> {
        self.listen(addr).await?;
        self.serve().await
    }

    /// Signals shutdown.
    ///
    /// No new connections are accepted afterwards; in-flight sessions
    /// drain best-effort.
    pub fn close(&self) {
        let _ = self.shutdown.send(true);
    }

    /// Stores an idea directly, bypassing the wire protocol.
    ///
    /// Returns the stored form when the idea was new.
    pub fn add_idea(&self, text: &str) -> Option<String> {
        self.store.add(text)
    }

    /// Snapshot of all stored ideas, sorted.
    pub fn ideas(&self) -> Vec<String> {
        self.store.list()
    }

    fn idle_timeout(&self) -> Option<Duration> {
        match self.settings.session.idle_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}
