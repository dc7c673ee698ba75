//! Hang-up handling.
//!
//! SIGHUP only flips a flag and fires a cancellation token. Whoever owns the
//! players observes the token and tears them down; nothing else happens in
//! signal context.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::signal::unix::{signal, SignalKind};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::error::HubError;

#[derive(Debug, Default)]
pub struct ShutdownCoordinator {
    signalled: Arc<AtomicBool>,
    token: CancellationToken,
    listener: Option<JoinHandle<()>>,
}

impl ShutdownCoordinator {
    /// Install the SIGHUP listener. Must run inside the runtime, before any
    /// player is spawned.
    pub fn install() -> Result<Self, HubError> {
        let mut coordinator = Self::default();
        let mut hangup = signal(SignalKind::hangup()).map_err(|e| HubError::Internal {
            detail: format!("cannot install SIGHUP handler: {e}"),
        })?;

        let signalled = Arc::clone(&coordinator.signalled);
        let token = coordinator.token.clone();
        coordinator.listener = Some(tokio::spawn(async move {
            while hangup.recv().await.is_some() {
                if !signalled.swap(true, Ordering::SeqCst) {
                    info!("Received SIGHUP, shutting down");
                }
                token.cancel();
            }
            warn!("SIGHUP stream closed");
        }));
        Ok(coordinator)
    }

    pub fn is_signalled(&self) -> bool {
        self.signalled.load(Ordering::SeqCst)
    }

    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }
}

impl Drop for ShutdownCoordinator {
    fn drop(&mut self) {
        if let Some(listener) = self.listener.take() {
            listener.abort();
        }
    }
}
