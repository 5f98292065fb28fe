//! Process lifecycle: starting, running, stopping, stopped.
//!
//! The store is connected before the listener binds and closed before the
//! listener stops, so draining requests see the store as unavailable.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::watch;

use crate::config::Config;
use crate::db::{self, Repository};
use crate::{create_router, AppState};

/// Lifecycle state of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LifecycleState {
    Starting,
    Running,
    Stopping,
    Stopped,
}

impl LifecycleState {
    /// The only state reachable from `self`, if any.
    pub fn next(self) -> Option<Self> {
        match self {
            LifecycleState::Starting => Some(LifecycleState::Running),
            LifecycleState::Running => Some(LifecycleState::Stopping),
            LifecycleState::Stopping => Some(LifecycleState::Stopped),
            LifecycleState::Stopped => None,
        }
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LifecycleState::Starting => "starting",
            LifecycleState::Running => "running",
            LifecycleState::Stopping => "stopping",
            LifecycleState::Stopped => "stopped",
        };
        f.write_str(name)
    }
}

/// Shared handle on the current lifecycle state.
#[derive(Clone)]
pub struct Lifecycle {
    tx: Arc<watch::Sender<LifecycleState>>,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl Lifecycle {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(LifecycleState::Starting);
        Self { tx: Arc::new(tx) }
    }

    pub fn state(&self) -> LifecycleState {
        *self.tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<LifecycleState> {
        self.tx.subscribe()
    }

    /// Move to `next` if it directly follows the current state.
    pub fn advance(&self, next: LifecycleState) -> bool {
        let mut from = LifecycleState::Starting;
        let moved = self.tx.send_if_modified(|state| {
            from = *state;
            if state.next() == Some(next) {
                *state = next;
                true
            } else {
                false
            }
        });

        if moved {
            tracing::info!("Lifecycle {} -> {}", from, next);
        } else {
            tracing::warn!("Ignoring lifecycle transition {} -> {}", from, next);
        }
        moved
    }
}

/// Connect to the store. Failure is logged and yields a disconnected repository.
pub async fn connect_repository(database_url: &str) -> Repository {
    match db::init_database(database_url).await {
        Ok(pool) => {
            tracing::info!("Connected to database");
            Repository::new(pool)
        }
        Err(e) => {
            tracing::error!("Database connection failed: {}", e);
            Repository::disconnected()
        }
    }
}

/// Run the whole process until `shutdown` resolves.
pub async fn run<F>(config: Config, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let lifecycle = Lifecycle::new();

    let repo = connect_repository(&config.database_url).await;
    if !repo.is_connected() {
        tracing::warn!("Serving without a database; data routes will fail until restart");
    }

    if let Some(seed_path) = &config.seed_path {
        match db::seed_from_file(&repo, seed_path).await {
            Ok(report) => tracing::info!(
                "Seeded {} topics and {} subjects from {}",
                report.topics,
                report.subjects,
                seed_path.display()
            ),
            Err(e) => tracing::warn!("Seeding from {} failed: {}", seed_path.display(), e),
        }
    }

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    let state = AppState {
        repo: Arc::new(repo),
    };

    serve(listener, state, &lifecycle, shutdown).await
}

/// Serve `state` on `listener`, closing the store then the listener on `shutdown`.
pub async fn serve<F>(
    listener: TcpListener,
    state: AppState,
    lifecycle: &Lifecycle,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let repo = state.repo.clone();
    let app = create_router(state);

    lifecycle.advance(LifecycleState::Running);

    let stopping = lifecycle.clone();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.await;
            stopping.advance(LifecycleState::Stopping);
            repo.close().await;
            tracing::info!("Database connection closed");
        })
        .await?;

    lifecycle.advance(LifecycleState::Stopped);
    tracing::info!("Server closed ({})", lifecycle.state());
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Received SIGINT, closing server"),
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("Received SIGTERM, closing server");
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions_only_move_forward() {
        let lifecycle = Lifecycle::new();
        assert_eq!(lifecycle.state(), LifecycleState::Starting);

        assert!(!lifecycle.advance(LifecycleState::Stopping));
        assert!(lifecycle.advance(LifecycleState::Running));
        assert!(!lifecycle.advance(LifecycleState::Starting));
        assert!(lifecycle.advance(LifecycleState::Stopping));
        assert!(lifecycle.advance(LifecycleState::Stopped));
        assert!(!lifecycle.advance(LifecycleState::Stopped));

        assert_eq!(lifecycle.state(), LifecycleState::Stopped);
    }

    #[test]
    fn test_state_order() {
        assert!(LifecycleState::Starting < LifecycleState::Running);
        assert!(LifecycleState::Stopping < LifecycleState::Stopped);
        assert_eq!(LifecycleState::Stopped.next(), None);
        assert_eq!(LifecycleState::Running.to_string(), "running");
    }

    #[tokio::test]
    async fn test_subscribers_see_transitions() {
        let lifecycle = Lifecycle::new();
        let mut rx = lifecycle.subscribe();

        lifecycle.advance(LifecycleState::Running);
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), LifecycleState::Running);
    }

    #[tokio::test]
    async fn test_unreachable_database_yields_disconnected_repository() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        // A regular file cannot be a parent directory.
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, b"").unwrap();
        let url = format!("sqlite:{}", blocker.join("forum.sqlite").display());

        let repo = connect_repository(&url).await;
        assert!(!repo.is_connected());
    }
}
