//! Storage connector
//!
//! Owns the lifecycle of the connection to the document store. Connecting happens in a
//! background task so startup never waits on the database; the outcome is published on
//! a watch channel that handlers read without blocking. A failed connection leaves the
//! service running in a degraded state where every storage operation is rejected with
//! `AppError::StorageUnavailable`.

use medialib_core::{AppError, Config};
use sqlx::postgres::PgPoolOptions;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

use crate::collection::MediaCollection;
use crate::media::MediaRepository;

/// Connection state published by the connector.
#[derive(Clone)]
pub enum ConnectionState {
    Connecting,
    Ready(Arc<dyn MediaCollection>),
    Failed(String),
}

impl ConnectionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionState::Connecting => "connecting",
            ConnectionState::Ready(_) => "ready",
            ConnectionState::Failed(_) => "failed",
        }
    }
}

impl fmt::Debug for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionState::Failed(reason) => write!(f, "Failed({})", reason),
            other => f.write_str(other.as_str()),
        }
    }
}

/// Injectable handle to the media collection.
#[derive(Clone)]
pub struct StorageConnector {
    state: watch::Receiver<ConnectionState>,
    // Keeps the channel open for connectors that are never driven by a task.
    _sender: Option<Arc<watch::Sender<ConnectionState>>>,
}

impl StorageConnector {
    /// Start connecting in the background and return immediately.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(config: &Config) -> Self {
        let (tx, rx) = watch::channel(ConnectionState::Connecting);
        let database_url = config.database_url().to_string();
        let max_connections = config.db_max_connections();
        let timeout = Duration::from_secs(config.db_timeout_seconds());

        tokio::spawn(async move {
            tracing::info!("Connecting to media store...");
            let state = match connect(&database_url, max_connections, timeout).await {
                Ok(repository) => {
                    tracing::info!(max_connections, "Connected to media store");
                    ConnectionState::Ready(Arc::new(repository))
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to connect to media store");
                    ConnectionState::Failed(e.to_string())
                }
            };
            // Receivers may all be gone during shutdown.
            let _ = tx.send(state);
        });

        Self {
            state: rx,
            _sender: None,
        }
    }

    /// A connector that is ready from the start with the given collection.
    pub fn ready(collection: Arc<dyn MediaCollection>) -> Self {
        Self::with_state(ConnectionState::Ready(collection))
    }

    /// A connector frozen in the given state.
    pub fn with_state(state: ConnectionState) -> Self {
        let (tx, rx) = watch::channel(state);
        Self {
            state: rx,
            _sender: Some(Arc::new(tx)),
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state.borrow().clone()
    }

    pub fn is_ready(&self) -> bool {
        matches!(*self.state.borrow(), ConnectionState::Ready(_))
    }

    /// Return the collection handle without waiting.
    pub fn collection(&self) -> Result<Arc<dyn MediaCollection>, AppError> {
        match &*self.state.borrow() {
            ConnectionState::Ready(collection) => Ok(collection.clone()),
            ConnectionState::Connecting => Err(AppError::StorageUnavailable(
                "connection to media store is still being established".to_string(),
            )),
            ConnectionState::Failed(reason) => Err(AppError::StorageUnavailable(format!(
                "connection to media store failed: {}",
                reason
            ))),
        }
    }

    /// Wait until the connection attempt settles, bounded by `timeout`.
    pub async fn wait_ready(&self, timeout: Duration) -> Result<Arc<dyn MediaCollection>, AppError> {
        let mut rx = self.state.clone();
        let settled = tokio::time::timeout(timeout, async {
            rx.wait_for(|s| !matches!(s, ConnectionState::Connecting))
                .await
                .map(drop)
        })
        .await;

        match settled {
            Ok(Ok(_)) => self.collection(),
            Ok(Err(_)) => Err(AppError::StorageUnavailable(
                "connection task ended without reporting".to_string(),
            )),
            Err(_) => Err(AppError::StorageUnavailable(format!(
                "media store not ready after {:?}",
                timeout
            ))),
        }
    }
}

async fn connect(
    database_url: &str,
    max_connections: u32,
    timeout: Duration,
) -> Result<MediaRepository, anyhow::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(timeout)
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(1800))
        .connect(database_url)
        .await?;

    sqlx::migrate!("../../migrations").run(&pool).await?;
    tracing::info!("Media store migrations applied");

    Ok(MediaRepository::new(pool))
}
