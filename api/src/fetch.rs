//! Retrieval of the telemetry snapshot from the remote JSON store.

use std::{
    sync::{Arc, Mutex, PoisonError},
    time::{Duration, Instant},
};

use reqwest::header::ACCEPT;

use crate::{config::DashboardConfig, error::FetchError, telemetry::Snapshot};

/// HTTP client bound to one telemetry endpoint.
#[derive(Debug, Clone)]
pub struct TelemetryClient {
    http: reqwest::Client,
    url: String,
}

impl TelemetryClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let url = url.into();
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;
        Ok(Self { http, url })
    }

    /// Use a preconfigured `reqwest` client (proxy, TLS or timeout settings of its own).
    pub fn with_http(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    pub fn from_config(config: &DashboardConfig) -> Result<Self, FetchError> {
        Self::new(config.telemetry_url.clone(), config.fetch_timeout)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// One GET against the endpoint, decoded into a [`Snapshot`].
    pub async fn fetch(&self) -> Result<Snapshot, FetchError> {
        let started = Instant::now();

        let response = self
            .http
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| self.transport(source))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| self.transport(source))?;
        let snapshot = Snapshot::from_slice(&body)?;

        tracing::info!(
            url = %self.url,
            players = snapshot.len(),
            bytes = body.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "fetched telemetry snapshot"
        );

        Ok(snapshot)
    }

    fn transport(&self, source: reqwest::Error) -> FetchError {
        FetchError::Transport {
            url: self.url.clone(),
            source,
        }
    }
}

#[derive(Debug)]
struct CachedSnapshot {
    fetched_at: Instant,
    snapshot: Arc<Snapshot>,
}

/// Last successful fetch, reused while younger than the configured TTL.
#[derive(Debug, Default)]
pub struct SnapshotCache {
    slot: Mutex<Option<CachedSnapshot>>,
}

impl SnapshotCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached snapshot if it is fresh, otherwise fetch and remember it.
    ///
    /// With `ttl == None` every call fetches and nothing is stored. Failed
    /// fetches never replace a cached snapshot.
    pub async fn get_or_fetch(
        &self,
        client: &TelemetryClient,
        ttl: Option<Duration>,
    ) -> Result<Arc<Snapshot>, FetchError> {
        let Some(ttl) = ttl else {
            return client.fetch().await.map(Arc::new);
        };

        if let Some(snapshot) = self.fresh(ttl) {
            tracing::debug!(url = client.url(), "serving cached telemetry snapshot");
            return Ok(snapshot);
        }

        let snapshot = Arc::new(client.fetch().await?);
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(CachedSnapshot {
            fetched_at: Instant::now(),
            snapshot: Arc::clone(&snapshot),
        });
        Ok(snapshot)
    }

    pub fn clear(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }

    fn fresh(&self, ttl: Duration) -> Option<Arc<Snapshot>> {
        let slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        slot.as_ref()
            .filter(|cached| cached.fetched_at.elapsed() < ttl)
            .map(|cached| Arc::clone(&cached.snapshot))
    }
}
