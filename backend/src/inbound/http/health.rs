//! Liveness and readiness probes.
//!
//! Readiness requires both the startup flag and a reachable store, so a
//! closed database takes the instance out of rotation before shutdown
//! completes. Liveness only reflects the drain flag.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};

use crate::domain::ports::StorageProbe;

/// Probe state shared across workers.
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
    storage: Option<Arc<dyn StorageProbe>>,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
            storage: None,
        }
    }
}

impl HealthState {
    /// Not ready, live, and without a storage check.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `storage` to be available before reporting ready.
    #[must_use]
    pub fn with_storage(mut self, storage: Arc<dyn StorageProbe>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Mark startup as complete.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Report not-live and not-ready from now on.
    pub fn mark_draining(&self) {
        self.ready.store(false, Ordering::Release);
        self.live.store(false, Ordering::Release);
    }

    /// Startup complete and storage reachable.
    pub async fn is_ready(&self) -> bool {
        if !self.ready.load(Ordering::Acquire) {
            return false;
        }
        match &self.storage {
            Some(storage) => storage.is_available().await,
            None => true,
        }
    }

    /// Not yet draining.
    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }
}

fn probe_response(probe_ok: bool) -> HttpResponse {
    let mut response = if probe_ok {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    response
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish()
}

/// Readiness probe.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Ready to handle traffic"),
        (status = 503, description = "Starting, draining, or storage unavailable")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    probe_response(state.is_ready().await)
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Process is alive"),
        (status = 503, description = "Process is draining")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    probe_response(state.is_alive())
}
