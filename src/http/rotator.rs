//! The host rotator.
//!
//! # Responsibilities
//! - Own the host pool behind a single lock
//! - Rewrite outgoing requests to the current host
//! - Rotate away from a host after a host-level failure
//!
//! # Design Decisions
//! - The lock is held only for the in-memory read or rotation, never
//!   across the downstream call
//! - A failure is only acted on if the failed host is still current, so
//!   overlapping failures on one host rotate once
//! - Observed results are never altered

use std::sync::{Mutex, MutexGuard, PoisonError};

use http::{Request, Response};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::RotatorConfig;
use crate::error::ConfigError;
use crate::health::{classify_outcome, ClassifyFailure};
use crate::http::request::rewrite_request;
use crate::pool::{HostEntry, HostPool};

/// Sticky host selection with failover on host-level failures.
#[derive(Debug)]
pub struct HostRotator {
    pool: Mutex<HostPool>,
}

impl HostRotator {
    /// Build a rotator from host strings (`scheme://host[:port]`).
    ///
    /// Fails if the list is empty or any entry lacks a scheme or host.
    pub fn new<I, T>(hosts: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Self::with_rng(hosts, StdRng::from_entropy())
    }

    /// Same as [`new`](Self::new) with a seeded RNG, for reproducible selection.
    pub fn with_seed<I, T>(hosts: I, seed: u64) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Self::with_rng(hosts, StdRng::seed_from_u64(seed))
    }

    /// Build a rotator from a loaded configuration.
    pub fn from_config(config: &RotatorConfig) -> Result<Self, ConfigError> {
        Self::new(config.hosts.as_slice())
    }

    fn with_rng<I, T>(hosts: I, rng: StdRng) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let entries = hosts
            .into_iter()
            .map(|h| HostEntry::parse(h.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        let pool = HostPool::new(entries, rng)?;

        tracing::info!(
            hosts = pool.len(),
            current = %pool.current(),
            "Host rotator initialized"
        );

        Ok(Self {
            pool: Mutex::new(pool),
        })
    }

    fn lock(&self) -> MutexGuard<'_, HostPool> {
        // Every mutation leaves the pool consistent, so a poisoned lock is still usable.
        self.pool.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The host the next request will be sent to.
    pub fn current_host(&self) -> HostEntry {
        self.lock().current().clone()
    }

    /// Snapshot of the pool in its current order.
    pub fn hosts(&self) -> Vec<HostEntry> {
        self.lock().hosts().to_vec()
    }

    /// Point `request` at the current host.
    ///
    /// Returns the host used so the outcome can be reported against it.
    pub fn rewrite<B>(&self, request: Request<B>) -> (Request<B>, HostEntry) {
        let host = self.current_host();
        let request = rewrite_request(request, &host);
        tracing::debug!(
            method = %request.method(),
            uri = %request.uri(),
            "Request rewritten to current host"
        );
        (request, host)
    }

    /// Inspect the outcome of a request sent to `host`.
    ///
    /// Rotates on a 5xx response or a network-level error. Returns true if
    /// the pool rotated.
    pub fn observe<B, E>(&self, host: &HostEntry, result: &Result<Response<B>, E>) -> bool
    where
        E: ClassifyFailure,
    {
        let Some(failure) = classify_outcome(result) else {
            return false;
        };

        let mut pool = self.lock();
        if pool.current() != host {
            tracing::debug!(
                failed = %host,
                current = %pool.current(),
                cause = %failure,
                "Host already rotated away, ignoring failure"
            );
            return false;
        }
        let next = pool.rotate().clone();
        drop(pool);

        tracing::warn!(
            failed = %host,
            next = %next,
            cause = %failure,
            "Host failure, rotating"
        );
        true
    }
}
