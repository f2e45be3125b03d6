//! Host pool and rotation.
//!
//! # Responsibilities
//! - Own the ordered list of host entries
//! - Track the current host index
//! - Move away from a failed host without ever dropping it from the pool

use rand::rngs::StdRng;
use rand::Rng;

use crate::error::ConfigError;
use crate::pool::host::HostEntry;

/// An ordered pool of hosts with a sticky cursor.
///
/// `current` is always a valid index into `hosts`; the pool is never empty.
#[derive(Debug)]
pub struct HostPool {
    hosts: Vec<HostEntry>,
    current: usize,
    rng: StdRng,
}

impl HostPool {
    /// Create a pool; the starting host is chosen uniformly at random.
    ///
    /// Entries equal after normalization are kept once, at their first position.
    pub fn new(entries: Vec<HostEntry>, mut rng: StdRng) -> Result<Self, ConfigError> {
        let mut hosts: Vec<HostEntry> = Vec::with_capacity(entries.len());
        for entry in entries {
            if hosts.contains(&entry) {
                tracing::debug!(host = %entry, "Dropping duplicate host entry");
                continue;
            }
            hosts.push(entry);
        }

        if hosts.is_empty() {
            return Err(ConfigError::EmptyHostList);
        }
        let current = rng.gen_range(0..hosts.len());
        Ok(Self { hosts, current, rng })
    }

    /// The host requests are currently sent to.
    pub fn current(&self) -> &HostEntry {
        &self.hosts[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn hosts(&self) -> &[HostEntry] {
        &self.hosts
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    /// Select a different host, uniformly among the others.
    ///
    /// The failed host is taken out, a new index is drawn over the rest, and
    /// the failed host is appended at the back so it stays eligible later.
    /// Appending never shifts the drawn index. With a single host this
    /// re-appends it and resets the cursor to 0.
    pub fn rotate(&mut self) -> &HostEntry {
        let previous = self.hosts.remove(self.current);

        self.current = if self.hosts.is_empty() {
            0
        } else {
            self.rng.gen_range(0..self.hosts.len())
        };

        self.hosts.push(previous);
        &self.hosts[self.current]
    }
}
