//! Collision-free identifier allocation.
//!
//! The allocator owns no record of which ids are taken. The host supplies
//! an [`AllocationTable`] on every call and the allocator probes it.
//!
//! ## Probing
//!
//! 1. Start at `last_allocated + 1`; zero is skipped
//! 2. Probe upward while the candidate is taken
//! 3. After `streak_limit` consecutive collisions jump to a pseudorandom
//!    candidate and keep probing from there
//! 4. Give up with [`AllocError::Exhausted`] after `max_probes` probes
//!
//! The pseudorandom state survives [`IdAllocator::rewind`], so a dense
//! region that forced one escape sends the next escape somewhere new.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;

/// 3^30, the seed of the escape sequence.
const DEFAULT_SEED: i64 = 205_891_132_094_649;

/// Error type for id allocation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AllocError {
    /// No free id was found within the probe budget.
    #[error("Identifier space exhausted after {probes} probes")]
    Exhausted {
        /// Number of candidates tested.
        probes: u64,
    },
}

/// Membership predicate over ids, supplied by the allocator's host.
///
/// Must be pure for the duration of one `allocate` call.
pub trait AllocationTable {
    /// Whether `id` is already in use.
    fn is_allocated(&self, id: i64) -> bool;
}

impl<F: Fn(i64) -> bool> AllocationTable for F {
    fn is_allocated(&self, id: i64) -> bool {
        self(id)
    }
}

impl AllocationTable for BTreeSet<i64> {
    fn is_allocated(&self, id: i64) -> bool {
        self.contains(&id)
    }
}

impl<S: BuildHasher> AllocationTable for HashSet<i64, S> {
    fn is_allocated(&self, id: i64) -> bool {
        self.contains(&id)
    }
}

/// Configuration for an [`IdAllocator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocatorConfig {
    /// Consecutive collisions tolerated before jumping to a pseudorandom candidate.
    pub streak_limit: u32,
    /// Initial state of the pseudorandom sequence.
    pub seed: i64,
    /// Probes per `allocate` call before reporting exhaustion.
    pub max_probes: u64,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            streak_limit: 100,
            seed: DEFAULT_SEED,
            max_probes: 1 << 20,
        }
    }
}

/// Generates ids that the host's table reports as free.
///
/// Not reentrant: `allocate` mutates the cursor and the pseudorandom state.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    last_allocated: i64,
    random_state: i64,
    config: AllocatorConfig,
}

impl IdAllocator {
    /// Create an allocator with the default configuration.
    pub fn new() -> Self {
        Self::with_config(AllocatorConfig::default())
    }

    /// Create an allocator with a custom configuration.
    pub fn with_config(config: AllocatorConfig) -> Self {
        Self {
            last_allocated: 0,
            random_state: config.seed,
            config,
        }
    }

    /// Allocate an id not present in `table`.
    ///
    /// The caller is expected to record the returned id in its table before
    /// the next call.
    pub fn allocate<T: AllocationTable + ?Sized>(&mut self, table: &T) -> Result<i64, AllocError> {
        let streak_limit = self.config.streak_limit.max(1);
        let mut candidate = self.last_allocated.wrapping_add(1);
        let mut streak = 0u32;
        let mut probes = 0u64;

        loop {
            if candidate == 0 {
                candidate = 1;
            }
            if probes >= self.config.max_probes {
                tracing::warn!(
                    probes,
                    last_allocated = self.last_allocated,
                    "id allocator gave up without finding a free id"
                );
                return Err(AllocError::Exhausted { probes });
            }
            probes += 1;

            if !table.is_allocated(candidate) {
                self.last_allocated = candidate;
                return Ok(candidate);
            }

            candidate = candidate.wrapping_add(1);
            streak += 1;
            if streak >= streak_limit {
                candidate = self.next_random();
                streak = 0;
                tracing::debug!(
                    candidate,
                    probes,
                    "dense id region, jumping to pseudorandom candidate"
                );
            }
        }
    }

    /// Move the linear cursor back so the next probe starts at 1.
    ///
    /// Does not reset the pseudorandom state.
    pub fn rewind(&mut self) {
        self.last_allocated = 0;
    }

    /// The most recently allocated id, or 0 after creation or `rewind`.
    pub fn last_allocated(&self) -> i64 {
        self.last_allocated
    }

    /// Get the configuration.
    pub fn config(&self) -> &AllocatorConfig {
        &self.config
    }

    fn next_random(&mut self) -> i64 {
        self.random_state = self.random_state.wrapping_mul(3);
        self.random_state
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
