//! In-memory query cache for appointment reads.
//!
//! This module provides the `AppointmentCache`, a process-wide cache shared through
//! `AppState`. Entries are keyed by the query that produced them, so a lookup for one
//! appointment id never returns the result of another query. Each entry expires after a
//! configurable TTL and the cache never holds more than a configured number of entries.

use moka::future::Cache;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::server::model::appointment::Appointment;

/// Identifies the read query a cache entry belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AppointmentCacheKey {
    /// Single appointment lookup by id.
    ById(i32),
    /// Full appointment listing.
    All,
    /// Exact-match listing by patient name.
    ByPatientName(String),
    /// Exact-match listing by dentist.
    ByDentist(String),
}

impl AppointmentCacheKey {
    /// Returns true for keys holding list results.
    fn is_list(&self) -> bool {
        !matches!(self, Self::ById(_))
    }
}

/// Cached query result.
#[derive(Debug, Clone, PartialEq)]
pub enum CachedAppointments {
    One(Appointment),
    Many(Vec<Appointment>),
}

/// Query-keyed appointment cache with TTL and bounded capacity.
///
/// Cloning the cache shares the underlying entries. Every invalidation bumps a
/// generation counter; readers capture the generation before querying the database and
/// pass it to [`AppointmentCache::insert_if_current`], which refuses to store a result
/// loaded before a concurrent write.
#[derive(Clone)]
pub struct AppointmentCache {
    entries: Cache<AppointmentCacheKey, CachedAppointments>,
    generation: Arc<AtomicU64>,
}

impl AppointmentCache {
    /// Creates an empty cache.
    ///
    /// # Arguments
    /// - `ttl` - Lifetime of every entry from the moment it is inserted
    /// - `max_capacity` - Maximum number of entries held at once
    ///
    /// # Returns
    /// - `AppointmentCache` - New empty cache
    pub fn new(ttl: Duration, max_capacity: u64) -> Self {
        let entries = Cache::builder()
            .time_to_live(ttl)
            .max_capacity(max_capacity)
            .support_invalidation_closures()
            .build();

        Self {
            entries,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Gets a cached result if present and not expired.
    pub async fn get(&self, key: &AppointmentCacheKey) -> Option<CachedAppointments> {
        self.entries.get(key).await
    }

    /// Current invalidation generation.
    ///
    /// Capture this before loading a value from the database.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Stores a result only if no invalidation happened since `generation` was read.
    ///
    /// # Arguments
    /// - `key` - Query key the value was loaded for
    /// - `value` - Loaded result
    /// - `generation` - Value of [`AppointmentCache::generation`] taken before loading
    ///
    /// # Returns
    /// - `true` - The value was stored
    /// - `false` - A write invalidated the cache while the value was loading
    pub async fn insert_if_current(
        &self,
        key: AppointmentCacheKey,
        value: CachedAppointments,
        generation: u64,
    ) -> bool {
        if self.generation() != generation {
            tracing::debug!("Skipping stale cache fill for {:?}", key);
            return false;
        }

        self.entries.insert(key, value).await;
        true
    }

    /// Removes the entry for a single key.
    pub async fn invalidate(&self, key: &AppointmentCacheKey) {
        self.bump_generation();
        self.entries.invalidate(key).await;
    }

    /// Removes every list entry, keeping single-appointment entries.
    ///
    /// Any write can change the membership or order of a listing, so all list results
    /// are dropped together.
    pub async fn invalidate_lists(&self) {
        self.bump_generation();
        if let Err(e) = self.entries.invalidate_entries_if(|key, _| key.is_list()) {
            tracing::warn!("Falling back to full cache invalidation: {}", e);
            self.entries.invalidate_all();
        }
    }

    /// Number of live entries after pending evictions have been applied.
    pub async fn len(&self) -> u64 {
        self.entries.run_pending_tasks().await;
        self.entries.entry_count()
    }

    fn bump_generation(&self) {
        // Bumped before removal so a reader that loaded before this write cannot refill
        self.generation.fetch_add(1, Ordering::AcqRel);
    }
}
