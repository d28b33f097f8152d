use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Operational counters for monitoring
#[derive(Clone)]
pub struct Metrics {
    pub registrations: Arc<AtomicU64>,
    pub logins: Arc<AtomicU64>,
    pub books_created: Arc<AtomicU64>,
    pub books_deleted: Arc<AtomicU64>,
    pub progress_updates: Arc<AtomicU64>,
    pub reviews_added: Arc<AtomicU64>,
    pub goals_set: Arc<AtomicU64>,
    pub start_time: Instant,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            registrations: Arc::new(AtomicU64::new(0)),
            logins: Arc::new(AtomicU64::new(0)),
            books_created: Arc::new(AtomicU64::new(0)),
            books_deleted: Arc::new(AtomicU64::new(0)),
            progress_updates: Arc::new(AtomicU64::new(0)),
            reviews_added: Arc::new(AtomicU64::new(0)),
            goals_set: Arc::new(AtomicU64::new(0)),
            start_time: Instant::now(),
        }
    }

    pub fn inc_registrations(&self) {
        self.registrations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_logins(&self) {
        self.logins.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_books_created(&self) {
        self.books_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_books_deleted(&self) {
        self.books_deleted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_progress_updates(&self) {
        self.progress_updates.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_reviews_added(&self) {
        self.reviews_added.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_goals_set(&self) {
        self.goals_set.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            registrations: self.registrations.load(Ordering::Relaxed),
            logins: self.logins.load(Ordering::Relaxed),
            books_created: self.books_created.load(Ordering::Relaxed),
            books_deleted: self.books_deleted.load(Ordering::Relaxed),
            progress_updates: self.progress_updates.load(Ordering::Relaxed),
            reviews_added: self.reviews_added.load(Ordering::Relaxed),
            goals_set: self.goals_set.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
pub struct MetricsSnapshot {
    pub registrations: u64,
    pub logins: u64,
    pub books_created: u64,
    pub books_deleted: u64,
    pub progress_updates: u64,
    pub reviews_added: u64,
    pub goals_set: u64,
    pub uptime_seconds: u64,
}
