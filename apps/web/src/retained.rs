//! Resumes kept after a failed screening.
//!
//! A browser cannot re-populate a file input, so the landing page carries a
//! token instead and the next POST picks the file back up from here. Entries
//! are single-use, expire after `ttl` and the store never holds more than
//! `capacity` files.

use std::time::{Duration, Instant};

use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

use crate::backend::ResumeFile;

const DEFAULT_TTL: Duration = Duration::from_secs(15 * 60);
const DEFAULT_CAPACITY: usize = 64;

struct Entry {
    file: ResumeFile,
    stored_at: Instant,
}

pub struct RetainedUploads {
    entries: DashMap<Uuid, Entry>,
    ttl: Duration,
    capacity: usize,
}

impl Default for RetainedUploads {
    fn default() -> Self {
        Self::new(DEFAULT_TTL, DEFAULT_CAPACITY)
    }
}

impl RetainedUploads {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
            capacity: capacity.max(1),
        }
    }

    /// Stores `file` and returns the token the page sends back.
    pub fn keep(&self, file: ResumeFile) -> Uuid {
        self.prune();
        while self.entries.len() >= self.capacity {
            let oldest = self
                .entries
                .iter()
                .min_by_key(|e| e.value().stored_at)
                .map(|e| *e.key());
            match oldest {
                Some(token) => {
                    self.entries.remove(&token);
                }
                None => break,
            }
        }

        let token = Uuid::new_v4();
        debug!(
            "Retaining {} for retry ({token}, {} already held)",
            file.file_name,
            self.entries.len()
        );
        self.entries.insert(
            token,
            Entry {
                file,
                stored_at: Instant::now(),
            },
        );
        token
    }

    /// Removes and returns the file for `token` if it has not expired.
    pub fn take(&self, token: &Uuid) -> Option<ResumeFile> {
        let (_, entry) = self.entries.remove(token)?;
        (entry.stored_at.elapsed() < self.ttl).then_some(entry.file)
    }

    fn prune(&self) {
        let ttl = self.ttl;
        self.entries.retain(|_, entry| entry.stored_at.elapsed() < ttl);
    }
}
