//! Shared job queue for catalogue pages
//!
//! The queue is seeded once before any worker starts. Workers then drain it
//! with `try_take`, which never blocks: an empty queue is the signal for a
//! worker to finish, so no separate "done" broadcast exists.

use crate::model::Job;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// FIFO of pending page jobs shared by all workers
#[derive(Debug, Default)]
pub struct JobQueue {
    jobs: Mutex<VecDeque<Job>>,
}

impl JobQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a queue holding `jobs` in order
    pub fn seed(jobs: impl IntoIterator<Item = Job>) -> Self {
        Self {
            jobs: Mutex::new(jobs.into_iter().collect()),
        }
    }

    /// Adds a job to the back of the queue
    pub fn put(&self, job: Job) {
        self.lock().push_back(job);
    }

    /// Takes the next job without waiting
    ///
    /// Returns `None` once every job has been handed out. Each job is
    /// returned to exactly one caller.
    pub fn try_take(&self) -> Option<Job> {
        self.lock().pop_front()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // Push and pop never leave the deque partially updated; poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, VecDeque<Job>> {
        self.jobs.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
