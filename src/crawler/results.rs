//! Append-only result collection shared by all workers

use crate::model::EnrichedItem;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Unordered aggregate of enriched items
///
/// Writers append whole page batches; the lock is held only for the append.
#[derive(Debug, Default)]
pub struct ResultCollection {
    items: Mutex<Vec<EnrichedItem>>,
}

impl ResultCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, item: EnrichedItem) {
        self.lock().push(item);
    }

    /// Appends a batch of items under a single lock acquisition
    pub fn extend(&self, batch: impl IntoIterator<Item = EnrichedItem>) {
        self.lock().extend(batch);
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Consumes the collection and returns every item appended to it
    pub fn into_items(self) -> Vec<EnrichedItem> {
        self.items.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock(&self) -> MutexGuard<'_, Vec<EnrichedItem>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
