//! Shared reference data
//!
//! Holds the current [`FixEvaluator`] snapshot. Readers clone an `Arc` and
//! work on that snapshot for as long as they like; a reload builds a new
//! evaluator off to the side and swaps the pointer, so no reader ever sees
//! a half-updated zone set.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::evaluator::FixEvaluator;

#[derive(Debug)]
pub struct SharedEvaluator {
    current: RwLock<Arc<FixEvaluator>>,
    generation: AtomicU64,
}

impl SharedEvaluator {
    pub fn new(evaluator: FixEvaluator) -> Self {
        SharedEvaluator {
            current: RwLock::new(Arc::new(evaluator)),
            generation: AtomicU64::new(0),
        }
    }

    /// The snapshot in effect right now
    pub fn current(&self) -> Arc<FixEvaluator> {
        // A poisoned lock still holds a complete Arc
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Install a new snapshot, returning the one it replaced together with
    /// the generation number the new snapshot was given.
    ///
    /// The generation is bumped under the write lock, so concurrent reloads
    /// each see their own number in swap order.
    pub fn replace(&self, evaluator: FixEvaluator) -> (Arc<FixEvaluator>, u64) {
        let zones = evaluator.index().zones().len();
        let harbors = evaluator.harbors().len();

        let (previous, generation) = {
            let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
            let previous = std::mem::replace(&mut *guard, Arc::new(evaluator));
            (previous, self.generation.fetch_add(1, Ordering::SeqCst) + 1)
        };

        log::info!(
            "Reference data replaced (generation {}, {} zones, {} harbors)",
            generation,
            zones,
            harbors
        );
        (previous, generation)
    }

    /// Number of replacements since construction
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}
