//! Instrumented element types for contig lifecycle and panic-safety tests.
//!
//! Provides [`Tracked`] (an element that reports construction, cloning,
//! and destruction to a shared [`LifeTally`]), [`FailingClone`] (a clone
//! that panics once a shared fuse runs out), and [`MoveOnly`] (a payload
//! with no `Clone` impl, for asserting that growth never needs one).

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared construction/clone/drop accounting.
///
/// Hand one tally (via `Arc`) to a family of [`Tracked`] or
/// [`FailingClone`] elements, run the scenario, then assert on the
/// counters. [`LifeTally::live`] is the key invariant: after a container
/// is dropped it must return 0, panics included.
#[derive(Debug, Default)]
pub struct LifeTally {
    created: AtomicUsize,
    cloned: AtomicUsize,
    dropped: AtomicUsize,
}

impl LifeTally {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Fresh constructions recorded.
    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    /// Successful clones recorded.
    pub fn cloned(&self) -> usize {
        self.cloned.load(Ordering::SeqCst)
    }

    /// Drops recorded.
    pub fn dropped(&self) -> usize {
        self.dropped.load(Ordering::SeqCst)
    }

    /// Elements currently alive: constructions (fresh or clone) minus drops.
    pub fn live(&self) -> usize {
        self.created() + self.cloned() - self.dropped()
    }

    pub fn record_created(&self) {
        self.created.fetch_add(1, Ordering::SeqCst);
    }

    pub fn record_cloned(&self) {
        self.cloned.fetch_add(1, Ordering::SeqCst);
    }

    pub fn record_dropped(&self) {
        self.dropped.fetch_add(1, Ordering::SeqCst);
    }
}

/// An element that reports its construction, cloning, and destruction to
/// a shared [`LifeTally`].
#[derive(Debug)]
pub struct Tracked {
    pub value: u32,
    tally: Arc<LifeTally>,
}

impl Tracked {
    pub fn new(value: u32, tally: &Arc<LifeTally>) -> Self {
        tally.record_created();
        Self {
            value,
            tally: Arc::clone(tally),
        }
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        self.tally.record_cloned();
        Self {
            value: self.value,
            tally: Arc::clone(&self.tally),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.tally.record_dropped();
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Tracked {}

/// An element whose clone panics once a shared fuse runs out.
///
/// The fuse counts *successful* clones remaining: `FailingClone::fuse(2)`
/// allows two clones, and the third panics. Construction and destruction
/// are tallied like [`Tracked`], so leak assertions work across the
/// panic.
#[derive(Debug)]
pub struct FailingClone {
    pub value: u32,
    fuse: Arc<AtomicUsize>,
    tally: Arc<LifeTally>,
}

impl FailingClone {
    /// A fuse permitting `clones_before_panic` successful clones.
    pub fn fuse(clones_before_panic: usize) -> Arc<AtomicUsize> {
        Arc::new(AtomicUsize::new(clones_before_panic))
    }

    pub fn new(value: u32, fuse: &Arc<AtomicUsize>, tally: &Arc<LifeTally>) -> Self {
        tally.record_created();
        Self {
            value,
            fuse: Arc::clone(fuse),
            tally: Arc::clone(tally),
        }
    }
}

impl Clone for FailingClone {
    fn clone(&self) -> Self {
        let burned = self
            .fuse
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_err();
        if burned {
            panic!("clone fuse burned out");
        }
        self.tally.record_cloned();
        Self {
            value: self.value,
            fuse: Arc::clone(&self.fuse),
            tally: Arc::clone(&self.tally),
        }
    }
}

impl Drop for FailingClone {
    fn drop(&mut self) {
        self.tally.record_dropped();
    }
}

impl PartialEq for FailingClone {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for FailingClone {}

/// A payload with no `Clone` impl.
///
/// Containers that relocate by move alone must work with this type; any
/// accidental clone in a growth path fails to compile.
#[derive(Debug, PartialEq, Eq)]
pub struct MoveOnly(pub u32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_balances_over_scope() {
        let tally = LifeTally::new();
        {
            let a = Tracked::new(1, &tally);
            let _b = a.clone();
            assert_eq!(tally.live(), 2);
        }
        assert_eq!(tally.created(), 1);
        assert_eq!(tally.cloned(), 1);
        assert_eq!(tally.dropped(), 2);
        assert_eq!(tally.live(), 0);
    }

    #[test]
    fn failing_clone_burns_out_on_schedule() {
        let tally = LifeTally::new();
        let fuse = FailingClone::fuse(1);
        let original = FailingClone::new(7, &fuse, &tally);
        let copy = original.clone();
        assert_eq!(copy, original);

        let result = std::panic::catch_unwind(|| original.clone());
        assert!(result.is_err(), "second clone should panic");
        assert_eq!(tally.live(), 2);
    }
}
