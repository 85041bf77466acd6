use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::{catalog, Patch};

/// How many patches of the queue are visible and buyable.
pub const VISIBLE_PATCHES: usize = 3;

/// The shared circular queue of remaining patches.
///
/// The neutral pawn conceptually sits at the front; buying the patch at
/// visible offset `k` passes the pawn over the first `k` entries (sending
/// them to the back) and removes the entry it lands on.
#[derive(Clone, Debug)]
pub struct PatchQueue {
    patches: VecDeque<Patch>,
}

impl PatchQueue {
    /// The short-variant queue: two patch kinds randomly interleaved.
    pub fn new_short(rng: &mut StdRng) -> Self {
        Self::from_patches(catalog::short_catalog(rng))
    }

    /// The standard queue: the full 33-patch catalog, uniformly shuffled.
    pub fn new_standard(rng: &mut StdRng) -> Self {
        Self::shuffled(catalog::standard_catalog(), rng)
    }

    /// A queue over `patches` in a uniformly shuffled order.
    pub fn shuffled(mut patches: Vec<Patch>, rng: &mut StdRng) -> Self {
        patches.shuffle(rng);
        Self::from_patches(patches)
    }

    /// A queue that draws `patches` in exactly the given order.
    pub fn from_patches(patches: Vec<Patch>) -> Self {
        Self {
            patches: patches.into(),
        }
    }

    /// The patch at visible offset `k` from the neutral pawn, without
    /// moving anything. `None` if fewer than `k + 1` patches remain.
    ///
    /// Panics if `k` is outside the visible window.
    pub fn visible(&self, k: usize) -> Option<&Patch> {
        assert!(k < VISIBLE_PATCHES, "visible offset {k} is out of range");
        self.patches.get(k)
    }

    /// Removes and returns the patch at visible offset `k`, rotating the
    /// `k` entries before it to the back of the queue in order.
    ///
    /// Panics if no such patch exists; callers check with [`Self::visible()`]
    /// first.
    pub fn take(&mut self, k: usize) -> Patch {
        assert!(k < VISIBLE_PATCHES, "visible offset {k} is out of range");
        assert!(k < self.patches.len(), "took patch {k} from a queue of {}", self.patches.len());
        self.patches.rotate_left(k);
        self.patches
            .pop_front()
            .expect("took a patch from an empty queue")
    }

    pub fn remaining(&self) -> usize {
        self.patches.len()
    }

    /// All remaining patches in draw order, front first.
    pub fn iter(&self) -> impl Iterator<Item = &Patch> {
        self.patches.iter()
    }
}
