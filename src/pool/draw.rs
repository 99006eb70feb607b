//! Pool snapshots and the uniform draw.
//!
//! Pools are values: `draw` and `reset` return a new pool and leave the
//! original untouched. Both sides are `im::Vector`s, so the returned snapshot
//! shares structure with the old one and cloning is O(1).

use im::Vector;
use rustc_hash::FxHashSet;
use serde::Serialize;
use tracing::debug;

use crate::core::item::Item;
use crate::core::rng::DrawRng;
use crate::error::{DrawError, DrawResult};

/// The outcome of a single draw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Draw {
    /// The item removed from the pool.
    pub item: Item,

    /// Position the item occupied in `remaining` just before the draw.
    pub index: usize,
}

/// Items still eligible to be drawn, plus the set to restore on reset.
///
/// ## Usage
///
/// ```
/// use party_draw::core::{DrawRng, Item};
/// use party_draw::pool::Pool;
///
/// let mut rng = DrawRng::new(7);
/// let pool = Pool::new(Item::list(["Rat", "Ox", "Tiger"])).unwrap();
///
/// let (first, pool) = pool.draw(&mut rng).unwrap();
/// assert_eq!(pool.peek_remaining(), 2);
/// assert!(!pool.contains_remaining(&first.item));
///
/// let pool = pool.reset();
/// assert_eq!(pool.peek_remaining(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Pool {
    /// Configured full set, in original order.
    full: Vector<Item>,

    /// Items not yet drawn. Always a subsequence of `full`.
    remaining: Vector<Item>,
}

impl Pool {
    /// Create a pool holding every item, none drawn.
    ///
    /// Fails with `DuplicateItem` if the same item appears twice. An empty
    /// list is accepted and yields an already exhausted pool.
    pub fn new(items: impl IntoIterator<Item = Item>) -> DrawResult<Self> {
        let full: Vector<Item> = items.into_iter().collect();

        let mut seen = FxHashSet::default();
        for item in &full {
            if !seen.insert(item) {
                return Err(DrawError::DuplicateItem { item: item.to_string() });
            }
        }

        Ok(Self {
            remaining: full.clone(),
            full,
        })
    }

    /// Draw one remaining item uniformly at random.
    ///
    /// Returns the draw and the pool without that item. On an exhausted pool
    /// this fails with `EmptyPool` and `self` is unchanged.
    pub fn draw(&self, rng: &mut DrawRng) -> DrawResult<(Draw, Pool)> {
        if self.remaining.is_empty() {
            return Err(DrawError::EmptyPool);
        }

        let index = rng.gen_range_usize(0..self.remaining.len());
        let mut remaining = self.remaining.clone();
        let item = remaining.remove(index);

        debug!(item = %item, index, left = remaining.len(), "drew from pool");

        let next = Pool {
            full: self.full.clone(),
            remaining,
        };
        Ok((Draw { item, index }, next))
    }

    /// Restore every configured item, in original order.
    #[must_use]
    pub fn reset(&self) -> Pool {
        debug!(total = self.full.len(), "pool reset");
        Pool {
            full: self.full.clone(),
            remaining: self.full.clone(),
        }
    }

    /// Number of items still eligible to be drawn.
    #[must_use]
    pub fn peek_remaining(&self) -> usize {
        self.remaining.len()
    }

    /// Size of the configured full set.
    #[must_use]
    pub fn total(&self) -> usize {
        self.full.len()
    }

    /// Number of items drawn since construction or the last reset.
    #[must_use]
    pub fn drawn_count(&self) -> usize {
        self.full.len() - self.remaining.len()
    }

    /// True when nothing is left to draw.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Remaining items in stable display order.
    pub fn remaining(&self) -> impl Iterator<Item = &Item> {
        self.remaining.iter()
    }

    /// Already drawn items, in full-set order.
    pub fn drawn(&self) -> impl Iterator<Item = &Item> {
        self.full
            .iter()
            .filter(move |item| !self.remaining.iter().any(|r| r == *item))
    }

    /// The configured full set, in original order.
    pub fn full_set(&self) -> impl Iterator<Item = &Item> {
        self.full.iter()
    }

    /// Check whether an item can still be drawn.
    #[must_use]
    pub fn contains_remaining(&self, item: &Item) -> bool {
        self.remaining.iter().any(|r| r == item)
    }
}
