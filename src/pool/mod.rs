//! Draw-without-replacement pools.
//!
//! A pool remembers the full set it was configured with and the items still
//! eligible to be drawn. Every screen that "picks one at random, no repeats
//! until reset" is a `Pool`:
//!
//! - the game wheel (pick the next game)
//! - charades (pick the next animal)
//!
//! ## Key Types
//!
//! - `Pool`: Full set plus remaining items, as an immutable snapshot
//! - `Draw`: The item drawn and where it sat in the remaining sequence

pub mod draw;

pub use draw::{Draw, Pool};
