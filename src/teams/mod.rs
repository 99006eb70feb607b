//! Shuffle-then-deal team assignment.
//!
//! `distribute` turns a roster into named teams whose sizes differ by at
//! most one. Randomness enters only through the shuffle; dealing a given
//! permutation is deterministic (`deal_round_robin`).

pub mod distributor;

pub use distributor::{deal_round_robin, distribute, Team, Teams};
