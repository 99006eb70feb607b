//! The list of people typed in before teams are drawn.
//!
//! A roster enforces the input rules a team draw relies on: names are
//! trimmed, blanks are refused, and there is a size limit. Two people may
//! share a name. Like the rest of the engine, every change returns a new
//! roster.

use im::Vector;
use serde::Serialize;
use tracing::debug;

use crate::core::config::DEFAULT_ROSTER_LIMIT;
use crate::core::item::Item;
use crate::error::{DrawError, DrawResult};

/// Append-only list of names, removable by position.
///
/// ```
/// use party_draw::roster::Roster;
///
/// let roster = Roster::new(30).add("  Ann ").unwrap().add("Bo").unwrap();
/// assert_eq!(roster.names()[0], "Ann");
/// assert!(roster.add("   ").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Roster {
    limit: usize,
    entries: Vector<Item>,
}

impl Roster {
    /// Empty roster holding at most `limit` names.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            entries: Vector::new(),
        }
    }

    /// Whether `draft` would be accepted by `add`.
    #[must_use]
    pub fn can_add(&self, draft: &str) -> bool {
        !draft.trim().is_empty() && !self.is_full()
    }

    /// Append a trimmed name.
    pub fn add(&self, draft: &str) -> DrawResult<Roster> {
        let name = draft.trim();
        if name.is_empty() {
            return Err(DrawError::EmptyName);
        }
        if self.is_full() {
            return Err(DrawError::RosterFull { limit: self.limit });
        }

        let mut next = self.clone();
        next.entries.push_back(Item::new(name));
        debug!(person = name, size = next.entries.len(), "added to roster");
        Ok(next)
    }

    /// Remove the entry at `index`.
    pub fn remove(&self, index: usize) -> DrawResult<Roster> {
        if index >= self.entries.len() {
            return Err(DrawError::RosterIndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }

        let mut next = self.clone();
        let removed = next.entries.remove(index);
        debug!(person = %removed, index, "removed from roster");
        Ok(next)
    }

    /// Drop every name, keeping the limit.
    #[must_use]
    pub fn clear(&self) -> Roster {
        Roster::new(self.limit)
    }

    /// Names in the order they were added.
    #[must_use]
    pub fn names(&self) -> Vec<Item> {
        self.entries.iter().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.limit
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new(DEFAULT_ROSTER_LIMIT)
    }
}
