//! Opaque labels handed to the engine: people, games, charades prompts, teams.
//!
//! The engine never looks inside a label beyond equality. Labels are shared
//! `Arc<str>` so pools and team lists clone without copying text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A drawable or distributable item (a person's name, a game, an animal).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Item(Arc<str>);

impl Item {
    /// Create a new item from any string-like value.
    #[must_use]
    pub fn new(label: impl AsRef<str>) -> Self {
        Self(Arc::from(label.as_ref()))
    }

    /// The label text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Build a list of items from string literals.
    ///
    /// ```
    /// use party_draw::core::Item;
    ///
    /// let games = Item::list(["Spoon Walk", "Split or Steal"]);
    /// assert_eq!(games[1].as_str(), "Split or Steal");
    /// ```
    pub fn list<I, S>(labels: I) -> Vec<Item>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        labels.into_iter().map(Item::new).collect()
    }
}

impl fmt::Debug for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Item({:?})", &*self.0)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Item {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Item {
    fn from(label: String) -> Self {
        Self(Arc::from(label))
    }
}

impl From<Item> for String {
    fn from(item: Item) -> Self {
        item.0.to_string()
    }
}

impl AsRef<str> for Item {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Item {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Item {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

/// Name of one of the fixed team bins ("Dog", "Horse", ...).
pub type TeamName = Item;
