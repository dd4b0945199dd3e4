//! Location tags
//!
//! Where a migration was observed. [`Locations`] keeps the tags of one
//! migration in precedence order: `remote` before `local`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{self, Display, Formatter};

/// Place a migration was found in
///
/// Declaration order is the precedence order used by [`Locations`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    /// Recorded in the remote record store
    Remote,
    /// Present as a file in the local migrations directory
    Local,
}

impl Location {
    /// Lowercase tag
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Location::Remote => "remote",
            Location::Local => "local",
        }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered, duplicate-free set of location tags
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locations(BTreeSet<Location>);

impl Locations {
    /// Empty set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a location; returns false if it was already present
    #[inline]
    pub fn insert(&mut self, location: Location) -> bool {
        self.0.insert(location)
    }

    /// Check membership
    #[inline]
    #[must_use]
    pub fn contains(&self, location: Location) -> bool {
        self.0.contains(&location)
    }

    /// Iterate in precedence order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Location> + '_ {
        self.0.iter().copied()
    }

    /// Number of tags
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// No tags at all
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Tags as a vector, in precedence order
    #[must_use]
    pub fn to_vec(&self) -> Vec<Location> {
        self.iter().collect()
    }
}

impl FromIterator<Location> for Locations {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[Location; N]> for Locations {
    fn from(tags: [Location; N]) -> Self {
        tags.into_iter().collect()
    }
}

impl Display for Locations {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let tags: Vec<_> = self.iter().map(|l| l.as_str()).collect();
        write!(f, "{}", tags.join(", "))
    }
}
