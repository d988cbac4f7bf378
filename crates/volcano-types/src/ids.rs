//! Type-safe identifier wrapper for volcano records.
//!
//! Volcano identifiers come from the dataset's integer primary key. The
//! newtype keeps them from being mixed up with other integers (counts,
//! years, casualty figures) at compile time.

use serde::{Deserialize, Serialize};

/// Unique identifier for a volcano in the dataset.
///
/// Serializes as a bare integer, matching the `id` field of the original
/// wire format.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct VolcanoId(pub i64);

impl VolcanoId {
    /// Return the inner integer value.
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for VolcanoId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for VolcanoId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<VolcanoId> for i64 {
    fn from(id: VolcanoId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_through_i64() {
        let id = VolcanoId::from(42);
        assert_eq!(id.into_inner(), 42);
        assert_eq!(i64::from(id), 42);
    }

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&VolcanoId(7));
        assert_eq!(json.ok(), Some(String::from("7")));
    }

    #[test]
    fn display_matches_inner() {
        assert_eq!(VolcanoId(123).to_string(), "123");
    }
}
