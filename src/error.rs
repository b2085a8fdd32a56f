//! Error type for fallible `IdBimap` operations.

use core::fmt;

/// The ways a lookup or erase on an [`IdBimap`](crate::IdBimap) can fail.
///
/// The two kinds are deliberately distinct so callers can branch on whether a
/// key or a value was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdBimapError {
  /// The key is not in the slot store, or refers to a tombstoned slot.
  KeyNotFound,
  /// No occupied slot holds a matching value.
  ValueNotFound,
}

impl fmt::Display for IdBimapError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      IdBimapError::KeyNotFound => write!(f, "Key cannot be found"),
      IdBimapError::ValueNotFound => write!(f, "Value cannot be found"),
    }
  }
}

// Implement std::error::Error only if std is available and it's not a no_std build.
#[cfg(not(feature = "no_std_support"))]
impl std::error::Error for IdBimapError {}
