//! The key trait bounding the id types an `IdBimap` can generate.

use core::fmt::Debug;

/// An integral type usable as a generated key.
///
/// Keys start at [`ZERO`](IdKey::ZERO) and advance one step per fresh
/// allocation via [`successor`](IdKey::successor). The trait is implemented
/// for all primitive integer types; the default key type of
/// [`IdBimap`](crate::IdBimap) is `i64`.
///
/// The value type of a bimap should be distinct from its key type, otherwise
/// the by-key and by-value lookups become ambiguous to read. This cannot be
/// expressed as a trait bound on stable Rust, so it is a documented
/// convention rather than a compile error.
pub trait IdKey: Copy + Ord + Debug {
  /// The first key ever allocated.
  const ZERO: Self;

  /// The next key after `self`.
  ///
  /// # Panics
  ///
  /// May panic on overflow, like ordinary integer arithmetic. A bimap that
  /// exhausts its key type (e.g. more than 256 concurrent entries under `u8`
  /// keys) was given too small a key type.
  fn successor(self) -> Self;
}

macro_rules! impl_id_key {
  ($($t:ty),*) => {
    $(
      impl IdKey for $t {
        const ZERO: Self = 0;

        #[inline]
        fn successor(self) -> Self {
          self + 1
        }
      }
    )*
  };
}

impl_id_key!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
