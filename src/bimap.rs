//! This module defines [`IdBimap`], an ordered container that generates a
//! dense integer key for every stored value and supports lookup in both
//! directions (key to value, value to key).
//!
//! Storage is a `BTreeMap<K, Option<T>>`: a `Some` slot is occupied, a `None`
//! slot is a tombstone left behind by an erase. Tombstoned slots keep their
//! key entry and are reused lowest-key-first by later insertions, so the key
//! space stays dense and capacity only grows to the high-water mark of
//! concurrently occupied entries.

// Ensure code works in no_std environments if the feature is enabled.
extern crate alloc;

// Use std types when available (default)
#[cfg(not(feature = "no_std_support"))]
use std::collections::{btree_map, BTreeMap};
#[cfg(not(feature = "no_std_support"))]
use std::println;
#[cfg(not(feature = "no_std_support"))]
use std::vec::Vec;

// Use alloc types when only alloc is available and no_std_support is enabled
#[cfg(feature = "no_std_support")]
use alloc::collections::{btree_map, BTreeMap};
#[cfg(feature = "no_std_support")]
use alloc::vec::Vec;

use core::fmt::{self, Debug};
use core::ops::Index;

use crate::error::IdBimapError;
use crate::key::IdKey;

/// A bidirectional map between generated sequential integer keys and values.
///
/// Keys are handed out by the container, starting at zero. Erasing an entry
/// tombstones its slot instead of removing it; the next insertion reuses the
/// lowest tombstoned key before a fresh key is allocated. Iteration is always
/// in ascending key order.
///
/// Values are not required to be unique. Lookup by value returns the first
/// match in key order. [`insert`](IdBimap::insert) is idempotent on values
/// that are already present, while [`emplace`](IdBimap::emplace) always
/// creates a new entry; both policies are intentional API surface.
///
/// The key type `K` defaults to `i64` and can be any primitive integer. It
/// should be distinct from the value type `T` so the two lookup directions
/// stay unambiguous; see [`IdKey`].
///
/// # Examples
///
/// ```
/// use idbimap::IdBimap;
///
/// let mut map: IdBimap<&str> = IdBimap::new();
/// let (key_a, inserted) = map.insert("a");
/// assert_eq!((key_a, inserted), (0, true));
///
/// map.erase(key_a).unwrap();
/// let (key_b, _) = map.insert("b");
/// assert_eq!(key_b, 0); // the tombstoned slot was reused
/// ```
#[derive(Clone)]
#[cfg_attr(feature = "serde_support", derive(serde::Serialize, serde::Deserialize))]
pub struct IdBimap<T, K: IdKey = i64> {
  /// The slot store: `Some` is occupied, `None` is a tombstone.
  slots: BTreeMap<K, Option<T>>,
  /// The allocator counter: next fresh key under normal operation.
  next_key: K,
  /// The number of occupied slots, tracked for O(1) `len()`.
  len: usize,
}

impl<T, K: IdKey> IdBimap<T, K> {
  /// Creates a new, empty `IdBimap`.
  ///
  /// # Examples
  ///
  /// ```
  /// use idbimap::IdBimap;
  /// let map: IdBimap<String> = IdBimap::new();
  /// assert!(map.is_empty());
  /// assert_eq!(map.capacity(), 0);
  /// ```
  pub fn new() -> Self {
    IdBimap {
      slots: BTreeMap::new(),
      next_key: K::ZERO,
      len: 0,
    }
  }

  /// Returns the number of occupied slots.
  #[inline]
  pub fn len(&self) -> usize {
    self.len
  }

  /// Returns `true` if no slot is occupied.
  ///
  /// Tombstoned slots do not count as occupied, so a map can be empty while
  /// its [`capacity`](IdBimap::capacity) is nonzero.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Returns the total number of slots, occupied and tombstoned.
  #[inline]
  pub fn capacity(&self) -> usize {
    self.slots.len()
  }

  /// Returns the current value of the allocator counter: the key that the
  /// next fresh allocation starts from.
  ///
  /// The counter only moves when a fresh key is handed out; reusing a
  /// tombstoned slot does not touch it. [`clear`](IdBimap::clear) resets it
  /// to zero.
  #[inline]
  pub fn next_key(&self) -> K {
    self.next_key
  }

  /// Returns the key where the next insertion would land, without mutating
  /// anything: the lowest tombstoned key if one exists, otherwise the next
  /// fresh key.
  ///
  /// # Examples
  ///
  /// ```
  /// use idbimap::IdBimap;
  /// let mut map: IdBimap<&str> = ["a", "b", "c"].into_iter().collect();
  /// assert_eq!(map.next_index(), 3);
  /// map.erase(1).unwrap();
  /// assert_eq!(map.next_index(), 1);
  /// ```
  pub fn next_index(&self) -> K {
    for (key, slot) in &self.slots {
      if slot.is_none() {
        return *key;
      }
    }
    self.fresh_key_hint()
  }

  /// Returns `true` if no tombstoned slot exists among current entries.
  ///
  /// # Examples
  ///
  /// ```
  /// use idbimap::IdBimap;
  /// let mut map: IdBimap<&str> = ["a", "b"].into_iter().collect();
  /// assert!(map.is_contiguous());
  /// map.erase(0).unwrap();
  /// assert!(!map.is_contiguous());
  /// ```
  pub fn is_contiguous(&self) -> bool {
    self.slots.values().all(|slot| slot.is_some())
  }

  /// Returns `true` if `key` refers to an occupied slot.
  pub fn contains_key(&self, key: K) -> bool {
    self.slots.get(&key).map_or(false, |slot| slot.is_some())
  }

  /// Returns a reference to the value at `key`, or `None` if the key is
  /// absent or its slot is tombstoned.
  ///
  /// This is the non-erroring twin of [`value_of`](IdBimap::value_of).
  pub fn get(&self, key: K) -> Option<&T> {
    self.slots.get(&key).and_then(|slot| slot.as_ref())
  }

  /// Returns a reference to the value at `key`.
  ///
  /// # Errors
  ///
  /// [`IdBimapError::KeyNotFound`] if `key` is absent from the slot store or
  /// refers to a tombstoned slot.
  ///
  /// # Examples
  ///
  /// ```
  /// use idbimap::{IdBimap, IdBimapError};
  /// let map: IdBimap<&str> = ["a", "b"].into_iter().collect();
  /// assert_eq!(map.value_of(1), Ok(&"b"));
  /// assert_eq!(map.value_of(5), Err(IdBimapError::KeyNotFound));
  /// ```
  pub fn value_of(&self, key: K) -> Result<&T, IdBimapError> {
    self.get(key).ok_or(IdBimapError::KeyNotFound)
  }

  /// Returns the key of the first occupied slot (in key order) holding a
  /// value equal to `value`.
  ///
  /// # Errors
  ///
  /// [`IdBimapError::ValueNotFound`] if no occupied slot matches. This is a
  /// different error kind than key lookup fails with, so callers can branch
  /// on the cause.
  ///
  /// # Examples
  ///
  /// ```
  /// use idbimap::{IdBimap, IdBimapError};
  /// let map: IdBimap<&str> = ["a", "b"].into_iter().collect();
  /// assert_eq!(map.key_of(&"b"), Ok(1));
  /// assert_eq!(map.key_of(&"z"), Err(IdBimapError::ValueNotFound));
  /// ```
  pub fn key_of(&self, value: &T) -> Result<K, IdBimapError>
  where
    T: PartialEq,
  {
    self.find(value).ok_or(IdBimapError::ValueNotFound)
  }

  /// Returns the key of the first occupied slot (in key order) holding a
  /// value equal to `value`, or `None` if no occupied slot matches.
  pub fn find(&self, value: &T) -> Option<K>
  where
    T: PartialEq,
  {
    for (key, slot) in &self.slots {
      if slot.as_ref() == Some(value) {
        return Some(*key);
      }
    }
    None
  }

  /// Returns the key of the first occupied slot (in key order) whose value
  /// satisfies `predicate`, or `None` if none does.
  ///
  /// # Examples
  ///
  /// ```
  /// use idbimap::IdBimap;
  /// let map: IdBimap<i32> = [10, 25, 30].into_iter().collect();
  /// assert_eq!(map.find_if(|v| *v > 20), Some(1));
  /// assert_eq!(map.find_if(|v| *v > 99), None);
  /// ```
  pub fn find_if<P>(&self, mut predicate: P) -> Option<K>
  where
    P: FnMut(&T) -> bool,
  {
    for (key, slot) in &self.slots {
      if let Some(value) = slot {
        if predicate(value) {
          return Some(*key);
        }
      }
    }
    None
  }

  /// Inserts `value`, returning the key it landed at and whether a new entry
  /// was created.
  ///
  /// If an occupied slot already holds an equal value, that slot's key is
  /// returned with `false` and nothing is inserted: `insert` is idempotent
  /// on duplicates. Otherwise the value is placed in the lowest tombstoned
  /// slot, or under a freshly allocated key when no tombstone exists.
  ///
  /// # Examples
  ///
  /// ```
  /// use idbimap::IdBimap;
  /// let mut map: IdBimap<&str> = IdBimap::new();
  /// assert_eq!(map.insert("a"), (0, true));
  /// assert_eq!(map.insert("a"), (0, false)); // already present
  /// assert_eq!(map.len(), 1);
  /// ```
  pub fn insert(&mut self, value: T) -> (K, bool)
  where
    T: PartialEq,
  {
    if let Some(key) = self.find(&value) {
      return (key, false);
    }
    let mut reusable = None;
    for (key, slot) in &self.slots {
      if slot.is_none() {
        reusable = Some(*key);
        break;
      }
    }
    let key = match reusable {
      Some(key) => key,
      None => self.allocate_fresh_key(),
    };
    self.slots.insert(key, Some(value));
    self.len += 1;
    (key, true)
  }

  /// Inserts `value` without checking whether an equal value is already
  /// present: a new entry is always created.
  ///
  /// Placement: if the map is contiguous the value lands under a fresh key;
  /// otherwise it lands in the [`next_index`](IdBimap::next_index) slot (the
  /// lowest tombstone). The returned flag is always `true`; the pair shape
  /// is kept for parity with [`insert`](IdBimap::insert).
  ///
  /// # Examples
  ///
  /// ```
  /// use idbimap::IdBimap;
  /// let mut map: IdBimap<&str> = IdBimap::new();
  /// map.emplace("a");
  /// map.emplace("a"); // duplicates are allowed here
  /// assert_eq!(map.len(), 2);
  /// ```
  pub fn emplace(&mut self, value: T) -> (K, bool) {
    let key = if self.is_contiguous() {
      self.allocate_fresh_key()
    } else {
      self.next_index()
    };
    self.slots.insert(key, Some(value));
    self.len += 1;
    (key, true)
  }

  /// Tombstones the slot at `key`. The key entry is retained and will be
  /// reused by a later insertion.
  ///
  /// # Errors
  ///
  /// [`IdBimapError::KeyNotFound`] if `key` is absent or its slot is already
  /// tombstoned.
  ///
  /// # Examples
  ///
  /// ```
  /// use idbimap::{IdBimap, IdBimapError};
  /// let mut map: IdBimap<&str> = ["a"].into_iter().collect();
  /// assert_eq!(map.erase(0), Ok(()));
  /// assert_eq!(map.erase(0), Err(IdBimapError::KeyNotFound));
  /// assert_eq!(map.capacity(), 1); // the slot is kept as a tombstone
  /// ```
  pub fn erase(&mut self, key: K) -> Result<(), IdBimapError> {
    match self.slots.get_mut(&key) {
      Some(slot) if slot.is_some() => {
        *slot = None;
        self.len -= 1;
        Ok(())
      }
      _ => Err(IdBimapError::KeyNotFound),
    }
  }

  /// Tombstones the first occupied slot (in key order) holding a value equal
  /// to `value`. Silently does nothing when no slot matches.
  ///
  /// The asymmetry with [`erase`](IdBimap::erase), which errors on a missing
  /// key, is deliberate: a value that is already gone is an expected
  /// condition for this operation, not a failure.
  pub fn erase_value(&mut self, value: &T)
  where
    T: PartialEq,
  {
    for slot in self.slots.values_mut() {
      if slot.as_ref() == Some(value) {
        *slot = None;
        self.len -= 1;
        return;
      }
    }
  }

  /// Tombstones every occupied slot whose value satisfies `predicate`.
  ///
  /// The predicate is evaluated exactly once per occupied value, in key
  /// order.
  ///
  /// # Examples
  ///
  /// ```
  /// use idbimap::IdBimap;
  /// let mut map: IdBimap<i32> = [1, 2, 3, 4].into_iter().collect();
  /// map.delete_all(|v| v % 2 == 0);
  /// assert_eq!(map.len(), 2);
  /// assert_eq!(map.keys(), vec![0, 2]);
  /// ```
  pub fn delete_all<P>(&mut self, mut predicate: P)
  where
    P: FnMut(&T) -> bool,
  {
    for slot in self.slots.values_mut() {
      if slot.as_ref().map_or(false, &mut predicate) {
        *slot = None;
        self.len -= 1;
      }
    }
  }

  /// Tombstones every slot and resets the allocator counter to zero.
  ///
  /// Capacity is unchanged: all key entries are kept as tombstones, and the
  /// next insertions reuse them lowest-first, so key allocation effectively
  /// restarts from 0.
  ///
  /// # Examples
  ///
  /// ```
  /// use idbimap::IdBimap;
  /// let mut map: IdBimap<&str> = ["a", "b"].into_iter().collect();
  /// map.clear();
  /// assert!(map.is_empty());
  /// assert_eq!(map.capacity(), 2);
  /// assert_eq!(map.insert("c"), (0, true));
  /// ```
  pub fn clear(&mut self) {
    for slot in self.slots.values_mut() {
      *slot = None;
    }
    self.len = 0;
    self.next_key = K::ZERO;
  }

  /// Adjusts the number of slots to `new_cap`, without ever touching an
  /// occupied entry. Does nothing unless `new_cap > len()`.
  ///
  /// Growing (`new_cap > capacity()`) appends tombstoned slots under freshly
  /// allocated keys until `capacity() == new_cap`; later insertions reuse
  /// them lowest-first. Shrinking (`len() < new_cap < capacity()`) drops
  /// every slot keyed after the last occupied entry and compacts the
  /// allocator counter to just past the last surviving key.
  ///
  /// # Examples
  ///
  /// ```
  /// use idbimap::IdBimap;
  /// let mut map: IdBimap<&str> = ["a"].into_iter().collect();
  /// map.reserve(3);
  /// assert_eq!(map.capacity(), 3);
  /// assert_eq!(map.len(), 1);
  /// assert_eq!(map.insert("b"), (1, true)); // reuses the reserved slot
  /// ```
  pub fn reserve(&mut self, new_cap: usize) {
    if new_cap <= self.len {
      return;
    }
    let cap = self.slots.len();
    if new_cap > cap {
      for _ in cap..new_cap {
        let key = self.allocate_fresh_key();
        self.slots.insert(key, None);
      }
    } else if new_cap < cap {
      // Walk backwards to the last occupied entry; everything keyed after it
      // is a trailing tombstone. With no occupied entries, keep the first
      // slot only.
      let last_kept = self
        .slots
        .iter()
        .rev()
        .find(|(_, slot)| slot.is_some())
        .map(|(key, _)| *key)
        .or_else(|| self.slots.keys().next().copied());
      if let Some(last_kept) = last_kept {
        self.slots.split_off(&last_kept.successor());
        self.next_key = last_kept.successor();
      }
    }
  }

  /// Returns the keys of all occupied slots, in ascending key order.
  pub fn keys(&self) -> Vec<K> {
    self
      .slots
      .iter()
      .filter_map(|(key, slot)| if slot.is_some() { Some(*key) } else { None })
      .collect()
  }

  /// Returns an iterator over all slots in ascending key order, tombstones
  /// included. The element type is `(K, Option<&T>)`; a `None` second member
  /// is a tombstoned slot.
  ///
  /// # Examples
  ///
  /// ```
  /// use idbimap::IdBimap;
  /// let mut map: IdBimap<&str> = ["a", "b"].into_iter().collect();
  /// map.erase(0).unwrap();
  ///
  /// let slots: Vec<_> = map.iter().collect();
  /// assert_eq!(slots, vec![(0, None), (1, Some(&"b"))]);
  /// ```
  pub fn iter(&self) -> impl Iterator<Item = (K, Option<&T>)> {
    self.slots.iter().map(|(key, slot)| (*key, slot.as_ref()))
  }

  /// Returns an iterator over the occupied slots only, in ascending key
  /// order. The element type is `(K, &T)`.
  pub fn iter_occupied(&self) -> impl Iterator<Item = (K, &T)> {
    self
      .slots
      .iter()
      .filter_map(|(key, slot)| slot.as_ref().map(|value| (*key, value)))
  }

  /// Prints each key and its value, or an `empty` marker for tombstoned
  /// slots, one line per slot in key order. Intended for debugging; the
  /// format is not stable.
  #[cfg(not(feature = "no_std_support"))]
  pub fn print(&self)
  where
    T: Debug,
  {
    for (key, slot) in &self.slots {
      match slot {
        Some(value) => println!("{:?} {:?}", key, value),
        None => println!("{:?} empty", key),
      }
    }
  }

  /// Hands out a fresh key and advances the counter.
  ///
  /// After `clear()` the counter restarts at zero while tombstoned keys
  /// remain in the store, so the counter can be stale; never hand out a key
  /// that is already present.
  fn allocate_fresh_key(&mut self) -> K {
    let key = self.fresh_key_hint();
    self.next_key = key.successor();
    key
  }

  /// The key a fresh allocation would hand out right now.
  fn fresh_key_hint(&self) -> K {
    match self.slots.iter().next_back() {
      Some((&last, _)) if last >= self.next_key => last.successor(),
      _ => self.next_key,
    }
  }
}

/// Builds an `IdBimap` from an ordered sequence of values, assigning keys
/// `0..n-1` in iteration order.
///
/// # Examples
///
/// ```
/// use idbimap::IdBimap;
/// let map: IdBimap<&str> = ["a", "b", "c"].into_iter().collect();
/// assert_eq!(map.len(), 3);
/// assert_eq!(map.value_of(2), Ok(&"c"));
/// assert_eq!(map.next_key(), 3);
/// ```
impl<T, K: IdKey> FromIterator<T> for IdBimap<T, K> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let mut slots = BTreeMap::new();
    let mut key = K::ZERO;
    let mut len = 0;
    for value in iter {
      slots.insert(key, Some(value));
      key = key.successor();
      len += 1;
    }
    IdBimap {
      slots,
      next_key: key,
      len,
    }
  }
}

/// Implements immutable indexing by key (`map[key]`).
///
/// # Panics
///
/// Panics if `key` is absent from the slot store or refers to a tombstoned
/// slot. For non-panicking access, use [`get`](IdBimap::get) or
/// [`value_of`](IdBimap::value_of).
impl<T, K: IdKey> Index<K> for IdBimap<T, K> {
  type Output = T;

  fn index(&self, key: K) -> &Self::Output {
    match self.slots.get(&key) {
      Some(Some(value)) => value,
      Some(None) => panic!("IdBimap: key {:?} refers to a tombstoned slot", key),
      None => panic!("IdBimap: key {:?} is not in the slot store", key),
    }
  }
}

/// Implements the `Debug` trait for `IdBimap`, rendering every slot in key
/// order with `None` for tombstones.
impl<T: Debug, K: IdKey> Debug for IdBimap<T, K> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_map().entries(self.slots.iter()).finish()
  }
}

impl<T, K: IdKey> Default for IdBimap<T, K> {
  /// Creates an empty `IdBimap<T, K>`. Equivalent to `IdBimap::new()`.
  fn default() -> Self {
    Self::new()
  }
}

/// An iterator that consumes an `IdBimap` and yields every slot in key
/// order, tombstones included.
///
/// This struct is created by the `into_iter` method on [`IdBimap`].
#[derive(Debug)]
pub struct IdBimapIntoIter<T, K: IdKey = i64> {
  inner: btree_map::IntoIter<K, Option<T>>,
}

impl<T, K: IdKey> Iterator for IdBimapIntoIter<T, K> {
  type Item = (K, Option<T>);

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    self.inner.next()
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.inner.size_hint()
  }
}

/// Creates an iterator that takes ownership of the `IdBimap` and yields
/// `(key, Option<value>)` pairs for every slot in ascending key order.
impl<T, K: IdKey> IntoIterator for IdBimap<T, K> {
  type Item = (K, Option<T>);
  type IntoIter = IdBimapIntoIter<T, K>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    IdBimapIntoIter {
      inner: self.slots.into_iter(),
    }
  }
}
