//! This crate provides a bidirectional association between a dense set of
//! sequential integer identifiers ("keys") and arbitrary values.
//!
//! Keys are generated by the container. Erasing an entry does not discard its
//! key slot: the slot is tombstoned and reused by a later insertion, keeping
//! the key space as dense as possible and bounding capacity growth to the
//! high-water mark of concurrently occupied entries. This makes [`IdBimap`]
//! a building block for object registries and entity tables that need stable,
//! compact integer handles with handle reuse after deletion.
//!
//! Lookup works in both directions: by key (O(log capacity)) and by value
//! (linear scan in key order). Values need not be unique; value lookup
//! returns the first match in key order.
//!
//! The container is single-threaded. Callers sharing it across threads are
//! responsible for external synchronization.

#![cfg_attr(feature = "no_std_support", no_std)]

pub mod bimap;
pub mod error;
pub mod key;

pub use bimap::{IdBimap, IdBimapIntoIter};
pub use error::IdBimapError;
pub use key::IdKey;

/// An [`IdBimap`] of strings under the default `i64` keys.
pub type StringIdBimap = IdBimap<String>;

/// An [`IdBimap`] keyed by `u8`, for registries known to stay tiny.
pub type ByteKeyIdBimap<T> = IdBimap<T, u8>;
