//! chain-table: a `u64`-keyed hash table with separate chaining, built on a
//! doubly-linked list with positionable, mutating cursors.
//!
//! Internal Design:
//!
//! Summary
//! - Two layers, each usable on its own:
//!   - LinkedList<T>: doubly-linked sequence stored in a generational slot
//!     arena. Push/pop at both ends, bubble sort, and cursors that can walk
//!     both ways, insert before the cursor and delete under it.
//!   - HashTable<V>: array of buckets, each a `LinkedList<KeyValue<V>>`.
//!     Insert-or-replace, lookup, remove, full-table cursor with
//!     delete-under-cursor, and growth on insert once the load factor is hit.
//! - The table drives its chains only through the list's public API.
//!
//! Constraints
//! - Single-threaded; callers serialize access. Cursors borrow their
//!   container, so mutation through another path while a cursor is live
//!   does not compile.
//! - Keys are `u64` and are used as-is: bucket = `key % bucket_count`.
//!   Pre-hash arbitrary data with the FNV-1a helpers in [`hash`].
//! - Values are owned by the container. `free(release)` hands each one to a
//!   caller-supplied function; plain `Drop` is the no-op release.
//!
//! Failure model
//! - Expected outcomes are values: a missed lookup/remove is `None`, an
//!   insert over an existing key is `InsertOutcome::Replaced`.
//! - Bucket array reservation is fallible and reported as [`Error`]. When a
//!   resize cannot reserve its new array it is abandoned (logged at `warn`)
//!   and the table keeps working at its current size.
//! - Misuse panics: zero buckets, a cursor used after its last node was
//!   deleted, a stale node handle.
//!
//! Growth
//! - Before every insert: if `len >= 3 * buckets`, rehash into
//!   `9 * buckets` buckets (both factors configurable via [`Config`]).
//!   Pairs are moved, never cloned, and the bucket array is swapped in
//!   place, so the caller's table value simply observes the larger size.
//!
//! Logging
//! - Uses the `log` facade; nothing is emitted unless the application
//!   installs a logger.

mod config;
mod error;
pub mod hash;
pub mod hash_table;
mod hash_table_cursor;
mod hash_table_proptest;
pub mod linked_list;
mod linked_list_proptest;

// Public surface
pub use config::Config;
pub use error::{Error, Result};
pub use hash::{fnv_hash64, fnv_hash_u64};
pub use hash_table::{HashTable, InsertOutcome, KeyValue};
pub use hash_table_cursor::{CursorStep, TableCursor};
pub use linked_list::{LinkedList, NodeHandle, Position, SortOrder};
