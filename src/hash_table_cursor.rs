//! TableCursor: walks every pair of a [`HashTable`] in bucket order and can
//! delete the pair it rests on.
//!
//! The cursor stores a bucket index plus the [`NodeHandle`] of its pair in
//! that bucket's chain, and re-seats a list cursor from the handle for each
//! step. It never rests on an empty bucket: it is either on a live pair or
//! past the end.

use crate::hash_table::{HashTable, KeyValue};
use crate::linked_list::{NodeHandle, Position};

/// Where a cursor ended up after [`TableCursor::delete`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CursorStep {
    /// The cursor moved on to another live pair.
    Advanced,
    /// No pairs remain ahead of the cursor.
    Exhausted,
}

pub struct TableCursor<'a, V> {
    table: &'a mut HashTable<V>,
    bucket: usize,
    node: Option<NodeHandle>, // None once past the end
}

impl<'a, V> TableCursor<'a, V> {
    pub(crate) fn new(table: &'a mut HashTable<V>) -> Self {
        let mut cursor = Self {
            table,
            bucket: 0,
            node: None,
        };
        cursor.seat_from(0);
        cursor
    }

    /// Rests on the head of the first non-empty bucket at or after `start`,
    /// or goes past the end if there is none.
    fn seat_from(&mut self, start: usize) -> bool {
        let found = self
            .table
            .buckets
            .iter()
            .enumerate()
            .skip(start)
            .find_map(|(i, chain)| chain.cursor(Position::Head).map(|c| (i, c.handle())));
        match found {
            Some((bucket, handle)) => {
                self.bucket = bucket;
                self.node = Some(handle);
                true
            }
            None => {
                self.bucket = self.table.buckets.len();
                self.node = None;
                false
            }
        }
    }

    pub fn is_past_end(&self) -> bool {
        self.node.is_none()
    }

    /// Moves to the next pair, crossing into later buckets as needed.
    /// Returns `false` once the cursor is past the end.
    pub fn advance(&mut self) -> bool {
        let Some(handle) = self.node else {
            return false;
        };
        let mut chain = self.table.buckets[self.bucket].cursor_at(handle);
        if chain.move_next() {
            self.node = Some(chain.handle());
            return true;
        }
        self.seat_from(self.bucket + 1)
    }

    /// The pair under the cursor, or `None` past the end.
    pub fn get(&self) -> Option<&KeyValue<V>> {
        let handle = self.node?;
        Some(self.table.buckets[self.bucket].cursor_at(handle).payload())
    }

    pub fn value_mut(&mut self) -> Option<&mut V> {
        let handle = self.node?;
        let chain = &mut self.table.buckets[self.bucket];
        Some(&mut chain.cursor_mut_at(handle).into_payload_mut().value)
    }

    /// Removes the pair under the cursor and returns it.
    ///
    /// The cursor advances before the pair is removed from the table by key,
    /// so the position it moved to is untouched by the removal. Returns
    /// `None` if the cursor is already past the end.
    pub fn delete(&mut self) -> Option<(KeyValue<V>, CursorStep)> {
        let key = self.get()?.key;
        let step = if self.advance() {
            CursorStep::Advanced
        } else {
            CursorStep::Exhausted
        };
        match self.table.remove(key) {
            Some(kv) => Some((kv, step)),
            None => panic!("pair under the cursor is missing from its bucket"),
        }
    }
}
