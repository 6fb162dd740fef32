//! LinkedList: doubly-linked sequence whose nodes live in a generational
//! slot arena, with positionable cursors that can insert and delete.
//!
//! Layout
//! - Every node sits in a `SlotMap` owned by the list. `prev`/`next` links
//!   are slot keys, so there are no raw pointers and a dangling link shows
//!   up as a failed lookup rather than a use-after-free.
//! - `head.prev` and `tail.next` are `None`; an empty list has neither
//!   head nor tail. `len()` is the arena length, and every arena slot is
//!   reachable from `head`.
//! - A node keeps its key for its whole life. `NodeHandle` exposes that
//!   key so a position can be stored and re-seated later with
//!   [`LinkedList::cursor_at`] / [`LinkedList::cursor_mut_at`].
//!
//! Contract violations (re-seating a cursor on a handle that is not live in
//! this list, touching a cursor whose node was deleted) panic.

use core::cmp::Ordering;
use core::fmt;
use slotmap::{DefaultKey, SlotMap};

/// Stable identity of one node within one list.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeHandle(DefaultKey);

/// End of the list a cursor starts from.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Position {
    Head,
    Tail,
}

/// Direction for [`LinkedList::sort_by`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

#[derive(Clone, Debug)]
struct Node<T> {
    payload: T,
    prev: Option<DefaultKey>,
    next: Option<DefaultKey>,
}

#[cold]
#[inline(never)]
fn stale_handle() -> ! {
    panic!("node handle does not refer to a live node of this list");
}

#[cold]
#[inline(never)]
fn invalid_cursor() -> ! {
    panic!("cursor does not reference a node");
}

#[derive(Clone)]
pub struct LinkedList<T> {
    nodes: SlotMap<DefaultKey, Node<T>>,
    head: Option<DefaultKey>,
    tail: Option<DefaultKey>,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            head: None,
            tail: None,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn node(&self, k: DefaultKey) -> &Node<T> {
        match self.nodes.get(k) {
            Some(n) => n,
            None => stale_handle(),
        }
    }

    fn node_mut(&mut self, k: DefaultKey) -> &mut Node<T> {
        match self.nodes.get_mut(k) {
            Some(n) => n,
            None => stale_handle(),
        }
    }

    pub fn front(&self) -> Option<&T> {
        self.head.map(|k| &self.node(k).payload)
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.map(|k| &self.node(k).payload)
    }

    /// Inserts `payload` at the head.
    pub fn push_front(&mut self, payload: T) -> NodeHandle {
        match self.head {
            Some(h) => NodeHandle(self.link_before(h, payload)),
            None => NodeHandle(self.link_first(payload)),
        }
    }

    /// Inserts `payload` at the tail.
    pub fn push_back(&mut self, payload: T) -> NodeHandle {
        match self.tail {
            Some(t) => NodeHandle(self.link_after(t, payload)),
            None => NodeHandle(self.link_first(payload)),
        }
    }

    /// Removes and returns the head payload, or `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let k = self.head?;
        Some(self.unlink(k))
    }

    /// Removes and returns the tail payload, or `None` if the list is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let k = self.tail?;
        Some(self.unlink(k))
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    /// Consumes the list, handing every payload to `release` from head to
    /// tail. Dropping the list is the same as `free(drop)`.
    pub fn free<F>(mut self, mut release: F)
    where
        F: FnMut(T),
    {
        while let Some(payload) = self.pop_front() {
            release(payload);
        }
    }

    fn link_first(&mut self, payload: T) -> DefaultKey {
        debug_assert!(self.head.is_none() && self.tail.is_none());
        let k = self.nodes.insert(Node {
            payload,
            prev: None,
            next: None,
        });
        self.head = Some(k);
        self.tail = Some(k);
        k
    }

    fn link_before(&mut self, at: DefaultKey, payload: T) -> DefaultKey {
        let prev = self.node(at).prev;
        let k = self.nodes.insert(Node {
            payload,
            prev,
            next: Some(at),
        });
        self.node_mut(at).prev = Some(k);
        match prev {
            Some(p) => self.node_mut(p).next = Some(k),
            None => self.head = Some(k),
        }
        k
    }

    fn link_after(&mut self, at: DefaultKey, payload: T) -> DefaultKey {
        let next = self.node(at).next;
        let k = self.nodes.insert(Node {
            payload,
            prev: Some(at),
            next,
        });
        self.node_mut(at).next = Some(k);
        match next {
            Some(n) => self.node_mut(n).prev = Some(k),
            None => self.tail = Some(k),
        }
        k
    }

    fn unlink(&mut self, k: DefaultKey) -> T {
        let node = match self.nodes.remove(k) {
            Some(n) => n,
            None => stale_handle(),
        };
        match node.prev {
            Some(p) => self.node_mut(p).next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(n) => self.node_mut(n).prev = node.prev,
            None => self.tail = node.prev,
        }
        node.payload
    }

    fn swap_payloads(&mut self, a: DefaultKey, b: DefaultKey) {
        match self.nodes.get_disjoint_mut([a, b]) {
            Some([x, y]) => core::mem::swap(&mut x.payload, &mut y.payload),
            None => stale_handle(),
        }
    }

    /// Bubble sort: repeated passes swap adjacent payloads that are out of
    /// `order` until a full pass makes no swap. Equal payloads never swap.
    ///
    /// Nodes stay where they are; only payloads move, so a `NodeHandle`
    /// keeps its position but may observe a different payload afterwards.
    /// Quadratic in the worst case.
    pub fn sort_by<F>(&mut self, order: SortOrder, mut cmp: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if self.len() < 2 {
            return;
        }
        let out_of_order = match order {
            SortOrder::Ascending => Ordering::Greater,
            SortOrder::Descending => Ordering::Less,
        };
        loop {
            let mut swapped = false;
            let mut cur = self.head;
            while let Some(k) = cur {
                let Some(next) = self.node(k).next else {
                    break;
                };
                if cmp(&self.node(k).payload, &self.node(next).payload) == out_of_order {
                    self.swap_payloads(k, next);
                    swapped = true;
                }
                cur = Some(next);
            }
            if !swapped {
                break;
            }
        }
    }

    pub fn sort(&mut self, order: SortOrder)
    where
        T: Ord,
    {
        self.sort_by(order, T::cmp);
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }

    /// Read-only cursor at the head or tail; `None` if the list is empty.
    pub fn cursor(&self, pos: Position) -> Option<Cursor<'_, T>> {
        let node = match pos {
            Position::Head => self.head,
            Position::Tail => self.tail,
        }?;
        Some(Cursor { list: self, node })
    }

    /// Mutating cursor at the head or tail; `None` if the list is empty.
    pub fn cursor_mut(&mut self, pos: Position) -> Option<CursorMut<'_, T>> {
        let node = match pos {
            Position::Head => self.head,
            Position::Tail => self.tail,
        }?;
        Some(CursorMut {
            list: self,
            node: Some(node),
        })
    }

    /// Re-seats a read-only cursor on `handle`.
    ///
    /// # Panics
    ///
    /// Panics if `handle` is not a live node of this list.
    pub fn cursor_at(&self, handle: NodeHandle) -> Cursor<'_, T> {
        if !self.nodes.contains_key(handle.0) {
            stale_handle();
        }
        Cursor {
            list: self,
            node: handle.0,
        }
    }

    /// Re-seats a mutating cursor on `handle`.
    ///
    /// # Panics
    ///
    /// Panics if `handle` is not a live node of this list.
    pub fn cursor_mut_at(&mut self, handle: NodeHandle) -> CursorMut<'_, T> {
        if !self.nodes.contains_key(handle.0) {
            stale_handle();
        }
        CursorMut {
            list: self,
            node: Some(handle.0),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for payload in iter {
            self.push_back(payload);
        }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over payloads from head to tail (or back to front).
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    front: Option<DefaultKey>,
    back: Option<DefaultKey>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.front?);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.payload)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.back?);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.payload)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Shared cursor; always rests on a live node.
pub struct Cursor<'a, T> {
    list: &'a LinkedList<T>,
    node: DefaultKey,
}

impl<'a, T> Cursor<'a, T> {
    pub fn handle(&self) -> NodeHandle {
        NodeHandle(self.node)
    }

    pub fn has_next(&self) -> bool {
        self.list.node(self.node).next.is_some()
    }

    pub fn has_prev(&self) -> bool {
        self.list.node(self.node).prev.is_some()
    }

    /// Steps towards the tail. Returns `false` (and stays put) at the tail.
    pub fn move_next(&mut self) -> bool {
        match self.list.node(self.node).next {
            Some(n) => {
                self.node = n;
                true
            }
            None => false,
        }
    }

    /// Steps towards the head. Returns `false` (and stays put) at the head.
    pub fn move_prev(&mut self) -> bool {
        match self.list.node(self.node).prev {
            Some(p) => {
                self.node = p;
                true
            }
            None => false,
        }
    }

    pub fn payload(&self) -> &'a T {
        &self.list.node(self.node).payload
    }
}

/// Exclusive cursor that can also insert and delete.
///
/// Deleting the last node leaves the cursor invalid; every positional
/// method then panics. Check [`CursorMut::is_valid`] when that can happen.
pub struct CursorMut<'a, T> {
    list: &'a mut LinkedList<T>,
    node: Option<DefaultKey>,
}

impl<'a, T> CursorMut<'a, T> {
    #[inline]
    fn current(&self) -> DefaultKey {
        match self.node {
            Some(k) => k,
            None => invalid_cursor(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.node.is_some()
    }

    pub fn handle(&self) -> NodeHandle {
        NodeHandle(self.current())
    }

    pub fn has_next(&self) -> bool {
        self.list.node(self.current()).next.is_some()
    }

    pub fn has_prev(&self) -> bool {
        self.list.node(self.current()).prev.is_some()
    }

    /// Steps towards the tail. Returns `false` (and stays put) at the tail.
    pub fn move_next(&mut self) -> bool {
        match self.list.node(self.current()).next {
            Some(n) => {
                self.node = Some(n);
                true
            }
            None => false,
        }
    }

    /// Steps towards the head. Returns `false` (and stays put) at the head.
    pub fn move_prev(&mut self) -> bool {
        match self.list.node(self.current()).prev {
            Some(p) => {
                self.node = Some(p);
                true
            }
            None => false,
        }
    }

    pub fn payload(&self) -> &T {
        &self.list.node(self.current()).payload
    }

    pub fn payload_mut(&mut self) -> &mut T {
        let k = self.current();
        &mut self.list.node_mut(k).payload
    }

    /// Converts the cursor into a mutable borrow of its payload for the
    /// rest of the list borrow.
    pub fn into_payload_mut(self) -> &'a mut T {
        let k = self.current();
        let CursorMut { list, .. } = self;
        &mut list.node_mut(k).payload
    }

    /// Unlinks the current node and returns its payload.
    ///
    /// The cursor moves to the successor if there is one, else to the
    /// predecessor. If the list is now empty the cursor becomes invalid.
    pub fn remove_current(&mut self) -> T {
        let k = self.current();
        let node = self.list.node(k);
        self.node = node.next.or(node.prev);
        self.list.unlink(k)
    }

    /// Removes the current node, passing its payload to `release`.
    ///
    /// Returns `false` exactly when the list became empty.
    pub fn delete<F>(&mut self, release: F) -> bool
    where
        F: FnOnce(T),
    {
        release(self.remove_current());
        self.node.is_some()
    }

    /// Splices `payload` in ahead of the cursor; the cursor does not move.
    /// At the head this is the same as [`LinkedList::push_front`].
    pub fn insert_before(&mut self, payload: T) -> NodeHandle {
        let k = self.current();
        NodeHandle(self.list.link_before(k, payload))
    }

    /// Splices `payload` in behind the cursor; the cursor does not move.
    pub fn insert_after(&mut self, payload: T) -> NodeHandle {
        let k = self.current();
        NodeHandle(self.list.link_after(k, payload))
    }
}
