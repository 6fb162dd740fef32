#![cfg(test)]

// Property tests for LinkedList kept inside the crate so cursor edge cases
// can be checked against a plain Vec model.

use crate::linked_list::{LinkedList, Position, SortOrder};
use proptest::prelude::*;

// Payload: (sort key, unique id). Sorting compares only the key so the id
// exposes any reordering of equal elements.
type Item = (u8, u32);

#[derive(Clone, Debug)]
enum CursorOp {
    Next,
    Prev,
    Delete,
    InsertBefore(u8),
}

#[derive(Clone, Debug)]
enum Op {
    PushFront(u8),
    PushBack(u8),
    PopFront,
    PopBack,
    Sort(bool),
    Walk(bool, Vec<CursorOp>),
}

fn arb_cursor_op() -> impl Strategy<Value = CursorOp> {
    prop_oneof![
        3 => Just(CursorOp::Next),
        2 => Just(CursorOp::Prev),
        2 => Just(CursorOp::Delete),
        2 => (0u8..8).prop_map(CursorOp::InsertBefore),
    ]
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0u8..8).prop_map(Op::PushFront),
        3 => (0u8..8).prop_map(Op::PushBack),
        1 => Just(Op::PopFront),
        1 => Just(Op::PopBack),
        1 => any::<bool>().prop_map(Op::Sort),
        2 => (any::<bool>(), proptest::collection::vec(arb_cursor_op(), 0..16))
            .prop_map(|(head, ops)| Op::Walk(head, ops)),
    ]
}

fn contents(l: &LinkedList<Item>) -> Vec<Item> {
    l.iter().copied().collect()
}

// Property: state-machine equivalence against Vec.
// - push/pop at both ends and `len` match the model after every step.
// - A cursor walk tracks a model index: moves stop at the ends, delete moves
//   to the successor else the predecessor, insert_before keeps the cursor on
//   its payload, and delete reports `false` exactly when the list empties.
// - Sorting yields the model's stable sort in either direction.
// - Walking the list backwards mirrors walking it forwards.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_list_state_machine(ops in proptest::collection::vec(arb_op(), 1..48)) {
        let mut sut: LinkedList<Item> = LinkedList::new();
        let mut model: Vec<Item> = Vec::new();
        let mut next_id = 0u32;
        let mut fresh = |k: u8| {
            next_id += 1;
            (k, next_id)
        };

        for op in ops {
            match op {
                Op::PushFront(k) => {
                    let item = fresh(k);
                    sut.push_front(item);
                    model.insert(0, item);
                }
                Op::PushBack(k) => {
                    let item = fresh(k);
                    sut.push_back(item);
                    model.push(item);
                }
                Op::PopFront => {
                    let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                    prop_assert_eq!(sut.pop_front(), expected);
                }
                Op::PopBack => {
                    prop_assert_eq!(sut.pop_back(), model.pop());
                }
                Op::Sort(ascending) => {
                    if ascending {
                        sut.sort_by(SortOrder::Ascending, |a, b| a.0.cmp(&b.0));
                        model.sort_by(|a, b| a.0.cmp(&b.0));
                    } else {
                        sut.sort_by(SortOrder::Descending, |a, b| a.0.cmp(&b.0));
                        model.sort_by(|a, b| b.0.cmp(&a.0));
                    }
                }
                Op::Walk(from_head, cops) => {
                    let pos = if from_head { Position::Head } else { Position::Tail };
                    let Some(mut c) = sut.cursor_mut(pos) else {
                        prop_assert!(model.is_empty());
                        continue;
                    };
                    let mut idx = if from_head { 0 } else { model.len() - 1 };
                    for cop in cops {
                        match cop {
                            CursorOp::Next => {
                                let can = idx + 1 < model.len();
                                prop_assert_eq!(c.has_next(), can);
                                prop_assert_eq!(c.move_next(), can);
                                if can { idx += 1; }
                            }
                            CursorOp::Prev => {
                                let can = idx > 0;
                                prop_assert_eq!(c.has_prev(), can);
                                prop_assert_eq!(c.move_prev(), can);
                                if can { idx -= 1; }
                            }
                            CursorOp::Delete => {
                                let expected = model.remove(idx);
                                let mut got = None;
                                let live = c.delete(|p| got = Some(p));
                                prop_assert_eq!(got, Some(expected));
                                prop_assert_eq!(live, !model.is_empty());
                                if !live {
                                    prop_assert!(!c.is_valid());
                                    break;
                                }
                                if idx == model.len() {
                                    idx -= 1;
                                }
                            }
                            CursorOp::InsertBefore(k) => {
                                let item = fresh(k);
                                c.insert_before(item);
                                model.insert(idx, item);
                                idx += 1;
                            }
                        }
                        prop_assert_eq!(*c.payload(), model[idx]);
                    }
                }
            }

            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
            prop_assert_eq!(contents(&sut), model.clone());
            let mut backwards: Vec<Item> = sut.iter().rev().copied().collect();
            backwards.reverse();
            prop_assert_eq!(backwards, model.clone());
        }
    }
}

// Property: after sort_by the requested order holds between neighbours and
// the multiset of payloads is unchanged.
proptest! {
    #[test]
    fn prop_sort_orders_and_preserves(values in proptest::collection::vec(any::<i16>(), 0..40), ascending in any::<bool>()) {
        let mut l: LinkedList<i16> = values.iter().copied().collect();
        let order = if ascending { SortOrder::Ascending } else { SortOrder::Descending };
        l.sort(order);
        let sorted: Vec<i16> = l.iter().copied().collect();
        for w in sorted.windows(2) {
            if ascending {
                prop_assert!(w[0] <= w[1]);
            } else {
                prop_assert!(w[0] >= w[1]);
            }
        }
        let mut a = sorted.clone();
        let mut b = values.clone();
        a.sort_unstable();
        b.sort_unstable();
        prop_assert_eq!(a, b);
    }
}
