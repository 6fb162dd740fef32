use chain_table::{LinkedList, Position, SortOrder};

#[test]
fn deque_operations() {
    let mut l = LinkedList::new();
    l.push_back("b");
    l.push_front("a");
    l.push_back("c");
    assert_eq!(l.len(), 3);
    assert_eq!(l.pop_front(), Some("a"));
    assert_eq!(l.pop_back(), Some("c"));
    assert_eq!(l.pop_back(), Some("b"));
    assert_eq!(l.pop_front(), None);
}

/// A cursor can filter a list in place: delete odd numbers and insert a
/// marker ahead of each multiple of four.
#[test]
fn cursor_edits_in_place() {
    let mut l: LinkedList<i32> = (1..=8).collect();
    {
        let mut c = l.cursor_mut(Position::Head).expect("non-empty");
        loop {
            let v = *c.payload();
            if v % 2 == 1 {
                if !c.delete(drop) {
                    break;
                }
                // delete already moved us on (or back, at the tail)
                if v == 7 {
                    // 7 was followed by 8, which we now rest on
                    assert_eq!(*c.payload(), 8);
                }
                continue;
            }
            if v % 4 == 0 {
                c.insert_before(-v);
            }
            if !c.move_next() {
                break;
            }
        }
    }
    let got: Vec<i32> = l.iter().copied().collect();
    assert_eq!(got, vec![2, -4, 4, 6, -8, 8]);
}

#[test]
fn reverse_walk_from_tail() {
    let l: LinkedList<char> = "rust".chars().collect();
    let mut c = l.cursor(Position::Tail).expect("non-empty");
    let mut s = String::from(*c.payload());
    while c.move_prev() {
        s.push(*c.payload());
    }
    assert_eq!(s, "tsur");
}

#[test]
fn sort_with_custom_comparator() {
    let mut l: LinkedList<&str> = ["pear", "fig", "banana", "kiwi"].into_iter().collect();
    l.sort_by(SortOrder::Ascending, |a, b| a.len().cmp(&b.len()));
    let got: Vec<&str> = l.iter().copied().collect();
    assert_eq!(got, vec!["fig", "pear", "kiwi", "banana"]);

    l.sort_by(SortOrder::Descending, |a, b| a.cmp(b));
    let got: Vec<&str> = l.iter().copied().collect();
    assert_eq!(got, vec!["pear", "kiwi", "fig", "banana"]);
}

#[test]
fn free_with_release_function() {
    let l: LinkedList<Box<u32>> = (0..4).map(Box::new).collect();
    let mut total = 0;
    l.free(|b| total += *b);
    assert_eq!(total, 6);
}
