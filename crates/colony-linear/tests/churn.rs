//! Containers driven by seeded churn scripts, checked against std models.

use std::collections::VecDeque;

use colony_linear::{CircularQueue, ContiguousStack, Deque, LinkedQueue, LinkedStack, List};
use colony_test_utils::{churn_script, ChurnOp};
use proptest::prelude::*;

#[test]
fn queues_agree_with_vecdeque() {
    let mut model = VecDeque::new();
    let mut circular = CircularQueue::new();
    let mut linked = LinkedQueue::new();

    for op in churn_script(7, 2_000, 60) {
        match op {
            ChurnOp::Insert(v) => {
                model.push_back(v);
                circular.enqueue(v);
                linked.enqueue(v).unwrap();
            }
            ChurnOp::Remove(_) => {
                let expected = model.pop_front();
                assert_eq!(circular.dequeue().ok(), expected);
                assert_eq!(linked.dequeue().ok(), expected);
            }
        }
        assert_eq!(circular.len(), model.len());
        assert_eq!(linked.len(), model.len());
    }
    assert!(circular.iter().eq(model.iter()));
    assert!(linked.iter().eq(model.iter()));
}

#[test]
fn stacks_agree_with_vec() {
    let mut model = Vec::new();
    let mut contiguous = ContiguousStack::new();
    let mut linked = LinkedStack::new();

    for op in churn_script(11, 2_000, 55) {
        match op {
            ChurnOp::Insert(v) => {
                model.push(v);
                contiguous.push(v);
                linked.push(v);
            }
            ChurnOp::Remove(_) => {
                let expected = model.pop();
                assert_eq!(contiguous.pop().ok(), expected);
                assert_eq!(linked.pop().ok(), expected);
            }
        }
        assert_eq!(contiguous.top().ok(), model.last());
        assert_eq!(linked.top().ok(), model.last());
    }
    assert!(linked.iter().eq(model.iter().rev()));
}

#[test]
fn deque_agrees_with_vecdeque() {
    let mut model = VecDeque::new();
    let mut deque = Deque::new();

    for op in churn_script(3, 2_000, 55) {
        match op {
            ChurnOp::Insert(v) if v % 2 == 0 => {
                model.push_front(v);
                deque.insert_front(v).unwrap();
            }
            ChurnOp::Insert(v) => {
                model.push_back(v);
                deque.insert_rear(v).unwrap();
            }
            ChurnOp::Remove(i) if i % 2 == 0 => {
                assert_eq!(deque.remove_front().ok(), model.pop_front());
            }
            ChurnOp::Remove(_) => {
                assert_eq!(deque.remove_rear().ok(), model.pop_back());
            }
        }
        assert_eq!(deque.front().ok(), model.front());
        assert_eq!(deque.rear().ok(), model.back());
    }
    assert!(deque.iter().eq(model.iter()));
    assert!(deque.iter().rev().eq(model.iter().rev()));
}

#[test]
fn list_splits_and_rejoins_under_churn() {
    let mut model: Vec<u32> = Vec::new();
    let mut list = List::new();

    for op in churn_script(19, 1_000, 65) {
        match op {
            ChurnOp::Insert(v) => {
                model.push(v);
                list.push_back(v).unwrap();
            }
            ChurnOp::Remove(i) if !model.is_empty() => {
                let at = i % model.len();
                // Split at `at`, drop the head of the tail, rejoin.
                let position = if at == 0 {
                    None
                } else {
                    let mut cursor = list.first();
                    for _ in 1..at {
                        cursor = list.next(cursor.unwrap());
                    }
                    cursor
                };
                let mut tail = list.split_after(position).unwrap();
                assert_eq!(tail.pop_front(), Some(model.remove(at)));
                list.concatenate(&mut tail).unwrap();
                assert!(tail.is_empty());
            }
            ChurnOp::Remove(_) => {
                assert_eq!(list.pop_front(), None);
            }
        }
        assert_eq!(list.len(), model.len());
    }
    assert!(list.iter().eq(model.iter()));
}

proptest! {
    #[test]
    fn extract_then_graft_back_restores_order(
        values in prop::collection::vec(any::<u16>(), 1..40),
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
    ) {
        let mut list = List::new();
        let mut addresses = Vec::new();
        for &v in &values {
            addresses.push(list.push_back(v).unwrap());
        }
        let lo = a.index(values.len() + 1);
        let count = b.index(values.len() - lo + 1);
        let prev = if lo == 0 { None } else { Some(addresses[lo - 1]) };
        let last = if count == 0 { prev } else { Some(addresses[lo + count - 1]) };

        let mut extracted = list.extract_between(prev, last).unwrap();
        prop_assert_eq!(extracted.len(), count);
        prop_assert_eq!(list.len(), values.len() - count);
        prop_assert!(extracted.iter().eq(values[lo..lo + count].iter()));

        list.graft_after(prev, &mut extracted).unwrap();
        prop_assert!(extracted.is_empty());
        prop_assert!(list.iter().eq(values.iter()));
    }
}
