//! End-to-end scenarios through the facade crate.

use colony::prelude::*;
use colony_test_utils::{churn_script, ChurnOp, DropLog, SCENARIO_WORDS};

#[test]
fn five_words_search_remove_reinsert() {
    let mut colony = Colony::with_capacity(4).unwrap();
    for word in SCENARIO_WORDS {
        colony.insert(word.to_string()).unwrap();
    }
    assert_eq!(colony.bucket_count(), 2);

    let baz = colony.search(|w| w == "baz").unwrap();
    colony.remove(baz).unwrap();
    assert_eq!(
        colony.values().map(String::as_str).collect::<Vec<_>>(),
        ["foo", "bar", "hello", "world"]
    );

    // The freed slot is reused, but the value goes to the tail.
    let again = colony.insert("baz".to_string()).unwrap();
    assert_eq!(again.slot(), baz.slot());
    assert_ne!(again, baz);
    assert_eq!(colony.last(), Some(again));
    assert!(matches!(
        colony.remove(baz),
        Err(ColonyError::StaleAddress { .. })
    ));
}

#[test]
fn references_survive_growth_and_unrelated_removals() {
    let mut colony = Colony::new();
    let kept = colony.insert(0u64).unwrap();
    let kept_ptr: *const u64 = &colony[kept];

    let mut others = Vec::new();
    for v in 1..5_000u64 {
        others.push(colony.insert(v).unwrap());
    }
    for address in others.iter().step_by(2) {
        colony.remove(*address).unwrap();
    }
    for v in 0..2_000u64 {
        colony.insert(v).unwrap();
    }

    assert!(colony.bucket_count() > 5);
    assert!(std::ptr::eq(kept_ptr, &colony[kept]));
    assert_eq!(colony[kept], 0);
}

#[test]
fn churn_matches_a_vec_model_and_drops_everything() {
    let log = DropLog::new();
    let mut colony = Colony::new();
    let mut model: Vec<(Address, u32)> = Vec::new();
    let mut next_id = 0;

    for op in churn_script(2024, 5_000, 55) {
        match op {
            ChurnOp::Insert(_) => {
                let address = colony.insert(log.track(next_id)).unwrap();
                model.push((address, next_id));
                next_id += 1;
            }
            ChurnOp::Remove(i) if !model.is_empty() => {
                let (address, id) = model.remove(i % model.len());
                assert_eq!(colony.remove(address).unwrap().id(), id);
            }
            ChurnOp::Remove(_) => assert!(colony.is_empty()),
        }
    }

    assert_eq!(colony.len(), model.len());
    let live: Vec<u32> = colony.values().map(|t| t.id()).collect();
    let expected: Vec<u32> = model.iter().map(|&(_, id)| id).collect();
    assert_eq!(live, expected);

    let removed = next_id as usize - model.len();
    assert_eq!(log.count(), removed);
    drop(colony);
    assert_eq!(log.count(), next_id as usize);
    assert!((0..next_id).all(|id| log.count_of(id) == 1));
}

#[test]
fn ceiling_refuses_growth_without_losing_the_value() {
    let config = ColonyConfig::new(4).with_max_slots(4);
    let mut colony = Colony::with_config(config).unwrap();
    for v in 0..4 {
        colony.insert(v).unwrap();
    }
    let err = colony.insert(4).unwrap_err();
    assert!(matches!(err.error(), ColonyError::CapacityExceeded { .. }));
    assert_eq!(err.into_inner(), 4);
    assert_eq!(colony.len(), 4);

    let linear: LinearError = ColonyError::CapacityExceeded {
        requested: 12,
        limit: 4,
    }
    .into();
    assert!(matches!(linear, LinearError::Storage(_)));
}

#[test]
fn linear_containers_through_the_prelude() {
    let mut deque = Deque::new();
    let mut list = List::new();
    for word in SCENARIO_WORDS {
        deque.insert_front(word).unwrap();
        list.push_back(word).unwrap();
    }
    assert_eq!(deque.iter().rev().copied().collect::<Vec<_>>(), SCENARIO_WORDS);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), SCENARIO_WORDS);

    let mut stack = ContiguousStack::new();
    let mut queue = CircularQueue::new();
    for word in SCENARIO_WORDS {
        stack.push(word);
        queue.enqueue(word);
    }
    assert_eq!(stack.top(), Ok(&"world"));
    assert_eq!(queue.front(), Ok(&"foo"));
}
