//! Integration tests for RadioGroup selection bookkeeping.

use std::sync::Arc;

use parking_lot::Mutex;
use radio_lattice::prelude::*;

fn setup() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn buttons(values: &[&str]) -> Vec<Arc<RadioButton>> {
    values
        .iter()
        .map(|v| Arc::new(RadioButton::new(v.to_uppercase()).with_value(*v)))
        .collect()
}

/// Checked flag must match selection for every item.
fn assert_consistent(group: &RadioGroup, items: &[Arc<RadioButton>]) {
    let selection = group.selection();
    assert!(selection.len() <= 1);
    for item in items {
        let handle = ItemHandle::from(item.clone());
        let selected = group.contains(item.clone()) && selection.first() == Some(&handle);
        assert_eq!(
            item.is_checked(),
            selected,
            "item {:?} checked={} selected={}",
            item.text(),
            item.is_checked(),
            selected
        );
    }
}

/// Small deterministic generator for operation sequences.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: usize) -> usize {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((self.0 >> 33) as usize) % bound
    }
}

#[test]
fn test_construction_example() {
    setup();
    let items = buttons(&["a", "b", "c"]);
    let group = RadioGroup::with_items(items.clone());
    assert_eq!(group.value(), Some(ItemValue::from("a")));

    let received = Arc::new(Mutex::new(Vec::new()));
    let received_clone = received.clone();
    group.value_changed().connect(move |change| {
        received_clone.lock().push(change.clone());
    });

    group.set_value("c");
    assert_eq!(group.value(), Some(ItemValue::from("c")));
    assert_eq!(
        *received.lock(),
        vec![ValueChange {
            current: Some("c".into()),
            previous: Some("a".into()),
        }]
    );
}

#[test]
fn test_single_item_is_selected_automatically() {
    setup();
    let only = Arc::new(RadioButton::new("Only"));
    let group = RadioGroup::new();
    group.add([only.clone()]);

    assert!(only.is_checked());
    assert_eq!(group.selection(), vec![ItemHandle::from(only)]);
}

#[test]
fn test_add_preserves_order_without_duplicates() {
    setup();
    let items = buttons(&["a", "b", "c", "d"]);
    let group = RadioGroup::new();
    let mut rng = Lcg(7);
    let mut expected: Vec<usize> = Vec::new();

    for _ in 0..40 {
        let index = rng.next(items.len());
        group.add([items[index].clone()]);
        if !expected.contains(&index) {
            expected.push(index);
        }

        let managed = group.items();
        assert_eq!(managed.len(), expected.len());
        for (handle, &index) in managed.iter().zip(&expected) {
            assert!(handle.is(&items[index]));
        }
    }
}

#[test]
fn test_checked_iff_selected_under_random_operations() {
    setup();
    let items = buttons(&["a", "b", "c", "d", "e"]);
    let group = RadioGroup::new();
    let mut rng = Lcg(42);

    for _ in 0..500 {
        let item = items[rng.next(items.len())].clone();
        match rng.next(9) {
            0 => group.add([item]),
            1 => {
                group.remove(item);
            }
            2 => group.set_selection(&[ItemHandle::from(item)]),
            3 => group.set_value(["a", "b", "c", "d", "e", "x"][rng.next(6)]),
            4 => group.select_next(),
            5 => group.select_previous(),
            6 => item.set_checked(rng.next(2) == 0),
            7 => item.set_enabled(rng.next(2) == 0),
            _ => group.set_wrap(rng.next(2) == 0),
        }
        // Items outside the group keep whatever state they had when removed
        let managed: Vec<_> = items
            .iter()
            .filter(|i| group.contains((*i).clone()))
            .cloned()
            .collect();
        assert_consistent(&group, &managed);
    }
}

#[test]
fn test_next_then_previous_returns_without_wrap() {
    setup();
    let items = buttons(&["a", "b", "c", "d"]);
    let group = RadioGroup::with_items(items.clone()).with_wrap(false);

    for start in ["b", "c"] {
        group.set_value(start);
        group.select_next();
        group.select_previous();
        assert_eq!(group.value(), Some(ItemValue::from(start)));

        group.select_previous();
        group.select_next();
        assert_eq!(group.value(), Some(ItemValue::from(start)));
    }
}

#[test]
fn test_boundaries_are_idempotent_without_wrap() {
    setup();
    let items = buttons(&["a", "b", "c"]);
    let group = RadioGroup::with_items(items.clone()).with_wrap(false);

    group.select_previous();
    group.select_previous();
    assert_eq!(group.value(), Some(ItemValue::from("a")));

    group.set_value("c");
    group.select_next();
    group.select_next();
    assert_eq!(group.value(), Some(ItemValue::from("c")));
    assert_consistent(&group, &items);
}

#[test]
fn test_full_cycle_with_wrap() {
    setup();
    let items = buttons(&["a", "b", "c", "d", "e"]);
    let group = RadioGroup::with_items(items.clone());
    group.set_value("c");

    for _ in 0..items.len() {
        group.select_next();
    }
    assert_eq!(group.value(), Some(ItemValue::from("c")));

    for _ in 0..items.len() {
        group.select_previous();
    }
    assert_eq!(group.value(), Some(ItemValue::from("c")));
}

#[test]
fn test_disabled_item_is_skipped() {
    setup();
    let a = Arc::new(RadioButton::new("A").with_value("a"));
    let b = Arc::new(RadioButton::new("B").with_value("b").with_enabled(false));
    let c = Arc::new(RadioButton::new("C").with_value("c"));
    let group = RadioGroup::with_items([a.clone(), b.clone(), c.clone()]);

    assert!(a.is_checked());
    group.select_next();
    assert!(c.is_checked());
    assert!(!b.is_checked());
}

#[test]
fn test_remove_selected_then_value_is_none() {
    setup();
    let items = buttons(&["a", "b"]);
    let group = RadioGroup::with_items(items.clone());

    group.remove(items[0].clone());
    assert_eq!(group.value(), None);
    assert!(group.is_selection_empty());

    // Navigation without a selection is a no-op
    group.select_next();
    assert!(group.is_selection_empty());
}

#[test]
fn test_set_unknown_value_keeps_selection() {
    setup();
    let items = buttons(&["a", "b"]);
    let group = RadioGroup::with_items(items.clone());
    group.set_value("b");

    let fired = Arc::new(Mutex::new(0));
    let fired_clone = fired.clone();
    group.selection_changed().connect(move |_| *fired_clone.lock() += 1);

    group.set_value("x");
    assert_eq!(group.value(), Some(ItemValue::from("b")));
    assert_eq!(*fired.lock(), 0);
}

#[test]
fn test_selection_changed_payload() {
    setup();
    let items = buttons(&["a", "b"]);
    let group = RadioGroup::with_items(items.clone());

    let received = Arc::new(Mutex::new(Vec::new()));
    let received_clone = received.clone();
    group.selection_changed().connect(move |change| {
        received_clone.lock().push((change.current_items(), change.previous_items()));
    });

    items[1].set_checked(true);
    group.reset_selection();

    let a = ItemHandle::from(items[0].clone());
    let b = ItemHandle::from(items[1].clone());
    assert_eq!(
        *received.lock(),
        vec![(vec![b.clone()], vec![a]), (vec![], vec![b])]
    );
}

#[test]
fn test_handlers_run_in_subscription_order_after_disconnect() {
    setup();
    let items = buttons(&["a", "b"]);
    let group = RadioGroup::with_items(items.clone());
    let order = Arc::new(Mutex::new(Vec::new()));

    let listen = |name: &'static str| {
        let order = order.clone();
        group.value_changed().connect(move |_| order.lock().push(name))
    };
    let first = listen("first");
    listen("second");
    assert!(group.value_changed().disconnect(first));
    listen("third");

    group.set_value("b");
    assert_eq!(*order.lock(), vec!["second", "third"]);
}

#[test]
fn test_handler_can_reenter_group() {
    setup();
    let items = buttons(&["a", "b", "c"]);
    let group = Arc::new(RadioGroup::with_items(items.clone()));

    // Redirect any selection of "b" to the next item.
    let weak = Arc::downgrade(&group);
    group.value_changed().connect(move |change| {
        if change.current == Some(ItemValue::from("b")) {
            if let Some(group) = weak.upgrade() {
                group.select_next();
            }
        }
    });

    group.set_value("b");
    assert_eq!(group.value(), Some(ItemValue::from("c")));
    assert_consistent(&group, &items);
}

#[test]
fn test_moving_item_between_groups() {
    setup();
    let items = buttons(&["a", "b"]);
    let first = RadioGroup::with_items(items.clone());
    let second = RadioGroup::new();

    assert!(first.remove(items[1].clone()));
    second.add([items[1].clone()]);

    assert_eq!(items[1].group(), Some(second.id()));
    assert!(items[1].is_checked());
    assert!(items[0].is_checked());
    assert_eq!(first.value(), Some(ItemValue::from("a")));
    assert_eq!(second.value(), Some(ItemValue::from("b")));
}

#[test]
fn test_enabled_and_name_propagate() {
    setup();
    let items = buttons(&["a", "b"]);
    let group = RadioGroup::with_items(items.clone());

    items[0].set_enabled(false);
    group.set_enabled(Some(true));
    assert!(items.iter().all(|i| i.is_enabled()));

    group.set_name(Some("letters".into()));
    assert!(items.iter().all(|i| i.name().as_deref() == Some("letters")));

    let names = Arc::new(Mutex::new(Vec::new()));
    let names_clone = names.clone();
    group.name_changed().connect(move |name| names_clone.lock().push(name.clone()));
    group.reset_name();
    assert_eq!(*names.lock(), vec![None]);
}
