//! Integration tests for sequences: eager persistence and lazy production.

use sigil_foundation::list::{self, List};
use sigil_foundation::{Value, ops};

#[test]
fn eager_lists_share_structure() {
    let a = List::eager([Value::Int(1), Value::Int(2)]);
    let b = a.clone();
    assert_eq!(a, b);
    assert_eq!(a.len(), 2);
}

#[test]
fn naturals_are_infinite_but_bounded_access_terminates() {
    let n = list::naturals();
    assert_eq!(n.get(1000), Some(Value::Int(1000)));
    assert_eq!(n.prefix(3), vec![Value::Int(0), Value::Int(1), Value::Int(2)]);
}

#[test]
fn lazy_streams_are_memoized() {
    let f = list::fibonacci();
    assert_eq!(f.get(10), Some(Value::Int(89)));
    assert_eq!(f.get(10), Some(Value::Int(89)));
}

#[test]
fn materialize_makes_concrete() {
    let small = List::lazy("range", Box::new((0i64..3).map(Value::Int)));
    let concrete = small.materialize();
    assert_eq!(concrete.len(), 3);
}

#[test]
fn indexing_respects_laziness() {
    // ops::seq::index must not materialize an infinite stream.
    let naturals = Value::List(list::naturals());
    assert_eq!(
        ops::seq::index(&naturals, &Value::Int(7)).unwrap(),
        Value::Int(7)
    );
}

#[test]
fn take_respects_laziness() {
    let naturals = Value::List(list::naturals());
    assert_eq!(
        ops::seq::take(&naturals, &Value::Int(4)).unwrap(),
        Value::from(vec![0i64, 1, 2, 3])
    );
}

#[test]
fn display_never_forces_lazy_lists() {
    let n = list::naturals();
    // Nothing cached yet: rendering shows only the ellipsis.
    assert_eq!(format!("{n}"), "[…]");
    let _ = n.get(1);
    assert_eq!(format!("{n}"), "[0, 1…]");
}
