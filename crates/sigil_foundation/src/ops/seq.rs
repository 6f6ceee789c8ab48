//! Sequence primitives: structure, selection, reordering, set operations.
//!
//! Most of these are type-preserving over text (see [`super::Seq`]): applied
//! to text they work on its symbols and yield text back.

use std::collections::HashSet;

use crate::error::Error;
use crate::list::List;
use crate::types::Type;
use crate::value::Value;

use super::compare::order_for_sort;
use super::{as_seq, str_of, to_vec};

/// Length of a sequence (or text).
pub fn length(v: &Value) -> crate::Result<Value> {
    match v {
        Value::Str(s) => Ok(Value::from(s.chars().count())),
        _ => Ok(Value::from(to_vec(v)?.len())),
    }
}

/// Reverses a sequence or text.
pub fn reverse(v: &Value) -> crate::Result<Value> {
    let s = as_seq(v)?;
    let mut items = s.values();
    items.reverse();
    Ok(s.rebuild(items))
}

/// Removes duplicate elements, keeping first occurrences.
pub fn uniquify(v: &Value) -> crate::Result<Value> {
    let s = as_seq(v)?;
    let mut seen = HashSet::new();
    let items: Vec<Value> = s
        .values()
        .into_iter()
        .filter(|x| seen.insert(x.clone()))
        .collect();
    Ok(s.rebuild(items))
}

/// Mask of first occurrences: 1 where an element is new, 0 otherwise.
pub fn nub_sieve(v: &Value) -> crate::Result<Value> {
    let mut seen = HashSet::new();
    let mask: Vec<Value> = to_vec(v)?
        .into_iter()
        .map(|x| Value::from(seen.insert(x)))
        .collect();
    Ok(Value::list(mask))
}

/// Deep-flattens nested sequences into one list.
pub fn flatten(v: &Value) -> crate::Result<Value> {
    fn walk(v: &Value, out: &mut Vec<Value>) {
        match v {
            Value::List(l) => {
                for item in l.materialize() {
                    walk(&item, out);
                }
            }
            Value::Pair(p) => {
                walk(&p.0, out);
                walk(&p.1, out);
            }
            other => out.push(other.clone()),
        }
    }
    let mut out = Vec::new();
    walk(v, &mut out);
    Ok(Value::list(out))
}

/// First element of a sequence.
pub fn head(v: &Value) -> crate::Result<Value> {
    let s = as_seq(v)?;
    s.values()
        .first()
        .cloned()
        .ok_or_else(|| Error::new(crate::ErrorKind::IndexOutOfBounds { index: 0, length: 0 }))
}

/// Last element of a sequence.
pub fn last(v: &Value) -> crate::Result<Value> {
    let s = as_seq(v)?;
    s.values()
        .last()
        .cloned()
        .ok_or_else(|| Error::new(crate::ErrorKind::IndexOutOfBounds { index: -1, length: 0 }))
}

/// Everything after the first element.
pub fn rest(v: &Value) -> crate::Result<Value> {
    let s = as_seq(v)?;
    let items = s.values();
    Ok(s.rebuild(items.into_iter().skip(1).collect()))
}

/// Everything before the last element.
pub fn init(v: &Value) -> crate::Result<Value> {
    let s = as_seq(v)?;
    let mut items = s.values();
    items.pop();
    Ok(s.rebuild(items))
}

/// Indexes into a sequence; negative indices count from the end.
///
/// Lazy sequences are accessed without materialization, which is what makes
/// bounded access into infinite streams terminate.
pub fn index(v: &Value, idx: &Value) -> crate::Result<Value> {
    let i = idx.expect_int()?;
    if let Value::List(List::Lazy(l)) = v {
        if i >= 0 {
            #[allow(clippy::cast_sign_loss)]
            return l.get(i as usize).ok_or_else(|| {
                Error::new(crate::ErrorKind::IndexOutOfBounds { index: i, length: 0 })
            });
        }
    }
    let items = to_vec(v)?;
    let len = items.len();
    if len == 0 {
        return Err(Error::new(crate::ErrorKind::IndexOutOfBounds { index: i, length: 0 }));
    }
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    let pos = (i.rem_euclid(len as i64)) as usize;
    Ok(items[pos].clone())
}

/// Zero-based index of the first occurrence, or -1.
pub fn find(haystack: &Value, needle: &Value) -> crate::Result<Value> {
    let items = to_vec(haystack)?;
    Ok(items
        .iter()
        .position(|x| super::compare::loose_eq(x, needle))
        .map_or(Value::Int(-1), Value::from))
}

/// Like [`find`], starting the search at `start`.
pub fn find_from(haystack: &Value, needle: &Value, start: &Value) -> crate::Result<Value> {
    let items = to_vec(haystack)?;
    let from = usize::try_from(start.expect_int()?.max(0)).unwrap_or(0);
    Ok(items
        .iter()
        .skip(from)
        .position(|x| super::compare::loose_eq(x, needle))
        .map_or(Value::Int(-1), |p| Value::from(p + from)))
}

/// Membership test; text containment for text haystacks.
pub fn contains(haystack: &Value, needle: &Value) -> crate::Result<Value> {
    match haystack {
        Value::Str(s) => Ok(Value::from(s.contains(str_of(needle).as_str()))),
        _ => {
            let items = to_vec(haystack)?;
            Ok(Value::from(
                items.iter().any(|x| super::compare::loose_eq(x, needle)),
            ))
        }
    }
}

/// Number of occurrences of `needle` in `haystack`.
pub fn count_occurrences(haystack: &Value, needle: &Value) -> crate::Result<Value> {
    match haystack {
        Value::Str(s) => {
            let pat = str_of(needle);
            if pat.is_empty() {
                return Ok(Value::Int(0));
            }
            Ok(Value::from(s.matches(pat.as_str()).count()))
        }
        _ => {
            let items = to_vec(haystack)?;
            Ok(Value::from(
                items
                    .iter()
                    .filter(|x| super::compare::loose_eq(x, needle))
                    .count(),
            ))
        }
    }
}

/// Removes every occurrence of `needle`.
pub fn remove_all(haystack: &Value, needle: &Value) -> crate::Result<Value> {
    match haystack {
        Value::Str(s) => Ok(Value::from(s.replace(str_of(needle).as_str(), ""))),
        _ => {
            let s = as_seq(haystack)?;
            let items: Vec<Value> = s
                .values()
                .into_iter()
                .filter(|x| !super::compare::loose_eq(x, needle))
                .collect();
            Ok(s.rebuild(items))
        }
    }
}

/// Prepends an element to a sequence.
pub fn prepend(seq: &Value, item: &Value) -> crate::Result<Value> {
    match seq {
        Value::Str(s) => Ok(Value::from(format!("{}{s}", str_of(item)))),
        _ => {
            let mut items = to_vec(seq)?;
            items.insert(0, item.clone());
            Ok(Value::list(items))
        }
    }
}

/// Joins two sequences (or texts) end to end.
pub fn join(lhs: &Value, rhs: &Value) -> crate::Result<Value> {
    match (lhs, rhs) {
        (Value::List(a), Value::List(b)) => {
            Ok(Value::List(List::Eager(a.materialize().concat(&b.materialize()))))
        }
        (Value::List(a), other) => {
            Ok(Value::List(List::Eager(a.materialize().push_back(other.clone()))))
        }
        (other, Value::List(b)) => {
            Ok(Value::List(List::Eager(b.materialize().push_front(other.clone()))))
        }
        (a, b) => Ok(Value::from(format!("{}{}", str_of(a), str_of(b)))),
    }
}

/// Sorts ascending.
pub fn sorted(v: &Value) -> crate::Result<Value> {
    let s = as_seq(v)?;
    let mut items = s.values();
    items.sort_by(order_for_sort);
    Ok(s.rebuild(items))
}

/// Indices that would sort the sequence ascending (grade up).
pub fn graded(v: &Value) -> crate::Result<Value> {
    let items = to_vec(v)?;
    let mut idx: Vec<usize> = (0..items.len()).collect();
    idx.sort_by(|&a, &b| order_for_sort(&items[a], &items[b]));
    Ok(Value::list(idx.into_iter().map(Value::from)))
}

/// Indices that would sort the sequence descending (grade down).
pub fn graded_down(v: &Value) -> crate::Result<Value> {
    let items = to_vec(v)?;
    let mut idx: Vec<usize> = (0..items.len()).collect();
    idx.sort_by(|&a, &b| order_for_sort(&items[b], &items[a]));
    Ok(Value::list(idx.into_iter().map(Value::from)))
}

/// Largest element of a sequence.
pub fn max_of(v: &Value) -> crate::Result<Value> {
    let items = to_vec(v)?;
    items
        .into_iter()
        .max_by(|a, b| order_for_sort(a, b))
        .ok_or_else(|| Error::type_mismatch(Type::List, Type::List))
}

/// Smallest element of a sequence.
pub fn min_of(v: &Value) -> crate::Result<Value> {
    let items = to_vec(v)?;
    items
        .into_iter()
        .min_by(|a, b| order_for_sort(a, b))
        .ok_or_else(|| Error::type_mismatch(Type::List, Type::List))
}

/// Element with the largest last component (for `[key, value]` rows).
pub fn max_by_tail(v: &Value) -> crate::Result<Value> {
    let items = to_vec(v)?;
    items
        .into_iter()
        .max_by(|a, b| {
            let ta = last(a).unwrap_or(Value::Int(0));
            let tb = last(b).unwrap_or(Value::Int(0));
            order_for_sort(&ta, &tb)
        })
        .ok_or_else(|| Error::type_mismatch(Type::List, Type::List))
}

/// Element with the smallest last component.
pub fn min_by_tail(v: &Value) -> crate::Result<Value> {
    let items = to_vec(v)?;
    items
        .into_iter()
        .min_by(|a, b| {
            let ta = last(a).unwrap_or(Value::Int(0));
            let tb = last(b).unwrap_or(Value::Int(0));
            order_for_sort(&ta, &tb)
        })
        .ok_or_else(|| Error::type_mismatch(Type::List, Type::List))
}

/// Sum of a sequence (empty sums to 0).
pub fn summate(v: &Value) -> crate::Result<Value> {
    let items = to_vec(v)?;
    let mut acc = Value::Int(0);
    let mut first = true;
    for item in items {
        // Summing text concatenates, so seed from the first element.
        if first {
            acc = item;
            first = false;
        } else {
            acc = super::arith::add(acc, item)?;
        }
    }
    Ok(acc)
}

/// Product of a sequence (empty multiplies to 1).
pub fn product(v: &Value) -> crate::Result<Value> {
    let items = to_vec(v)?;
    let mut acc = Value::Int(1);
    for item in items {
        acc = super::arith::multiply(acc, item)?;
    }
    Ok(acc)
}

/// Arithmetic mean of a sequence.
pub fn mean(v: &Value) -> crate::Result<Value> {
    let items = to_vec(v)?;
    if items.is_empty() {
        return Ok(Value::Int(0));
    }
    let total = summate(v)?;
    super::arith::divide(total, Value::from(items.len()))
}

/// Running totals.
pub fn cumulative_sum(v: &Value) -> crate::Result<Value> {
    let items = to_vec(v)?;
    let mut out = Vec::with_capacity(items.len());
    let mut acc: Option<Value> = None;
    for item in items {
        acc = Some(match acc {
            None => item,
            Some(prev) => super::arith::add(prev, item)?,
        });
        out.push(acc.clone().unwrap());
    }
    Ok(Value::list(out))
}

/// Pairwise differences.
pub fn deltas(v: &Value) -> crate::Result<Value> {
    let items = to_vec(v)?;
    let mut out = Vec::new();
    for pair in items.windows(2) {
        out.push(super::arith::subtract(pair[1].clone(), pair[0].clone())?);
    }
    Ok(Value::list(out))
}

/// `[index, element]` rows.
pub fn enumerated(v: &Value) -> crate::Result<Value> {
    let items = to_vec(v)?;
    Ok(Value::list(items.into_iter().enumerate().map(|(i, x)| {
        Value::list([Value::from(i), x])
    })))
}

/// Interleaves two sequences, appending the leftover tail.
pub fn interleave(lhs: &Value, rhs: &Value) -> crate::Result<Value> {
    let a = to_vec(lhs)?;
    let b = to_vec(rhs)?;
    let mut out = Vec::with_capacity(a.len() + b.len());
    let mut ai = a.into_iter();
    let mut bi = b.into_iter();
    loop {
        match (ai.next(), bi.next()) {
            (Some(x), Some(y)) => {
                out.push(x);
                out.push(y);
            }
            (Some(x), None) => out.push(x),
            (None, Some(y)) => out.push(y),
            (None, None) => break,
        }
    }
    Ok(Value::list(out))
}

/// Splits into the even- and odd-indexed halves.
pub fn uninterleave(v: &Value) -> crate::Result<(Value, Value)> {
    let items = to_vec(v)?;
    let evens: Vec<Value> = items.iter().step_by(2).cloned().collect();
    let odds: Vec<Value> = items.iter().skip(1).step_by(2).cloned().collect();
    Ok((Value::list(evens), Value::list(odds)))
}

/// Appends the reverse: `abc` becomes `abccba`.
pub fn mirror(v: &Value) -> crate::Result<Value> {
    match v {
        Value::Int(_) | Value::Float(_) => {
            let s = str_of(v);
            let mirrored: String = s.chars().chain(s.chars().rev()).collect();
            mirrored
                .parse::<i64>()
                .map(Value::Int)
                .or_else(|_| Ok(Value::from(mirrored)))
        }
        _ => {
            let s = as_seq(v)?;
            let mut items = s.values();
            let mut tail: Vec<Value> = items.iter().cloned().rev().collect();
            items.append(&mut tail);
            Ok(s.rebuild(items))
        }
    }
}

/// Appends the reverse without doubling the last element: `abc` → `abcba`.
pub fn palindromise(v: &Value) -> crate::Result<Value> {
    let s = as_seq(v)?;
    let mut items = s.values();
    let mut tail: Vec<Value> = items.iter().cloned().rev().skip(1).collect();
    items.append(&mut tail);
    Ok(s.rebuild(items))
}

/// Zips two sequences into `[a, b]` rows, stopping at the shorter.
pub fn zip2(lhs: &Value, rhs: &Value) -> crate::Result<Value> {
    let a = to_vec(lhs)?;
    let b = to_vec(rhs)?;
    Ok(Value::list(
        a.into_iter()
            .zip(b)
            .map(|(x, y)| Value::list([x, y])),
    ))
}

/// Zips two sequences to the longer, filling gaps with `fill`.
pub fn zip_longest(lhs: &Value, rhs: &Value, fill: &Value) -> crate::Result<Value> {
    let a = to_vec(lhs)?;
    let b = to_vec(rhs)?;
    let len = a.len().max(b.len());
    let mut out = Vec::with_capacity(len);
    for i in 0..len {
        let x = a.get(i).cloned().unwrap_or_else(|| fill.clone());
        let y = b.get(i).cloned().unwrap_or_else(|| fill.clone());
        out.push(Value::list([x, y]));
    }
    Ok(Value::list(out))
}

/// Cartesian product as `[a, b]` rows.
pub fn cartesian_product(lhs: &Value, rhs: &Value) -> crate::Result<Value> {
    let a = to_vec(lhs)?;
    let b = to_vec(rhs)?;
    let mut out = Vec::with_capacity(a.len() * b.len());
    for x in &a {
        for y in &b {
            out.push(Value::list([x.clone(), y.clone()]));
        }
    }
    Ok(Value::list(out))
}

/// All subsets, shortest first.
pub fn powerset(v: &Value) -> crate::Result<Value> {
    let items = to_vec(v)?;
    if items.len() > 20 {
        return Err(Error::internal("powerset operand too large"));
    }
    let mut subsets: Vec<Vec<Value>> = Vec::with_capacity(1 << items.len());
    for mask in 0u32..(1 << items.len()) {
        let subset: Vec<Value> = items
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, x)| x.clone())
            .collect();
        subsets.push(subset);
    }
    subsets.sort_by_key(Vec::len);
    Ok(Value::list(subsets.into_iter().map(Value::list)))
}

/// All permutations, in generation order.
pub fn permutations(v: &Value) -> crate::Result<Value> {
    let items = to_vec(v)?;
    if items.len() > 8 {
        return Err(Error::internal("permutation operand too large"));
    }
    let mut out = Vec::new();
    let mut current = items;
    heap_permute(current.len(), &mut current, &mut out);
    Ok(Value::list(out.into_iter().map(Value::list)))
}

fn heap_permute(k: usize, items: &mut Vec<Value>, out: &mut Vec<Vec<Value>>) {
    if k <= 1 {
        out.push(items.clone());
        return;
    }
    for i in 0..k {
        heap_permute(k - 1, items, out);
        if k % 2 == 0 {
            items.swap(i, k - 1);
        } else {
            items.swap(0, k - 1);
        }
    }
}

/// Combinations with replacement of the given length.
pub fn combinations_with_replacement(v: &Value, n: &Value) -> crate::Result<Value> {
    let items = to_vec(v)?;
    let n = usize::try_from(n.expect_int()?.max(0)).unwrap_or(0);
    let mut out: Vec<Vec<Value>> = vec![Vec::new()];
    for _ in 0..n {
        let mut next = Vec::new();
        for combo in &out {
            let start = combo
                .last()
                .and_then(|l| items.iter().position(|x| x == l))
                .unwrap_or(0);
            for item in items.iter().skip(start) {
                let mut grown = combo.clone();
                grown.push(item.clone());
                next.push(grown);
            }
        }
        out = next;
    }
    Ok(Value::list(out.into_iter().map(Value::list)))
}

/// Groups equal consecutive elements into runs.
pub fn group_consecutive(v: &Value) -> crate::Result<Value> {
    let items = to_vec(v)?;
    let mut groups: Vec<Vec<Value>> = Vec::new();
    for item in items {
        match groups.last_mut() {
            Some(g) if g.last() == Some(&item) => g.push(item),
            _ => groups.push(vec![item]),
        }
    }
    Ok(Value::list(groups.into_iter().map(Value::list)))
}

/// `[element, count]` rows for each distinct element, in first-seen order.
pub fn counts(v: &Value) -> crate::Result<Value> {
    let items = to_vec(v)?;
    let mut keys: Vec<Value> = Vec::new();
    for item in &items {
        if !keys.contains(item) {
            keys.push(item.clone());
        }
    }
    Ok(Value::list(keys.into_iter().map(|k| {
        let n = items.iter().filter(|x| **x == k).count();
        Value::list([k, Value::from(n)])
    })))
}

/// Replaces the element at an index, leaving the rest untouched.
pub fn assign_at(seq: &Value, idx: &Value, item: &Value) -> crate::Result<Value> {
    let s = as_seq(seq)?;
    let mut items = s.values();
    let len = items.len();
    if len == 0 {
        return Err(Error::new(crate::ErrorKind::IndexOutOfBounds { index: 0, length: 0 }));
    }
    let i = idx.expect_int()?;
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    let pos = (i.rem_euclid(len as i64)) as usize;
    items[pos] = item.clone();
    Ok(s.rebuild(items))
}

/// Inserts an element at an index, shifting the rest right.
pub fn insert_at(seq: &Value, idx: &Value, item: &Value) -> crate::Result<Value> {
    let s = as_seq(seq)?;
    let mut items = s.values();
    let pos = usize::try_from(idx.expect_int()?.max(0))
        .unwrap_or(0)
        .min(items.len());
    items.insert(pos, item.clone());
    Ok(s.rebuild(items))
}

/// Set union, keeping order of first appearance.
pub fn union(lhs: &Value, rhs: &Value) -> crate::Result<Value> {
    let mut items = to_vec(lhs)?;
    for item in to_vec(rhs)? {
        if !items.contains(&item) {
            items.push(item);
        }
    }
    uniquify(&Value::list(items))
}

/// Set intersection, in left-hand order.
pub fn intersection(lhs: &Value, rhs: &Value) -> crate::Result<Value> {
    let b = to_vec(rhs)?;
    let items: Vec<Value> = to_vec(lhs)?
        .into_iter()
        .filter(|x| b.contains(x))
        .collect();
    uniquify(&Value::list(items))
}

/// Symmetric difference: elements in exactly one of the two.
pub fn symmetric_difference(lhs: &Value, rhs: &Value) -> crate::Result<Value> {
    let a = to_vec(lhs)?;
    let b = to_vec(rhs)?;
    let mut items: Vec<Value> = a.iter().filter(|x| !b.contains(x)).cloned().collect();
    items.extend(b.iter().filter(|x| !a.contains(x)).cloned());
    uniquify(&Value::list(items))
}

/// Rotates left by `n` (negative rotates right).
pub fn rotate(v: &Value, n: &Value) -> crate::Result<Value> {
    let s = as_seq(v)?;
    let mut items = s.values();
    let len = items.len();
    if len == 0 {
        return Ok(s.rebuild(items));
    }
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    let by = (n.expect_int()?.rem_euclid(len as i64)) as usize;
    items.rotate_left(by);
    Ok(s.rebuild(items))
}

/// Chunks of `n` elements (the last may be short).
pub fn chunks(v: &Value, n: &Value) -> crate::Result<Value> {
    let s = as_seq(v)?;
    let items = s.values();
    let size = usize::try_from(n.expect_int()?.max(1)).unwrap_or(1);
    Ok(Value::list(
        items
            .chunks(size)
            .map(|c| s.rebuild(c.to_vec()))
            .collect::<Vec<_>>(),
    ))
}

/// Overlapping windows of `n` elements.
pub fn windows(v: &Value, n: &Value) -> crate::Result<Value> {
    let s = as_seq(v)?;
    let items = s.values();
    let size = usize::try_from(n.expect_int()?.max(1)).unwrap_or(1);
    if size > items.len() {
        return Ok(Value::list([]));
    }
    Ok(Value::list(
        items
            .windows(size)
            .map(|w| s.rebuild(w.to_vec()))
            .collect::<Vec<_>>(),
    ))
}

/// Repeats a sequence `n` times (a scalar becomes an `n`-element list).
pub fn repeat(v: &Value, n: &Value) -> crate::Result<Value> {
    let count = usize::try_from(n.expect_int()?.max(0)).unwrap_or(0);
    match v {
        Value::Str(s) => Ok(Value::from(s.repeat(count))),
        Value::List(l) => {
            let items = l.materialize();
            let mut out = Vec::with_capacity(items.len() * count);
            for _ in 0..count {
                out.extend(items.iter().cloned());
            }
            Ok(Value::list(out))
        }
        other => Ok(Value::list(std::iter::repeat_n(other.clone(), count))),
    }
}

/// Indices of truthy elements.
pub fn truthy_indices(v: &Value) -> crate::Result<Value> {
    let items = to_vec(v)?;
    Ok(Value::list(
        items
            .iter()
            .enumerate()
            .filter(|(_, x)| x.is_truthy())
            .map(|(i, _)| Value::from(i)),
    ))
}

/// Whether all elements are equal.
pub fn all_equal(v: &Value) -> crate::Result<Value> {
    let items = to_vec(v)?;
    Ok(Value::from(items.windows(2).all(|w| w[0] == w[1])))
}

/// First `n` elements.
pub fn take(v: &Value, n: &Value) -> crate::Result<Value> {
    let count = usize::try_from(n.expect_int()?.max(0)).unwrap_or(0);
    match v {
        // Bounded access: take from a lazy stream without materializing it.
        Value::List(l) if l.is_lazy() => Ok(Value::list(l.prefix(count))),
        _ => {
            let s = as_seq(v)?;
            let items: Vec<Value> = s.values().into_iter().take(count).collect();
            Ok(s.rebuild(items))
        }
    }
}

/// Elements `1..=n` (drop the head, then take `n`).
pub fn take_after_head(v: &Value, n: &Value) -> crate::Result<Value> {
    let count = usize::try_from(n.expect_int()?.max(0)).unwrap_or(0);
    let s = as_seq(v)?;
    let items: Vec<Value> = s.values().into_iter().skip(1).take(count).collect();
    Ok(s.rebuild(items))
}
