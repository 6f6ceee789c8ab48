//! Sequence commands.

use sigil_foundation::{Result, Value, ops};

use crate::commands::CommandSet;

pub(crate) fn register(set: &mut CommandSet) -> Result<()> {
    set.unary_ref("L", ops::seq::length)?;
    set.unary_ref("Ṙ", ops::seq::reverse)?;
    set.unary_ref("U", ops::seq::uniquify)?;
    set.unary_ref("f", ops::seq::flatten)?;
    set.unary_ref("h", ops::seq::head)?;
    set.unary_ref("t", ops::seq::last)?;
    set.unary_ref("Ḣ", ops::seq::rest)?;
    set.unary_ref("Ṫ", ops::seq::init)?;
    set.unary_ref("m", ops::seq::mirror)?;

    set.binary_ref("i", ops::seq::index)?;
    set.binary_ref("ḟ", ops::seq::find)?;
    set.ternary_ref("ŀ", ops::seq::find_from)?;
    set.binary_ref("c", ops::seq::contains)?;
    set.binary_ref("O", ops::seq::count_occurrences)?;
    set.binary_ref("o", ops::seq::remove_all)?;
    set.binary_ref("p", ops::seq::prepend)?;
    set.binary_ref("J", ops::seq::join)?;

    set.unary_ref("s", ops::seq::sorted)?;
    set.unary_ref("⇧", ops::seq::graded)?;
    set.unary_ref("⇩", ops::seq::graded_down)?;
    set.unary_ref("G", ops::seq::max_of)?;
    set.unary_ref("g", ops::seq::min_of)?;
    set.unary_ref("↑", ops::seq::max_by_tail)?;
    set.unary_ref("↓", ops::seq::min_by_tail)?;

    set.unary_ref("∑", ops::seq::summate)?;
    set.unary_ref("Π", ops::seq::product)?;
    set.unary_ref("ṁ", ops::seq::mean)?;
    set.unary_ref("¦", ops::seq::cumulative_sum)?;
    set.unary_ref("¯", ops::seq::deltas)?;
    set.unary_ref("ė", ops::seq::enumerated)?;
    set.unary_ref("T", ops::seq::truthy_indices)?;

    set.binary_ref("Y", ops::seq::interleave)?;
    set.binary_ref("Z", ops::seq::zip2)?;
    set.binary_ref("Ẋ", ops::seq::cartesian_product)?;
    set.unary_ref("ṗ", ops::seq::powerset)?;
    set.unary_ref("Ṗ", ops::seq::permutations)?;
    set.binary_ref("↔", ops::seq::combinations_with_replacement)?;
    set.unary_ref("Ġ", ops::seq::group_consecutive)?;
    set.unary_ref("Ċ", ops::seq::counts)?;
    set.ternary_ref("Ȧ", ops::seq::assign_at)?;
    set.ternary_ref("Ṁ", ops::seq::insert_at)?;

    set.binary_ref("∪", ops::seq::union)?;
    set.binary_ref("∩", ops::seq::intersection)?;
    set.binary_ref("⊍", ops::seq::symmetric_difference)?;

    set.binary_ref("Ǔ", ops::seq::rotate)?;
    set.binary_ref("ǔ", |v, n| {
        ops::seq::rotate(v, &ops::arith::negate(n.clone())?)
    })?;
    set.binary_ref("ẇ", ops::seq::chunks)?;
    set.binary_ref("l", ops::seq::windows)?;
    set.binary_ref("ẋ", ops::seq::repeat)?;
    set.binary_ref("Ẏ", ops::seq::take)?;
    set.binary_ref("Ż", ops::seq::take_after_head)?;

    // ẏ / ż: the index ranges 0..len and 1..=len.
    set.unary_ref("ẏ", |v| {
        let len = ops::seq::length(v)?;
        ops::number::orderless_range(Value::Int(0), len)
    })?;
    set.unary_ref("ż", |v| {
        let len = ops::seq::length(v)?;
        ops::number::orderless_range(Value::Int(1), ops::arith::add(len, Value::Int(1))?)
    })?;

    // Ṅ: integer partitions of a number; anything else joins on spaces.
    set.unary_ref("Ṅ", |v| match v {
        Value::Int(_) | Value::Float(_) => ops::number::partitions(v),
        _ => ops::string::join_on(v, &Value::from(" ")),
    })?;

    // ḣ/ṫ/Ḃ/y/÷ (multi-push structural forms) live in the stack family.
    set.binary_ref("€", ops::string::split)?;

    Ok(())
}
