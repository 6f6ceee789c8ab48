//! Comparison commands.
//!
//! Slot 1 is the right-hand operand throughout: `3 4 <` asks whether
//! `3 < 4`.

use sigil_foundation::{Result, ops};
use sigil_foundation::ops::compare::Comparison;

use crate::commands::CommandSet;

pub(crate) fn register(set: &mut CommandSet) -> Result<()> {
    set.binary_ref("<", |lhs, rhs| {
        ops::compare::compare(lhs, rhs, Comparison::LessThan)
    })?;
    set.binary_ref(">", |lhs, rhs| {
        ops::compare::compare(lhs, rhs, Comparison::GreaterThan)
    })?;
    set.binary_ref("=", |lhs, rhs| {
        ops::compare::compare(lhs, rhs, Comparison::Equal)
    })?;
    set.binary_ref("≠", |lhs, rhs| {
        ops::compare::compare(lhs, rhs, Comparison::NotEqual)
    })?;
    set.binary_ref("≤", |lhs, rhs| {
        ops::compare::compare(lhs, rhs, Comparison::LessThanEqual)
    })?;
    set.binary_ref("≥", |lhs, rhs| {
        ops::compare::compare(lhs, rhs, Comparison::GreaterThanEqual)
    })?;
    set.binary_ref("⁼", ops::compare::strict_eq)?;

    set.binary("∴", ops::compare::max2)?;
    set.binary("∵", ops::compare::min2)?;

    Ok(())
}
