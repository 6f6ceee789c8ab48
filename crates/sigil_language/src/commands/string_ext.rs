//! The `ø` namespace: text layout and codecs.

use sigil_foundation::{Error, Result, Type, Value, ops};

use crate::commands::CommandSet;

pub(crate) fn register(set: &mut CommandSet) -> Result<()> {
    // øo: remove occurrences until none remain (fixpoint removal).
    set.binary_ref("øo", |lhs, rhs| {
        ops::string::infinite_replace(lhs, rhs, &Value::from(""))
    })?;
    set.ternary_ref("øV", ops::string::infinite_replace)?;
    set.binary_ref("øp", ops::string::starts_with)?;
    set.binary_ref("øP", ops::string::pluralise)?;

    set.unary_ref("øĊ", ops::string::centre)?;
    set.unary_ref("øm", ops::seq::palindromise)?;
    set.unary_ref("øe", ops::string::run_length_encode)?;
    set.unary_ref("ød", ops::string::run_length_decode)?;
    set.unary_ref("øW", ops::string::split_on_words)?;

    set.unary_ref("øṁ", |v| ops::string::vertical_mirror(v, None))?;
    set.unary_ref("øṀ", ops::string::flip_brackets_vertical_mirror)?;
    // ø¦: vertical mirror with a custom symbol-swap table, given as a
    // two-element list of texts.
    set.binary_ref("ø¦", |lhs, rhs| {
        let mapping = ops::to_vec(rhs)?;
        let (Some(Value::Str(from)), Some(Value::Str(to))) =
            (mapping.first(), mapping.get(1))
        else {
            return Err(Error::type_mismatch(Type::Str, rhs.value_type()));
        };
        ops::string::vertical_mirror(lhs, Some((from.as_ref(), to.as_ref())))
    })?;

    Ok(())
}
