//! Text and conversion commands.

use sigil_foundation::{Result, Value, ops};

use crate::commands::CommandSet;

pub(crate) fn register(set: &mut CommandSet) -> Result<()> {
    set.binary_ref("j", ops::string::join_on)?;
    set.unary_ref("⁋", ops::string::join_newlines)?;
    set.unary_ref("§", |v| ops::string::vertical_join(v, &Value::from(" ")))?;
    set.binary_ref("ε", ops::string::vertical_join)?;
    set.binary_ref("Ẇ", ops::string::split_keep)?;
    set.unary_ref("↵", ops::string::split_newlines_or_pow_ten)?;
    set.binary_ref("P", ops::string::strip)?;
    set.ternary_ref("V", ops::string::replace)?;
    set.ternary_ref("¢", ops::string::infinite_replace)?;

    set.unary_ref("S", |v| Ok(ops::convert::to_str(v)))?;
    set.unary("I", ops::convert::to_int)?;
    set.unary("E", ops::convert::eval_literal)?;
    set.unary_ref("q", ops::string::uneval)?;
    set.unary("C", ops::convert::chr_ord)?;

    set.unary("b", ops::convert::to_binary)?;
    set.unary_ref("B", |v| ops::convert::parse_radix(v, 2))?;
    set.unary_ref("H", |v| ops::convert::parse_radix(v, 16))?;
    set.binary_ref("β", ops::convert::from_custom_base)?;
    set.binary_ref("τ", ops::convert::to_custom_base)?;

    Ok(())
}
