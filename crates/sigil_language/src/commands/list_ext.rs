//! The `Þ` namespace: lists, matrices, and lazy numeric streams.

use rand::seq::SliceRandom;
use sigil_foundation::{Result, Value, list, ops};

use crate::command::Outcome;
use crate::commands::CommandSet;

pub(crate) fn register(set: &mut CommandSet) -> Result<()> {
    // Infinite lazy streams.
    set.constant("ÞF", || Value::List(list::fibonacci()))?;
    set.constant("Þ!", || Value::List(list::factorials()))?;
    set.constant("Þp", || Value::List(list::primes()))?;

    set.unary_ref("ÞU", ops::seq::nub_sieve)?;
    set.unary_ref("ÞT", ops::matrix::transpose)?;
    set.unary_ref("ÞD", ops::matrix::diagonals)?;
    set.unary_ref("ÞS", ops::matrix::sublists)?;
    set.unary_ref("ÞḊ", ops::matrix::determinant)?;
    set.unary_ref("Þ/", ops::matrix::main_diagonal)?;
    set.unary_ref("Þ\\", ops::matrix::anti_diagonal)?;
    set.binary_ref("Þ•", ops::matrix::dot_product)?;
    set.binary_ref("ÞṀ", ops::matrix::matrix_multiply)?;
    set.binary_ref("ÞṪ", ops::matrix::transpose_fill)?;

    // Þ℅: random shuffle. Nondeterministic by design; drawn from the
    // environment's seedable RNG.
    set.op("Þ℅", 1, |interp, operands| {
        let mut items = ops::to_vec(&operands.unary())?;
        items.shuffle(&mut interp.env.rng);
        Ok(Outcome::One(Value::list(items)))
    })?;

    // Þ↑ / Þ↓: extremum by key function (function on top).
    set.op("Þ↑", 2, |interp, operands| {
        let (vector, function) = operands.binary();
        let f = function.expect_fn()?.clone();
        let items = ops::to_vec(&vector)?;
        let mut best: Option<(Value, Value)> = None;
        for item in items {
            let key = interp.invoke_value(&f, vec![item.clone()])?;
            let replace = match &best {
                Some((_, best_key)) => {
                    matches!(
                        ops::compare::compare(
                            &key,
                            best_key,
                            ops::compare::Comparison::GreaterThan
                        )?,
                        Value::Int(1)
                    )
                }
                None => true,
            };
            if replace {
                best = Some((item, key));
            }
        }
        let winner = best
            .map(|(item, _)| item)
            .ok_or_else(|| sigil_foundation::Error::internal("extremum of empty sequence"))?;
        Ok(Outcome::One(winner))
    })?;
    set.op("Þ↓", 2, |interp, operands| {
        let (vector, function) = operands.binary();
        let f = function.expect_fn()?.clone();
        let items = ops::to_vec(&vector)?;
        let mut best: Option<(Value, Value)> = None;
        for item in items {
            let key = interp.invoke_value(&f, vec![item.clone()])?;
            let replace = match &best {
                Some((_, best_key)) => {
                    matches!(
                        ops::compare::compare(
                            &key,
                            best_key,
                            ops::compare::Comparison::LessThan
                        )?,
                        Value::Int(1)
                    )
                }
                None => true,
            };
            if replace {
                best = Some((item, key));
            }
        }
        let winner = best
            .map(|(item, _)| item)
            .ok_or_else(|| sigil_foundation::Error::internal("extremum of empty sequence"))?;
        Ok(Outcome::One(winner))
    })?;

    // ÞR / ÞC: fold each row / column with the function on top.
    set.op("ÞR", 2, |interp, operands| {
        let (matrix, function) = operands.binary();
        let f = function.expect_fn()?.clone();
        let rows = ops::to_vec(&matrix)?;
        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            out.push(fold_with(interp, &f, &row)?);
        }
        Ok(Outcome::One(Value::list(out)))
    })?;
    set.op("ÞC", 2, |interp, operands| {
        let (matrix, function) = operands.binary();
        let f = function.expect_fn()?.clone();
        let transposed = ops::matrix::transpose(&matrix)?;
        let cols = ops::to_vec(&transposed)?;
        let mut out = Vec::with_capacity(cols.len());
        for col in cols {
            out.push(fold_with(interp, &f, &col)?);
        }
        Ok(Outcome::One(Value::list(out)))
    })?;

    Ok(())
}

// Left fold of one sequence with a binary function; an empty sequence
// folds to 0 and a singleton to its element.
fn fold_with(
    interp: &mut crate::interp::Interp<'_>,
    f: &sigil_foundation::SgFn,
    seq: &Value,
) -> Result<Value> {
    let items = ops::to_vec(seq)?;
    let mut iter = items.into_iter();
    let Some(mut acc) = iter.next() else {
        return Ok(Value::Int(0));
    };
    for item in iter {
        acc = interp.invoke_value(f, vec![acc, item])?;
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use crate::interp::eval;
    use sigil_foundation::Value;

    fn ints(xs: &[i64]) -> Value {
        Value::from(xs.to_vec())
    }

    #[test]
    fn lazy_streams_take() {
        assert_eq!(eval("ÞF 5Ẏ").unwrap(), vec![ints(&[1, 1, 2, 3, 5])]);
        assert_eq!(eval("Þ! 4Ẏ").unwrap(), vec![ints(&[1, 1, 2, 6])]);
        assert_eq!(eval("Þp 4Ẏ").unwrap(), vec![ints(&[2, 3, 5, 7])]);
    }

    #[test]
    fn matrix_commands() {
        assert_eq!(
            eval("2ɾ 2ɾ\" ÞT").unwrap(),
            vec![Value::list([ints(&[1, 1]), ints(&[2, 2])])]
        );
        assert_eq!(eval("3ɾ 3ɾÞ•").unwrap(), vec![Value::Int(14)]);
    }

    #[test]
    fn nub_sieve() {
        assert_eq!(eval("1 1 2W ÞU").unwrap(), vec![ints(&[1, 0, 1])]);
    }

    #[test]
    fn extremum_by_function() {
        // Negate as key: the maximum by -x is the minimum.
        assert_eq!(eval("3ɾ λN;Þ↑").unwrap(), vec![Value::Int(1)]);
        assert_eq!(eval("3ɾ λN;Þ↓").unwrap(), vec![Value::Int(3)]);
    }

    #[test]
    fn row_folds() {
        // Sum each row of [[1,2],[3,4]].
        assert_eq!(
            eval("1 2\" 3 4\"\" λ2|+;ÞR").unwrap(),
            vec![ints(&[3, 7])]
        );
        assert_eq!(
            eval("1 2\" 3 4\"\" λ2|+;ÞC").unwrap(),
            vec![ints(&[4, 6])]
        );
    }

    #[test]
    fn shuffle_preserves_multiset() {
        let got = eval("5ɾÞ℅").unwrap();
        let mut items: Vec<i64> = got[0]
            .as_list()
            .unwrap()
            .materialize()
            .into_iter()
            .map(|v| v.as_int().unwrap())
            .collect();
        items.sort_unstable();
        assert_eq!(items, vec![1, 2, 3, 4, 5]);
    }
}
