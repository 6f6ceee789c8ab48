//! The transformer table.
//!
//! Transformers are higher-order tokens: each takes one or two function
//! values (function-A, and function-B for the parallel forms) and rewrites
//! their stack-interaction behavior instead of computing a value directly.

use std::collections::HashMap;

use sigil_foundation::{Error, Result, SgFn, Value};

use crate::interp::Interp;

type ApplyFn = fn(&mut Interp<'_>, &SgFn, Option<&SgFn>) -> Result<()>;

/// One transformer rule.
pub struct Transformer {
    /// How many function values the token takes (1 or 2).
    pub operands: u8,
    apply: ApplyFn,
}

/// Static token → transformer mapping.
pub struct TransformerSet {
    entries: HashMap<&'static str, Transformer>,
}

impl TransformerSet {
    /// Builds the transformer table.
    ///
    /// # Errors
    ///
    /// Returns `MalformedTable` on duplicate registration.
    pub fn new() -> Result<Self> {
        let mut set = Self {
            entries: HashMap::new(),
        };
        set.insert("⁽", 1, identity_capture)?;
        set.insert("v", 1, vectorize)?;
        set.insert("&", 1, register_apply)?;
        set.insert("~", 1, non_popping_apply)?;
        set.insert("ß", 1, conditional_apply)?;
        set.insert("₌", 2, parallel_apply)?;
        set.insert("₍", 2, parallel_apply_pair)?;
        Ok(set)
    }

    fn insert(&mut self, token: &'static str, operands: u8, apply: ApplyFn) -> Result<()> {
        if self
            .entries
            .insert(token, Transformer { operands, apply })
            .is_some()
        {
            return Err(Error::malformed_table(format!(
                "duplicate transformer token {token:?}"
            )));
        }
        Ok(())
    }

    /// Looks up a transformer by token.
    #[must_use]
    pub fn get(&self, token: &str) -> Option<&Transformer> {
        self.entries.get(token)
    }

    /// Whether the token is a transformer.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    /// The registered tokens.
    pub fn tokens(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }
}

/// Applies a transformer to its function value(s), mutating shared state.
///
/// # Errors
///
/// `UnknownToken` for an unregistered token; `TypeMismatch` when an
/// operand is not a function value (never silently coerced).
pub fn apply_transformer(
    interp: &mut Interp<'_>,
    token: &str,
    function_a: &Value,
    function_b: Option<&Value>,
) -> Result<()> {
    let tables = interp.tables;
    let Some(transformer) = tables.transformer(token) else {
        return Err(Error::unknown_token(token));
    };
    let a = function_a.expect_fn()?.clone();
    let b = match function_b {
        Some(value) => Some(value.expect_fn()?.clone()),
        None => None,
    };
    if transformer.operands == 2 && b.is_none() {
        return Err(Error::internal(format!(
            "transformer {token:?} requires two functions"
        )));
    }
    (transformer.apply)(interp, &a, b.as_ref())
}

// `⁽`: push function-A itself as a first-class value, no invocation.
fn identity_capture(interp: &mut Interp<'_>, a: &SgFn, _b: Option<&SgFn>) -> Result<()> {
    interp.env.stack.push(Value::Fn(a.clone()));
    Ok(())
}

// `v`: invoke function-A elementwise over sequence operands (scalars
// broadcast), or once when every operand is scalar.
fn vectorize(interp: &mut Interp<'_>, a: &SgFn, _b: Option<&SgFn>) -> Result<()> {
    let needed = usize::from(a.arity().max(1));
    let operands = pop_batch(interp, needed)?;

    let lists: Vec<Option<Vec<Value>>> = operands
        .iter()
        .map(|v| v.as_list().map(|l| l.materialize().into_iter().collect()))
        .collect();
    if lists.iter().all(Option::is_none) {
        let result = interp.invoke_value(a, operands)?;
        interp.env.stack.push(result);
        return Ok(());
    }

    let len = lists
        .iter()
        .filter_map(|l| l.as_ref().map(Vec::len))
        .min()
        .unwrap_or(0);
    let mut results = Vec::with_capacity(len);
    for i in 0..len {
        let tuple: Vec<Value> = operands
            .iter()
            .zip(&lists)
            .map(|(scalar, list)| match list {
                Some(items) => items[i].clone(),
                None => scalar.clone(),
            })
            .collect();
        results.push(interp.invoke_value(a, tuple)?);
    }
    interp.env.stack.push(Value::list(results));
    Ok(())
}

// `&`: invoke function-A against the stack, storing its result in the
// register instead of pushing it.
fn register_apply(interp: &mut Interp<'_>, a: &SgFn, _b: Option<&SgFn>) -> Result<()> {
    let operands = pop_batch(interp, usize::from(a.arity()))?;
    let result = interp.invoke_value(a, operands)?;
    interp.env.register = result;
    Ok(())
}

// `~`: invoke function-A, then restore its operands beneath the result.
fn non_popping_apply(interp: &mut Interp<'_>, a: &SgFn, _b: Option<&SgFn>) -> Result<()> {
    let operands = pop_batch(interp, usize::from(a.arity()))?;
    let produced = interp.invoke(a, operands.clone())?;
    interp.env.stack.extend(operands);
    interp.env.stack.extend(produced);
    Ok(())
}

// `ß`: pop a flag; invoke function-A only when it is truthy. On a falsy
// flag the stack is left exactly as after the flag pop. A grabbed bare
// element runs inline, so conditional recursion composes.
fn conditional_apply(interp: &mut Interp<'_>, a: &SgFn, _b: Option<&SgFn>) -> Result<()> {
    let flag = interp.env.pop()?;
    if flag.is_truthy() {
        interp.apply_to_stack(a)?;
    }
    Ok(())
}

// `₌`: invoke function-A and function-B against independent copies of the
// same operands and push both results.
fn parallel_apply(interp: &mut Interp<'_>, a: &SgFn, b: Option<&SgFn>) -> Result<()> {
    let (ra, rb) = parallel_results(interp, a, b)?;
    interp.env.stack.push(ra);
    interp.env.stack.push(rb);
    Ok(())
}

// `₍`: like `₌`, but the two results are paired into one record value.
fn parallel_apply_pair(interp: &mut Interp<'_>, a: &SgFn, b: Option<&SgFn>) -> Result<()> {
    let (ra, rb) = parallel_results(interp, a, b)?;
    interp.env.stack.push(Value::pair(ra, rb));
    Ok(())
}

fn parallel_results(
    interp: &mut Interp<'_>,
    a: &SgFn,
    b: Option<&SgFn>,
) -> Result<(Value, Value)> {
    let b = b.ok_or_else(|| Error::internal("parallel transformer requires two functions"))?;
    let needed = usize::from(a.arity().max(b.arity()));
    let batch = pop_batch(interp, needed)?;
    // Each function sees the topmost operands it declares, in stack order.
    let slice_for = |arity: u8| batch[batch.len() - usize::from(arity)..].to_vec();
    let ra = interp.invoke_value(a, slice_for(a.arity()))?;
    let rb = interp.invoke_value(b, slice_for(b.arity()))?;
    Ok((ra, rb))
}

// Pops `needed` values as one batch, in stack order (bottom to top).
fn pop_batch(interp: &mut Interp<'_>, needed: usize) -> Result<Vec<Value>> {
    let depth = interp.env.stack.len();
    if depth < needed {
        return Err(Error::underflow(needed, depth));
    }
    Ok(interp.env.stack.split_off(depth - needed))
}
