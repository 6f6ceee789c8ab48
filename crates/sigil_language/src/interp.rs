//! The element interpreter.
//!
//! Execution is single-threaded and strictly sequential: one element's
//! operation runs to completion (including any nested invocation of a
//! function value it pops) before the next element is processed. Invoking
//! a function value synchronously re-enters [`Interp::run`] over the
//! lambda's body; this is ordinary call-stack recursion.

use std::mem;

use sigil_foundation::{Error, ErrorContext, Result, SgFn, Value};

use crate::ast::{Element, Lambda, Program};
use crate::context::{Env, Frame};
use crate::tables::Tables;

/// Interpreter handle: the environment plus the immutable tables and the
/// program's lambda table.
pub struct Interp<'a> {
    /// The run's shared mutable state.
    pub env: &'a mut Env,
    /// The process-wide command/transformer tables.
    pub tables: &'a Tables,
    lambdas: &'a [Lambda],
}

impl<'a> Interp<'a> {
    /// Creates an interpreter over the given state and tables.
    #[must_use]
    pub fn new(env: &'a mut Env, tables: &'a Tables, lambdas: &'a [Lambda]) -> Self {
        Self {
            env,
            tables,
            lambdas,
        }
    }

    /// Executes elements in program order, stopping at a halt.
    ///
    /// # Errors
    ///
    /// Propagates the first operation error.
    pub fn run(&mut self, elements: &[Element]) -> Result<()> {
        for element in elements {
            if self.env.halted {
                break;
            }
            self.exec(element)?;
        }
        Ok(())
    }

    fn exec(&mut self, element: &Element) -> Result<()> {
        match element {
            Element::Literal(value) => {
                self.env.stack.push(value.clone());
                Ok(())
            }
            Element::Lambda(f) => {
                self.env.stack.push(Value::Fn(SgFn::Defined(*f)));
                Ok(())
            }
            Element::Command(token) => {
                let tables = self.tables;
                let command = tables
                    .lookup(token)
                    .ok_or_else(|| Error::unknown_token(token.clone()))?;
                command.execute(self).map_err(|e| {
                    // The innermost token wins; deeper context is already
                    // attached.
                    if e.context.is_some() {
                        e
                    } else {
                        e.with_context(ErrorContext::new().with_token(token.clone()))
                    }
                })
            }
            Element::Transform { token, funcs } => {
                let a = Value::Fn(SgFn::Defined(funcs[0]));
                let b = funcs.get(1).map(|f| Value::Fn(SgFn::Defined(*f)));
                crate::transform::apply_transformer(self, token, &a, b.as_ref())
            }
        }
    }

    /// Invokes a function with the given operand list, returning the list
    /// of values it produced (the top of its child stack; empty when the
    /// body pushed nothing).
    ///
    /// A defined function runs over a child stack seeded with the operands;
    /// its frame records the context value (the single operand, or the
    /// operand list) and is released on every exit path.
    ///
    /// # Errors
    ///
    /// Propagates errors raised by the function body.
    pub fn invoke(&mut self, f: &SgFn, operands: Vec<Value>) -> Result<Vec<Value>> {
        match f {
            SgFn::Native(native) => Ok(vec![(native.func)(&operands)?]),
            SgFn::Defined(defined) => {
                let lambdas = self.lambdas;
                let lambda = lambdas.get(defined.index as usize).ok_or_else(|| {
                    Error::internal(format!("lambda index {} out of bounds", defined.index))
                })?;
                let ctx = match operands.as_slice() {
                    [single] => single.clone(),
                    _ => Value::list(operands.iter().cloned()),
                };
                let saved = mem::replace(&mut self.env.stack, operands);
                let result = self.with_frame(Frame::new(ctx, Some(*defined)), |interp| {
                    interp.run(&lambda.elements)
                });
                let mut child = mem::replace(&mut self.env.stack, saved);
                result?;
                Ok(child.pop().into_iter().collect())
            }
        }
    }

    /// Invokes a function and returns its top produced value.
    ///
    /// # Errors
    ///
    /// As [`Interp::invoke`]; additionally errors when the function
    /// produced nothing.
    pub fn invoke_value(&mut self, f: &SgFn, operands: Vec<Value>) -> Result<Value> {
        let mut produced = self.invoke(f, operands)?;
        produced
            .pop()
            .ok_or_else(|| Error::internal("function produced no value"))
    }

    /// Pops the function's operands from the evaluation stack, invokes it,
    /// and pushes everything it produced.
    ///
    /// # Errors
    ///
    /// Raises `Underflow` (without mutating the stack) when fewer than
    /// `arity` operands are present.
    pub fn call_on_stack(&mut self, f: &SgFn) -> Result<()> {
        let needed = usize::from(f.arity());
        let depth = self.env.stack.len();
        if depth < needed {
            return Err(Error::underflow(needed, depth));
        }
        let operands = self.env.stack.split_off(depth - needed);
        let produced = self.invoke(f, operands)?;
        self.env.stack.extend(produced);
        Ok(())
    }

    /// Applies a function to the current stack; a synthetic wrapper (an
    /// element grabbed by a transformer) runs inline instead, the way the
    /// grabbed element would have run on its own.
    ///
    /// # Errors
    ///
    /// As [`Interp::call_on_stack`].
    pub fn apply_to_stack(&mut self, f: &SgFn) -> Result<()> {
        if let SgFn::Defined(defined) = f {
            let lambdas = self.lambdas;
            if let Some(lambda) = lambdas.get(defined.index as usize) {
                if lambda.synthetic {
                    return self.run(&lambda.elements);
                }
            }
        }
        self.call_on_stack(f)
    }

    /// Re-invokes the nearest enclosing defined function against the
    /// current stack.
    ///
    /// Synthetic wrapper frames are skipped: recursion targets a function
    /// the program actually wrote.
    ///
    /// # Errors
    ///
    /// Raises `NoEnclosingFunction` at top level.
    pub fn recurse(&mut self) -> Result<()> {
        let lambdas = self.lambdas;
        let current = self
            .env
            .frames
            .iter()
            .rev()
            .filter_map(|frame| frame.function)
            .find(|f| {
                lambdas
                    .get(f.index as usize)
                    .is_none_or(|lambda| !lambda.synthetic)
            })
            .ok_or_else(|| Error::new(sigil_foundation::ErrorKind::NoEnclosingFunction))?;
        self.call_on_stack(&SgFn::Defined(current))
    }

    /// Runs `body` with `frame` pushed, popping it on every exit path.
    pub fn with_frame<R>(
        &mut self,
        frame: Frame,
        body: impl FnOnce(&mut Self) -> Result<R>,
    ) -> Result<R> {
        self.env.frames.push(frame);
        let result = body(self);
        self.env.frames.pop();
        result
    }
}

/// Parses and runs a program against a fresh environment, returning the
/// final evaluation stack.
///
/// The halt command ends the run cleanly; every other error propagates.
///
/// # Errors
///
/// Returns parse/load errors and runtime operation errors.
pub fn eval(source: &str) -> Result<Vec<Value>> {
    eval_with_env(source, &mut Env::new())
}

/// Like [`eval`], but against a caller-owned environment.
///
/// # Errors
///
/// As [`eval`].
pub fn eval_with_env(source: &str, env: &mut Env) -> Result<Vec<Value>> {
    let tables = Tables::new()?;
    let program = crate::parse::parse(source, &tables)?;
    run_program(&program, &tables, env)?;
    Ok(env.stack.clone())
}

/// Runs a parsed program against an environment.
///
/// # Errors
///
/// Propagates runtime operation errors.
pub fn run_program(program: &Program, tables: &Tables, env: &mut Env) -> Result<()> {
    let mut interp = Interp::new(env, tables, &program.lambdas);
    interp.run(&program.elements)
}
