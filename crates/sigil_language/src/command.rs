//! The arity-bound operation compiler.
//!
//! [`Command::new`] turns a declared arity and a result-producing template
//! into an executable unit. Execution pops exactly `arity` values from the
//! evaluation stack as one atomic batch (underflow is raised before any
//! operand is bound), binds them to slots in pop order (slot 1 is the
//! value that was nearest the top), evaluates the template exactly once,
//! and pushes the produced value(s).
//!
//! Binary templates use [`Operands::binary`], which returns `(lhs, rhs)`
//! with slot 1 as the right-hand operand: the second-pushed value is popped
//! first, the usual infix-via-stack convention. Entries needing the
//! opposite order swap explicitly at their registration site.

use sigil_foundation::{Error, Result, Value};

use crate::interp::Interp;

/// The values a template produces.
pub enum Outcome {
    /// One value, pushed onto the evaluation stack.
    One(Value),
    /// Several values, pushed in order (each closer to the top than the
    /// last).
    Many(Vec<Value>),
    /// No pushed result (effect-only templates).
    Nothing,
}

/// Operand slots bound for one invocation, numbered in pop order.
pub struct Operands(pub(crate) Vec<Value>);

impl Operands {
    /// Slot 1: the single operand of a unary template.
    #[must_use]
    pub fn unary(mut self) -> Value {
        self.0.swap_remove(0)
    }

    /// `(lhs, rhs)`: slot 2 is the left-hand operand, slot 1 the right.
    #[must_use]
    pub fn binary(mut self) -> (Value, Value) {
        let rhs = self.0.swap_remove(0);
        let lhs = self.0.swap_remove(0);
        (lhs, rhs)
    }

    /// `(slot 3, slot 2, slot 1)`: bottom-to-top of the popped batch.
    #[must_use]
    pub fn ternary(mut self) -> (Value, Value, Value) {
        let first = self.0.remove(0);
        let second = self.0.remove(0);
        let third = self.0.remove(0);
        (third, second, first)
    }

    /// All slots, slot 1 first.
    #[must_use]
    pub fn slots(self) -> Vec<Value> {
        self.0
    }
}

/// The uniform template signature: bound operands plus the shared state
/// handle, producing the values to push.
pub type Template = Box<dyn Fn(&mut Interp<'_>, Operands) -> Result<Outcome> + Send + Sync>;

/// A compiled operation: declared arity plus its executable template.
pub struct Command {
    arity: u8,
    template: Template,
}

impl Command {
    /// Compiles an operation from its arity and template.
    pub fn new(
        arity: u8,
        template: impl Fn(&mut Interp<'_>, Operands) -> Result<Outcome> + Send + Sync + 'static,
    ) -> Self {
        Self {
            arity,
            template: Box::new(template),
        }
    }

    /// The declared operand count.
    #[must_use]
    pub fn arity(&self) -> u8 {
        self.arity
    }

    /// Executes the operation against the shared state.
    ///
    /// # Errors
    ///
    /// Raises `Underflow`, without mutating the stack, when fewer than
    /// `arity` values are present, and propagates template errors.
    pub fn execute(&self, interp: &mut Interp<'_>) -> Result<()> {
        let needed = usize::from(self.arity);
        let depth = interp.env.stack.len();
        if depth < needed {
            return Err(Error::underflow(needed, depth));
        }
        let mut batch = interp.env.stack.split_off(depth - needed);
        batch.reverse(); // slot 1 = the value that was on top
        match (self.template)(interp, Operands(batch))? {
            Outcome::One(value) => interp.env.stack.push(value),
            Outcome::Many(values) => interp.env.stack.extend(values),
            Outcome::Nothing => {}
        }
        Ok(())
    }
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command").field("arity", &self.arity).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Env;
    use crate::tables::Tables;

    fn with_interp<R>(stack: Vec<Value>, f: impl FnOnce(&mut Interp<'_>) -> R) -> (R, Vec<Value>) {
        let tables = Tables::new().unwrap();
        let mut env = Env::new();
        env.stack = stack;
        let program = crate::ast::Program::default();
        let mut interp = Interp::new(&mut env, &tables, &program.lambdas);
        let out = f(&mut interp);
        (out, env.stack)
    }

    #[test]
    fn slot_one_is_topmost() {
        let cmd = Command::new(2, |_, operands| {
            let slots = operands.slots();
            Ok(Outcome::One(slots[0].clone()))
        });
        let (result, stack) =
            with_interp(vec![Value::Int(3), Value::Int(4)], |i| cmd.execute(i));
        result.unwrap();
        assert_eq!(stack, vec![Value::Int(4)]);
    }

    #[test]
    fn binary_accessor_names_lhs_and_rhs() {
        let cmd = Command::new(2, |_, operands| {
            let (lhs, rhs) = operands.binary();
            Ok(Outcome::Many(vec![lhs, rhs]))
        });
        let (result, stack) =
            with_interp(vec![Value::Int(3), Value::Int(4)], |i| cmd.execute(i));
        result.unwrap();
        // lhs = bottom of the batch, rhs = top, re-pushed in that order.
        assert_eq!(stack, vec![Value::Int(3), Value::Int(4)]);
    }

    #[test]
    fn underflow_leaves_stack_untouched() {
        let cmd = Command::new(2, |_, _| Ok(Outcome::Nothing));
        let (result, stack) = with_interp(vec![Value::Int(1)], |i| cmd.execute(i));
        assert!(matches!(
            result.unwrap_err().kind,
            sigil_foundation::ErrorKind::Underflow { needed: 2, depth: 1 }
        ));
        assert_eq!(stack, vec![Value::Int(1)]);
    }

    #[test]
    fn many_pushes_in_order() {
        let cmd = Command::new(0, |_, _| {
            Ok(Outcome::Many(vec![Value::Int(1), Value::Int(2)]))
        });
        let (result, stack) = with_interp(vec![], |i| cmd.execute(i));
        result.unwrap();
        // The second value ends up closer to the top.
        assert_eq!(stack, vec![Value::Int(1), Value::Int(2)]);
    }
}
