//! A persistent evaluation session.
//!
//! The session owns what must outlive a single line: the tables (built once
//! at startup), the environment, and the accumulated lambda table, so
//! function values left on the stack keep resolving after the line that
//! defined them is gone.

use sigil_foundation::{Result, Value};
use sigil_language::{Env, Interp, Lambda, Tables, parse_into};

/// One long-lived evaluation session.
pub struct Session {
    tables: Tables,
    env: Env,
    lambdas: Vec<Lambda>,
}

impl Session {
    /// Creates a session, building and validating the tables.
    ///
    /// # Errors
    ///
    /// Returns `MalformedTable` when table construction fails; the process
    /// must refuse to start in that case.
    pub fn new() -> Result<Self> {
        Ok(Self {
            tables: Tables::new()?,
            env: Env::new(),
            lambdas: Vec::new(),
        })
    }

    /// Replaces the environment (to seed the RNG or pin the clock).
    pub fn set_env(&mut self, env: Env) {
        self.env = env;
    }

    /// The session environment.
    #[must_use]
    pub fn env(&self) -> &Env {
        &self.env
    }

    /// The session environment, mutably.
    pub fn env_mut(&mut self) -> &mut Env {
        &mut self.env
    }

    /// The tables.
    #[must_use]
    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    /// Parses and executes one source fragment against the session state.
    ///
    /// Returns the stack top after execution, if any.
    ///
    /// # Errors
    ///
    /// Returns parse/load and runtime errors; the session state keeps
    /// whatever the fragment produced before the error.
    pub fn eval(&mut self, source: &str) -> Result<Option<Value>> {
        let elements = parse_into(source, &self.tables, &mut self.lambdas)?;
        let mut interp = Interp::new(&mut self.env, &self.tables, &self.lambdas);
        interp.run(&elements)?;
        Ok(self.env.stack.last().cloned())
    }

    /// Takes the output the fragment printed.
    pub fn take_output(&mut self) -> String {
        self.env.take_output()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_persists_across_fragments() {
        let mut session = Session::new().unwrap();
        session.eval("3 4").unwrap();
        let top = session.eval("+").unwrap();
        assert_eq!(top, Some(Value::Int(7)));
    }

    #[test]
    fn lambdas_survive_their_line() {
        let mut session = Session::new().unwrap();
        session.eval("λ›;").unwrap();
        // The function value parsed on line one is invoked on line two.
        let top = session.eval("5$†").unwrap();
        assert_eq!(top, Some(Value::Int(6)));
    }

    #[test]
    fn output_is_collected() {
        let mut session = Session::new().unwrap();
        session.eval("5,").unwrap();
        assert_eq!(session.take_output(), "5\n");
        assert_eq!(session.take_output(), "");
    }
}
