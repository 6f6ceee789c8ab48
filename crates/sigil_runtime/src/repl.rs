//! The main REPL implementation.

use sigil_foundation::Result;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Session state (tables, environment, lambdas).
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor or the tables fail to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Self::with_editor(editor)
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the tables fail to build.
    pub fn with_editor(editor: E) -> Result<Self> {
        Ok(Self {
            editor,
            session: Session::new()?,
            show_banner: true,
            prompt: "σ> ".to_string(),
        })
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            print_banner();
        }

        loop {
            let input = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => continue,
                ReadResult::Eof => break,
            };
            if input.trim().is_empty() {
                continue;
            }
            self.editor.add_history(&input);
            self.eval_and_print(&input);
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Evaluates one program fragment, printing output and the stack top.
    pub fn eval_and_print(&mut self, source: &str) {
        match self.session.eval(source) {
            Ok(top) => {
                let output = self.session.take_output();
                if !output.is_empty() {
                    print!("{output}");
                }
                if let Some(value) = top {
                    println!("{value}");
                }
            }
            Err(e) => {
                eprintln!("\x1b[31mError: {e}\x1b[0m");
                if let Some(ctx) = &e.context {
                    eprintln!("\x1b[31m  {ctx}\x1b[0m");
                }
            }
        }
    }
}

fn print_banner() {
    println!(
        "\x1b[1mSigil\x1b[0m {} - stack-based golfing language",
        env!("CARGO_PKG_VERSION")
    );
    println!("256-symbol code page; Ctrl+D to exit.\n");
}
