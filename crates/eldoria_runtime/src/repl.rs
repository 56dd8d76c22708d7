//! The interactive game loop.

use std::io::Write;

use log::{info, warn};

use eldoria_engine::{Engine, Outcome, Report, TITLE};
use eldoria_foundation::{Error, ErrorKind, Result};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};

/// Reads commands, runs them through the engine, and prints the reports.
pub struct Repl<E: LineEditor = RustylineEditor, W: Write = std::io::Stdout> {
    /// The game.
    engine: Engine,

    /// The line editor for input.
    editor: E,

    /// Where reports are printed.
    out: W,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Input prompt.
    prompt: String,
}

impl Repl<RustylineEditor, std::io::Stdout> {
    /// Creates a loop reading from the terminal and printing to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn interactive(engine: Engine) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::new(engine, editor, std::io::stdout()))
    }
}

impl<E: LineEditor, W: Write> Repl<E, W> {
    /// Creates a loop over the given engine, editor and output.
    pub fn new(engine: Engine, mut editor: E, out: W) -> Self {
        let keywords = engine
            .dispatcher()
            .vocabulary()
            .verbs()
            .into_iter()
            .map(String::from)
            .collect();
        editor.set_keywords(keywords);
        Self {
            engine,
            editor,
            out,
            show_banner: true,
            prompt: "> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the input prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns the engine.
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Returns the output sink.
    #[must_use]
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Runs until `quit`, a fault, or end of input.
    ///
    /// Returns how the game ended: `Quit` when the player asked to leave,
    /// `Fault` when a turn broke an invariant, `Continue` when input ran out.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self) -> Result<Outcome> {
        if self.show_banner {
            let opening = self.engine.opening();
            self.print(&opening)?;
        }

        let mut outcome = Outcome::Continue;
        while self.engine.is_running() {
            self.write("")?;
            let line = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => {
                    self.write("Type 'quit' to leave the game.")?;
                    continue;
                }
                ReadResult::Eof => {
                    info!("end of input after {} turns", self.engine.turn());
                    break;
                }
            };

            if self.editor.echoes_input() {
                let echo = format!("{}{line}", self.prompt);
                self.write(&echo)?;
            }
            if !line.trim().is_empty() {
                self.editor.add_history(&line);
            }

            let report = self.engine.step(&line);
            self.print(&report)?;
            outcome = report.outcome;
            if outcome == Outcome::Fault {
                warn!("stopping after a fault on turn {}", self.engine.turn());
            }
        }

        self.write("")?;
        self.write(&format!("Thank you for playing {TITLE}!"))?;
        Ok(outcome)
    }

    fn print(&mut self, report: &Report) -> Result<()> {
        let text = report.render();
        if text.is_empty() {
            return Ok(());
        }
        self.write(&text)
    }

    fn write(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}")
            .and_then(|()| self.out.flush())
            .map_err(|e| Error::new(ErrorKind::Internal(format!("failed to write output: {e}"))))
    }
}
