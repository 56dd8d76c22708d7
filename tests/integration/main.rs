//! End-to-end tests: the full Eldoria world driven through the game loop.

mod scenario;
mod walkthrough;

use eldoria_content::EldoriaContent;
use eldoria_engine::{Engine, EngineConfig, Outcome};
use eldoria_runtime::{Repl, ScriptedEditor};

/// Ends every rejected command; the banner's invitation stands on its own line.
pub const REJECTED: &str = " Type 'help' for a list of commands.";

/// Plays `script` through the loop and returns the outcome and transcript.
pub fn play_script(config: EngineConfig, script: &str) -> (Outcome, String) {
    let engine = Engine::new(config, &EldoriaContent).unwrap();
    let editor = ScriptedEditor::from_script(script);
    let mut repl = Repl::new(engine, editor, Vec::new());
    let outcome = repl.run().unwrap();
    let transcript = String::from_utf8(repl.output().clone()).unwrap();
    (outcome, transcript)
}
