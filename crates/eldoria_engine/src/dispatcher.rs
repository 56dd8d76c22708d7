//! The fixed action-to-handler table.

use std::collections::HashMap;

use eldoria_debug::Tracer;
use eldoria_foundation::Result;
use eldoria_parser::{Action, Command, Vocabulary};

use crate::handlers;
use crate::report::{Feedback, Report};
use crate::state::GameState;

/// Everything a handler may touch during one turn.
pub struct TurnContext<'a> {
    /// World and player.
    pub state: &'a mut GameState,
    /// Turn tracer.
    pub tracer: &'a mut Tracer,
    /// Verb and direction words.
    pub vocabulary: &'a Vocabulary,
}

/// A command handler.
///
/// `Ok` covers both success and player mistakes; `Err` means a core
/// invariant broke.
pub type Handler = fn(&mut TurnContext<'_>, &Command) -> Result<Report>;

/// Routes commands to handlers by canonical action.
pub struct Dispatcher {
    vocabulary: Vocabulary,
    handlers: HashMap<Action, Handler>,
}

impl Dispatcher {
    /// Creates a dispatcher with the standard vocabulary and every handler.
    #[must_use]
    pub fn new() -> Self {
        Self::with_vocabulary(Vocabulary::standard())
    }

    /// Creates a dispatcher over a custom vocabulary.
    #[must_use]
    pub fn with_vocabulary(vocabulary: Vocabulary) -> Self {
        let handlers = Action::ALL
            .into_iter()
            .map(|action| (action, handler_for(action)))
            .collect();
        Self {
            vocabulary,
            handlers,
        }
    }

    /// Returns the vocabulary.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Runs one parsed command against the state.
    ///
    /// # Errors
    ///
    /// Returns an error only when a core invariant is broken; unknown verbs
    /// and bad arguments come back as [`Feedback`].
    pub fn dispatch(
        &self,
        state: &mut GameState,
        tracer: &mut Tracer,
        command: &Command,
    ) -> Result<Report> {
        if !command.valid {
            return Ok(Report::feedback(Feedback::InvalidCommand));
        }
        let Some(handler) = self
            .vocabulary
            .lookup_verb(&command.action)
            .and_then(|action| self.handlers.get(&action))
        else {
            return Ok(Report::feedback(Feedback::UnknownCommand(
                command.action.clone(),
            )));
        };

        let mut context = TurnContext {
            state,
            tracer,
            vocabulary: &self.vocabulary,
        };
        handler(&mut context, command)
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut actions: Vec<_> = self.handlers.keys().collect();
        actions.sort();
        f.debug_struct("Dispatcher")
            .field("actions", &actions)
            .finish_non_exhaustive()
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

fn handler_for(action: Action) -> Handler {
    match action {
        Action::Go => handlers::movement::go,
        Action::Look => handlers::movement::look,
        Action::Examine => handlers::examine::examine,
        Action::Take => handlers::items::take,
        Action::Drop => handlers::items::drop,
        Action::Inventory => handlers::items::inventory,
        Action::Use => handlers::items::use_item,
        Action::Help => handlers::info::help,
        Action::Quit => handlers::info::quit,
        Action::Status => handlers::info::status,
        Action::Talk => handlers::social::talk,
        Action::Ask => handlers::social::ask,
        Action::Give => handlers::social::give,
        Action::Answer => handlers::puzzle::answer,
    }
}
