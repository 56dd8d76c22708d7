//! The turn engine: parse, dispatch, trace.

use log::{debug, error, info};

use eldoria_debug::Tracer;
use eldoria_foundation::Result;
use eldoria_parser::CommandParser;
use eldoria_world::{ContentProvider, Player, World};

use crate::config::EngineConfig;
use crate::dispatcher::Dispatcher;
use crate::handlers::describe_current;
use crate::report::{Feedback, HELP_INVITATION, Report};
use crate::state::GameState;

/// Width of the welcome banner.
const BANNER_WIDTH: usize = 60;

/// Game title shown in the banner.
pub const TITLE: &str = "Eldoria: Shadows of Malakar";

/// Owns the game state and runs one command per turn.
///
/// The engine never reads or writes a terminal; the caller feeds it lines
/// and prints the reports.
#[derive(Debug)]
pub struct Engine {
    state: GameState,
    parser: CommandParser,
    dispatcher: Dispatcher,
    tracer: Tracer,
    running: bool,
}

impl Engine {
    /// Builds the world from `content` and places the player at the start.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the content is malformed.
    pub fn new(config: EngineConfig, content: &dyn ContentProvider) -> Result<Self> {
        let (x, y) = config.start;
        let world = World::initialize(content, (x, y))?;
        let player = Player::new(config.player_name, config.player_description)
            .with_capacity(config.capacity);
        info!(
            "engine ready with {} environments, capacity {}",
            world.grids().len(),
            player.capacity()
        );
        Ok(Self {
            state: GameState::new(world, player),
            parser: CommandParser::new(),
            dispatcher: Dispatcher::new(),
            tracer: Tracer::new(config.tracer),
            running: true,
        })
    }

    /// The welcome banner followed by the starting location.
    #[must_use]
    pub fn opening(&self) -> Report {
        let stars = "*".repeat(BANNER_WIDTH);
        let mut report = Report::lines(vec![
            stars.clone(),
            format!("Welcome to {TITLE}"),
            "A text adventure game".to_string(),
            stars,
            String::new(),
            HELP_INVITATION.to_string(),
        ]);
        match describe_current(&self.state.world) {
            Ok(lines) => report.lines.extend(lines),
            Err(err) => error!("no starting location: {err}"),
        }
        report
    }

    /// Runs one turn.
    ///
    /// Player mistakes come back as feedback; a broken invariant comes back
    /// as a fault report and stops the engine.
    pub fn step(&mut self, raw: &str) -> Report {
        self.state.turn += 1;
        let turn = self.state.turn;
        self.tracer.turn_start(turn, raw);

        let report = match self.parser.parse(raw) {
            Ok(command) => {
                self.tracer.command_parsed(&command.action, &command.arguments);
                self.dispatcher
                    .dispatch(&mut self.state, &mut self.tracer, &command)
                    .unwrap_or_else(|err| {
                        error!("turn {turn} failed: {err}");
                        Report::fault(format!("Something has gone terribly wrong: {err}"))
                    })
            }
            Err(err) => {
                debug!("turn {turn} rejected: {err}");
                Report::feedback(Feedback::InvalidCommand)
            }
        };

        if let Some(feedback) = &report.feedback {
            self.tracer.command_rejected(feedback.to_string());
        }
        self.tracer.turn_end(turn, report.is_rejected());

        if report.should_stop() {
            self.running = false;
        }
        report
    }

    /// Whether the engine still accepts turns.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stops the engine.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// The whole game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The world.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.state.world
    }

    /// The player.
    #[must_use]
    pub fn player(&self) -> &Player {
        &self.state.player
    }

    /// The dispatcher.
    #[must_use]
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// The tracer.
    #[must_use]
    pub fn tracer(&self) -> &Tracer {
        &self.tracer
    }

    /// Number of turns run so far.
    #[must_use]
    pub fn turn(&self) -> u64 {
        self.state.turn
    }
}
