//! A small two-grid world for handler tests.

use eldoria_debug::Tracer;
use eldoria_foundation::{Direction, GridId, Result};
use eldoria_parser::{Command, CommandParser};
use eldoria_world::{
    CellRef, ContentProvider, CrossLink, DialogueState, EnvironmentId, Grid, Item, Location, Npc,
    NpcRole, Player, Puzzle, Quest, Usable, World,
};

use crate::dispatcher::Dispatcher;
use crate::report::Report;
use crate::state::GameState;

#[derive(Debug, Default)]
pub(crate) struct Riddle {
    solved: bool,
}

impl Puzzle for Riddle {
    fn name(&self) -> &str {
        "Hollow Riddle"
    }

    fn is_solved(&self) -> bool {
        self.solved
    }

    fn attempt(&mut self, input: &str) -> bool {
        if input.trim() == "echo" {
            self.solved = true;
        }
        self.solved
    }
}

pub(crate) struct TestContent;

impl ContentProvider for TestContent {
    fn environments(&self) -> Vec<EnvironmentId> {
        vec!["Village".into(), "Woods".into()]
    }

    fn build_grid(&self, environment: &EnvironmentId, id: GridId) -> Result<Grid> {
        let mut grid = Grid::new(id, environment.as_str());
        if environment.as_str() == "Village" {
            let elda = Npc::new("Elda", "The wise village elder.", NpcRole::QuestGiver)
                .with_dialogue(DialogueState::Initial, "Welcome, traveler.")
                .with_dialogue(DialogueState::QuestActive, "Have you found the map?")
                .with_dialogue(DialogueState::QuestComplete, "Thank you, hero.")
                .with_quest(
                    Quest::new("Bring the Enchanted Map to Elda.")
                        .requiring("ENCHANTED_MAP")
                        .with_reward(Item::new("SILVER_KEY", "Silver Key", "An ornate key.")),
                )
                .with_topic("malakar", "A shadow over our land.")
                .with_hint("Seek the hermit in the woods.")
                .with_item_reaction("ENCHANTED_MAP", "Elda studies the map carefully.");
            grid.set_location(
                1,
                1,
                Location::new("Elder's House", "A cozy house filled with ancient books.")
                    .with_npc(elda)
                    .with_item(Item::new("QUEST_SCROLL", "Quest Scroll", "An ancient scroll.")),
            )?;
            grid.set_location(
                1,
                0,
                Location::new("Village Square", "The bustling heart of the village.").with_item(
                    Item::new("LANTERN", "Lantern", "A brass lantern.")
                        .with_usable(Usable::new(|_| "The lantern glows.".to_string())),
                ),
            )?;
            grid.set_location(
                2,
                1,
                Location::new("Market", "Stalls and traders.")
                    .with_item(
                        Item::new("CRYSTAL_LENS", "Crystal Lens", "A lens of clear crystal.")
                            .with_usable(
                                Usable::new(|_| "Hidden runes appear.".to_string())
                                    .when(|context| context.environment == "Woods")
                                    .with_refusal("The lens shows nothing special here."),
                            ),
                    )
                    .with_item(Item::new("PEBBLE", "Pebble", "Just a pebble.")),
            )?;
        } else {
            grid.set_location(1, 2, Location::new("Forest Heart", "Ancient trees."))?;
            grid.set_location(
                1,
                1,
                Location::new("Hermit's Hollow", "A small clearing.")
                    .with_item(Item::new("ENCHANTED_MAP", "Enchanted Map", "A shifting map."))
                    .with_puzzle(Riddle::default()),
            )?;
        }
        Ok(grid)
    }

    fn cross_links(&self) -> Vec<CrossLink> {
        vec![CrossLink {
            from: CellRef::new(GridId(0), 1, 0),
            to: CellRef::new(GridId(1), 1, 2),
            direction: Direction::North,
        }]
    }
}

pub(crate) struct Harness {
    pub state: GameState,
    pub tracer: Tracer,
    pub dispatcher: Dispatcher,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_capacity(10)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let world = World::initialize(&TestContent, (1, 1)).unwrap();
        let player = Player::new("Aric", "A young adventurer.").with_capacity(capacity);
        Self {
            state: GameState::new(world, player),
            tracer: Tracer::disabled(),
            dispatcher: Dispatcher::new(),
        }
    }

    pub fn run(&mut self, line: &str) -> Report {
        let command: Command = CommandParser::new().parse_input(line);
        self.dispatcher
            .dispatch(&mut self.state, &mut self.tracer, &command)
            .unwrap()
    }

    pub fn here(&self) -> &Location {
        self.state.world.current_location().unwrap()
    }
}
