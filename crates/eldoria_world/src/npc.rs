//! Non-player characters.
//!
//! NPCs carry dialogue keyed by conversation state, an optional quest, a
//! rotating hint list, topic responses, and reactions to items shown to them.

use std::collections::{BTreeMap, HashMap};

use eldoria_foundation::{Entity, Examine};

use crate::item::{Item, ItemId};

/// Placeholder line for NPCs with nothing to say.
const SILENCE: &str = "...";

/// What part an NPC plays in the story.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NpcRole {
    /// Background character.
    Villager,
    /// Hands out a quest.
    QuestGiver,
    /// Guards a passage or puzzle.
    Guardian,
    /// Offers hints.
    Guide,
    /// Keeper of lore.
    Scholar,
    /// Keeper of hidden places.
    Mystic,
}

impl NpcRole {
    /// Lowercase role name shown beside the NPC.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Villager => "villager",
            Self::QuestGiver => "quest giver",
            Self::Guardian => "guardian",
            Self::Guide => "guide",
            Self::Scholar => "scholar",
            Self::Mystic => "mystic",
        }
    }
}

/// Conversation state used to pick a dialogue line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DialogueState {
    /// Never spoken to.
    Initial,
    /// Spoken to at least once.
    Greeted,
    /// Quest handed out, not yet completed.
    QuestActive,
    /// Quest completed.
    QuestComplete,
}

/// A quest offered by an NPC.
///
/// The reward item is owned by the quest until it is granted.
#[derive(Debug)]
pub struct Quest {
    description: String,
    required_item: Option<ItemId>,
    reward: Option<Item>,
    reward_id: Option<ItemId>,
    completed: bool,
}

impl Quest {
    /// Creates a new quest.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            required_item: None,
            reward: None,
            reward_id: None,
            completed: false,
        }
    }

    /// Sets the item that completes the quest when given to the NPC.
    #[must_use]
    pub fn requiring(mut self, item: impl Into<ItemId>) -> Self {
        self.required_item = Some(item.into());
        self
    }

    /// Sets the reward item.
    #[must_use]
    pub fn with_reward(mut self, reward: Item) -> Self {
        self.reward_id = Some(reward.id().clone());
        self.reward = Some(reward);
        self
    }

    /// Returns the quest description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the item that completes the quest.
    #[must_use]
    pub fn required_item(&self) -> Option<&ItemId> {
        self.required_item.as_ref()
    }

    /// Returns the reward item's id, even after it has been granted.
    #[must_use]
    pub fn reward_id(&self) -> Option<&ItemId> {
        self.reward_id.as_ref()
    }

    /// Returns true once the quest is complete.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }
}

/// A non-player character.
#[derive(Debug)]
pub struct Npc {
    entity: Entity,
    role: NpcRole,
    state: DialogueState,
    dialogue: BTreeMap<DialogueState, String>,
    quest: Option<Quest>,
    hints: Vec<String>,
    next_hint: usize,
    topics: HashMap<String, String>,
    item_reactions: HashMap<ItemId, String>,
}

impl Npc {
    /// Creates an NPC with no dialogue.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>, role: NpcRole) -> Self {
        Self {
            entity: Entity::new(name, description),
            role,
            state: DialogueState::Initial,
            dialogue: BTreeMap::new(),
            quest: None,
            hints: Vec::new(),
            next_hint: 0,
            topics: HashMap::new(),
            item_reactions: HashMap::new(),
        }
    }

    /// Sets the line spoken in the given state.
    #[must_use]
    pub fn with_dialogue(mut self, state: DialogueState, line: impl Into<String>) -> Self {
        self.dialogue.insert(state, line.into());
        self
    }

    /// Attaches a quest.
    #[must_use]
    pub fn with_quest(mut self, quest: Quest) -> Self {
        self.quest = Some(quest);
        self
    }

    /// Appends a hint.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    /// Adds a response to `ask <npc> about <topic>`.
    #[must_use]
    pub fn with_topic(mut self, topic: &str, response: impl Into<String>) -> Self {
        self.topics.insert(topic.to_lowercase(), response.into());
        self
    }

    /// Adds a reaction to being given an item.
    #[must_use]
    pub fn with_item_reaction(mut self, item: impl Into<ItemId>, reaction: impl Into<String>) -> Self {
        self.item_reactions.insert(item.into(), reaction.into());
        self
    }

    /// Returns the NPC's role.
    #[must_use]
    pub fn role(&self) -> NpcRole {
        self.role
    }

    /// Returns the current conversation state.
    #[must_use]
    pub fn state(&self) -> DialogueState {
        self.state
    }

    /// Returns the quest, if any.
    #[must_use]
    pub fn quest(&self) -> Option<&Quest> {
        self.quest.as_ref()
    }

    /// Looks up the line for a state, falling back to the initial line.
    #[must_use]
    pub fn dialogue(&self, state: DialogueState) -> &str {
        self.dialogue
            .get(&state)
            .or_else(|| self.dialogue.get(&DialogueState::Initial))
            .map_or(SILENCE, String::as_str)
    }

    /// Speaks the line for the current state and advances the conversation.
    ///
    /// A first conversation moves to `QuestActive` when an open quest exists,
    /// otherwise to `Greeted`.
    pub fn talk(&mut self) -> String {
        let line = self.dialogue(self.state).to_string();
        if self.state == DialogueState::Initial {
            self.state = match &self.quest {
                Some(quest) if !quest.is_completed() => DialogueState::QuestActive,
                _ => DialogueState::Greeted,
            };
        }
        line
    }

    /// Response to a topic keyword, if the NPC knows it.
    #[must_use]
    pub fn respond_to(&self, topic: &str) -> Option<&str> {
        self.topics.get(&topic.to_lowercase()).map(String::as_str)
    }

    /// Returns the next hint, cycling through the list.
    pub fn next_hint(&mut self) -> Option<&str> {
        if self.hints.is_empty() {
            return None;
        }
        let index = self.next_hint % self.hints.len();
        self.next_hint = index + 1;
        Some(self.hints[index].as_str())
    }

    /// Reaction to being given an item, if any.
    #[must_use]
    pub fn react_to(&self, item: &ItemId) -> Option<&str> {
        self.item_reactions.get(item).map(String::as_str)
    }

    /// Returns true if giving this item completes the open quest.
    #[must_use]
    pub fn accepts(&self, item: &ItemId) -> bool {
        self.quest
            .as_ref()
            .is_some_and(|q| !q.completed && q.required_item.as_ref() == Some(item))
    }

    /// Marks the quest complete and hands over the reward item.
    pub fn complete_quest(&mut self) -> Option<Item> {
        let quest = self.quest.as_mut()?;
        if quest.completed {
            return None;
        }
        quest.completed = true;
        self.state = DialogueState::QuestComplete;
        quest.reward.take()
    }
}

impl Examine for Npc {
    fn entity(&self) -> &Entity {
        &self.entity
    }
}
