//! The people of Eldoria.

use eldoria_world::{DialogueState, Npc, NpcRole, Quest};

use crate::items;

/// The village elder; wants the Enchanted Map and rewards the Silver Key.
#[must_use]
pub fn elda() -> Npc {
    Npc::new(
        "Elda",
        "The wise village elder with kind eyes and silver hair.",
        NpcRole::QuestGiver,
    )
    .with_dialogue(
        DialogueState::Initial,
        "Welcome to Luminara, brave adventurer. Dark times have fallen upon our land...",
    )
    .with_dialogue(
        DialogueState::QuestActive,
        "Have you found the Enchanted Map? Gorwin in the Whispering Woods guards it.",
    )
    .with_dialogue(
        DialogueState::QuestComplete,
        "The map shows the way to Malakar's lair. May the Silver Key serve you well.",
    )
    .with_quest(
        Quest::new("Bring the Enchanted Map from the Whispering Woods to Elda.")
            .requiring("ENCHANTED_MAP")
            .with_reward(items::silver_key()),
    )
    .with_topic("malakar", "A sorcerer who would plunge Eldoria into eternal shadow.")
    .with_topic("gorwin", "A hermit of the woods. He speaks in riddles.")
    .with_topic("scroll", "The scroll tells of your mission. Keep it close.")
    .with_hint("Go north from the Village Square to reach the Whispering Woods.")
    .with_hint("Gorwin lives in Hermit's Hollow, at the heart of the woods.")
    .with_item_reaction("ENCHANTED_MAP", "Elda unrolls the map with trembling hands.")
    .with_item_reaction("QUEST_SCROLL", "Elda smiles. \"That scroll is yours to keep.\"")
}

/// The hermit of the woods, keeper of the riddle.
#[must_use]
pub fn gorwin() -> Npc {
    Npc::new(
        "Gorwin",
        "A mysterious hermit who knows the woods' secrets.",
        NpcRole::Guide,
    )
    .with_dialogue(
        DialogueState::Initial,
        "Seek you the way forward? First answer my riddle...",
    )
    .with_dialogue(
        DialogueState::Greeted,
        "The riddle waits. Type 'answer' followed by your reply.",
    )
    .with_topic("riddle", "I speak without a mouth and hear without ears...")
    .with_topic("map", "The map is yours once the riddle is answered.")
    .with_hint("Think about what carries sound through the forest...")
}

/// The Crystal Guardian.
#[must_use]
pub fn thorin() -> Npc {
    Npc::new(
        "Thorin",
        "The Crystal Guardian, his robes embedded with tiny crystals.",
        NpcRole::Guardian,
    )
    .with_dialogue(
        DialogueState::Initial,
        "The path forward requires understanding of light and reflection...",
    )
    .with_dialogue(
        DialogueState::Greeted,
        "Let the lens gather the light of these caves.",
    )
    .with_topic("lens", "Only in these caves does the lens find enough light.")
    .with_topic("light", "Light bends, but it never lies.")
    .with_hint("The library lies east, beyond the Eastern Passage.")
}

/// The scholar of the library; trades the Herbal Mixture for the Quest Scroll.
#[must_use]
pub fn lyra() -> Npc {
    Npc::new(
        "Lyra",
        "A wise scholar with keen eyes and a patient demeanor.",
        NpcRole::Scholar,
    )
    .with_dialogue(
        DialogueState::Initial,
        "The ancient knowledge held here must be properly ordered...",
    )
    .with_dialogue(
        DialogueState::QuestActive,
        "Bring me the scroll Elda gave you, and I will share what I have brewed.",
    )
    .with_dialogue(
        DialogueState::QuestComplete,
        "The scroll is in good hands. Use the mixture wisely in the marshes.",
    )
    .with_quest(
        Quest::new("Bring the Quest Scroll to Lyra so she can add it to the archives.")
            .requiring("QUEST_SCROLL")
            .with_reward(items::herbal_mixture()),
    )
    .with_topic("marshes", "Nothing in the Shadow Marshes is what it seems.")
    .with_topic("malakar", "The archives say he fears only the light of Lumos.")
    .with_hint("The Echoing Mountains lie south of the Library Entrance.")
    .with_item_reaction("QUEST_SCROLL", "Lyra reads the scroll and nods slowly.")
}

/// The Priestess of Light; trades the Staff of Lumos for the Echo Crystal.
#[must_use]
pub fn mira() -> Npc {
    Npc::new(
        "Mira",
        "The Priestess of Light, radiating wisdom and power.",
        NpcRole::QuestGiver,
    )
    .with_dialogue(
        DialogueState::Initial,
        "To wield the Staff of Lumos, one must first prove their worth...",
    )
    .with_dialogue(
        DialogueState::QuestActive,
        "Bring me the Echo Crystal from the mountains as proof of your journey.",
    )
    .with_dialogue(
        DialogueState::QuestComplete,
        "The staff is yours. Carry its light into Malakar's lair.",
    )
    .with_quest(
        Quest::new("Bring the Echo Crystal from the Echoing Mountains to Mira.")
            .requiring("ECHO_CRYSTAL")
            .with_reward(items::staff_of_lumos()),
    )
    .with_topic("staff", "The Staff of Lumos answers only in Malakar's presence.")
    .with_topic("malakar", "His lair lies south, past the Path to Malakar.")
    .with_hint("The Silver Key opens the Dark Antechamber.")
    .with_item_reaction("ECHO_CRYSTAL", "Mira listens to the crystal and smiles.")
}

/// The mystic of the Hidden Grove.
#[must_use]
pub fn elyndor() -> Npc {
    Npc::new(
        "Elyndor",
        "A mysterious mystic with deep knowledge of the grove.",
        NpcRole::Mystic,
    )
    .with_dialogue(
        DialogueState::Initial,
        "The grove reveals its secrets only to those who are worthy...",
    )
    .with_topic("grove", "Few find this place. Fewer leave unchanged.")
}
