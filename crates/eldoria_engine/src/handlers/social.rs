//! `talk`, `ask` and `give`.

use eldoria_foundation::{Error, Examine, Result};
use eldoria_parser::{Action, Command};
use eldoria_world::DialogueState;

use super::current_location_mut;
use crate::dispatcher::TurnContext;
use crate::report::{Feedback, Report};

/// Speaks with an NPC, advancing its conversation state.
pub fn talk(ctx: &mut TurnContext<'_>, command: &Command) -> Result<Report> {
    let words = match command.arguments.split_first() {
        Some((first, rest)) if first == "to" || first == "with" => rest,
        _ => command.arguments.as_slice(),
    };
    let name = words.join(" ");
    if name.is_empty() {
        return Ok(Report::feedback(Feedback::MissingTarget(Action::Talk)));
    }

    let location = current_location_mut(&mut ctx.state.world)?;
    let Some(npc) = location.find_npc_mut(&name) else {
        return Ok(Report::feedback(Feedback::NoSuchPerson(name)));
    };

    let before = npc.state();
    let line = npc.talk();
    let mut report = Report::text(format!("{} says: \"{line}\"", npc.name()));
    if before == DialogueState::Initial && npc.state() == DialogueState::QuestActive {
        if let Some(quest) = npc.quest() {
            report.push(format!("New quest: {}", quest.description()));
        }
    }
    Ok(report)
}

/// Asks an NPC about a topic, or any word of it; falls back to the NPC's next hint.
pub fn ask(ctx: &mut TurnContext<'_>, command: &Command) -> Result<Report> {
    let Some((name, topic)) = command.split_on("about") else {
        return Ok(Report::feedback(Feedback::MissingTopic));
    };
    if name.is_empty() || topic.is_empty() {
        return Ok(Report::feedback(Feedback::MissingTopic));
    }

    let location = current_location_mut(&mut ctx.state.world)?;
    let Some(npc) = location.find_npc_mut(&name) else {
        return Ok(Report::feedback(Feedback::NoSuchPerson(name)));
    };

    let npc_name = npc.name().to_string();
    let known = npc
        .respond_to(&topic)
        .or_else(|| topic.split_whitespace().find_map(|word| npc.respond_to(word)))
        .map(str::to_string);
    let line = match known {
        Some(response) => response,
        None => match npc.next_hint() {
            Some(hint) => hint.to_string(),
            None => return Ok(Report::text(format!("{npc_name} has nothing to say about that."))),
        },
    };
    Ok(Report::text(format!("{npc_name} says: \"{line}\"")))
}

/// Hands a carried item to an NPC.
///
/// The quest item is consumed and the quest reward goes to the inventory,
/// or to the floor when the inventory is full. Any other item stays
/// with the player.
pub fn give(ctx: &mut TurnContext<'_>, command: &Command) -> Result<Report> {
    let Some((item_name, name)) = command.split_on("to") else {
        return Ok(Report::feedback(Feedback::MissingRecipient));
    };
    if item_name.is_empty() {
        return Ok(Report::feedback(Feedback::MissingTarget(Action::Give)));
    }
    if name.is_empty() {
        return Ok(Report::feedback(Feedback::MissingRecipient));
    }

    let state = &mut *ctx.state;
    let Some(item_id) = state.player.item(&item_name).map(|item| item.id().clone()) else {
        return Ok(Report::feedback(Feedback::NotCarried));
    };
    let location = current_location_mut(&mut state.world)?;
    let location_name = location.name().to_string();
    let Some(npc) = location.find_npc_mut(&name) else {
        return Ok(Report::feedback(Feedback::NoSuchPerson(name)));
    };
    let npc_name = npc.name().to_string();
    let reaction = npc.react_to(&item_id).map(str::to_string);

    if !npc.accepts(&item_id) {
        return Ok(Report::text(reaction.unwrap_or_else(|| {
            format!("{npc_name} doesn't seem interested in that.")
        })));
    }

    let given = state
        .player
        .remove_item_by_id(&item_id)
        .ok_or_else(|| Error::invariant(format!("{item_id} vanished from the inventory")))?;
    let reward = npc.complete_quest();
    ctx.tracer
        .item_transferred(item_id.as_str(), "inventory", &npc_name);

    let mut report = Report::text(reaction.unwrap_or_else(|| {
        format!("{npc_name} accepts the {}.", given.name())
    }));
    report.push("Quest complete!");

    if let Some(reward) = reward {
        let reward_id = reward.id().clone();
        let reward_name = reward.name().to_string();
        match state.player.try_add_item(reward) {
            Ok(()) => {
                ctx.tracer
                    .item_transferred(reward_id.as_str(), &npc_name, "inventory");
                report.push(format!("{npc_name} gives you the {reward_name}."));
            }
            Err(reward) => {
                location.add_item(reward);
                ctx.tracer
                    .item_transferred(reward_id.as_str(), &npc_name, &location_name);
                report.push(format!(
                    "Your hands are full, so {npc_name} sets the {reward_name} down here."
                ));
            }
        }
    }
    Ok(report)
}
