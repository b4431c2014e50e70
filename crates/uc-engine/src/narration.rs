//! Text generation for rooms, containers and inventory.
//!
//! All prose comes from content; this module only arranges it.

use uc_core::{Actor, Cue, Location, ObjectFlag, ObjectId, RoomFlag, World};

/// Shown instead of a room description when the room is dark.
pub const DARKNESS: &str = "It is pitch black. You are likely to be eaten by a grue.";

/// Describe the player's room.
///
/// The long description is shown when `force` is set, in verbose mode, or on
/// a first visit. Objects that have never been moved use their initial text.
pub fn describe_room(world: &World, force: bool) -> Vec<String> {
    let here = &world.player.location;
    let Some(room) = world.room(here) else {
        return Vec::new();
    };
    if !world.is_lit(here) {
        return vec![DARKNESS.to_string()];
    }

    let mut lines = vec![room.name.clone()];
    let long = force || world.player.verbose || !room.has(RoomFlag::Visited);
    if long && !room.description.is_empty() {
        lines.push(room.description.clone());
    }

    for id in world.contents(&Location::Room(here.clone())) {
        let Some(obj) = world.object(id) else {
            continue;
        };
        match &obj.initial {
            Some(text) if !obj.has(ObjectFlag::Touched) => lines.push(text.clone()),
            _ if obj.has(ObjectFlag::Scenery) => {}
            _ => lines.push(format!("There is {} here.", with_article(&obj.brief))),
        }
        if obj.shows_contents() {
            lines.extend(contents(world, id, 0));
        }
    }

    for actor in world.actors_in(here) {
        lines.push(
            actor
                .line(Cue::Present)
                .map(str::to_string)
                .unwrap_or_else(|| format!("There is {} here.", with_article(&actor.name))),
        );
    }
    lines
}

/// List what a container holds, indented by `depth`. Empty containers
/// produce no lines.
pub fn contents(world: &World, container: &ObjectId, depth: usize) -> Vec<String> {
    let inner: Vec<&ObjectId> = world.contents(&Location::Object(container.clone())).collect();
    let Some(holder) = world.object(container) else {
        return Vec::new();
    };
    if inner.is_empty() {
        return Vec::new();
    }
    let pad = "  ".repeat(depth);
    let mut lines = vec![format!("{pad}The {} contains:", holder.brief)];
    for id in inner {
        let Some(obj) = world.object(id) else {
            continue;
        };
        lines.push(format!("{pad}  {}", capitalize(&with_article(&obj.brief))));
        if obj.shows_contents() {
            lines.extend(contents(world, id, depth + 1));
        }
    }
    lines
}

/// The player's inventory.
pub fn inventory(world: &World) -> Vec<String> {
    let held: Vec<&ObjectId> = world.contents(&Location::Player).collect();
    if held.is_empty() {
        return vec!["You are empty-handed.".to_string()];
    }
    let mut lines = vec!["You are carrying:".to_string()];
    for id in held {
        let Some(obj) = world.object(id) else {
            continue;
        };
        let mut line = format!("  {}", capitalize(&with_article(&obj.brief)));
        if obj.is_shining() {
            line.push_str(" (providing light)");
        }
        lines.push(line);
        if obj.shows_contents() {
            lines.extend(contents(world, id, 1));
        }
    }
    lines
}

/// An actor's line for a cue with `{item}` filled in.
pub fn cue(actor: &Actor, cue: Cue, item: &str) -> Option<String> {
    actor.line(cue).map(|text| text.replace("{item}", item))
}

/// "a lamp", "an egg".
pub fn with_article(noun: &str) -> String {
    let article = match noun.chars().next() {
        Some(c) if "aeiouAEIOU".contains(c) => "an",
        _ => "a",
    };
    format!("{article} {noun}")
}

/// Upper-case the first letter.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// "a", "a and b", "a, b, and c".
pub fn join_list(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [one] => one.clone(),
        [a, b] => format!("{a} and {b}"),
        [rest @ .., last] => format!("{}, and {last}", rest.join(", ")),
    }
}
