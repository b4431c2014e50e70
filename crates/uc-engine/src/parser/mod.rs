//! Command parsing for player input.
//!
//! Parsing is pure: it reads the world to resolve nouns but never changes it.

mod command;
mod grammar;
mod lexer;
mod resolver;

pub use command::ParsedCommand;
pub use grammar::{PREPOSITIONS, is_verb, match_verb};
pub use lexer::tokenize;
pub use resolver::resolve_phrase;

use uc_core::{Direction, Scope, VerbType, World};

use crate::error::ParseError;
use grammar::{ARTICLES, ENTER_VERBS};

/// Slot used by `save` and `restore` when none is named.
pub const DEFAULT_SLOT: &str = "default";

/// Parse a line of input into a command resolved against `scope`.
pub fn parse(input: &str, scope: &Scope, world: &World) -> Result<ParsedCommand, ParseError> {
    let tokens: Vec<String> = tokenize(input)?
        .into_iter()
        .filter(|t| !ARTICLES.contains(&t.as_str()))
        .collect();
    let Some(first) = tokens.first() else {
        return Err(ParseError::Malformed("I beg your pardon?".to_string()));
    };

    if tokens.len() == 1
        && let Some(dir) = Direction::parse(first)
    {
        return Ok(with_tokens(ParsedCommand::go(dir), &tokens));
    }
    if let Some((_, dir)) = ENTER_VERBS.iter().find(|(w, _)| *w == first.as_str()) {
        return Ok(with_tokens(ParsedCommand::go(*dir), &tokens));
    }
    if tokens.len() == 1 && spoken_to_someone(first, scope, world) {
        let mut cmd = ParsedCommand::new(VerbType::Say);
        cmd.literal = Some(first.clone());
        return Ok(with_tokens(cmd, &tokens));
    }

    let Some((verb, used)) = match_verb(&tokens) else {
        return Err(ParseError::UnknownVerb(first.clone()));
    };
    let rest = &tokens[used..];
    let mut cmd = with_tokens(ParsedCommand::new(verb), &tokens);

    match verb {
        VerbType::Go | VerbType::Climb | VerbType::Move if rest.len() == 1 => {
            if let Some(dir) = Direction::parse(&rest[0]) {
                cmd.verb = if verb == VerbType::Move {
                    VerbType::Go
                } else {
                    verb
                };
                cmd.direction = Some(dir);
                return Ok(cmd);
            }
        }
        VerbType::Say => {
            let word = rest.first().ok_or_else(|| {
                ParseError::Malformed("What do you want to say?".to_string())
            })?;
            cmd.literal = Some(word.clone());
            return Ok(cmd);
        }
        VerbType::Save | VerbType::Restore => {
            cmd.literal = Some(
                rest.first()
                    .cloned()
                    .unwrap_or_else(|| DEFAULT_SLOT.to_string()),
            );
            return Ok(cmd);
        }
        VerbType::Look if !rest.is_empty() => {
            // "look lamp" reads as "examine lamp".
            cmd.verb = VerbType::Examine;
        }
        _ => {}
    }
    if cmd.verb == VerbType::Go {
        return Err(ParseError::Malformed(
            "Which way do you want to go?".to_string(),
        ));
    }
    if verb.is_meta()
        || matches!(
            cmd.verb,
            VerbType::Look | VerbType::Inventory | VerbType::Wait | VerbType::Pray | VerbType::Jump
        )
    {
        return Ok(cmd);
    }

    let mut rest = rest.to_vec();
    if cmd.verb == VerbType::Turn && rest.len() >= 2 {
        // "turn lamp on"
        match rest.last().map(String::as_str) {
            Some("on") => {
                cmd.verb = VerbType::Light;
                rest.pop();
            }
            Some("off") => {
                cmd.verb = VerbType::Extinguish;
                rest.pop();
            }
            _ => {}
        }
    }

    let split = rest
        .iter()
        .position(|t| PREPOSITIONS.contains(&t.as_str()));
    let (direct_words, indirect_words) = match split {
        Some(i) => {
            cmd.preposition = Some(rest[i].clone());
            (&rest[..i], &rest[i + 1..])
        }
        None => (&rest[..], &[][..]),
    };
    if cmd.preposition.is_some() && indirect_words.is_empty() {
        return Err(ParseError::Malformed(format!(
            "What do you want to {} {}?",
            cmd.verb.name(),
            cmd.preposition.as_deref().unwrap_or_default()
        )));
    }

    if !direct_words.is_empty() {
        cmd.direct = Some(resolve_phrase(direct_words, scope, world)?);
    }
    if !indirect_words.is_empty() {
        cmd.indirect = Some(resolve_phrase(indirect_words, scope, world)?);
    }

    if cmd.verb.needs_object() && cmd.direct.is_none() {
        return Err(ParseError::Malformed(format!(
            "What do you want to {}?",
            cmd.verb.name()
        )));
    }
    match cmd.verb {
        VerbType::Put if cmd.indirect.is_none() => Err(ParseError::Malformed(
            "Where do you want to put it?".to_string(),
        )),
        VerbType::Give if cmd.indirect.is_none() => Err(ParseError::Malformed(
            "Who do you want to give it to?".to_string(),
        )),
        _ => Ok(cmd),
    }
}

fn with_tokens(mut cmd: ParsedCommand, tokens: &[String]) -> ParsedCommand {
    cmd.tokens = tokens.to_vec();
    cmd
}

/// A lone word that some actor in the room reacts to.
fn spoken_to_someone(word: &str, scope: &Scope, world: &World) -> bool {
    !is_verb(word)
        && scope
            .actors
            .iter()
            .filter_map(|id| world.actor(id))
            .any(|actor| actor.fears(word))
}
