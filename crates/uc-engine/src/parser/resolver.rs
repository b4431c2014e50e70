//! Noun phrase resolution with fuzzy matching.

use strsim::jaro_winkler;
use uc_core::{EntityRef, Scope, World};

use crate::error::{Candidate, ParseError};

/// Minimum similarity for a typo match (0.0-1.0).
const FUZZY_THRESHOLD: f64 = 0.9;

/// Something in scope that a noun phrase could name.
struct Nameable<'a> {
    entity: EntityRef,
    label: &'a str,
    nouns: Vec<&'a str>,
    modifiers: Vec<&'a str>,
}

impl Nameable<'_> {
    /// Every modifier word is an adjective or part of the label.
    fn accepts_modifiers(&self, words: &[String]) -> bool {
        words.iter().all(|w| self.modifiers.contains(&w.as_str()))
    }

    fn candidate(&self) -> Candidate {
        Candidate {
            entity: self.entity.clone(),
            label: self.label.to_string(),
        }
    }
}

fn nameables<'a>(scope: &Scope, world: &'a World) -> Vec<Nameable<'a>> {
    let mut out: Vec<Nameable<'a>> = Vec::new();
    for id in scope.objects() {
        let Some(obj) = world.object(id) else {
            continue;
        };
        if out.iter().any(|n| n.entity.object() == Some(id)) {
            continue;
        }
        out.push(Nameable {
            entity: EntityRef::Object(id.clone()),
            label: &obj.brief,
            nouns: obj.nouns().collect(),
            modifiers: obj
                .adjectives
                .iter()
                .map(String::as_str)
                .chain(obj.brief.split_whitespace())
                .collect(),
        });
    }
    for id in &scope.actors {
        let Some(actor) = world.actor(id) else {
            continue;
        };
        out.push(Nameable {
            entity: EntityRef::Actor(id.clone()),
            label: &actor.name,
            nouns: actor.nouns().collect(),
            modifiers: actor.adjectives.iter().map(String::as_str).collect(),
        });
    }
    out
}

/// Resolve a noun phrase (articles already stripped) against the scope.
///
/// The last word is the head noun; the words before it must be adjectives.
/// With no exact match, a unique close spelling of the head noun is
/// accepted.
pub fn resolve_phrase(
    phrase: &[String],
    scope: &Scope,
    world: &World,
) -> Result<EntityRef, ParseError> {
    let text = phrase.join(" ");
    let Some((head, modifiers)) = phrase.split_last() else {
        return Err(ParseError::Malformed("I beg your pardon?".to_string()));
    };
    let pool = nameables(scope, world);

    let exact: Vec<&Nameable<'_>> = pool
        .iter()
        .filter(|n| n.nouns.contains(&head.as_str()) && n.accepts_modifiers(modifiers))
        .collect();
    if let Some(found) = pick(&text, &exact)? {
        return Ok(found);
    }

    let fuzzy: Vec<&Nameable<'_>> = pool
        .iter()
        .filter(|n| {
            n.nouns
                .iter()
                .any(|noun| jaro_winkler(head, noun) >= FUZZY_THRESHOLD)
                && n.accepts_modifiers(modifiers)
        })
        .collect();
    // A typo that could mean two things is not worth guessing.
    if fuzzy.len() == 1 {
        return Ok(fuzzy[0].entity.clone());
    }
    Err(ParseError::NotVisible(text))
}

fn pick(text: &str, matches: &[&Nameable<'_>]) -> Result<Option<EntityRef>, ParseError> {
    match matches {
        [] => Ok(None),
        [one] => Ok(Some(one.entity.clone())),
        many => Err(ParseError::Ambiguous {
            phrase: text.to_string(),
            candidates: many.iter().map(|n| n.candidate()).collect(),
        }),
    }
}
