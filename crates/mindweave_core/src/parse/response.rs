//! Assistant reply splitter and composed parse pipeline.
//!
//! # Responsibility
//! - Carve one raw reply into prose, fenced outline block and suggestions
//!   tail.
//! - Compose splitter, outline parser and suggestion parser into the one
//!   call exposed to UI/network collaborators.
//!
//! # Invariants
//! - Missing blocks are absences, never errors.
//! - Prose is the raw text with both regions removed, then trimmed.
//! - The outline block is assumed to precede the suggestions block;
//!   interleaved or reversed regions are unspecified input.

use crate::model::node::MapNode;
use crate::parse::outline::parse_outline;
use crate::parse::suggestion::{parse_suggestions, Suggestion};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static OUTLINE_FENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```mermaid(.*?)```").expect("valid outline fence regex"));
static SUGGESTIONS_TAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)Suggested changes:(.*)$").expect("valid suggestions tail regex"));

/// Raw reply split into its three logical regions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitResponse {
    /// Reply text with the outline and suggestions regions removed.
    pub prose: String,
    /// Content of the first fenced outline block, trimmed. `None` when the
    /// reply carries no such fence.
    pub outline: Option<String>,
    /// Everything after the suggestions header, trimmed. `None` when the
    /// header is absent.
    pub suggestions: Option<String>,
}

/// Fully parsed assistant reply, ready for the UI collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedResponse {
    pub prose: String,
    pub map: MapNode,
    pub suggestions: Vec<Suggestion>,
}

/// Splits one raw reply into prose, outline block and suggestions block.
pub fn split_response(raw: &str) -> SplitResponse {
    let outline = OUTLINE_FENCE_RE
        .captures(raw)
        .map(|caps| caps[1].trim().to_string());
    let suggestions = SUGGESTIONS_TAIL_RE
        .captures(raw)
        .map(|caps| caps[1].trim().to_string());

    let without_outline = OUTLINE_FENCE_RE.replace(raw, "");
    let prose = SUGGESTIONS_TAIL_RE
        .replace(&without_outline, "")
        .trim()
        .to_string();

    SplitResponse {
        prose,
        outline,
        suggestions,
    }
}

/// Composed pipeline: split, parse outline (default root on absence), parse
/// suggestions (empty sequence on absence).
pub fn parse_response(raw: &str) -> ParsedResponse {
    let split = split_response(raw);
    let map = parse_outline(split.outline.as_deref().unwrap_or(""));
    let suggestions = split
        .suggestions
        .as_deref()
        .map(parse_suggestions)
        .unwrap_or_default();

    debug!(
        "event=response_parsed module=core status=ok outline_present={} suggestions={}",
        split.outline.is_some(),
        suggestions.len()
    );

    ParsedResponse {
        prose: split.prose,
        map,
        suggestions,
    }
}
