//! Suggestion-line parser.
//!
//! # Responsibility
//! - Extract typed edit operations from the free-text suggestions block.
//! - Keep one record per recognized line, in document order.
//!
//! # Invariants
//! - Lines outside the grammar are dropped silently, never reported.
//! - Labeled fields are order-flexible; unknown labels are skipped.
//! - `id` is the empty string when the line carries no id field.

use crate::model::node::Priority;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static ACTION_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-\s*(add|update|delete):\s*(.*)$").expect("valid action line regex")
});

/// Edit verb carried by one suggestion line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionAction {
    Add,
    Update,
    Delete,
}

impl SuggestionAction {
    /// Returns the lowercase wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// One typed edit operation extracted from assistant text.
///
/// Fields absent from the source line stay absent here; callers treat an
/// empty `id` and a missing id field as the same signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub action: SuggestionAction,
    /// Target node id; empty for add lines, which name no existing node.
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

/// Parses one suggestions block into ordered records.
///
/// Grammar per line: `- <action>: [id: <id>,] [content: <text>,]
/// [priority: <A|B|C>]` with comma-separated fields in any order. Content
/// runs up to the next comma.
pub fn parse_suggestions(text: &str) -> Vec<Suggestion> {
    text.lines().filter_map(parse_suggestion_line).collect()
}

fn parse_suggestion_line(line: &str) -> Option<Suggestion> {
    let caps = ACTION_LINE_RE.captures(line.trim())?;
    let action = match &caps[1] {
        "add" => SuggestionAction::Add,
        "update" => SuggestionAction::Update,
        _ => SuggestionAction::Delete,
    };

    let mut suggestion = Suggestion {
        action,
        id: String::new(),
        content: None,
        priority: None,
    };
    for field in caps[2].split(',') {
        let Some((label, value)) = field.split_once(':') else {
            continue;
        };
        let value = value.trim();
        match label.trim() {
            "id" => suggestion.id = value.to_string(),
            "content" if !value.is_empty() => suggestion.content = Some(value.to_string()),
            "priority" => suggestion.priority = Priority::from_letter(value),
            _ => {}
        }
    }
    Some(suggestion)
}
