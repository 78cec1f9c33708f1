//! Mind-map mutation use-cases.
//!
//! # Responsibility
//! - Apply user edits and accepted suggestions to a tree.
//! - Return fresh tree values; the caller's tree is never mutated.
//!
//! # Invariants
//! - Every operation deep-copies first; holders of earlier snapshots never
//!   observe interference.
//! - Unknown target ids degrade to an unchanged copy, never an error.
//! - Soft-deleted nodes refuse content edits until restored.

use crate::model::node::{MapNode, Priority};
use crate::parse::suggestion::{Suggestion, SuggestionAction};
use log::debug;

/// Label given to added nodes whose suggestion carries no content.
const DEFAULT_ITEM_LABEL: &str = "New item";

/// Depth-first lookup on the current tree, root first then children left
/// to right. Exposed for inspection; edits go through the operations below.
pub fn find_node<'a>(map: &'a MapNode, id: &str) -> Option<&'a MapNode> {
    map.find(id)
}

/// Returns a copy of `map` with the target node's content and priority
/// replaced and `is_updated` set.
///
/// Soft-deleted targets and unknown ids yield an unchanged copy.
pub fn edit_node(
    map: &MapNode,
    id: &str,
    content: impl Into<String>,
    priority: Priority,
) -> MapNode {
    let mut next = map.clone();
    match next.find_mut(id) {
        Some(node) if !node.is_deleted => {
            node.content = content.into();
            node.priority = priority;
            node.is_updated = true;
        }
        Some(_) => debug!("event=node_edit module=core status=noop reason=deleted id={id}"),
        None => debug!("event=node_edit module=core status=noop reason=missing id={id}"),
    }
    next
}

/// Returns a copy of `map` with the target node's `is_deleted` flag
/// flipped. The search short-circuits at the first match.
pub fn toggle_delete(map: &MapNode, id: &str) -> MapNode {
    let mut next = map.clone();
    match next.find_mut(id) {
        Some(node) => node.is_deleted = !node.is_deleted,
        None => debug!("event=node_toggle_delete module=core status=noop reason=missing id={id}"),
    }
    next
}

/// Applies one suggestion the caller has explicitly accepted.
///
/// Suggestions are never auto-applied on parse; the caller holds them as
/// records and feeds accepted ones through here one at a time.
///
/// - `add` appends a child under the node named by `id` (the root when the
///   id is empty or unknown) with a freshly assigned positional id and
///   `is_new` set.
/// - `update` follows [`edit_node`] semantics, touching only the fields the
///   suggestion carries.
/// - `delete` sets `is_deleted` rather than toggling, so re-applying a
///   stale suggestion is idempotent.
pub fn apply_suggestion(map: &MapNode, suggestion: &Suggestion) -> MapNode {
    let mut next = map.clone();
    match suggestion.action {
        SuggestionAction::Add => {
            let parent_id = match find_node(&next, &suggestion.id) {
                Some(parent) if !suggestion.id.is_empty() => parent.id.clone(),
                _ => next.id.clone(),
            };
            if let Some(parent) = next.find_mut(&parent_id) {
                let child_id = format!("{}_{}", parent.id, parent.children.len());
                let content = suggestion
                    .content
                    .clone()
                    .unwrap_or_else(|| DEFAULT_ITEM_LABEL.to_string());
                let mut child =
                    MapNode::new(child_id, content, suggestion.priority.unwrap_or(Priority::B));
                child.is_new = true;
                parent.children.push(child);
            }
        }
        SuggestionAction::Update => match next.find_mut(&suggestion.id) {
            Some(node) if !node.is_deleted => {
                if let Some(content) = &suggestion.content {
                    node.content = content.clone();
                }
                if let Some(priority) = suggestion.priority {
                    node.priority = priority;
                }
                node.is_updated = true;
            }
            _ => debug!(
                "event=suggestion_apply module=core status=noop action=update id={}",
                suggestion.id
            ),
        },
        SuggestionAction::Delete => match next.find_mut(&suggestion.id) {
            Some(node) => node.is_deleted = true,
            None => debug!(
                "event=suggestion_apply module=core status=noop action=delete id={}",
                suggestion.id
            ),
        },
    }
    next
}
