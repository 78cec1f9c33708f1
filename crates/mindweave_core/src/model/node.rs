//! Map node domain model.
//!
//! # Responsibility
//! - Define the node record used by every outline and suggestion flow.
//! - Provide depth-first lookup by stable node id.
//!
//! # Invariants
//! - `id` is unique within one tree and is never regenerated by edits.
//! - A non-root id always extends its parent id with `_<index>`.
//! - `is_deleted` is a soft-delete marker; flagged nodes stay in the tree.

use serde::{Deserialize, Serialize};

/// Stable identifier for one node within a tree.
///
/// Positional by construction: the root is `"0"` and children append
/// `_<index>` at creation time. Kept as a type alias to make semantic
/// intent explicit in signatures.
pub type NodeId = String;

/// Fixed id of every tree root.
pub const ROOT_ID: &str = "0";

/// Label substituted when parsed content would otherwise be empty.
pub const DEFAULT_ROOT_LABEL: &str = "Root";

/// Ordinal urgency of one map item, `A` highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    A,
    B,
    C,
}

impl Priority {
    /// Parses one priority letter, rejecting anything outside `A|B|C`.
    pub fn from_letter(value: &str) -> Option<Self> {
        match value.trim() {
            "A" => Some(Self::A),
            "B" => Some(Self::B),
            "C" => Some(Self::C),
            _ => None,
        }
    }

    /// Returns the single-letter wire form.
    pub fn as_letter(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }
}

/// One mind-map item.
///
/// Serializes as the camelCase JSON shape exchanged with the UI
/// collaborator; change flags are omitted from output while unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapNode {
    /// Positional id, unique within one tree.
    pub id: NodeId,
    /// Display text. Never empty after parsing.
    pub content: String,
    /// Item urgency.
    pub priority: Priority,
    /// Ordered children, document order. Empty for leaves.
    #[serde(default)]
    pub children: Vec<MapNode>,
    /// Set when the node was appended by an applied `add` suggestion.
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_new: bool,
    /// Set by edits since the last full tree replacement.
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_updated: bool,
    /// Soft-delete marker. Deleted nodes are kept but refuse edits.
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_deleted: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl MapNode {
    /// Creates one node with cleared change flags and no children.
    pub fn new(id: impl Into<NodeId>, content: impl Into<String>, priority: Priority) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            priority,
            children: Vec::new(),
            is_new: false,
            is_updated: false,
            is_deleted: false,
        }
    }

    /// Returns the fixed tree produced for an absent or blank outline.
    pub fn default_root() -> Self {
        Self::new(ROOT_ID, DEFAULT_ROOT_LABEL, Priority::A)
    }

    /// Depth-first lookup: this node first, then children left to right.
    pub fn find(&self, id: &str) -> Option<&MapNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Mutable variant of [`MapNode::find`], same traversal order.
    pub fn find_mut(&mut self, id: &str) -> Option<&mut MapNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| child.find_mut(id))
    }
}

#[cfg(test)]
mod tests {
    use super::{MapNode, Priority, DEFAULT_ROOT_LABEL, ROOT_ID};

    #[test]
    fn default_root_has_fixed_shape() {
        let root = MapNode::default_root();
        assert_eq!(root.id, ROOT_ID);
        assert_eq!(root.content, DEFAULT_ROOT_LABEL);
        assert_eq!(root.priority, Priority::A);
        assert!(root.children.is_empty());
        assert!(!root.is_new && !root.is_updated && !root.is_deleted);
    }

    #[test]
    fn find_prefers_first_depth_first_match() {
        let mut root = MapNode::default_root();
        let mut left = MapNode::new("0_0", "Left", Priority::B);
        left.children.push(MapNode::new("0_0_0", "Deep", Priority::C));
        root.children.push(left);
        root.children.push(MapNode::new("0_1", "Right", Priority::B));

        assert_eq!(root.find("0_0_0").map(|n| n.content.as_str()), Some("Deep"));
        assert_eq!(root.find("0_1").map(|n| n.content.as_str()), Some("Right"));
        assert!(root.find("0_9").is_none());
    }

    #[test]
    fn priority_letters_round_trip() {
        assert_eq!(Priority::from_letter(" B "), Some(Priority::B));
        assert_eq!(Priority::from_letter("D"), None);
        assert_eq!(Priority::C.as_letter(), "C");
    }
}
