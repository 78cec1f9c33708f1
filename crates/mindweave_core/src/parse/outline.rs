//! Indentation-based outline parser.
//!
//! # Responsibility
//! - Turn one line-oriented outline block into a [`MapNode`] tree.
//! - Assign positional ids (`"<parentId>_<index>"`) at creation time.
//!
//! # Invariants
//! - Any input, however malformed, yields a tree with exactly one root.
//! - Blank or absent input yields the fixed default root.
//! - Dedents walk upward in fixed steps of 2 indentation columns.

use crate::model::node::{MapNode, Priority, DEFAULT_ROOT_LABEL, ROOT_ID};
use log::debug;

/// Marker keyword stripped from the root line when it leads the block.
const OUTLINE_MARKER: &str = "mindmap";

/// Arena slot used while building; the tree is materialized at the end.
struct Slot {
    id: String,
    content: String,
    priority: Priority,
    parent: usize,
    children: Vec<usize>,
}

/// Parses one outline block into a tree.
///
/// The first non-empty line names the root (leading marker keyword
/// stripped; empty result falls back to the default label). Each later
/// non-empty line is placed by comparing its leading-whitespace count to
/// the current level: equal appends a sibling (priority `B`), deeper nests
/// under the most recently added sibling (priority `C`), shallower walks
/// the parent chain upward two columns per step before appending a sibling
/// (priority `B`).
pub fn parse_outline(outline: &str) -> MapNode {
    let mut lines = outline.lines();
    let root_label = loop {
        match lines.next() {
            Some(line) if !line.trim().is_empty() => break Some(root_label_of(line)),
            Some(_) => continue,
            None => break None,
        }
    };
    let Some(root_label) = root_label else {
        return MapNode::default_root();
    };

    let mut arena = vec![Slot {
        id: ROOT_ID.to_string(),
        content: root_label,
        priority: Priority::A,
        parent: 0,
        children: Vec::new(),
    }];
    let mut current_parent = 0usize;
    let mut current_indent = 0usize;

    for line in lines {
        let content = line.trim();
        if content.is_empty() {
            continue;
        }
        let indent = leading_whitespace(line);
        if indent == current_indent {
            push_child(&mut arena, current_parent, content, Priority::B);
        } else if indent > current_indent {
            // Nest under the most recently added sibling, or directly under
            // the current parent when it has no children yet.
            let parent = arena[current_parent]
                .children
                .last()
                .copied()
                .unwrap_or(current_parent);
            push_child(&mut arena, parent, content, Priority::C);
            current_parent = parent;
            current_indent = indent;
        } else {
            while indent < current_indent && current_parent != 0 {
                current_parent = arena[current_parent].parent;
                current_indent = current_indent.saturating_sub(2);
            }
            push_child(&mut arena, current_parent, content, Priority::B);
        }
    }

    debug!(
        "event=outline_parsed module=core status=ok nodes={}",
        arena.len()
    );
    materialize(&arena, 0)
}

fn root_label_of(first_line: &str) -> String {
    let trimmed = first_line.trim();
    let label = trimmed.strip_prefix(OUTLINE_MARKER).unwrap_or(trimmed).trim();
    if label.is_empty() {
        DEFAULT_ROOT_LABEL.to_string()
    } else {
        label.to_string()
    }
}

fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

fn push_child(arena: &mut Vec<Slot>, parent: usize, content: &str, priority: Priority) {
    let id = format!("{}_{}", arena[parent].id, arena[parent].children.len());
    arena.push(Slot {
        id,
        content: content.to_string(),
        priority,
        parent,
        children: Vec::new(),
    });
    let index = arena.len() - 1;
    arena[parent].children.push(index);
}

fn materialize(arena: &[Slot], index: usize) -> MapNode {
    let slot = &arena[index];
    let mut node = MapNode::new(slot.id.clone(), slot.content.clone(), slot.priority);
    node.children = slot
        .children
        .iter()
        .map(|&child| materialize(arena, child))
        .collect();
    node
}
