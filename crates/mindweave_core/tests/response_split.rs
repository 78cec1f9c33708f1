use mindweave_core::{parse_response, split_response, MapNode, Priority, SuggestionAction};

const FULL_REPLY: &str = "\
I reshaped the release plan around documentation.

```mermaid
mindmap
  Release
    Docs
```

Suggested changes:
- add: content: Buy milk, priority: B
- delete: id: 0_0";

#[test]
fn splitter_extracts_all_three_regions() {
    let split = split_response(FULL_REPLY);
    assert_eq!(split.prose, "I reshaped the release plan around documentation.");
    assert_eq!(
        split.outline.as_deref(),
        Some("mindmap\n  Release\n    Docs")
    );
    assert_eq!(
        split.suggestions.as_deref(),
        Some("- add: content: Buy milk, priority: B\n- delete: id: 0_0")
    );
}

#[test]
fn missing_fence_leaves_outline_absent() {
    let split = split_response("Just words.\n\nSuggested changes:\n- delete: id: 0_1");
    assert!(split.outline.is_none());
    assert_eq!(split.prose, "Just words.");
    assert!(split.suggestions.is_some());
}

#[test]
fn missing_header_leaves_suggestions_absent() {
    let split = split_response("Intro.\n```mermaid\nmindmap Plan\n```\nOutro.");
    assert!(split.suggestions.is_none());
    assert_eq!(split.outline.as_deref(), Some("mindmap Plan"));
    assert_eq!(split.prose, "Intro.\n\nOutro.");
}

#[test]
fn prose_only_reply_passes_through_trimmed() {
    let split = split_response("  Nothing structured here.  ");
    assert_eq!(split.prose, "Nothing structured here.");
    assert!(split.outline.is_none());
    assert!(split.suggestions.is_none());
}

#[test]
fn pipeline_composes_both_parsers() {
    let parsed = parse_response(FULL_REPLY);

    assert_eq!(parsed.prose, "I reshaped the release plan around documentation.");

    // Marker-only first line: root takes the default label.
    assert_eq!(parsed.map.id, "0");
    assert_eq!(parsed.map.content, "Root");
    assert_eq!(parsed.map.children.len(), 1);
    let release = &parsed.map.children[0];
    assert_eq!(release.id, "0_0");
    assert_eq!(release.content, "Release");
    assert_eq!(release.priority, Priority::C);
    assert_eq!(release.children[0].content, "Docs");

    assert_eq!(parsed.suggestions.len(), 2);
    assert_eq!(parsed.suggestions[0].action, SuggestionAction::Add);
    assert_eq!(parsed.suggestions[1].action, SuggestionAction::Delete);
    assert_eq!(parsed.suggestions[1].id, "0_0");
}

#[test]
fn pipeline_defaults_on_bare_reply() {
    let parsed = parse_response("No structure at all.");
    assert_eq!(parsed.map, MapNode::default_root());
    assert!(parsed.suggestions.is_empty());
    assert_eq!(parsed.prose, "No structure at all.");
}
