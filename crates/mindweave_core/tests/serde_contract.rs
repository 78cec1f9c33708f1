use mindweave_core::{parse_response, toggle_delete, MapNode, Priority, Suggestion};
use serde_json::{json, Value};

#[test]
fn node_serializes_to_camel_case_with_flags_omitted_while_unset() {
    let mut root = MapNode::default_root();
    root.children.push(MapNode::new("0_0", "Task", Priority::B));

    let value = serde_json::to_value(&root).expect("node should serialize");
    assert_eq!(
        value,
        json!({
            "id": "0",
            "content": "Root",
            "priority": "A",
            "children": [
                { "id": "0_0", "content": "Task", "priority": "B", "children": [] }
            ]
        })
    );
}

#[test]
fn set_flags_appear_in_output() {
    let map = {
        let mut root = MapNode::default_root();
        root.children.push(MapNode::new("0_0", "Task", Priority::B));
        root
    };
    let deleted = toggle_delete(&map, "0_0");

    let value = serde_json::to_value(&deleted).expect("node should serialize");
    assert_eq!(value["children"][0]["isDeleted"], Value::Bool(true));
    assert!(value["children"][0].get("isUpdated").is_none());
}

#[test]
fn node_deserializes_with_missing_children_and_flags() {
    let node: MapNode =
        serde_json::from_str(r#"{"id":"0","content":"Root","priority":"A"}"#)
            .expect("minimal node should deserialize");
    assert!(node.children.is_empty());
    assert!(!node.is_new && !node.is_updated && !node.is_deleted);
}

#[test]
fn suggestion_serializes_lowercase_action_and_letter_priority() {
    let suggestion = Suggestion {
        action: mindweave_core::SuggestionAction::Add,
        id: String::new(),
        content: Some("Buy milk".to_string()),
        priority: Some(Priority::B),
    };
    let value = serde_json::to_value(&suggestion).expect("suggestion should serialize");
    assert_eq!(
        value,
        json!({ "action": "add", "id": "", "content": "Buy milk", "priority": "B" })
    );
}

#[test]
fn parsed_response_serializes_for_network_collaborators() {
    let parsed = parse_response("Hello.\n\nSuggested changes:\n- delete: id: 0_0");
    let value = serde_json::to_value(&parsed).expect("parsed response should serialize");
    assert_eq!(value["prose"], Value::String("Hello.".to_string()));
    assert_eq!(value["map"]["id"], Value::String("0".to_string()));
    assert_eq!(value["suggestions"][0]["action"], Value::String("delete".to_string()));
}
