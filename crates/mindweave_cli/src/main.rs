//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `mindweave_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use mindweave_core::{parse_response, MapNode};

const SAMPLE_REPLY: &str = "\
Here is a starting plan for the week.

```mermaid
mindmap Weekly Plan
  Errands
    Groceries
  Work
```

Suggested changes:
- add: content: Water plants, priority: C
- update: id: 0_1, content: Deep work block, priority: A";

fn print_outline(node: &MapNode, depth: usize) {
    println!(
        "{}[{}] {} ({})",
        "  ".repeat(depth),
        node.id,
        node.content,
        node.priority.as_letter()
    );
    for child in &node.children {
        print_outline(child, depth + 1);
    }
}

fn main() {
    println!("mindweave_core version={}", mindweave_core::core_version());

    let parsed = parse_response(SAMPLE_REPLY);
    println!("prose: {}", parsed.prose);
    print_outline(&parsed.map, 0);
    for suggestion in &parsed.suggestions {
        println!(
            "suggestion action={} id={} content={} priority={}",
            suggestion.action.as_str(),
            if suggestion.id.is_empty() { "-" } else { suggestion.id.as_str() },
            suggestion.content.as_deref().unwrap_or("-"),
            suggestion
                .priority
                .map(|p| p.as_letter())
                .unwrap_or("-")
        );
    }
}
