//! Core parsing and tree-editing logic for mindweave.
//! This crate is the single source of truth for outline, suggestion and
//! mutation semantics; transport and rendering live with its callers.

pub mod logging;
pub mod model;
pub mod parse;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::node::{MapNode, NodeId, Priority, DEFAULT_ROOT_LABEL, ROOT_ID};
pub use parse::outline::parse_outline;
pub use parse::response::{parse_response, split_response, ParsedResponse, SplitResponse};
pub use parse::suggestion::{parse_suggestions, Suggestion, SuggestionAction};
pub use service::map_service::{apply_suggestion, edit_node, find_node, toggle_delete};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
