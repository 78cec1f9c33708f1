//! Text-protocol parsers for assistant replies.
//!
//! # Responsibility
//! - Split one raw reply into prose, outline block and suggestions block.
//! - Convert the outline block into a tree and the suggestions block into
//!   typed edit operations.
//!
//! # Invariants
//! - Every parser is total over arbitrary string input: malformed text
//!   degrades to a well-defined default, never an error.

pub mod outline;
pub mod response;
pub mod suggestion;
