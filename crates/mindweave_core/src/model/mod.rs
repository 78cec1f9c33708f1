//! Mind-map domain model.
//!
//! # Responsibility
//! - Define the canonical tree shape shared by parser, services and UI.
//! - Keep node identity and change-flag semantics in one place.
//!
//! # Invariants
//! - Every tree has exactly one root node.
//! - Deletion is represented by soft-delete flags, not node removal.

pub mod node;
