//! Core use-case services.
//!
//! # Responsibility
//! - Provide the tree mutation operations exposed to UI collaborators.
//! - Keep callers decoupled from tree traversal details.

pub mod map_service;
