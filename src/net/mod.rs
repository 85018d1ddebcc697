//! Collaborator contracts and wire types.
//!
//! SYSTEM CONTEXT
//! ==============
//! The console never owns a transport. `api` defines what it needs from the
//! pool update service and `types` the shapes that cross that boundary.

pub mod api;
pub mod types;
