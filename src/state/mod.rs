//! Console state modules.
//!
//! DESIGN
//! ======
//! Everything here is plain data plus methods, free of Leptos, so the edit
//! workflow and the time-range fan-out are testable natively. Components wrap
//! these models in signals.

pub mod node_pools;
pub mod pool_draft;
pub mod pools;
pub mod pricing;
pub mod submission;
pub mod time_window;
