//! Console panel components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components wrap the `state` models in signals and hand read-only views to
//! injected collaborators (pool table, range selector, graphs) via context.

pub mod metrics_panel;
pub mod node_pools_panel;
