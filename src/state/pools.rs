//! Node pool records and the node-type price catalog.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pools arrive from the host page already attached to a cluster. Each pool
//! carries the per-node monthly price resolved from the type catalog so the
//! aggregate estimate can be computed without another lookup.

#[cfg(test)]
#[path = "pools_test.rs"]
mod pools_test;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Server-assigned pool identifier.
pub type PoolId = u64;

/// One provisioned group of identical compute nodes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    /// `None` until the pool has been created server-side.
    pub id: Option<PoolId>,
    /// Key into the [`TypeCatalog`].
    pub type_key: String,
    pub count: u32,
    pub monthly_price_per_node: Decimal,
}

impl Pool {
    /// Build a pool, resolving its per-node price from `catalog`.
    ///
    /// Unknown type keys price at zero so a stale catalog never hides a pool
    /// from the table.
    pub fn priced(id: Option<PoolId>, type_key: impl Into<String>, count: u32, catalog: &TypeCatalog) -> Self {
        let type_key = type_key.into();
        let monthly_price_per_node = catalog.monthly_price(&type_key).unwrap_or_else(|| {
            tracing::warn!(%type_key, "node type missing from catalog; pricing at zero");
            Decimal::ZERO
        });
        Self { id, type_key, count, monthly_price_per_node }
    }

    /// Copy of this pool with a new node count.
    #[must_use]
    pub fn with_count(&self, count: u32) -> Self {
        Self { count, ..self.clone() }
    }

    /// Monthly cost of the whole pool.
    pub fn monthly_cost(&self) -> Decimal {
        self.monthly_price_per_node * Decimal::from(self.count)
    }
}

/// A node-type descriptor from the external catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeType {
    pub id: String,
    pub label: String,
    pub monthly_price: Decimal,
}

/// Read-only mapping from type key to [`NodeType`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeCatalog {
    types: Vec<NodeType>,
}

impl TypeCatalog {
    pub fn new(types: Vec<NodeType>) -> Self {
        Self { types }
    }

    pub fn lookup(&self, type_key: &str) -> Option<&NodeType> {
        self.types.iter().find(|t| t.id == type_key)
    }

    pub fn monthly_price(&self, type_key: &str) -> Option<Decimal> {
        self.lookup(type_key).map(|t| t.monthly_price)
    }

    /// Display label for a type key, falling back to the raw key.
    pub fn label<'a>(&'a self, type_key: &'a str) -> &'a str {
        self.lookup(type_key).map_or(type_key, |t| t.label.as_str())
    }

    pub fn types(&self) -> &[NodeType] {
        &self.types
    }
}
