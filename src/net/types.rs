//! Wire types shared with the pool update API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::pools::{Pool, PoolId};

/// One reason reported by the API for rejecting a request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiFieldError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub reason: String,
}

impl ApiFieldError {
    pub fn reason(reason: impl Into<String>) -> Self {
        Self { field: None, reason: reason.into() }
    }
}

/// Error envelope returned by the API on non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub errors: Vec<ApiFieldError>,
}

/// Pool entry in an update request body. Price is derived server-side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PoolUpdateEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<PoolId>,
    #[serde(rename = "type")]
    pub type_key: String,
    pub count: u32,
}

/// Full replacement set of pools for one cluster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PoolUpdateRequest {
    pub node_pools: Vec<PoolUpdateEntry>,
}

impl From<&[Pool]> for PoolUpdateRequest {
    fn from(pools: &[Pool]) -> Self {
        Self {
            node_pools: pools
                .iter()
                .map(|p| PoolUpdateEntry { id: p.id, type_key: p.type_key.clone(), count: p.count })
                .collect(),
        }
    }
}
