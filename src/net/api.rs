//! Pool update API contract and its HTTP adapter.
//!
//! The panel only depends on [`PoolUpdateApi`]; hosts inject whichever
//! implementation fits their transport.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the adapter reports itself unavailable.
//!
//! ERROR HANDLING
//! ==============
//! Every failure becomes a non-empty list of [`ApiFieldError`]s so the
//! submission state machine has a single error shape to surface.

#![allow(clippy::unused_async)]

use async_trait::async_trait;

use super::types::ApiFieldError;
#[cfg(feature = "hydrate")]
use super::types::{ApiErrorBody, PoolUpdateRequest};
use crate::state::pools::Pool;

/// External collaborator that persists a pool set.
#[async_trait(?Send)]
pub trait PoolUpdateApi {
    /// Submit the full pool set. `Err` carries the API's reasons in order.
    async fn update_pools(&self, pools: &[Pool]) -> Result<(), Vec<ApiFieldError>>;
}

/// `PUT {base_url}/{cluster_id}/pools` with a JSON [`PoolUpdateRequest`] body.
#[derive(Clone, Debug)]
pub struct HttpPoolUpdateApi {
    base_url: String,
    cluster_id: u64,
}

impl HttpPoolUpdateApi {
    pub fn new(base_url: impl Into<String>, cluster_id: u64) -> Self {
        Self { base_url: base_url.into().trim_end_matches('/').to_owned(), cluster_id }
    }

    pub fn url(&self) -> String {
        format!("{}/{}/pools", self.base_url, self.cluster_id)
    }
}

#[async_trait(?Send)]
impl PoolUpdateApi for HttpPoolUpdateApi {
    async fn update_pools(&self, pools: &[Pool]) -> Result<(), Vec<ApiFieldError>> {
        #[cfg(feature = "hydrate")]
        {
            let transport = |e: gloo_net::Error| vec![ApiFieldError::reason(e.to_string())];
            let resp = gloo_net::http::Request::put(&self.url())
                .json(&PoolUpdateRequest::from(pools))
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            if resp.ok() {
                return Ok(());
            }
            let status = resp.status();
            let body = resp.json::<ApiErrorBody>().await.unwrap_or_default();
            if body.errors.is_empty() {
                return Err(vec![ApiFieldError::reason(format!("pool update failed: {status}"))]);
            }
            Err(body.errors)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = pools;
            Err(vec![ApiFieldError::reason("not available on server")])
        }
    }
}
