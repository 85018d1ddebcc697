//! Edit workflow state behind the node pools panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Combines the draft store, the submission controller, and the price
//! aggregator into the one model the panel renders from. The component owns a
//! single `RwSignal<NodePoolsState>`; every user event is one method call.
//!
//! DESIGN
//! ======
//! Committing is split into `begin_commit` (validate, snapshot the payload,
//! go in flight) and `finish_commit` (apply the API outcome) so the reactive
//! layer never holds a borrow across the await. `commit` glues the two for
//! hosts that own the state directly. While a submission is in flight every
//! draft mutation, reset, and cancel is refused, so the payload sent is
//! exactly the draft that gets promoted.

#[cfg(test)]
#[path = "node_pools_test.rs"]
mod node_pools_test;

use rust_decimal::Decimal;

use crate::net::api::PoolUpdateApi;
use crate::net::types::ApiFieldError;

use super::pool_draft::{DraftError, PoolDraftStore};
use super::pools::{Pool, PoolId};
use super::pricing::{format_monthly_estimate, total_price};
use super::submission::{SubmissionController, SubmissionStatus, SubmitError};

pub const SUCCESS_NOTICE: &str = "Your node pools are being updated.";

/// Command suggested in the panel footer for per-node detail.
pub const NODES_COMMAND: &str = "kubectl get nodes -o wide";

/// Whether pools with zero nodes may be submitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ZeroCountPolicy {
    /// Refuse the submission locally with a visible failure.
    #[default]
    Reject,
    /// Send zero-count pools to the API unchanged.
    Allow,
}

/// Dismissible banner shown above the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodePoolsState {
    store: PoolDraftStore,
    submission: SubmissionController,
    zero_count_policy: ZeroCountPolicy,
}

impl NodePoolsState {
    pub fn new(pools: Vec<Pool>, zero_count_policy: ZeroCountPolicy) -> Self {
        Self { store: PoolDraftStore::new(pools), submission: SubmissionController::default(), zero_count_policy }
    }

    pub fn store(&self) -> &PoolDraftStore {
        &self.store
    }

    pub fn submission(&self) -> &SubmissionController {
        &self.submission
    }

    pub fn is_editing(&self) -> bool {
        self.store.is_editing()
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.is_in_flight()
    }

    pub fn visible_pools(&self) -> &[Pool] {
        self.store.visible()
    }

    pub fn replace_committed(&mut self, pools: Vec<Pool>) {
        self.store.replace_committed(pools);
    }

    // =============================================================
    // Edit mode
    // =============================================================

    pub fn enter_edit(&mut self) -> Result<(), SubmitError> {
        self.ensure_not_in_flight()?;
        self.store.enter_edit()?;
        self.submission.dismiss();
        Ok(())
    }

    pub fn cancel_edit(&mut self) -> Result<(), SubmitError> {
        self.ensure_not_in_flight()?;
        self.store.exit_edit()?;
        Ok(())
    }

    /// The Edit/Cancel button.
    pub fn toggle_editing(&mut self) -> Result<(), SubmitError> {
        if self.is_editing() { self.cancel_edit() } else { self.enter_edit() }
    }

    pub fn update_pool(&mut self, index: usize, pool: Pool) -> Result<(), SubmitError> {
        self.ensure_not_in_flight()?;
        self.store.update(index, pool)?;
        Ok(())
    }

    pub fn update_pool_by_id(&mut self, id: PoolId, pool: Pool) -> Result<(), SubmitError> {
        self.ensure_not_in_flight()?;
        self.store.update_by_id(id, pool)?;
        Ok(())
    }

    pub fn delete_pool(&mut self, id: PoolId) -> Result<(), SubmitError> {
        self.ensure_not_in_flight()?;
        self.store.delete(id)?;
        Ok(())
    }

    pub fn reset_form(&mut self) -> Result<(), SubmitError> {
        self.ensure_not_in_flight()?;
        self.store.reset()?;
        Ok(())
    }

    // =============================================================
    // Submission
    // =============================================================

    /// Validate the draft, go in flight, and return the payload to send.
    pub fn begin_commit(&mut self) -> Result<Vec<Pool>, SubmitError> {
        self.ensure_not_in_flight()?;
        let draft = self.store.draft().ok_or(DraftError::NotEditing)?.to_vec();

        if self.zero_count_policy == ZeroCountPolicy::Reject {
            if let Some(empty) = draft.iter().find(|p| p.count == 0) {
                let type_key = empty.type_key.clone();
                self.submission.reject(vec![ApiFieldError {
                    field: Some("count".to_owned()),
                    reason: format!("Node pool {type_key} must have at least one node."),
                }])?;
                return Err(SubmitError::ZeroCountPool { type_key });
            }
        }

        self.submission.begin()?;
        tracing::debug!(pools = draft.len(), "submitting node pool draft");
        Ok(draft)
    }

    /// Apply the API outcome. Success promotes the draft and leaves edit mode
    /// together; failure changes only the submission status.
    pub fn finish_commit(&mut self, outcome: Result<(), Vec<ApiFieldError>>) -> Result<(), SubmitError> {
        if !self.store.is_editing() {
            return Err(DraftError::NotEditing.into());
        }
        let succeeded = outcome.is_ok();
        self.submission.finish(outcome)?;
        if succeeded {
            self.store.promote_draft()?;
        }
        Ok(())
    }

    /// Submit the draft through `api` and apply the result.
    pub async fn commit(&mut self, api: &dyn PoolUpdateApi) -> Result<(), SubmitError> {
        let payload = self.begin_commit()?;
        let outcome = api.update_pools(&payload).await;
        self.finish_commit(outcome)?;
        match self.submission.surfaced_message() {
            Some(reason) => Err(SubmitError::Rejected(reason.to_owned())),
            None => Ok(()),
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.submission.dismiss();
    }

    // =============================================================
    // Derived view state
    // =============================================================

    /// Live total over the draft; `None` outside edit mode.
    pub fn aggregate_price(&self) -> Option<Decimal> {
        self.store.draft().map(total_price)
    }

    pub fn estimate_label(&self) -> Option<String> {
        self.aggregate_price().map(|total| format!("*Updated Monthly Estimate: {}", format_monthly_estimate(total)))
    }

    pub fn can_submit(&self) -> bool {
        self.is_editing() && !self.is_submitting()
    }

    pub fn can_reset(&self) -> bool {
        self.is_editing() && !self.is_submitting()
    }

    pub fn rows_editable(&self) -> bool {
        self.is_editing() && !self.is_submitting()
    }

    pub fn notice(&self) -> Option<Notice> {
        match self.submission.status() {
            SubmissionStatus::Success => Some(Notice::Success(SUCCESS_NOTICE.to_owned())),
            SubmissionStatus::Failed(_) => self.submission.surfaced_message().map(|m| Notice::Error(m.to_owned())),
            SubmissionStatus::Idle | SubmissionStatus::InFlight => None,
        }
    }

    fn ensure_not_in_flight(&self) -> Result<(), SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::AlreadyInFlight);
        }
        Ok(())
    }
}
