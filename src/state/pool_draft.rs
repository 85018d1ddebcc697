//! Committed pool list plus an independent working copy for edit mode.
//!
//! DESIGN
//! ======
//! The draft is a deep clone of the committed list taken on `enter_edit` and
//! dropped on `exit_edit`, so `draft.is_some() == editing` always holds.
//! Wrong-mode calls are rejected with a [`DraftError`] instead of silently
//! mutating whichever list happens to be visible.

#[cfg(test)]
#[path = "pool_draft_test.rs"]
mod pool_draft_test;

use super::pools::{Pool, PoolId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("not in edit mode")]
    NotEditing,
    #[error("already in edit mode")]
    AlreadyEditing,
    #[error("row index {index} out of range for {len} pools")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("row {index} holds pool {current}, update targeted pool {incoming}")]
    StaleRow { index: usize, current: PoolId, incoming: PoolId },
    #[error("pool not found: {0}")]
    PoolNotFound(PoolId),
}

/// Committed pools and the optional draft being edited.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PoolDraftStore {
    committed: Vec<Pool>,
    draft: Option<Vec<Pool>>,
}

impl PoolDraftStore {
    pub fn new(committed: Vec<Pool>) -> Self {
        Self { committed, draft: None }
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    pub fn committed(&self) -> &[Pool] {
        &self.committed
    }

    pub fn draft(&self) -> Option<&[Pool]> {
        self.draft.as_deref()
    }

    /// The list a table should render: the draft while editing.
    pub fn visible(&self) -> &[Pool] {
        self.draft.as_deref().unwrap_or(&self.committed)
    }

    /// Swap in a freshly loaded committed list. An open draft is kept.
    pub fn replace_committed(&mut self, pools: Vec<Pool>) {
        self.committed = pools;
    }

    pub fn enter_edit(&mut self) -> Result<(), DraftError> {
        if self.draft.is_some() {
            return Err(DraftError::AlreadyEditing);
        }
        self.draft = Some(self.committed.clone());
        tracing::debug!(pools = self.committed.len(), "entered pool edit mode");
        Ok(())
    }

    /// Replace the draft row at `index`.
    ///
    /// When both the incoming pool and the current row carry ids they must
    /// match, otherwise the index went stale between render and event.
    pub fn update(&mut self, index: usize, pool: Pool) -> Result<(), DraftError> {
        let draft = self.draft_mut()?;
        let len = draft.len();
        let row = draft.get_mut(index).ok_or(DraftError::IndexOutOfRange { index, len })?;
        if let (Some(current), Some(incoming)) = (row.id, pool.id) {
            if current != incoming {
                return Err(DraftError::StaleRow { index, current, incoming });
            }
        }
        *row = pool;
        Ok(())
    }

    /// Replace the draft row whose id is `id`.
    pub fn update_by_id(&mut self, id: PoolId, pool: Pool) -> Result<(), DraftError> {
        let row = self
            .draft_mut()?
            .iter_mut()
            .find(|p| p.id == Some(id))
            .ok_or(DraftError::PoolNotFound(id))?;
        *row = pool;
        Ok(())
    }

    /// Remove the first draft row with `id`. Missing ids are a no-op.
    pub fn delete(&mut self, id: PoolId) -> Result<(), DraftError> {
        let draft = self.draft_mut()?;
        if let Some(pos) = draft.iter().position(|p| p.id == Some(id)) {
            draft.remove(pos);
        }
        Ok(())
    }

    /// Throw away draft edits, re-cloning from committed. Stays in edit mode.
    pub fn reset(&mut self) -> Result<(), DraftError> {
        let committed = self.committed.clone();
        *self.draft_mut()? = committed;
        Ok(())
    }

    pub fn exit_edit(&mut self) -> Result<(), DraftError> {
        if self.draft.take().is_none() {
            return Err(DraftError::NotEditing);
        }
        tracing::debug!("left pool edit mode");
        Ok(())
    }

    /// Promote the draft to committed and leave edit mode in one step.
    pub fn promote_draft(&mut self) -> Result<(), DraftError> {
        let draft = self.draft.take().ok_or(DraftError::NotEditing)?;
        self.committed = draft;
        tracing::debug!(pools = self.committed.len(), "draft promoted to committed");
        Ok(())
    }

    fn draft_mut(&mut self) -> Result<&mut Vec<Pool>, DraftError> {
        self.draft.as_mut().ok_or(DraftError::NotEditing)
    }
}
