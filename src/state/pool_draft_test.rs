use rust_decimal::Decimal;

use super::*;

fn pool(id: u64, count: u32) -> Pool {
    Pool { id: Some(id), type_key: "g6-standard-1".to_owned(), count, monthly_price_per_node: Decimal::from(10) }
}

fn store() -> PoolDraftStore {
    PoolDraftStore::new(vec![pool(1, 3), pool(2, 1), pool(3, 2)])
}

// =============================================================
// Mode transitions
// =============================================================

#[test]
fn starts_viewing_without_draft() {
    let s = store();
    assert!(!s.is_editing());
    assert!(s.draft().is_none());
    assert_eq!(s.visible(), s.committed());
}

#[test]
fn enter_edit_clones_committed() {
    let mut s = store();
    s.enter_edit().unwrap();
    assert!(s.is_editing());
    assert_eq!(s.draft(), Some(s.committed()));
}

#[test]
fn enter_edit_twice_is_rejected() {
    let mut s = store();
    s.enter_edit().unwrap();
    assert_eq!(s.enter_edit(), Err(DraftError::AlreadyEditing));
}

#[test]
fn exit_edit_drops_draft() {
    let mut s = store();
    s.enter_edit().unwrap();
    s.update(0, pool(1, 9)).unwrap();
    s.exit_edit().unwrap();
    assert!(!s.is_editing());
    assert!(s.draft().is_none());
    assert_eq!(s.committed()[0].count, 3);
}

#[test]
fn mutations_outside_edit_mode_are_rejected() {
    let mut s = store();
    assert_eq!(s.update(0, pool(1, 9)), Err(DraftError::NotEditing));
    assert_eq!(s.update_by_id(1, pool(1, 9)), Err(DraftError::NotEditing));
    assert_eq!(s.delete(1), Err(DraftError::NotEditing));
    assert_eq!(s.reset(), Err(DraftError::NotEditing));
    assert_eq!(s.exit_edit(), Err(DraftError::NotEditing));
    assert_eq!(s.promote_draft(), Err(DraftError::NotEditing));
    assert_eq!(s, store());
}

// =============================================================
// Draft isolation
// =============================================================

#[test]
fn draft_edits_never_touch_committed() {
    let mut s = store();
    s.enter_edit().unwrap();
    s.update(0, pool(1, 42)).unwrap();
    s.delete(2).unwrap();
    assert_eq!(s.committed(), store().committed());
    assert_eq!(s.visible().len(), 2);
    assert_eq!(s.visible()[0].count, 42);
}

#[test]
fn enter_then_reset_equals_committed() {
    let mut s = store();
    s.enter_edit().unwrap();
    s.reset().unwrap();
    assert!(s.is_editing());
    assert_eq!(s.draft(), Some(s.committed()));
}

#[test]
fn reset_discards_update() {
    let mut s = store();
    s.enter_edit().unwrap();
    s.update(0, pool(1, 7)).unwrap();
    s.reset().unwrap();
    assert_eq!(s.draft().unwrap()[0], pool(1, 3));
}

#[test]
fn replace_committed_keeps_open_draft() {
    let mut s = store();
    s.enter_edit().unwrap();
    s.update(0, pool(1, 8)).unwrap();
    s.replace_committed(vec![pool(1, 4)]);
    assert_eq!(s.committed(), &[pool(1, 4)]);
    assert_eq!(s.draft().unwrap()[0].count, 8);
    s.reset().unwrap();
    assert_eq!(s.draft().unwrap(), &[pool(1, 4)]);
}

// =============================================================
// update / delete
// =============================================================

#[test]
fn update_out_of_range_is_rejected() {
    let mut s = store();
    s.enter_edit().unwrap();
    assert_eq!(s.update(3, pool(4, 1)), Err(DraftError::IndexOutOfRange { index: 3, len: 3 }));
}

#[test]
fn update_detects_stale_index_after_delete() {
    let mut s = store();
    s.enter_edit().unwrap();
    s.delete(1).unwrap();
    // Row 0 is now pool 2; an event rendered against the old layout targets pool 1.
    assert_eq!(s.update(0, pool(1, 5)), Err(DraftError::StaleRow { index: 0, current: 2, incoming: 1 }));
    assert_eq!(s.draft().unwrap()[0], pool(2, 1));
}

#[test]
fn update_by_id_targets_matching_row() {
    let mut s = store();
    s.enter_edit().unwrap();
    s.delete(1).unwrap();
    s.update_by_id(3, pool(3, 6)).unwrap();
    assert_eq!(s.draft().unwrap(), &[pool(2, 1), pool(3, 6)]);
    assert_eq!(s.update_by_id(1, pool(1, 1)), Err(DraftError::PoolNotFound(1)));
}

#[test]
fn delete_missing_id_is_noop() {
    let mut s = store();
    s.enter_edit().unwrap();
    let before = s.draft().unwrap().to_vec();
    s.delete(99).unwrap();
    assert_eq!(s.draft().unwrap(), before.as_slice());
}

#[test]
fn delete_removes_only_first_match() {
    let mut s = PoolDraftStore::new(vec![pool(1, 1), pool(1, 2)]);
    s.enter_edit().unwrap();
    s.delete(1).unwrap();
    assert_eq!(s.draft().unwrap(), &[pool(1, 2)]);
}

#[test]
fn promote_draft_commits_and_exits() {
    let mut s = store();
    s.enter_edit().unwrap();
    s.update(0, pool(1, 5)).unwrap();
    let expected = s.draft().unwrap().to_vec();
    s.promote_draft().unwrap();
    assert!(!s.is_editing());
    assert_eq!(s.committed(), expected.as_slice());
}
