use super::*;

#[test]
fn defaults_to_idle() {
    let c = SubmissionController::default();
    assert_eq!(c.status(), &SubmissionStatus::Idle);
    assert!(!c.is_in_flight());
    assert!(c.errors().is_empty());
    assert_eq!(c.surfaced_message(), None);
}

#[test]
fn begin_is_single_flight() {
    let mut c = SubmissionController::default();
    c.begin().unwrap();
    assert!(c.is_in_flight());
    assert_eq!(c.begin(), Err(SubmitError::AlreadyInFlight));
    assert!(c.is_in_flight());
}

#[test]
fn finish_success() {
    let mut c = SubmissionController::default();
    c.begin().unwrap();
    c.finish(Ok(())).unwrap();
    assert_eq!(c.status(), &SubmissionStatus::Success);
}

#[test]
fn finish_failure_keeps_all_errors_and_surfaces_first() {
    let mut c = SubmissionController::default();
    c.begin().unwrap();
    c.finish(Err(vec![ApiFieldError::reason("quota exceeded"), ApiFieldError::reason("bad region")]))
        .unwrap();
    assert_eq!(c.errors().len(), 2);
    assert_eq!(c.surfaced_message(), Some("quota exceeded"));
}

#[test]
fn finish_with_no_reasons_uses_generic_reason() {
    let mut c = SubmissionController::default();
    c.begin().unwrap();
    c.finish(Err(Vec::new())).unwrap();
    assert_eq!(c.surfaced_message(), Some(GENERIC_FAILURE_REASON));
}

#[test]
fn finish_without_begin_is_rejected() {
    let mut c = SubmissionController::default();
    assert_eq!(c.finish(Ok(())), Err(SubmitError::NotInFlight));
    assert_eq!(c.status(), &SubmissionStatus::Idle);
}

#[test]
fn failed_submission_can_be_retried() {
    let mut c = SubmissionController::default();
    c.begin().unwrap();
    c.finish(Err(vec![ApiFieldError::reason("timeout")])).unwrap();
    c.begin().unwrap();
    c.finish(Ok(())).unwrap();
    assert_eq!(c.status(), &SubmissionStatus::Success);
}

#[test]
fn dismiss_returns_to_idle_but_not_mid_flight() {
    let mut c = SubmissionController::default();
    c.begin().unwrap();
    c.dismiss();
    assert!(c.is_in_flight());
    c.finish(Ok(())).unwrap();
    c.dismiss();
    assert_eq!(c.status(), &SubmissionStatus::Idle);
}

#[test]
fn reject_fails_locally() {
    let mut c = SubmissionController::default();
    c.reject(vec![ApiFieldError::reason("empty pool")]).unwrap();
    assert_eq!(c.surfaced_message(), Some("empty pool"));

    c.begin().unwrap();
    assert_eq!(c.reject(Vec::new()), Err(SubmitError::AlreadyInFlight));
}
