mod harness;

use harness::{board, synthetic_board, ScriptedSource};
use holdwatch::application::{AcquisitionSettings, SourceOrchestrator};
use holdwatch::error::{AcquisitionError, SourceError};

fn settings() -> AcquisitionSettings {
    AcquisitionSettings {
        top_n: 100,
        min_plausible: 10,
    }
}

#[tokio::test]
async fn primary_success_skips_backup() {
    let primary = ScriptedSource::new();
    primary.push_ok(synthetic_board(100));
    let backup = ScriptedSource::new();

    let orchestrator = SourceOrchestrator::new(primary.clone(), Some(backup.clone()), settings());
    let entries = orchestrator.acquire().await.expect("acquire");

    assert_eq!(entries.len(), 100);
    assert_eq!(primary.calls(), 1);
    assert_eq!(backup.calls(), 0);
}

#[tokio::test]
async fn primary_failure_falls_back_to_backup() {
    let primary = ScriptedSource::new();
    primary.push_err(SourceError::NotFound);
    let backup = ScriptedSource::new();
    backup.push_ok(synthetic_board(100));

    let orchestrator = SourceOrchestrator::new(primary.clone(), Some(backup.clone()), settings());
    let entries = orchestrator.acquire().await.expect("acquire");

    assert_eq!(entries.len(), 100);
    assert_eq!(entries[0].rank, 1);
    assert_eq!(primary.calls(), 1);
    assert_eq!(backup.calls(), 1);
}

#[tokio::test]
async fn implausibly_small_primary_result_falls_back() {
    let primary = ScriptedSource::new();
    primary.push_ok(synthetic_board(5));
    let backup = ScriptedSource::new();
    backup.push_ok(synthetic_board(100));

    let orchestrator = SourceOrchestrator::new(primary, Some(backup.clone()), settings());
    let entries = orchestrator.acquire().await.expect("acquire");

    assert_eq!(entries.len(), 100);
    assert_eq!(backup.calls(), 1);
}

#[tokio::test]
async fn implausible_primary_without_backup_fails() {
    let primary = ScriptedSource::new();
    primary.push_ok(synthetic_board(5));

    let orchestrator: SourceOrchestrator<ScriptedSource> =
        SourceOrchestrator::new(primary, None, settings());
    let err = orchestrator.acquire().await.expect_err("should fail");

    match err {
        AcquisitionError::PrimaryFailed {
            primary: SourceError::Implausible { count: 5, min: 10 },
        } => {}
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn both_tiers_failing_reports_both_errors() {
    let primary = ScriptedSource::new();
    primary.push_err(SourceError::NotFound);
    let backup = ScriptedSource::new();
    backup.push_err(SourceError::Provider("quota exceeded".into()));

    let orchestrator = SourceOrchestrator::new(primary, Some(backup), settings());
    let err = orchestrator.acquire().await.expect_err("should fail");

    assert!(matches!(err.last(), SourceError::Provider(_)));
    let text = err.to_string();
    assert!(text.contains("not found"));
    assert!(text.contains("quota exceeded"));
}

#[tokio::test]
async fn unconfigured_backup_is_never_called() {
    let primary = ScriptedSource::new();
    primary.push_err(SourceError::NotFound);
    let backup = ScriptedSource::unconfigured();

    let orchestrator = SourceOrchestrator::new(primary, Some(backup.clone()), settings());
    assert!(!orchestrator.has_backup());

    let err = orchestrator.acquire().await.expect_err("should fail");
    assert!(matches!(err, AcquisitionError::PrimaryFailed { .. }));
    assert_eq!(backup.calls(), 0);
}

#[tokio::test]
async fn result_is_sorted_deduplicated_and_truncated() {
    let mut raw = synthetic_board(120);
    raw.reverse();
    raw.extend(board(&["0x1"]));

    let primary = ScriptedSource::new();
    primary.push_ok(raw);

    let orchestrator: SourceOrchestrator<ScriptedSource> =
        SourceOrchestrator::new(primary, None, settings());
    let entries = orchestrator.acquire().await.expect("acquire");

    assert_eq!(entries.len(), 100);
    assert!(entries.windows(2).all(|w| w[0].rank < w[1].rank));
    assert_eq!(entries.iter().filter(|e| e.identity.as_str() == "0x1").count(), 1);
}

#[tokio::test]
async fn implausible_backup_result_fails_acquisition() {
    let primary = ScriptedSource::new();
    primary.push_err(SourceError::NotFound);
    let backup = ScriptedSource::new();
    backup.push_ok(synthetic_board(5));

    let orchestrator = SourceOrchestrator::new(primary, Some(backup.clone()), settings());
    let err = orchestrator.acquire().await.expect_err("should fail");

    assert_eq!(backup.calls(), 1);
    match err {
        AcquisitionError::Exhausted {
            primary: SourceError::NotFound,
            backup: SourceError::Implausible { count: 5, min: 10 },
        } => {}
        other => panic!("unexpected error: {other}"),
    }
}
