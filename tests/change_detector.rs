use std::error::Error;
use std::fs;

use tempfile::tempdir;

use buildwatch::detect::ChangeDetector;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn first_sighting_is_always_a_change() -> TestResult {
    let dir = tempdir()?;
    let file = dir.path().join("a.go");
    fs::write(&file, "package main")?;

    let mut detector = ChangeDetector::new();
    assert!(detector.did_change(&file)?);
    assert!(detector.is_tracked(&file));

    Ok(())
}

#[test]
fn duplicate_notifications_are_debounced() -> TestResult {
    let dir = tempdir()?;
    let file = dir.path().join("a.go");
    fs::write(&file, "package main")?;

    let mut detector = ChangeDetector::new();
    assert!(detector.did_change(&file)?);
    // Same content probed again, as happens when an atomic save fires
    // several notifications for one logical write.
    assert!(!detector.did_change(&file)?);
    assert!(!detector.did_change(&file)?);

    Ok(())
}

#[test]
fn modified_content_is_a_change_exactly_once() -> TestResult {
    let dir = tempdir()?;
    let file = dir.path().join("a.go");
    fs::write(&file, "x")?;

    let mut detector = ChangeDetector::new();
    assert!(detector.did_change(&file)?);

    fs::write(&file, "y")?;
    assert!(detector.did_change(&file)?);
    assert!(!detector.did_change(&file)?);

    Ok(())
}

#[test]
fn deleting_a_tracked_file_is_a_change() -> TestResult {
    let dir = tempdir()?;
    let file = dir.path().join("a.go");
    fs::write(&file, "x")?;

    let mut detector = ChangeDetector::new();
    assert!(detector.did_change(&file)?);

    fs::remove_file(&file)?;
    assert!(detector.did_change(&file)?);
    assert!(!detector.is_tracked(&file));

    // Still gone: nothing left to report.
    assert!(!detector.did_change(&file)?);

    Ok(())
}

#[test]
fn deleting_an_untracked_path_is_not_a_change() -> TestResult {
    let dir = tempdir()?;
    let missing = dir.path().join("never-existed.go");

    let mut detector = ChangeDetector::new();
    assert!(!detector.did_change(&missing)?);
    assert_eq!(detector.tracked_count(), 0);

    Ok(())
}

#[test]
fn recreated_file_with_same_content_is_a_change() -> TestResult {
    let dir = tempdir()?;
    let file = dir.path().join("a.go");
    fs::write(&file, "x")?;

    let mut detector = ChangeDetector::new();
    assert!(detector.did_change(&file)?);

    // Delete (entry removed) then recreate with identical bytes: the
    // recreation is a first sighting again.
    fs::remove_file(&file)?;
    assert!(detector.did_change(&file)?);
    fs::write(&file, "x")?;
    assert!(detector.did_change(&file)?);
    assert!(!detector.did_change(&file)?);

    Ok(())
}

#[test]
fn read_failure_propagates_and_leaves_state_intact() -> TestResult {
    let dir = tempdir()?;
    let file = dir.path().join("a.go");
    fs::write(&file, "x")?;

    let mut detector = ChangeDetector::new();
    assert!(detector.did_change(&file)?);

    // Replace the file with a directory of the same name: the probe opens
    // it but cannot read it, which is an I/O failure, not a deletion.
    fs::remove_file(&file)?;
    fs::create_dir(&file)?;
    assert!(detector.did_change(&file).is_err());
    // The stored digest survives the failed probe.
    assert!(detector.is_tracked(&file));

    fs::remove_dir(&file)?;
    fs::write(&file, "y")?;
    assert!(detector.did_change(&file)?);

    Ok(())
}
