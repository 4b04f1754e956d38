use super::sink::open_source;
use crate::engine::BackendError;

#[test]
fn open_source_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.mp3");
    let err = open_source(&missing).map(|_| ()).unwrap_err();
    assert!(matches!(err, BackendError::Open { ref path, .. } if path == &missing));
}

#[test]
fn open_source_reports_undecodable_data() {
    let dir = tempfile::tempdir().unwrap();
    let junk = dir.path().join("junk.mp3");
    std::fs::write(&junk, b"definitely not audio").unwrap();
    let err = open_source(&junk).map(|_| ()).unwrap_err();
    assert!(matches!(err, BackendError::Decode { ref path, .. } if path == &junk));
    assert!(err.to_string().starts_with("failed to decode"));
}
