//! File-backed compression and decompression behavior: size reporting,
//! permission inheritance, and source validation.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use gzkit::{Compressor, Decompressor, GzKitError};
use std::fs;
use std::path::Path;

const METRICS_FIXTURE: &str = r#"go_gc_duration_seconds{quantile="0"} 0.000114827
go_gc_duration_seconds{quantile="0.25"} 0.000134637
go_gc_duration_seconds{quantile="0.5"} 0.000141811
go_gc_duration_seconds{quantile="0.75"} 0.000153749
go_gc_duration_seconds{quantile="1"} 0.001029093
go_gc_duration_seconds_sum 2.240228923
go_gc_duration_seconds_count 14908"#;

fn write_fixture(dir: &Path) -> std::path::PathBuf {
    let src = dir.join("metrics.txt");
    fs::write(&src, METRICS_FIXTURE).unwrap();
    src
}

#[test]
fn metrics_fixture_roundtrips_and_shrinks() {
    let compressor = Compressor::new();
    let compressed = compressor.bytes_to_bytes(METRICS_FIXTURE.as_bytes()).unwrap();
    assert!(compressed.len() < METRICS_FIXTURE.len());
    assert_eq!(&compressed[..2], &[0x1f, 0x8b]);

    let plain = Decompressor::new().bytes_to_bytes(&compressed).unwrap();
    assert_eq!(plain, METRICS_FIXTURE.as_bytes());
}

#[test]
fn bytes_to_file_reports_on_disk_size() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("metrics.gz");

    let written = Compressor::new()
        .bytes_to_file(METRICS_FIXTURE.as_bytes(), &dest)
        .unwrap();
    assert_eq!(written, fs::metadata(&dest).unwrap().len());
}

#[test]
fn file_to_file_roundtrip_with_accurate_sizes() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_fixture(dir.path());
    let gz = dir.path().join("metrics.gz");
    let restored = dir.path().join("metrics-decompressed.txt");

    let compressed_size = Compressor::new().file_to_file(&src, &gz).unwrap();
    assert_eq!(compressed_size, fs::metadata(&gz).unwrap().len());
    assert!(compressed_size < METRICS_FIXTURE.len() as u64);

    let plain_size = Decompressor::new().file_to_file(&gz, &restored).unwrap();
    assert_eq!(plain_size, fs::metadata(&restored).unwrap().len());
    assert_eq!(plain_size, METRICS_FIXTURE.len() as u64);
    assert_eq!(fs::read(&restored).unwrap(), METRICS_FIXTURE.as_bytes());
}

#[test]
fn file_to_bytes_matches_bytes_to_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_fixture(dir.path());

    let compressor = Compressor::new();
    let from_file = compressor.file_to_bytes(&src).unwrap();
    let from_bytes = compressor.bytes_to_bytes(METRICS_FIXTURE.as_bytes()).unwrap();
    assert_eq!(from_file, from_bytes);
}

#[test]
fn decompressor_bytes_to_file_writes_plaintext() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("restored.txt");
    let compressed = Compressor::new()
        .bytes_to_bytes(METRICS_FIXTURE.as_bytes())
        .unwrap();

    let written = Decompressor::new().bytes_to_file(&compressed, &dest).unwrap();
    assert_eq!(written, METRICS_FIXTURE.len() as u64);
    assert_eq!(fs::read_to_string(&dest).unwrap(), METRICS_FIXTURE);
}

#[test]
fn file_to_base64_encodes_plaintext() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_fixture(dir.path());
    let gz = dir.path().join("metrics.gz");
    Compressor::new().file_to_file(&src, &gz).unwrap();

    let encoded = Decompressor::new().file_to_base64(&gz).unwrap();
    assert_eq!(
        STANDARD.decode(encoded).unwrap(),
        METRICS_FIXTURE.as_bytes()
    );
}

#[test]
fn missing_source_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no-such-file.txt");

    let err = Compressor::new().file_to_bytes(&missing).unwrap_err();
    assert!(matches!(err, GzKitError::NotFound { .. }));

    let err = Decompressor::new().file_to_bytes(&missing).unwrap_err();
    assert!(matches!(err, GzKitError::NotFound { .. }));
}

#[test]
fn directory_source_is_rejected_without_creating_destination() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("out.gz");

    let err = Compressor::new().file_to_file(dir.path(), &dest).unwrap_err();
    assert!(matches!(err, GzKitError::IsDirectory { .. }));
    assert!(!dest.exists());

    let err = Decompressor::new().file_to_file(dir.path(), &dest).unwrap_err();
    assert!(matches!(err, GzKitError::IsDirectory { .. }));
    assert!(!dest.exists());
}

#[test]
fn corrupt_gzip_file_is_a_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let bogus = dir.path().join("bogus.gz");
    fs::write(&bogus, [0u8; 32]).unwrap();

    let err = Decompressor::new().file_to_bytes(&bogus).unwrap_err();
    assert!(matches!(err, GzKitError::Format { .. }));
}

#[cfg(unix)]
#[test]
fn destination_inherits_source_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let src = write_fixture(dir.path());
    fs::set_permissions(&src, fs::Permissions::from_mode(0o600)).unwrap();

    let gz = dir.path().join("metrics.gz");
    Compressor::new().file_to_file(&src, &gz).unwrap();
    let mode = fs::metadata(&gz).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o600);

    let restored = dir.path().join("metrics.txt.out");
    Decompressor::new().file_to_file(&gz, &restored).unwrap();
    let mode = fs::metadata(&restored).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o600);
}
