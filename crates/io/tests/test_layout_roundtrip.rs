//! Integration test: signals written through an output layout read back intact.

use wavelift_io::{IoError, OutputLayout, Subband, read_signal, write_signal};

#[test]
fn subbands_round_trip_through_layout() {
    let dir = tempfile::tempdir().unwrap();
    let layout = OutputLayout::tagged(dir.path().join("out"), "f32");

    let input: Vec<f64> = (0..9).map(|i| f64::from(i) * 0.5 - 1.0).collect();
    for subband in Subband::ALL {
        let n = subband.len_for(input.len());
        let path = layout.subband_path("ramp", "haar_zero", subband);
        write_signal(&path, &input[..n]).unwrap();
    }

    assert!(layout.input_dir("ramp").is_dir());
    assert!(layout.root().ends_with("out-f32"));

    for subband in Subband::ALL {
        let n = subband.len_for(input.len());
        let path = layout.subband_path("ramp", "haar_zero", subband);
        assert_eq!(std::fs::metadata(&path).unwrap().len(), (n * 8) as u64);
        assert_eq!(read_signal(&path, n).unwrap(), &input[..n]);
    }
}

#[test]
fn short_subband_reported_as_size_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    let layout = OutputLayout::new(dir.path());
    let path = layout.subband_path("sig", "db4_reflect", Subband::Detail);
    write_signal(&path, &[1.0, 2.0]).unwrap();

    let err = read_signal(&path, 3).unwrap_err();
    assert!(
        matches!(err, IoError::StorageSizeMismatch { expected: 24, got: 16, .. }),
        "expected StorageSizeMismatch, got {err:?}",
    );
}

#[test]
fn missing_subband_reported_as_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let layout = OutputLayout::new(dir.path());
    let path = layout.subband_path("sig", "haar_zero", Subband::Reconstructed);

    let err = read_signal(&path, 1).unwrap_err();
    assert!(
        matches!(err, IoError::FileNotFound { .. }),
        "expected FileNotFound, got {err:?}",
    );
}
