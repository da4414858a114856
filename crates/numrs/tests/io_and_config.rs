//! Tests for file I/O, text rendering and print option loading.
//!
//! File based tests write into a `tempfile::tempdir()` so nothing leaks
//! into the working directory.

use numrs::{NdArray, PrintOptions};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ---------------------------------------------------------------------------
// Binary dumps
// ---------------------------------------------------------------------------

#[test]
fn dump_then_load_round_trips_values() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let array = NdArray::from([[1.5f64, -2.0], [3.25, 4.0]]);
    let written = array.dump(dir.path().join("matrix")).unwrap();
    assert_eq!(written.extension().unwrap(), "bin");
    assert_eq!(std::fs::metadata(&written).unwrap().len(), 32);

    let loaded: NdArray<f64> = numrs::load(&written).unwrap();
    assert_eq!(loaded.to_vec(), array.to_vec());
    assert!(loaded.is_flat());
}

#[test]
fn dump_keeps_an_explicit_extension() {
    let dir = tempfile::tempdir().unwrap();
    let written = NdArray::from_vec(vec![1u8, 2]).dump(dir.path().join("raw.dat")).unwrap();
    assert_eq!(written, dir.path().join("raw.dat"));
}

#[test]
fn load_rejects_truncated_binary() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.bin");
    std::fs::write(&path, [0u8; 6]).unwrap();
    assert!(numrs::load::<i32, _>(&path).unwrap_err().is_runtime());
}

#[test]
fn missing_input_file_is_invalid_argument() {
    let dir = tempfile::tempdir().unwrap();
    let err = numrs::load::<f32, _>(dir.path().join("absent.bin")).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn dump_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let err = NdArray::from_vec(vec![1.0f32])
        .dump(dir.path().join("no_such_dir").join("values"))
        .unwrap_err();
    assert!(err.is_runtime());
}

// ---------------------------------------------------------------------------
// Text files
// ---------------------------------------------------------------------------

#[test]
fn tofile_text_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let array = NdArray::from_vec(vec![10i64, -20, 30]);
    let written = array.tofile(dir.path().join("values"), "\t").unwrap();
    assert_eq!(written.extension().unwrap(), "txt");
    assert_eq!(std::fs::read_to_string(&written).unwrap(), "10\t-20\t30");

    let loaded: NdArray<i64> = numrs::fromfile(&written, "\t").unwrap();
    assert_eq!(loaded, array);
}

#[test]
fn fromfile_skips_unparsable_tokens() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mixed.txt");
    std::fs::write(&path, "1 2.0 abc\n4").unwrap();
    let loaded: NdArray<i32> = numrs::fromfile(&path, " ").unwrap();
    assert_eq!(loaded.to_vec(), vec![1, 2, 4]);
}

#[test]
fn unsupported_separator_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let array = NdArray::from_vec(vec![1.0f64]);
    assert!(array
        .tofile(dir.path().join("values"), ",")
        .unwrap_err()
        .is_invalid_argument());

    let path = array.dump(dir.path().join("values")).unwrap();
    assert!(numrs::fromfile::<f64, _>(&path, ";").is_err());
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[test]
fn display_uses_default_precision() {
    let array = NdArray::from([[1.0f64, 2.5], [-3.0, 0.125]]);
    assert_eq!(array.to_string(), "[[1.0000, 2.5000],\n [-3.0000, 0.1250]]");
    assert_eq!(NdArray::from_vec(vec![1, 2, 3]).to_string(), "[[1, 2, 3]]");
    assert_eq!(NdArray::<i32>::default().to_string(), "[]");
}

#[test]
fn format_with_elides_columns() {
    let array: NdArray<u32> = (0..6).collect();
    let options = PrintOptions::new(0).with_max_cols(3);
    assert_eq!(array.format_with(&options), "[[0, 1, ..., 5]]");
}

// ---------------------------------------------------------------------------
// Print options
// ---------------------------------------------------------------------------

#[test]
fn print_options_serde_round_trip() {
    let options = PrintOptions::new(2).with_max_rows(10);
    let json = serde_json::to_string(&options).unwrap();
    let back: PrintOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(back, options);
}

#[test]
fn load_print_options_fills_missing_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("print.json");
    std::fs::write(&path, r#"{ "max_cols": 6 }"#).unwrap();

    let options = numrs::load_print_options(&path).unwrap();
    assert_eq!(options, PrintOptions::default().with_max_cols(6));
}

#[test]
fn load_print_options_reports_bad_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("print.json");
    std::fs::write(&path, "{ precision: }").unwrap();

    let err = numrs::load_print_options(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse print options"));
}
