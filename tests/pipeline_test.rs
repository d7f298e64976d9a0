use std::fs::{create_dir, read, read_to_string, write, File};
use std::path::Path;

use path_slicer::prelude::*;
use tempfile::tempdir;

fn options_in(root: &Path, overwrite: bool) -> ProcessingOptions {
    ProcessingOptions {
        input_path: root.join("input"),
        output_path: root.join("result"),
        overwrite,
        ..ProcessingOptions::default()
    }
}

#[test]
fn test_channel_line_kept_and_short_line_dropped() {
    let dir = tempdir().expect("Failed to create temp directory");
    let options = options_in(dir.path(), true);
    create_dir(&options.input_path).unwrap();
    write(
        options.input_path.join("a.txt"),
        "/x/y/z/w/channel/42\n/too/short\n",
    )
    .unwrap();

    process_files(&options).unwrap();

    assert_eq!(
        read_to_string(options.output_path.join("a.txt")).unwrap(),
        "channel/42\n"
    );
}

#[test]
fn test_rerun_with_overwrite_is_byte_identical() {
    let dir = tempdir().expect("Failed to create temp directory");
    let options = options_in(dir.path(), true);
    create_dir(&options.input_path).unwrap();
    write(
        options.input_path.join("a.txt"),
        "a/b/c/d/channel/1\nskip me\na/b/c/d/channel/2/extra\n",
    )
    .unwrap();
    write(options.input_path.join("b.txt"), "a/b/c/d/channel/3").unwrap();

    process_files(&options).unwrap();
    let first_a = read(options.output_path.join("a.txt")).unwrap();
    let first_b = read(options.output_path.join("b.txt")).unwrap();

    process_files(&options).unwrap();
    let second_a = read(options.output_path.join("a.txt")).unwrap();
    let second_b = read(options.output_path.join("b.txt")).unwrap();

    assert_eq!(first_a, second_a);
    assert_eq!(first_b, second_b);
    assert_eq!(first_a, b"channel/1\nchannel/2\n");
    assert_eq!(first_b, b"channel/3\n");
}

#[test]
fn test_no_overwrite_leaves_existing_output_and_continues() {
    let dir = tempdir().expect("Failed to create temp directory");
    let options = options_in(dir.path(), false);
    create_dir(&options.input_path).unwrap();
    create_dir(&options.output_path).unwrap();
    write(options.input_path.join("a.txt"), "a/b/c/d/channel/1\n").unwrap();
    write(options.input_path.join("b.txt"), "a/b/c/d/channel/2\n").unwrap();
    write(options.output_path.join("a.txt"), "previous run").unwrap();

    let context = process_files(&options).unwrap();

    assert_eq!(
        read_to_string(options.output_path.join("a.txt")).unwrap(),
        "previous run"
    );
    assert_eq!(
        read_to_string(options.output_path.join("b.txt")).unwrap(),
        "channel/2\n"
    );
    assert_eq!(context.stats.files_processed, 1);
    assert_eq!(context.failures.len(), 1);
    assert!(context.failures[0].message.contains("already exists"));
}

#[test]
fn test_output_path_as_regular_file_aborts_run() {
    let dir = tempdir().expect("Failed to create temp directory");
    let options = options_in(dir.path(), true);
    create_dir(&options.input_path).unwrap();
    write(options.input_path.join("a.txt"), "a/b/c/d/channel/1\n").unwrap();
    File::create(&options.output_path).unwrap();

    let err = process_files(&options).unwrap_err();

    assert!(matches!(err, Error::WrongDestinationPath { .. }));
    assert_eq!(err.severity(), Severity::AbortRun);
    assert!(read(&options.output_path).unwrap().is_empty());
}

#[test]
fn test_unexpected_line_failure_does_not_stop_file_or_run() {
    let dir = tempdir().expect("Failed to create temp directory");
    let options = options_in(dir.path(), true);
    create_dir(&options.input_path).unwrap();
    write(
        options.input_path.join("a.txt"),
        "a/b/c/d/channel/1\nBOOM\na/b/c/d/channel/2\n",
    )
    .unwrap();
    write(options.input_path.join("b.txt"), "a/b/c/d/channel/3\n").unwrap();

    let fragile = |line: &str| -> Result<Option<String>> {
        if line.starts_with("BOOM") {
            return Err(transform_error(line, "malformed record"));
        }
        ChannelLinkExtractor::new().transform(line)
    };

    let context = process_files_with(&options, &fragile).unwrap();

    assert_eq!(
        read_to_string(options.output_path.join("a.txt")).unwrap(),
        "channel/1\nchannel/2\n"
    );
    assert_eq!(
        read_to_string(options.output_path.join("b.txt")).unwrap(),
        "channel/3\n"
    );
    assert_eq!(context.stats.files_processed, 2);
    assert_eq!(context.stats.lines_failed, 1);
    assert!(!context.has_failures());
}

#[test]
fn test_non_utf8_line_is_dropped() {
    let dir = tempdir().expect("Failed to create temp directory");
    let options = options_in(dir.path(), true);
    create_dir(&options.input_path).unwrap();
    write(
        options.input_path.join("a.txt"),
        b"a/b/c/d/channel/1\n\xc3\x28/bad\na/b/c/d/channel/2\n",
    )
    .unwrap();

    let context = process_files(&options).unwrap();

    assert_eq!(
        read_to_string(options.output_path.join("a.txt")).unwrap(),
        "channel/1\nchannel/2\n"
    );
    assert_eq!(context.stats.lines_failed, 1);
}

#[test]
fn test_custom_mask() {
    let dir = tempdir().expect("Failed to create temp directory");
    let options = ProcessingOptions {
        file_mask: "*.log".to_string(),
        ..options_in(dir.path(), true)
    };
    create_dir(&options.input_path).unwrap();
    write(options.input_path.join("a.log"), "a/b/c/d/channel/1\n").unwrap();
    write(options.input_path.join("b.txt"), "a/b/c/d/channel/2\n").unwrap();

    process_files(&options).unwrap();

    assert!(options.output_path.join("a.log").is_file());
    assert!(!options.output_path.join("b.txt").exists());
}

#[test]
fn test_output_inside_input_with_matching_mask() {
    let dir = tempdir().expect("Failed to create temp directory");
    let input = dir.path().join("input");
    let options = ProcessingOptions {
        input_path: input.clone(),
        output_path: input.clone(),
        file_mask: "*.txt".to_string(),
        overwrite: true,
    };
    create_dir(&input).unwrap();
    write(input.join("a.txt"), "a/b/c/d/channel/1\n").unwrap();

    let context = process_files(&options).unwrap();

    assert_eq!(context.stats.files_failed, 1);
    assert_eq!(context.failures[0].severity, Severity::ContinueFile);
    assert_eq!(
        read_to_string(input.join("a.txt")).unwrap(),
        "a/b/c/d/channel/1\n"
    );
}
