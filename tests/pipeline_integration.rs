use std::io::Write;

use seqstats::{run, Config, Error, Stage};
use tempfile::NamedTempFile;

fn write_input(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_run_reports_statistics_and_sequences() {
    let input = write_input("5\n1\n4\n2\n3\n6.4\n");
    let report = run(&Config::new(input.path())).unwrap();

    assert_eq!(report.increasing, vec![1, 2, 3, 6]);
    assert_eq!(report.decreasing, vec![5, 4, 3]);
    assert_eq!(report.summary.min, 1.0);
    assert_eq!(report.summary.max, 6.4);
    assert_eq!(report.summary.median, 3.5);

    let text = report.to_string();
    assert!(text.starts_with("The Max Value: 6\nThe Min Value: 1\n"));
    assert!(text.contains("The Median Value: 3\n"));
    assert!(text.contains("The Largest Increasing Sequence [1, 2, 3, 6]\n"));
    assert!(text.contains("The Largest Decreasing Sequence [5, 4, 3]\n"));
}

#[test]
fn test_parallel_run_matches() {
    let contents: String = (0..2_000)
        .map(|i| format!("{}\n", ((i * 7919) % 1_009) as f64 / 3.0))
        .collect();
    let input = write_input(&contents);
    let seq = run(&Config::new(input.path())).unwrap();
    let par = run(&Config::new(input.path()).with_parallel(true)).unwrap();

    assert_eq!(seq.increasing, par.increasing);
    assert_eq!(seq.decreasing, par.decreasing);
    assert_eq!(seq.summary, par.summary);
}

#[test]
fn test_malformed_line_fails_in_load_stage() {
    let input = write_input("1\n2\nthree\n");
    let err = run(&Config::new(input.path())).unwrap_err();

    assert_eq!(err.stage(), Stage::Load);
    assert!(matches!(err, Error::Parse { line: 3, .. }));
    assert!(err.to_string().starts_with("load: line 3"));
}

#[test]
fn test_missing_file_is_empty_and_fails_later() {
    let dir = tempfile::tempdir().unwrap();
    let err = run(&Config::new(dir.path().join("missing.txt"))).unwrap_err();
    assert_eq!(err.stage(), Stage::Subsequence);
}
