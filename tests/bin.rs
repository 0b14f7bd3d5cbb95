use std::path::Path;
use std::process::{Command, Output};

fn rectgrid(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rectgrid"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("run rectgrid")
}

#[test]
fn writes_output_html_in_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("rects.txt"), "0,0,1,1\n50,50,51,51\n").unwrap();

    let output = rectgrid(dir.path(), &["rects.txt"]);
    assert!(output.status.success(), "rectgrid should succeed: {:?}", output);

    let html = std::fs::read_to_string(dir.path().join("output.html")).unwrap();
    assert_eq!(html.matches("<tr>").count(), 13);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("HTML saved to: output.html"), "got:\n{stderr}");
}

#[test]
fn missing_input_prints_to_stdout_and_exits_cleanly() {
    let dir = tempfile::tempdir().unwrap();

    let output = rectgrid(dir.path(), &["missing.txt"]);
    assert!(output.status.success(), "unreadable input is not a failure: {:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Error reading file: "), "got:\n{stdout}");
    assert!(!dir.path().join("output.html").exists());
}

#[test]
fn malformed_line_exits_nonzero_with_message() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("rects.txt"), "0,0,1,1\na,b,c,d\n").unwrap();

    let output = rectgrid(dir.path(), &["rects.txt"]);
    assert!(!output.status.success(), "malformed input should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid rectangle format (a,b,c,d)"),
        "got:\n{stderr}"
    );
    assert!(!dir.path().join("output.html").exists());
}

#[test]
fn no_arguments_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();

    let output = rectgrid(dir.path(), &[]);
    assert!(!output.status.success(), "missing INPUT should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("INPUT"), "usage should name INPUT; got:\n{stderr}");
    assert!(!dir.path().join("output.html").exists());
}
