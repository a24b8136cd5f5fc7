//! End-to-end runs of the arraybag binary

use std::fs;
use std::process::Command;

use tempfile::TempDir;

const SCRIPT: &str = "\
# two bags and a split
seed 42
bag basket 6
bag left 3
bag right 3
add basket 1 1 2 3.5
mode basket
duplicate basket
split basket left right
show left
";

#[test]
fn test_binary_writes_annotated_script() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("session.bag");
    let output = dir.path().join("session.out");
    fs::write(&input, SCRIPT).unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_arraybag"))
        .arg(&input)
        .arg(&output)
        .status()
        .unwrap();
    assert!(status.success());

    let written = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), SCRIPT.lines().count());
    assert_eq!(lines[0], "# two bags and a split");
    assert_eq!(lines[6], "mode basket  # => 1");
    assert_eq!(lines[7], "duplicate basket  # => false");
    assert_eq!(lines[8], "split basket left right  # => true");
    assert_eq!(lines[9], "show left  # => Bag{Size:2 [1] [1] }");
}

#[test]
fn test_binary_reports_script_errors() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("broken.bag");
    let output = dir.path().join("broken.out");
    fs::write(&input, "bag a\nadd b 1\n").unwrap();

    let result = Command::new(env!("CARGO_BIN_EXE_arraybag"))
        .arg(&input)
        .arg(&output)
        .output()
        .unwrap();
    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("line 2: unknown bag 'b'"), "{}", stderr);
    assert!(!output.exists());
}
