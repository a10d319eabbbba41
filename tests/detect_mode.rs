use std::fs;
use std::process::Command;

#[test]
fn reports_detected_project() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("App.xcodeproj")).unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_xcode-optimise"))
        .arg(dir.path())
        .output()
        .expect("run binary");
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "Xcode project detected");
}

#[test]
fn nested_workspace_is_detected() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("apps").join("App.xcworkspace")).unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_xcode-optimise"))
        .arg(dir.path())
        .output()
        .expect("run binary");
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "Xcode project detected");
}

#[test]
fn missing_directory_is_a_negative_answer_not_an_error() {
    let dir = tempfile::tempdir().unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_xcode-optimise"))
        .arg(dir.path().join("does-not-exist"))
        .output()
        .expect("run binary");
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "Not an Xcode project");
}

#[test]
fn defaults_to_current_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("App.xcodeproj")).unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_xcode-optimise"))
        .current_dir(dir.path())
        .output()
        .expect("run binary");
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "Xcode project detected");
}

#[test]
fn json_detection_output() {
    let dir = tempfile::tempdir().unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_xcode-optimise"))
        .arg(dir.path())
        .arg("--json")
        .output()
        .expect("run binary");
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["is_xcode_project"], serde_json::Value::Bool(false));
}

#[cfg(unix)]
#[test]
fn follow_symlinks_flag_reaches_linked_projects() {
    let outside = tempfile::tempdir().unwrap();
    let shared = outside.path().join("shared");
    fs::create_dir_all(shared.join("Shared.xcodeproj")).unwrap();

    let dir = tempfile::tempdir().unwrap();
    std::os::unix::fs::symlink(&shared, dir.path().join("linked")).unwrap();

    let plain = Command::new(env!("CARGO_BIN_EXE_xcode-optimise"))
        .arg(dir.path())
        .output()
        .expect("run binary");
    assert!(plain.status.success());
    assert_eq!(String::from_utf8_lossy(&plain.stdout).trim(), "Not an Xcode project");

    let followed = Command::new(env!("CARGO_BIN_EXE_xcode-optimise"))
        .arg(dir.path())
        .arg("--follow-symlinks")
        .output()
        .expect("run binary");
    assert!(followed.status.success());
    assert_eq!(String::from_utf8_lossy(&followed.stdout).trim(), "Xcode project detected");
}
