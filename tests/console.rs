use std::io::Write;
use std::process::{Command, Stdio};

fn run_console(args: &[&str], input: &str) -> String {
    let exe = env!("CARGO_BIN_EXE_checkers");
    let mut child = Command::new(exe)
        .args(args)
        .env_remove("CHECKERS_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to spawn console binary");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    let output = child.wait_with_output().expect("console did not exit");
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

/// Run the console and return what it logged to stderr.
fn console_log(args: &[&str], env_level: Option<&str>, input: &str) -> String {
    let exe = env!("CARGO_BIN_EXE_checkers");
    let mut command = Command::new(exe);
    command.args(args).env_remove("CHECKERS_LOG");
    if let Some(level) = env_level {
        command.env("CHECKERS_LOG", level);
    }
    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn console binary");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    let output = child.wait_with_output().expect("console did not exit");
    assert!(output.status.success());
    String::from_utf8(output.stderr).unwrap()
}

#[test]
fn console_plays_a_move_and_quits() {
    let output = run_console(&["--quiet"], "2 1\n3 2\nmoves\nquit\n");

    assert!(output.contains("Black to move"));
    assert!(output.contains("selected (2,1)"));
    assert!(output.contains("moved"));
    assert!(output.starts_with("    0 1 2 3 4 5 6 7"));
    assert!(output.contains("White moves:"));
}

#[test]
fn console_reports_errors_and_keeps_going() {
    let output = run_console(&["--quiet"], "fly\n9 9\nmove 2,1 4,3\nmove 2,1 3,0\n");

    assert!(output.contains("error: Unknown command 'fly'"));
    assert!(output.contains("error: Position (9,9) is off the board"));
    assert!(output.contains("illegal:"));
    assert!(output.contains("moved"));
}

#[test]
fn console_transposes_input() {
    let output = run_console(&["--quiet", "--transpose"], "1 2\nquit\n");
    assert!(output.contains("selected (1,2)"));
}

#[test]
fn console_rejects_unknown_flag() {
    let exe = env!("CARGO_BIN_EXE_checkers");
    let status = Command::new(exe)
        .arg("--fast")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .expect("failed to spawn console binary");
    assert_eq!(status.code(), Some(2));
}

#[test]
fn log_flag_wins_over_environment() {
    let log = console_log(&["--quiet", "--log", "debug"], Some("off"), "2 1\nquit\n");
    assert!(log.contains("latched source (2,1)"), "stderr was: {log}");

    let log = console_log(&["--quiet", "--log", "off"], Some("debug"), "2 1\nquit\n");
    assert!(!log.contains("latched source"), "stderr was: {log}");
}

#[test]
fn environment_sets_level_without_flag() {
    let log = console_log(&["--quiet"], Some("debug"), "2 1\nquit\n");
    assert!(log.contains("latched source (2,1)"), "stderr was: {log}");

    let log = console_log(&["--quiet"], None, "2 1\nquit\n");
    assert!(!log.contains("latched source"), "stderr was: {log}");
}

#[test]
fn rejected_moves_are_logged_by_default() {
    let log = console_log(&["--quiet"], None, "move 2,1 4,3\nquit\n");
    assert!(log.contains("Illegal move (2,1)->(4,3)"), "stderr was: {log}");
}
