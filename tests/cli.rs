use common::run_cli;

mod common;

#[test]
fn test_scripted_victory() {
    let output = run_cli(&["--moves", "0,3,1,4,2"], "").expect("Failed to run CLI");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("X | X | X\n"), "{stdout}");
    assert!(stdout.contains("Game over! Player 1 (X) wins!"), "{stdout}");
}

#[test]
fn test_scripted_json_snapshot() {
    let output = run_cli(
        &["--moves", "0,1,2,3,5,4,6,8,7", "--json", "--player-two", "Bob"],
        "",
    )
    .expect("Failed to run CLI");
    assert!(output.status.success());

    let snapshot: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(snapshot["status"]["state"], "finished");
    assert_eq!(snapshot["status"]["result"]["type"], "draw");
    assert_eq!(snapshot["players"][1]["name"], "Bob");
    assert_eq!(snapshot["board"][0], "x");
    assert_eq!(snapshot["turns"], 9);
}

#[test]
fn test_scripted_invalid_index_is_skipped() {
    let output = run_cli(&["--moves", "10,4", "--json"], "").expect("Failed to run CLI");
    assert!(output.status.success());

    let snapshot: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(snapshot["turns"], 1);
    assert_eq!(snapshot["board"][4], "x");
    assert_eq!(snapshot["active"], "second");
}

#[test]
fn test_interactive_session() {
    let output = run_cli(&["--player-one", "Ada"], "5\n5\nfoo\n1\nn\nq\n").expect("Failed to run CLI");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Cell 5 is already taken"), "{stdout}");
    assert!(stdout.contains("Unknown command `foo`"), "{stdout}");
    assert!(stdout.contains("Player 2 (O)'s turn"), "{stdout}");
    // New game brings the first player back
    assert!(stdout.trim_end().ends_with("Ada (X)'s turn | Turn: 1\n>"), "{stdout}");
}

#[test]
fn test_scripted_auto_reset_reports_result() {
    let output = run_cli(&["--auto-reset", "--moves", "0,3,1,4,2"], "").expect("Failed to run CLI");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Player 1 (X) wins! New round.\n"), "{stdout}");
    // Board is already cleared for the next round
    assert!(stdout.contains("1 | 2 | 3\n"), "{stdout}");
    assert!(stdout.trim_end().ends_with("Player 1 (X)'s turn | Turn: 1"), "{stdout}");
}

#[test]
fn test_scripted_auto_reset_json_keeps_last_result() {
    let output = run_cli(&["--auto-reset", "--moves", "0,3,1,4,2", "--json"], "")
        .expect("Failed to run CLI");
    assert!(output.status.success());

    let snapshot: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(snapshot["last_result"]["type"], "victory");
    assert_eq!(snapshot["last_result"]["winner"], "first");
    assert_eq!(snapshot["status"]["state"], "playing");
    assert_eq!(snapshot["turns"], 0);
}

#[test]
fn test_interactive_cell_out_of_range() {
    let output = run_cli(&[], "10\nq\n").expect("Failed to run CLI");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Cells are numbered from 1 to 9"), "{stdout}");
    assert!(!stdout.contains("Cell index"), "{stdout}");
}
