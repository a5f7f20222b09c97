use std::process::Command;

const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn perft() -> Command {
    Command::new(env!("CARGO_BIN_EXE_perft"))
}

#[test]
fn perft_cli_prints_divide_and_totals() {
    let output = perft()
        .args(["3", START_FEN])
        .output()
        .expect("failed to spawn perft binary");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 20 + 4, "unexpected output:\n{stdout}");
    assert!(lines.contains(&"e2e4: 600"));
    assert_eq!(lines[20], "");
    assert_eq!(lines[21], "Nodes: 8902");
    assert!(lines[22].starts_with("Time: ") && lines[22].ends_with(" ms"));
    assert!(lines[23].starts_with("NPS: "));
}

#[test]
fn perft_cli_accepts_unquoted_fen_fields() {
    let mut args = vec!["1"];
    args.extend(START_FEN.split_whitespace());
    let output = perft().args(&args).output().expect("failed to spawn perft binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Nodes: 20"));
}

#[test]
fn perft_cli_rejects_missing_arguments() {
    let output = perft().output().expect("failed to spawn perft binary");
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("usage"));
}

#[test]
fn perft_cli_rejects_bad_fen() {
    let output = perft()
        .args(["2", "rnbqkbnr/pppppppp/8/8 w KQkq -"])
        .output()
        .expect("failed to spawn perft binary");
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("invalid FEN"));
}
