use patience_cli::run;

fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(args.iter().copied(), &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn help_prints_to_stdout_and_exits_zero() {
    let (code, out, _) = run_cli(&["patience", "--help"]);
    assert_eq!(code, 0);
    assert!(out.contains("play"));
    assert!(out.contains("deal"));
}

#[test]
fn version_exits_zero() {
    let (code, out, _) = run_cli(&["patience", "--version"]);
    assert_eq!(code, 0);
    assert!(out.contains("patience"));
}

#[test]
fn unknown_command_lists_available_ones() {
    let (code, _, err) = run_cli(&["patience", "shuffle"]);
    assert_eq!(code, 2);
    assert!(err.contains("Commands:"));
    assert!(err.contains("  deal"));
    assert!(err.contains("patience --help"));
}

#[test]
fn no_command_is_an_error() {
    let (code, _, err) = run_cli(&["patience"]);
    assert_eq!(code, 2);
    assert!(err.contains("Usage: patience <command> [options]"));
}

#[test]
fn deal_is_deterministic_for_a_seed() {
    let (code1, out1, _) = run_cli(&["patience", "deal", "--seed", "42"]);
    let (code2, out2, _) = run_cli(&["patience", "deal", "--seed", "42"]);
    assert_eq!(code1, 0);
    assert_eq!(code2, 0);
    assert_eq!(out1, out2);
    assert!(out1.contains("Stock: [24]"));
}

#[test]
fn deal_seeds_differ() {
    let (_, out1, _) = run_cli(&["patience", "deal", "--seed", "1"]);
    let (_, out2, _) = run_cli(&["patience", "deal", "--seed", "2"]);
    assert_ne!(out1, out2);
}

#[test]
fn deal_vegas_flag_changes_the_status_line() {
    let (code, out, _) = run_cli(&["patience", "deal", "--seed", "42", "--vegas"]);
    assert_eq!(code, 0);
    assert!(out.contains("Vegas"));
    assert!(out.contains("$-52"));
}

#[test]
fn deal_rejects_bad_seed() {
    let (code, _, err) = run_cli(&["patience", "deal", "--seed", "not-a-number"]);
    assert_eq!(code, 2);
    assert!(!err.is_empty());
}
