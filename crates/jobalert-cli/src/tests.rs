use super::*;

#[test]
fn no_flags_is_a_real_run() {
    let cli = Cli::try_parse_from(["jobalert"]).expect("expected valid cli args");
    assert!(!cli.dry_run);
    assert!(!cli.test_email);
}

#[test]
fn parses_dry_run_flag() {
    let cli = Cli::try_parse_from(["jobalert", "--dry-run"]).expect("expected valid cli args");
    assert!(cli.dry_run);
}

#[test]
fn parses_test_email_flag() {
    let cli = Cli::try_parse_from(["jobalert", "--test-email"]).expect("expected valid cli args");
    assert!(cli.test_email);
    assert!(!cli.dry_run);
}

#[test]
fn test_email_conflicts_with_dry_run() {
    let err = Cli::try_parse_from(["jobalert", "--test-email", "--dry-run"])
        .expect_err("expected conflicting flags to be rejected");
    assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
}

#[test]
fn rejects_positional_arguments() {
    assert!(Cli::try_parse_from(["jobalert", "collect"]).is_err());
}
