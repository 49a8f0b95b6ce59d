use std::fs;
use stencil::runner::{init_git_repository, run_command, CommandError};
use tempfile::TempDir;

#[test]
fn test_run_command_success() {
    let temp_dir = TempDir::new().unwrap();
    run_command("true", &[], temp_dir.path()).unwrap();
}

#[test]
fn test_run_command_nonzero_exit_is_failed() {
    let temp_dir = TempDir::new().unwrap();
    let result = run_command("false", &[], temp_dir.path());

    assert!(matches!(result, Err(CommandError::Failed { .. })));
}

#[test]
fn test_run_command_missing_program_is_spawn_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = run_command("stencil-no-such-program", &[], temp_dir.path());

    assert!(matches!(result, Err(CommandError::Spawn { .. })));
}

#[test]
fn test_command_errors_name_the_command() {
    let temp_dir = TempDir::new().unwrap();

    let err = run_command("false", &["--flag"], temp_dir.path()).unwrap_err();
    assert!(err.to_string().contains("`false --flag`"), "message: {}", err);

    let err = run_command("stencil-no-such-program", &[], temp_dir.path()).unwrap_err();
    assert!(err.to_string().contains("`stencil-no-such-program`"), "message: {}", err);
}

#[test]
fn test_init_git_skips_existing_repository() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join(".git")).unwrap();
    fs::write(temp_dir.path().join(".git/config"), "[core]\n").unwrap();

    init_git_repository(temp_dir.path()).unwrap();

    // The existing metadata is untouched, so git was never run against it.
    let config = fs::read_to_string(temp_dir.path().join(".git/config")).unwrap();
    assert_eq!(config, "[core]\n");
    assert_eq!(fs::read_dir(temp_dir.path().join(".git")).unwrap().count(), 1);
}
