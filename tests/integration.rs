//! End-to-end scenario tests driving the interactive flows with in-memory
//! streams and a temporary store file per test.

use std::fs;
use std::io::Cursor;

use tempfile::TempDir;

use user_registry::Menu;
use user_registry::config::AppConfig;
use user_registry::session::{login, register};
use user_registry::store::CredentialStore;

fn test_config(dir: &TempDir) -> AppConfig {
    AppConfig {
        store_path: dir
            .path()
            .join("users.txt")
            .to_string_lossy()
            .into_owned(),
        max_attempts: 3,
    }
}

fn run_register(config: &AppConfig, input: &str) -> String {
    let store = CredentialStore::new(config.store_path());
    let mut output = Vec::new();
    register::run(&store, config, &mut Cursor::new(input), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

fn run_login(config: &AppConfig, input: &str) -> String {
    let store = CredentialStore::new(config.store_path());
    let mut output = Vec::new();
    login::run(&store, config, &mut Cursor::new(input), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

fn store_lines(config: &AppConfig) -> Vec<String> {
    fs::read_to_string(config.store_path())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn first_registration_gets_serial_one() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);

    let output = run_register(&config, "alice\nabc123!\n");
    assert!(output.contains("Registration successful!"));

    let lines = store_lines(&config);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Sr.No."));
    assert!(lines[1].starts_with("1       |alice"));
}

#[test]
fn duplicate_username_is_rejected_without_appending() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);
    run_register(&config, "alice\nabc123!\n");

    let output = run_register(&config, "alice\nexit\n");
    assert!(output.contains("Username already exists."));
    assert!(output.contains("Registration cancelled."));

    assert_eq!(store_lines(&config).len(), 2);
}

#[test]
fn uppercase_username_fails_on_format_alone() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);

    let output = run_register(&config, "Bob1\nexit\n");
    assert!(output.contains("Invalid format! Only lowercase letters + optional digits."));
    assert!(!output.contains("Username already exists."));
}

#[test]
fn weak_password_reprompts_then_succeeds() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);

    let output = run_register(&config, "carol\nshortpw\nabc123!\n");
    assert!(output.contains("Invalid password! Must be 6+ chars with letters, digits & symbols."));
    assert!(output.contains("Registration successful!"));
}

#[test]
fn invalid_usernames_exhaust_budget_and_cancel() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);

    let output = run_register(&config, "Bad1\n1bad\nno_good\n");
    assert!(output.contains("Registration cancelled."));
    // only the header survives
    assert_eq!(store_lines(&config).len(), 1);
}

#[test]
fn registration_is_visible_to_the_next_login() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);
    run_register(&config, "bob\nSecret1!\n");

    let output = run_login(&config, "bob\nSecret1!\n");
    assert!(output.contains("Login successful. Welcome, bob!"));
}

#[test]
fn three_wrong_passwords_abort_login() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);
    run_register(&config, "bob\nSecret1!\n");

    let output = run_login(&config, "bob\nwrong\nwrong\nwrong\n");
    assert_eq!(output.matches("Incorrect password.").count(), 3);
    assert!(output.contains("Too many incorrect password attempts. Login aborted."));
    assert!(!output.contains("Welcome"));
}

#[test]
fn unknown_usernames_exhaust_login_budget() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);
    run_register(&config, "bob\nSecret1!\n");

    let output = run_login(&config, "eve\nmallory\ntrent\n");
    assert_eq!(output.matches("Username not found.").count(), 3);
    assert!(output.contains("Too many failed attempts."));
}

#[test]
fn exit_cancels_login_without_touching_the_store() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);
    run_register(&config, "bob\nSecret1!\n");
    let before = store_lines(&config);

    let at_username = run_login(&config, "exit\n");
    assert!(at_username.contains("Login cancelled."));

    let at_password = run_login(&config, "bob\nexit\n");
    assert!(at_password.contains("Login cancelled."));

    assert_eq!(store_lines(&config), before);
}

#[test]
fn exit_at_password_prompt_cancels_registration() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);

    let output = run_register(&config, "alice\nexit\n");
    assert!(output.contains("Registration cancelled."));
    assert_eq!(store_lines(&config).len(), 1);
}

#[test]
fn smaller_attempt_budget_is_honored() {
    let dir = TempDir::new().unwrap();
    let mut config = test_config(&dir);
    run_register(&config, "bob\nSecret1!\n");
    config.max_attempts = 1;

    let output = run_login(&config, "bob\nwrong\n");
    assert_eq!(output.matches("Incorrect password.").count(), 1);
    assert!(output.contains("Too many incorrect password attempts. Login aborted."));
}

#[test]
fn menu_recovers_from_bad_choices_and_dispatches_flows() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);
    let menu = Menu::new(config.clone());

    let mut output = Vec::new();
    let input = "abc\n9\n1\ndave\npass1!x\n2\ndave\npass1!x\n3\n";
    menu.run(&mut Cursor::new(input), &mut output).unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("Please enter a valid number."));
    assert!(output.contains("Invalid choice. Try 1-3."));
    assert!(output.contains("Registration successful!"));
    assert!(output.contains("Login successful. Welcome, dave!"));
    assert!(output.contains("Exiting program. Goodbye!"));

    assert_eq!(store_lines(&config).len(), 2);
}

#[test]
fn menu_exits_cleanly_when_input_ends() {
    let dir = TempDir::new().unwrap();
    let menu = Menu::new(test_config(&dir));

    let mut output = Vec::new();
    menu.run(&mut Cursor::new(""), &mut output).unwrap();
    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("=== Login & Registration Menu ==="));
}
