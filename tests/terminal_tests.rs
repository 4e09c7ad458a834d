// Host-side tests for the canned-response shell.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod terminal {
    include!("../src/core/terminal.rs");
}

use terminal::*;

fn last_two(t: &Terminal) -> (&str, &str) {
    let h = t.history();
    (h[h.len() - 2].as_str(), h[h.len() - 1].as_str())
}

#[test]
fn starts_with_welcome_banner() {
    let t = Terminal::new();
    assert_eq!(t.history(), WELCOME_LINES);
    assert!(Terminal::empty().history().is_empty());
}

#[test]
fn help_is_case_insensitive_and_echoes_raw_input() {
    let mut t = Terminal::empty();
    assert_eq!(t.submit("HELP"), SubmitOutcome::Appended);
    assert_eq!(t.history().len(), 2);
    assert_eq!(last_two(&t), ("sourish@portfolio:~$ HELP", HELP_TEXT));
}

#[test]
fn clear_empties_history() {
    let mut t = Terminal::new();
    t.submit("ls");
    assert_eq!(t.submit("  clear "), SubmitOutcome::Cleared);
    assert!(t.history().is_empty());

    // the log keeps working afterwards
    t.submit("whoami");
    assert_eq!(t.history().len(), 2);
}

#[test]
fn unknown_command_reports_normalised_name() {
    let mut t = Terminal::empty();
    t.submit("foo");
    assert_eq!(last_two(&t), ("sourish@portfolio:~$ foo", "Command not found: foo"));

    t.submit("  FoO ");
    assert_eq!(
        last_two(&t),
        ("sourish@portfolio:~$   FoO ", "Command not found: foo")
    );
}

#[test]
fn empty_input_is_not_found() {
    let mut t = Terminal::empty();
    t.submit("   ");
    assert_eq!(t.history()[1], "Command not found: ");
}

#[test]
fn every_command_has_a_reply_except_clear() {
    for word in ["help", "ls", "whoami", "skills", "uptime", "contact"] {
        let cmd = Command::parse(word).unwrap();
        assert!(cmd.response().is_some_and(|r| !r.is_empty()), "{}", word);
    }
    assert_eq!(Command::parse("clear").and_then(Command::response), None);
    assert_eq!(Command::parse("rm"), None);
}

#[test]
fn history_grows_two_lines_per_command() {
    let mut t = Terminal::new();
    for cmd in ["ls", "skills", "nope"] {
        t.submit(cmd);
    }
    assert_eq!(t.history().len(), WELCOME_LINES.len() + 6);
    assert_eq!(t.history()[2], echo_line("ls"));
    assert_eq!(t.history()[3], "projects/  research/  cv.pdf  id_rsa.pub");
}
