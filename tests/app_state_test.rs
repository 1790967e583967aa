//! Tab selection and global key handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dmarket::app::{App, Tab};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_default_tab_is_token_info() {
    let app = App::new();
    assert_eq!(app.current_tab, Tab::TokenInfo);
}

#[test]
fn test_digit_shortcuts_select_tabs() {
    let mut app = App::new();

    app.handle_key(key(KeyCode::Char('3')));
    assert_eq!(app.current_tab, Tab::Staking);

    app.handle_key(key(KeyCode::Char('2')));
    assert_eq!(app.current_tab, Tab::Transfer);
}

#[test]
fn test_selecting_active_tab_is_a_no_op() {
    let mut app = App::new();
    assert_eq!(app.current_tab, Tab::TokenInfo);

    app.handle_key(key(KeyCode::Char('1')));
    assert_eq!(app.current_tab, Tab::TokenInfo);
    assert!(app.status.is_none());
    assert!(!app.should_quit);
}

#[test]
fn test_tab_key_cycles_through_all_tabs() {
    let mut app = App::new();

    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.current_tab, Tab::Transfer);
    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.current_tab, Tab::Staking);
    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.current_tab, Tab::TokenInfo);

    app.handle_key(key(KeyCode::BackTab));
    assert_eq!(app.current_tab, Tab::Staking);
}

#[test]
fn test_help_overlay_swallows_keys() {
    let mut app = App::new();

    app.handle_key(key(KeyCode::Char('?')));
    assert!(app.help_open);

    // Keys other than ? / Esc do nothing while the overlay is open
    app.handle_key(key(KeyCode::Char('2')));
    assert!(app.help_open);
    assert_eq!(app.current_tab, Tab::TokenInfo);

    app.handle_key(key(KeyCode::Esc));
    assert!(!app.help_open);
}

#[test]
fn test_quit_key() {
    let mut app = App::new();
    app.handle_key(key(KeyCode::Char('q')));
    assert!(app.should_quit);
}

#[test]
fn test_tab_parse_names() {
    assert_eq!(Tab::parse("token"), Some(Tab::TokenInfo));
    assert_eq!(Tab::parse("Transfer"), Some(Tab::Transfer));
    assert_eq!(Tab::parse(" STAKING "), Some(Tab::Staking));
    assert_eq!(Tab::parse("unknown"), None);
}
