//! Deposit/withdraw form behavior: amount editing, preview, submission

use std::sync::{Arc, Mutex};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dmarket::app::{App, Tab};
use dmarket::core::{Context, Module};
use dmarket::domain::transfer::{
    Direction, TransferGateway, TransferReceipt, TransferRequest,
};
use dmarket::modules::transfer::TransferForm;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn app_on_transfer_tab() -> App {
    let mut app = App::new();
    app.select_tab(Tab::Transfer);
    app
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        app.handle_key(key(KeyCode::Char(ch)));
    }
}

#[test]
fn test_digits_edit_amount_instead_of_switching_tabs() {
    let mut app = app_on_transfer_tab();
    type_text(&mut app, "100");

    assert_eq!(app.current_tab, Tab::Transfer);
    assert_eq!(app.transfer.amount, "100");
}

#[test]
fn test_preview_applies_one_percent_fee() {
    let mut app = app_on_transfer_tab();
    type_text(&mut app, "100");
    assert_eq!(app.transfer.preview_text(&app.ctx), "99.00000000 DMARKET");
}

#[test]
fn test_empty_amount_previews_as_zero() {
    let app = app_on_transfer_tab();
    assert_eq!(app.transfer.preview_text(&app.ctx), "0.00");
}

#[test]
fn test_preview_rounding_boundary() {
    let mut app = app_on_transfer_tab();
    type_text(&mut app, "0.00000001");
    assert_eq!(app.transfer.preview_text(&app.ctx), "0.00000001 DMARKET");

    app.handle_key(key(KeyCode::Char('x')));
    type_text(&mut app, "0.000000015");
    // The 9th fractional digit is rejected, so the amount stays at 8 digits
    assert_eq!(app.transfer.amount, "0.00000001");
}

#[test]
fn test_direction_toggle_is_involution_and_keeps_amount() {
    let mut app = app_on_transfer_tab();
    type_text(&mut app, "42.5");
    assert_eq!(app.transfer.direction, Direction::Deposit);

    app.handle_key(key(KeyCode::Char('s')));
    assert_eq!(app.transfer.direction, Direction::Withdraw);
    assert_eq!(app.transfer.amount, "42.5");
    assert_eq!(app.transfer.preview_text(&app.ctx), "42.07500000 ALGO");

    app.handle_key(key(KeyCode::Char('s')));
    assert_eq!(app.transfer.direction, Direction::Deposit);
    assert_eq!(app.transfer.amount, "42.5");
}

#[test]
fn test_amount_rejects_invalid_characters() {
    let mut app = app_on_transfer_tab();
    type_text(&mut app, "1a.2.3-e");
    assert_eq!(app.transfer.amount, "1.23");
}

#[test]
fn test_backspace_and_clear() {
    let mut app = app_on_transfer_tab();
    type_text(&mut app, "12.5");

    app.handle_key(key(KeyCode::Backspace));
    assert_eq!(app.transfer.amount, "12.");

    app.handle_key(key(KeyCode::Char('x')));
    assert_eq!(app.transfer.amount, "");
}

#[test]
fn test_submit_without_gateway_is_a_no_op() {
    let mut app = app_on_transfer_tab();
    type_text(&mut app, "100");

    app.handle_key(key(KeyCode::Enter));

    assert_eq!(app.current_tab, Tab::Transfer);
    assert_eq!(app.transfer.amount, "100");
    assert!(app.status.is_none());
}

#[derive(Default)]
struct RecordingGateway {
    submitted: Arc<Mutex<Option<TransferRequest>>>,
}

impl TransferGateway for RecordingGateway {
    fn submit(&self, request: TransferRequest) -> Result<TransferReceipt, dmarket::domain::transfer::TransferError> {
        *self.submitted.lock().unwrap() = Some(request);
        Ok(TransferReceipt {
            tx_id: "TX-TEST".to_string(),
        })
    }
}

#[test]
fn test_submit_passes_direction_and_amount_to_gateway() {
    let submitted = Arc::new(Mutex::new(None));
    let gateway = RecordingGateway {
        submitted: Arc::clone(&submitted),
    };
    let mut form = TransferForm::with_gateway(Box::new(gateway));
    let mut ctx = Context::new();

    form.toggle_direction();
    for ch in "12.5".chars() {
        form.handle_key(key(KeyCode::Char(ch)), &mut ctx);
    }
    form.handle_key(key(KeyCode::Enter), &mut ctx);

    let request = submitted.lock().unwrap().clone().expect("request submitted");
    assert_eq!(
        request,
        TransferRequest {
            direction: Direction::Withdraw,
            amount: 12.5,
        }
    );
}
