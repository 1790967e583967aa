//! Deposit/Withdraw form - direction toggle, amount entry, fee preview

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Direction as LayoutDirection, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::core::{Action, Context, Module, NotifyLevel};
use crate::domain::fee::FIXED_FEE_TEXT;
use crate::domain::transfer::{Direction, TransferGateway, TransferRequest};

/// Maximum fractional digits the amount field accepts, matching the token's
/// decimal precision.
const MAX_FRACTION_DIGITS: usize = 8;

/// The deposit/withdraw form. Owns the direction flag and the raw amount
/// text; the preview is derived on every render.
pub struct TransferForm {
    pub direction: Direction,
    pub amount: String,
    gateway: Option<Box<dyn TransferGateway>>,
}

impl Default for TransferForm {
    fn default() -> Self {
        Self::new()
    }
}

impl TransferForm {
    pub fn new() -> Self {
        Self {
            direction: Direction::default(),
            amount: String::new(),
            gateway: None,
        }
    }

    /// Wire a submission collaborator. Unused by the mockup binary; kept for
    /// tests and for the build that gains a real submitter.
    pub fn with_gateway(gateway: Box<dyn TransferGateway>) -> Self {
        Self {
            direction: Direction::default(),
            amount: String::new(),
            gateway: Some(gateway),
        }
    }

    /// Flips the direction; the amount is kept.
    pub fn toggle_direction(&mut self) {
        self.direction = self.direction.toggled();
    }

    /// The "You will receive" text: empty input shows a bare `0.00`,
    /// anything else is the net amount labeled with the output symbol.
    pub fn preview_text(&self, ctx: &Context) -> String {
        if self.amount.is_empty() {
            "0.00".to_string()
        } else {
            format!(
                "{} {}",
                ctx.fees.net_text(&self.amount),
                self.direction.output_symbol()
            )
        }
    }

    fn submit(&mut self, _ctx: &mut Context) -> Action {
        // Without a submitter the interaction ends with no effect, matching
        // the mockup's empty submit handler.
        let Some(gateway) = self.gateway.as_ref() else {
            return Action::None;
        };
        let amount: f64 = self.amount.parse().unwrap_or(0.0);
        let request = TransferRequest {
            direction: self.direction,
            amount,
        };
        match gateway.submit(request) {
            Ok(receipt) => Action::Notify(
                format!("{} submitted: {}", self.direction.action_label(), receipt.tx_id),
                NotifyLevel::Info,
            ),
            Err(err) => Action::Notify(err.to_string(), NotifyLevel::Error),
        }
    }
}

impl Module for TransferForm {
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut Context) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::None;
        }
        match key.code {
            KeyCode::Char('s') => {
                self.toggle_direction();
                Action::None
            }
            KeyCode::Char('x') => {
                self.amount.clear();
                Action::None
            }
            KeyCode::Backspace => {
                self.amount.pop();
                Action::None
            }
            KeyCode::Enter => self.submit(ctx),
            KeyCode::Char(ch) => {
                if accepts_amount_char(&self.amount, ch) {
                    self.amount.push(ch);
                }
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Length(3), // title + switch hint
                Constraint::Length(3), // amount input
                Constraint::Length(5), // transaction details
                Constraint::Min(3),    // submit hint
            ])
            .split(area);

        self.render_title(frame, chunks[0]);
        self.render_amount_input(frame, chunks[1]);
        self.render_details(frame, chunks[2], ctx);
        self.render_submit(frame, chunks[3]);
    }
}

impl TransferForm {
    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                self.direction.title(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("[s]", Style::default().fg(Color::Yellow)),
            Span::raw(" Switch"),
        ]);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        frame.render_widget(Paragraph::new(line).block(block), area);
    }

    fn render_amount_input(&self, frame: &mut Frame, area: Rect) {
        let amount_text = if self.amount.is_empty() {
            Span::styled("0.00", Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(self.amount.as_str(), Style::default().fg(Color::White))
        };
        let line = Line::from(vec![
            amount_text,
            Span::raw("  "),
            Span::styled(
                self.direction.input_symbol(),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!("{} Amount", self.direction.input_symbol()));
        frame.render_widget(Paragraph::new(line).block(block), area);
    }

    fn render_details(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let lines = vec![
            Line::from(vec![
                Span::styled("Fee: ", Style::default().fg(Color::DarkGray)),
                Span::raw(FIXED_FEE_TEXT),
            ]),
            Line::from(vec![
                Span::styled("You will receive: ", Style::default().fg(Color::DarkGray)),
                Span::styled(self.preview_text(ctx), Style::default().fg(Color::LightCyan)),
            ]),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title("TRANSACTION DETAILS");
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_submit(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
            Span::raw(format!(" {}    ", self.direction.action_label())),
            Span::styled("[x]", Style::default().fg(Color::Yellow)),
            Span::raw(" Clear amount"),
        ]);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        frame.render_widget(Paragraph::new(line).block(block), area);
    }
}

/// Mirrors the browser number-widget constraints the mockup relied on:
/// digits only, a single decimal point, at most 8 fractional digits, no sign.
fn accepts_amount_char(current: &str, ch: char) -> bool {
    match ch {
        '0'..='9' => match current.find('.') {
            Some(idx) => current.len() - idx - 1 < MAX_FRACTION_DIGITS,
            None => true,
        },
        '.' => !current.contains('.'),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_digits_and_single_dot() {
        assert!(accepts_amount_char("", '1'));
        assert!(accepts_amount_char("1", '.'));
        assert!(!accepts_amount_char("1.", '.'));
        assert!(!accepts_amount_char("", '-'));
        assert!(!accepts_amount_char("", 'e'));
    }

    #[test]
    fn test_caps_fractional_digits() {
        assert!(accepts_amount_char("0.0000000", '1'));
        assert!(!accepts_amount_char("0.00000001", '5'));
        // integer digits are not capped
        assert!(accepts_amount_char("100000000", '0'));
    }
}
