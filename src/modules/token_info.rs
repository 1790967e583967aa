//! Token Info panel - static token metadata and market statistics

use crossterm::event::KeyEvent;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::core::{Action, Context, Module};

/// Stateless display of the token's metadata. All values come from the
/// placeholder stats in the context.
#[derive(Debug, Default)]
pub struct TokenInfoPanel;

impl TokenInfoPanel {
    pub fn new() -> Self {
        Self
    }
}

impl Module for TokenInfoPanel {
    fn handle_key(&mut self, _key: KeyEvent, _ctx: &mut Context) -> Action {
        Action::None
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(5)])
            .split(area);

        self.render_metadata(frame, chunks[0], ctx);
        self.render_market_stats(frame, chunks[1], ctx);
    }
}

impl TokenInfoPanel {
    fn render_metadata(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title("TOKEN INFORMATION");

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(inner(area));

        frame.render_widget(block, area);

        let left = vec![
            Line::from(""),
            metric_title("Total Supply"),
            metric_value(ctx.token.total_supply, Color::LightCyan),
            metric_note(ctx.token.supply_note),
            Line::from(""),
            metric_title("Decimals"),
            metric_value(&format!("{}", ctx.token.decimals), Color::LightBlue),
            metric_note("Token decimal precision"),
        ];
        let right = vec![
            Line::from(""),
            metric_title("Holders"),
            metric_value(&format!("{}", ctx.token.holders), Color::Magenta),
            metric_note("Current token holders"),
            Line::from(""),
            metric_title("Transaction Fee"),
            metric_value(crate::domain::fee::FIXED_FEE_TEXT, Color::Green),
            metric_note("Fixed fee per transaction"),
        ];

        frame.render_widget(Paragraph::new(left), columns[0]);
        frame.render_widget(Paragraph::new(right), columns[1]);
    }

    fn render_market_stats(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title("MARKET STATISTICS");

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(33),
                Constraint::Percentage(33),
                Constraint::Percentage(34),
            ])
            .split(inner(area));

        frame.render_widget(block, area);

        let cells = [
            ("Current Price", ctx.market.price),
            ("Market Cap", ctx.market.market_cap),
            ("24h Volume", ctx.market.volume_24h),
        ];
        for (chunk, (label, value)) in columns.iter().zip(cells) {
            let lines = vec![
                metric_title(label),
                metric_value(value, Color::White),
            ];
            frame.render_widget(Paragraph::new(lines), *chunk);
        }
    }
}

fn metric_title(label: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {label}"),
        Style::default().fg(Color::DarkGray),
    ))
}

fn metric_value(value: &str, color: Color) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {value}"),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

fn metric_note(note: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {note}"),
        Style::default().fg(Color::DarkGray),
    ))
}

fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}
