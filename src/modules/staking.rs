//! Staking panel - metrics display plus stake/claim triggers

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::core::{Action, Context, Module, NotifyLevel};
use crate::domain::staking::StakingClient;

/// Staking dashboard. Displays fixed metrics; the stake and claim triggers
/// consult an optional staking collaborator, absent in this build.
pub struct StakingPanel {
    client: Option<Box<dyn StakingClient>>,
}

impl Default for StakingPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl StakingPanel {
    pub fn new() -> Self {
        Self { client: None }
    }

    /// Wire a staking collaborator. Unused by the mockup binary; kept for
    /// tests and for the build that gains a real staking client.
    pub fn with_client(client: Box<dyn StakingClient>) -> Self {
        Self {
            client: Some(client),
        }
    }

    fn stake_tokens(&mut self) -> Action {
        let Some(client) = self.client.as_ref() else {
            return Action::None;
        };
        // The mockup collects no stake amount; a real panel would.
        match client.stake(0.0) {
            Ok(receipt) => Action::Notify(
                format!("Staked {:.8} DMARKET", receipt.staked),
                NotifyLevel::Info,
            ),
            Err(err) => Action::Notify(err.to_string(), NotifyLevel::Error),
        }
    }

    fn claim_rewards(&mut self) -> Action {
        let Some(client) = self.client.as_ref() else {
            return Action::None;
        };
        match client.claim_rewards() {
            Ok(receipt) => Action::Notify(
                format!("Claimed {:.8} ALGO", receipt.claimed),
                NotifyLevel::Info,
            ),
            Err(err) => Action::Notify(err.to_string(), NotifyLevel::Error),
        }
    }
}

impl Module for StakingPanel {
    fn handle_key(&mut self, key: KeyEvent, _ctx: &mut Context) -> Action {
        match key.code {
            KeyCode::Char('s') => self.stake_tokens(),
            KeyCode::Char('c') => self.claim_rewards(),
            _ => Action::None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6), // metric cards
                Constraint::Length(4), // requirements note
                Constraint::Min(3),    // action triggers
            ])
            .split(area);

        self.render_metrics(frame, chunks[0], ctx);
        self.render_requirements(frame, chunks[1], ctx);
        self.render_actions(frame, chunks[2]);
    }
}

impl StakingPanel {
    fn render_metrics(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(33),
                Constraint::Percentage(33),
                Constraint::Percentage(34),
            ])
            .split(area);

        let cards = [
            ("Your Stake", ctx.staking.your_stake, ctx.staking.stake_value),
            ("APR", ctx.staking.apr, ctx.staking.apr_note),
            ("Rewards", ctx.staking.rewards, ctx.staking.rewards_note),
        ];
        for (chunk, (label, value, note)) in columns.iter().zip(cards) {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(label.to_uppercase());
            let lines = vec![
                Line::from(Span::styled(
                    format!(" {value}"),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!(" {note}"),
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            frame.render_widget(Paragraph::new(lines).block(block), *chunk);
        }
    }

    fn render_requirements(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let lines = vec![
            Line::from(Span::raw(ctx.staking.minimum_note)),
            Line::from(Span::raw(ctx.staking.schedule_note)),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title("STAKING REQUIREMENTS");
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_actions(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled("[s]", Style::default().fg(Color::Yellow)),
            Span::raw(" Stake Tokens    "),
            Span::styled("[c]", Style::default().fg(Color::Yellow)),
            Span::raw(" Claim Rewards"),
        ]);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        frame.render_widget(Paragraph::new(line).block(block), area);
    }
}
