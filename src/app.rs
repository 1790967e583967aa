use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::core::{Action, Context, Module, NotifyLevel};
use crate::modules::staking::StakingPanel;
use crate::modules::token_info::TokenInfoPanel;
use crate::modules::transfer::TransferForm;

/// Main tabs in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    TokenInfo,
    Transfer,
    Staking,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::TokenInfo, Tab::Transfer, Tab::Staking];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::TokenInfo => "Token Info",
            Tab::Transfer => "Deposit/Withdraw",
            Tab::Staking => "Staking",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            Tab::TokenInfo => '1',
            Tab::Transfer => '2',
            Tab::Staking => '3',
        }
    }

    pub fn from_shortcut(ch: char) -> Option<Tab> {
        Tab::ALL.iter().copied().find(|tab| tab.shortcut() == ch)
    }

    /// Parse a tab name from the CLI or the config file.
    pub fn parse(name: &str) -> Option<Tab> {
        match name.trim().to_lowercase().as_str() {
            "token" | "token-info" | "info" => Some(Tab::TokenInfo),
            "transfer" | "deposit" | "withdraw" => Some(Tab::Transfer),
            "staking" | "stake" => Some(Tab::Staking),
            _ => None,
        }
    }

    pub fn next(&self) -> Tab {
        let index = Tab::ALL.iter().position(|tab| tab == self).unwrap_or(0);
        Tab::ALL[(index + 1) % Tab::ALL.len()]
    }

    pub fn prev(&self) -> Tab {
        let index = Tab::ALL.iter().position(|tab| tab == self).unwrap_or(0);
        Tab::ALL[(index + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub since: Instant,
}

pub struct App {
    /// Shared context for panels
    pub ctx: Context,
    /// Current active tab
    pub current_tab: Tab,
    pub token_info: TokenInfoPanel,
    pub transfer: TransferForm,
    pub staking: StakingPanel,
    pub status: Option<StatusMessage>,
    pub help_open: bool,
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            ctx: Context::new(),
            current_tab: Tab::TokenInfo,
            token_info: TokenInfoPanel::new(),
            transfer: TransferForm::new(),
            staking: StakingPanel::new(),
            status: None,
            help_open: false,
            should_quit: false,
        }
    }

    /// Pure state replacement; selecting the active tab changes nothing.
    pub fn select_tab(&mut self, tab: Tab) {
        self.current_tab = tab;
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, StatusLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self) {
        if let Some(status) = self.status.as_ref() {
            if status.since.elapsed() > Duration::from_secs(3) {
                self.status = None;
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.help_open {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.help_open = false;
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.help_open = true,
            KeyCode::Tab => self.select_tab(self.current_tab.next()),
            KeyCode::BackTab => self.select_tab(self.current_tab.prev()),
            KeyCode::Char('y') => self.copy_panel_value(),
            // Digit shortcuts switch tabs everywhere except the transfer
            // form, where digits edit the amount field.
            KeyCode::Char(ch @ '1'..='3') if self.current_tab != Tab::Transfer => {
                if let Some(tab) = Tab::from_shortcut(ch) {
                    self.select_tab(tab);
                }
            }
            _ => {
                let action = self.dispatch_to_panel(key);
                self.apply_action(action);
            }
        }
    }

    fn dispatch_to_panel(&mut self, key: KeyEvent) -> Action {
        match self.current_tab {
            Tab::TokenInfo => self.token_info.handle_key(key, &mut self.ctx),
            Tab::Transfer => self.transfer.handle_key(key, &mut self.ctx),
            Tab::Staking => self.staking.handle_key(key, &mut self.ctx),
        }
    }

    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Copy(text) => self.copy_to_clipboard(text),
            Action::Notify(text, level) => self.set_status(
                text,
                match level {
                    NotifyLevel::Info => StatusLevel::Info,
                    NotifyLevel::Warn => StatusLevel::Warn,
                    NotifyLevel::Error => StatusLevel::Error,
                },
            ),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Copy the active panel's primary value.
    fn copy_panel_value(&mut self) {
        let text = match self.current_tab {
            Tab::TokenInfo => self.ctx.token.total_supply.to_string(),
            Tab::Transfer => self.transfer.preview_text(&self.ctx),
            Tab::Staking => self.ctx.staking.rewards.to_string(),
        };
        self.apply_action(Action::Copy(text));
    }

    fn copy_to_clipboard(&mut self, text: String) {
        match arboard::Clipboard::new() {
            Ok(mut clipboard) => {
                if clipboard.set_text(&text).is_ok() {
                    self.ctx.set_clipboard(text.clone());
                    self.set_status(format!("Copied: {text}"), StatusLevel::Info);
                } else {
                    self.set_status("Failed to copy to clipboard", StatusLevel::Error);
                }
            }
            Err(_) => {
                self.set_status("Clipboard not available", StatusLevel::Error);
            }
        }
    }
}
