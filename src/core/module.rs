//! Module trait for the tab panels

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;

use super::{Action, Context};

/// Trait for UI panels that handle input and render themselves
pub trait Module {
    /// Handle keyboard input
    /// Returns an Action describing what should happen
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut Context) -> Action;

    /// Render the panel into the given area
    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context);
}
