use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub mod layout;
pub mod tabs;

use crate::app::{App, StatusLevel, Tab};
use crate::core::Module;

pub fn draw(f: &mut Frame, app: &App) {
    let areas = layout::areas(f.size());

    draw_header(f, areas.header, app);
    tabs::draw_tab_bar(f, areas.tabs, app);

    // Exactly one panel is visible, matching the active tab.
    match app.current_tab {
        Tab::TokenInfo => app.token_info.render(f, areas.main, &app.ctx),
        Tab::Transfer => app.transfer.render(f, areas.main, &app.ctx),
        Tab::Staking => app.staking.render(f, areas.main, &app.ctx),
    }

    draw_status_line(f, areas.status_line, app);

    if app.help_open {
        draw_help_popup(f, areas.size);
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    let title = Line::from(vec![
        Span::styled(
            "Digital Marketplace",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("Tab", Style::default().fg(Color::DarkGray)),
        Span::raw(format!(" {}", app.current_tab.title())),
    ]);
    let left = Paragraph::new(title)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);

    let right_line = Line::from(vec![
        Span::styled("Wallet ", Style::default().fg(Color::DarkGray)),
        Span::raw("not connected"),
    ]);
    let right = Paragraph::new(right_line)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);

    f.render_widget(left, chunks[0]);
    f.render_widget(right, chunks[1]);
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let line = match app.status_text() {
        Some((text, level)) => {
            let color = match level {
                StatusLevel::Info => Color::Green,
                StatusLevel::Warn => Color::Yellow,
                StatusLevel::Error => Color::Red,
            };
            Line::from(Span::styled(
                format!(" {text}"),
                Style::default().fg(color),
            ))
        }
        None => Line::from(vec![
            Span::styled(" q", Style::default().fg(Color::Yellow)),
            Span::styled(" quit  ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" help  ", Style::default().fg(Color::DarkGray)),
            Span::styled("Tab", Style::default().fg(Color::Yellow)),
            Span::styled(" switch panel  ", Style::default().fg(Color::DarkGray)),
            Span::styled("y", Style::default().fg(Color::Yellow)),
            Span::styled(" copy", Style::default().fg(Color::DarkGray)),
        ]),
    };
    f.render_widget(Paragraph::new(line), area);
}

fn draw_help_popup(f: &mut Frame, size: Rect) {
    let area = centered_rect(50, 60, size);
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            " Global",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        help_line("q", "quit"),
        help_line("1/2/3", "select tab (outside the amount field)"),
        help_line("Tab / Shift-Tab", "cycle tabs"),
        help_line("y", "copy panel value"),
        Line::from(""),
        Line::from(Span::styled(
            " Deposit/Withdraw",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        help_line("0-9 .", "edit amount"),
        help_line("s", "switch direction"),
        help_line("x", "clear amount"),
        help_line("Enter", "submit"),
        Line::from(""),
        Line::from(Span::styled(
            " Staking",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        help_line("s", "stake tokens"),
        help_line("c", "claim rewards"),
        Line::from(""),
        Line::from(Span::styled(
            " Press ? or Esc to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title("HELP");
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn help_line(keys: &str, what: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {keys:<16}"), Style::default().fg(Color::Yellow)),
        Span::raw(what.to_string()),
    ])
}

fn centered_rect(percent_x: u16, percent_y: u16, size: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(size);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
