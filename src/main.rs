use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use dmarket::app::{App, Tab};
use dmarket::{config, ui};

#[derive(Debug, Parser)]
#[command(
    name = "dmarket",
    version,
    about = "Digital Marketplace: a token dashboard TUI"
)]
struct Args {
    /// Tab to open at startup (token, transfer, staking)
    #[arg(long)]
    tab: Option<String>,

    /// UI tick interval in milliseconds
    #[arg(long)]
    tick_ms: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = config::load();

    // CLI arguments take precedence over the config file
    let initial_tab = args
        .tab
        .as_deref()
        .or(config.initial_tab.as_deref())
        .and_then(Tab::parse)
        .unwrap_or(Tab::TokenInfo);
    let tick_rate = Duration::from_millis(args.tick_ms.or(config.tick_ms).unwrap_or(200));

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    app.select_tab(initial_tab);

    let res = run_app(&mut terminal, app, tick_rate);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    tick_rate: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;
        if app.should_quit {
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}
