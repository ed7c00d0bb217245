use std::time::Duration;

use anyhow::Context;
use tokio::sync::mpsc;

use reqtrack::app::App;
use reqtrack::event::Event;
use reqtrack::{config, logging, terminal, ui};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load().context("failed to load configuration")?;

    // The terminal belongs to the UI, so logs go to a file. A broken log
    // sink is not worth refusing to start over.
    if let Err(err) = logging::init(&config.log_level) {
        eprintln!("reqtrack: logging disabled: {err:#}");
    }
    tracing::info!(export_dir = %config.export_dir.display(), "starting reqtrack");

    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();

    // Background thread: read crossterm events and feed into channel
    let event_tx = tx.clone();
    std::thread::spawn(move || loop {
        if crossterm::event::poll(Duration::from_millis(16)).unwrap_or(false) {
            match crossterm::event::read() {
                Ok(crossterm::event::Event::Key(key)) => {
                    if event_tx.send(Event::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(crossterm::event::Event::Resize(w, h)) => {
                    let _ = event_tx.send(Event::Resize(w, h));
                }
                _ => {}
            }
        } else if event_tx.send(Event::Tick).is_err() {
            break;
        }
    });

    let mut terminal = terminal::init()?;
    let mut app = App::new(tx, config);

    let result = run_loop(&mut terminal, &mut app, &mut rx).await;

    terminal::restore()?;
    if let Err(err) = &result {
        tracing::error!("exiting with error: {err:#}");
    }
    result
}

async fn run_loop(
    terminal: &mut terminal::Tui,
    app: &mut App,
    rx: &mut mpsc::UnboundedReceiver<Event>,
) -> anyhow::Result<()> {
    loop {
        if app.state.dirty {
            terminal.draw(|frame| ui::layout::render(frame, &app.state))?;
            app.state.dirty = false;
        }

        match rx.recv().await {
            Some(event) => app.handle_event(event),
            None => break,
        }

        if app.state.should_quit {
            break;
        }
    }
    tracing::info!(records = app.state.store.len(), "quit");
    Ok(())
}
