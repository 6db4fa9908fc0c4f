// src/ui.rs

use crate::api::BackendClient;
use crate::app::{self, App};
use crate::chat_view::draw_chat;
use crate::config::get_config;
use crate::errors::ChatResult;
use crate::events::AppEvent;
use crate::key_handlers::{handle_chat_input, KeyOutcome};
use crate::poller::ReadinessPoller;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event as CEvent, EventStream, KeyEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use log::{error, info};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, time::Duration};
use tokio::sync::mpsc;

/// Runs the terminal UI: sets up the terminal, drives the main loop,
/// and restores the terminal on the way out even when the loop errors.
pub async fn run_ui() -> ChatResult<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Main loop. Every network call runs in its own spawned task and
/// reports back over the app event channel, so the UI never blocks on
/// the backend. Overlapping generate calls are allowed; their replies
/// land in whatever order they complete.
async fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>) -> ChatResult<()> {
    let config = get_config();
    let client = BackendClient::from_config();
    let (tx, mut rx) = mpsc::channel::<AppEvent>(100);

    let poller = ReadinessPoller::spawn(
        client.clone(),
        tx.clone(),
        Duration::from_secs(config.poll_interval_secs),
    );

    let mut app = App::new();
    let mut input_events = EventStream::new();
    let mut tick = tokio::time::interval(Duration::from_millis(80));

    loop {
        terminal.draw(|f| draw_chat(f, &mut app))?;

        tokio::select! {
            maybe_event = input_events.next() => {
                match maybe_event {
                    Some(Ok(CEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                        match handle_chat_input(key, &mut app) {
                            KeyOutcome::Submit(prompt) => {
                                app.begin_generation();
                                let client = client.clone();
                                let tx = tx.clone();
                                tokio::spawn(async move {
                                    let text = app::reply_text(client.generate(&prompt).await);
                                    let _ = tx.send(AppEvent::BotReply(text)).await;
                                });
                            }
                            KeyOutcome::Reset => {
                                let client = client.clone();
                                let tx = tx.clone();
                                tokio::spawn(async move {
                                    let ok = match client.reset().await {
                                        Ok(()) => true,
                                        Err(e) => {
                                            error!("reset failed: {}", e);
                                            false
                                        }
                                    };
                                    let _ = tx.send(AppEvent::ResetOutcome(ok)).await;
                                });
                            }
                            KeyOutcome::Quit => app.should_quit = true,
                            KeyOutcome::None => {}
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => app.should_quit = true,
                }
            }
            Some(event) = rx.recv() => match event {
                AppEvent::ModelReady => app.mark_ready(),
                AppEvent::BotReply(text) => app.push_bot_reply(text),
                AppEvent::ResetOutcome(ok) => app.apply_reset_outcome(ok),
            },
            // Periodic redraw keeps the spinner moving
            _ = tick.tick() => {}
        }

        if app.should_quit {
            break;
        }
    }

    poller.stop();
    info!("shutting down");
    Ok(())
}
